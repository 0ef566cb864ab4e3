//! MIDI renderer
//!
//! Turns grid state into the LED messages the device understands. The first
//! frame sends every button; later frames only send buttons that changed.

use alloc::vec::Vec;

use launchpad_protocol::{note_on, MidiMessage};

use super::{RenderError, Renderer};
use crate::grid::State;

/// Destination for outgoing MIDI messages
///
/// Implemented by the transport layer. Vectors implement it for testing and
/// for batching a whole frame before writing it out.
pub trait MidiSink {
    fn send(&mut self, message: MidiMessage) -> Result<(), RenderError>;
}

impl MidiSink for Vec<MidiMessage> {
    fn send(&mut self, message: MidiMessage) -> Result<(), RenderError> {
        self.push(message);
        Ok(())
    }
}

impl<const N: usize> MidiSink for heapless::Vec<MidiMessage, N> {
    fn send(&mut self, message: MidiMessage) -> Result<(), RenderError> {
        self.push(message).map_err(|_| RenderError::Sink)
    }
}

impl<S: MidiSink + ?Sized> MidiSink for &mut S {
    fn send(&mut self, message: MidiMessage) -> Result<(), RenderError> {
        (**self).send(message)
    }
}

/// Renders state as LED messages into a [`MidiSink`]
pub struct MidiRenderer<S: MidiSink> {
    sink: S,
    /// What the device is showing, if known
    shown: Option<State>,
}

impl<S: MidiSink> MidiRenderer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, shown: None }
    }

    /// Forget what the device shows; the next frame resends everything
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: MidiSink> Renderer for MidiRenderer<S> {
    fn render(&mut self, state: &State) -> Result<(), RenderError> {
        for (position, button) in state.cells() {
            // The corner has no LED; its slot belongs to (8,1)
            if position.is_dead_corner() {
                continue;
            }
            if let Some(shown) = &self.shown {
                if shown.at(position) == button {
                    continue;
                }
            }
            if let Err(e) = self.sink.send(MidiMessage::from(note_on(position, button))) {
                // Partially sent; resync everything next frame
                self.shown = None;
                return Err(e);
            }
        }
        self.shown = Some(state.clone());
        Ok(())
    }
}
