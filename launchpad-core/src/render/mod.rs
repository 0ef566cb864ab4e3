//! Renderers
//!
//! A [`Renderer`] is the side-effecting half of a program's view: it takes a
//! settled [`State`] and presents it somewhere. Two implementations ship
//! here:
//!
//! - [`TextRenderer`] writes the glyph dump into any `core::fmt::Write`
//! - [`MidiRenderer`] pushes LED messages into a [`MidiSink`], only for
//!   buttons whose appearance changed since the previous frame

pub mod midi;
pub mod text;

use crate::grid::State;

pub use midi::{MidiRenderer, MidiSink};
pub use text::TextRenderer;

/// Rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// The text writer refused output
    Write,
    /// The MIDI sink is full or disconnected
    Sink,
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::Write => f.write_str("text writer failed"),
            RenderError::Sink => f.write_str("MIDI sink rejected a message"),
        }
    }
}

/// Presents a grid state
pub trait Renderer {
    /// Present `state`
    fn render(&mut self, state: &State) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, state: &State) -> Result<(), RenderError> {
        (**self).render(state)
    }
}
