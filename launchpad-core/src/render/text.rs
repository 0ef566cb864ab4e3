//! Text renderer

use core::fmt::Write;

use super::{RenderError, Renderer};
use crate::grid::State;

/// Writes [`State::dump`] followed by a blank line for every frame
pub struct TextRenderer<W: Write> {
    writer: W,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    /// Number of frames written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &State) -> Result<(), RenderError> {
        self.writer
            .write_str(state.dump().as_str())
            .and_then(|_| self.writer.write_char('\n'))
            .map_err(|_| RenderError::Write)?;
        self.frames += 1;
        Ok(())
    }
}
