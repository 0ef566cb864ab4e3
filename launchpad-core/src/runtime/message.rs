//! Messages that drive the runtime

use launchpad_protocol::{InputEvent, Position};

/// Events fed into [`Runtime::dispatch`](super::Runtime::dispatch)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    /// A button was pushed down
    Press(Position),
    /// A button was let go
    Release(Position),
}

impl Message {
    /// The button this message refers to
    pub fn position(&self) -> Position {
        match self {
            Message::Press(p) | Message::Release(p) => *p,
        }
    }
}

impl From<InputEvent> for Message {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Press(p) => Message::Press(p),
            InputEvent::Release(p) => Message::Release(p),
        }
    }
}
