//! Input events sent by the pad controller
//!
//! Pads in rows 1-8 report note-on with a non-zero velocity on press and
//! zero velocity (or note-off) on release. Scene-row buttons report
//! control changes on controllers 0x68-0x6F.

use crate::midi::{
    MidiMessage, SCENE_CONTROLLER_BASE, STATUS_CONTROL_CHANGE, STATUS_NOTE_OFF, STATUS_NOTE_ON,
};
use crate::position::{Position, MAX_COORD};

/// Button activity decoded from an incoming message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Button pushed down
    Press(Position),
    /// Button let go
    Release(Position),
}

impl InputEvent {
    /// Decode an incoming message
    ///
    /// Returns `None` for messages that do not describe a button on the grid.
    pub fn from_message(msg: MidiMessage) -> Option<Self> {
        match msg.kind() {
            STATUS_NOTE_ON => {
                let position = position_from_key(msg.data1())?;
                Some(Self::from_value(position, msg.data2()))
            }
            STATUS_NOTE_OFF => position_from_key(msg.data1()).map(InputEvent::Release),
            STATUS_CONTROL_CHANGE => {
                let column = msg.data1().checked_sub(SCENE_CONTROLLER_BASE)?;
                if column >= MAX_COORD {
                    return None;
                }
                Some(Self::from_value(Position::new(column, 0), msg.data2()))
            }
            _ => None,
        }
    }

    fn from_value(position: Position, value: u8) -> Self {
        if value == 0 {
            InputEvent::Release(position)
        } else {
            InputEvent::Press(position)
        }
    }

    /// The button this event refers to
    pub fn position(&self) -> Position {
        match self {
            InputEvent::Press(p) | InputEvent::Release(p) => *p,
        }
    }

    /// Returns true if this is a press
    pub fn is_press(&self) -> bool {
        matches!(self, InputEvent::Press(_))
    }
}

/// Inverse of [`crate::midi::key`]
fn position_from_key(key: u8) -> Option<Position> {
    let x = key & 0x0F;
    let y = (key >> 4) + 1;
    if x > MAX_COORD || y > MAX_COORD {
        return None;
    }
    Some(Position::new(x, y))
}
