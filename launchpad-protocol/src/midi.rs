//! MIDI wire encoding
//!
//! Every outgoing message is three bytes, packed into the low 24 bits of a
//! `u32` as `status << 16 | data1 << 8 | data2`.
//!
//! Velocity byte layout:
//! ```text
//!  bit  7 6 5 4 3 2 1 0
//!       0 0 G G C P R R     R = red, G = green, C = clear, P = copy
//! ```

use crate::color::{clamp, Button};
use crate::position::Position;

/// Note-off status for channel 0
pub const STATUS_NOTE_OFF: u8 = 0x80;
/// Note-on status for channel 0
pub const STATUS_NOTE_ON: u8 = 0x90;
/// Control-change status for channel 0
pub const STATUS_CONTROL_CHANGE: u8 = 0xB0;
/// Highest channel the device listens on
pub const MAX_CHANNEL: u8 = 3;
/// Controller number of the first scene-row button
pub const SCENE_CONTROLLER_BASE: u8 = 0x68;

/// Prefix of every scene-row message: control change, controller 0x68
const SCENE_ROW_BASE: u32 =
    ((STATUS_CONTROL_CHANGE as u32) << 16) | ((SCENE_CONTROLLER_BASE as u32) << 8);
/// Clears the color and flag bits of the velocity byte
const SCENE_ROW_OFF_MASK: u32 = 0xFF_FF_C0;

/// Pack a button appearance into the velocity byte
pub fn velocity(button: Button) -> u8 {
    let b = button.fixed();
    0x10 * b.color.green + b.color.red + ((b.clear as u8) << 3) + ((b.copy as u8) << 2)
}

/// Key byte of a pad in rows 1-8
///
/// # Panics
///
/// Panics if the position lies on the scene row. Scene buttons are addressed
/// by controller number, not by key.
pub fn key(position: Position) -> u8 {
    let p = position.fixed();
    assert!(p.y != 0, "scene-row buttons have no key byte");
    p.x + (p.y - 1) * 0x10
}

fn pack(status: u8, channel: u8, data1: u8, data2: u8) -> u32 {
    let channel = clamp(channel, 0, MAX_CHANNEL);
    (((status + channel) as u32) << 16) | ((data1 as u32) << 8) | data2 as u32
}

/// Note-on message on `channel` (clamped to 0-3)
pub fn note_on_raw(channel: u8, key: u8, velocity: u8) -> u32 {
    pack(STATUS_NOTE_ON, channel, key, velocity)
}

/// Note-off message on `channel` (clamped to 0-3)
pub fn note_off_raw(channel: u8, key: u8, velocity: u8) -> u32 {
    pack(STATUS_NOTE_OFF, channel, key, velocity)
}

/// Message lighting `position` with `button`'s appearance
///
/// Scene-row buttons use the control-change sub-format with the column
/// embedded in the controller number.
pub fn note_on(position: Position, button: Button) -> u32 {
    let p = position.fixed();
    if p.y == 0 {
        return SCENE_ROW_BASE | ((p.x as u32) << 8) | velocity(button) as u32;
    }
    note_on_raw(0, key(p), velocity(button))
}

/// Message turning `position` off
///
/// On the scene row the value byte is forced to zero color and flags.
pub fn note_off(position: Position, button: Button) -> u32 {
    let p = position.fixed();
    if p.y == 0 {
        return note_on(p, button) & SCENE_ROW_OFF_MASK;
    }
    note_off_raw(0, key(p), velocity(button))
}

/// A packed three-byte MIDI message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MidiMessage(u32);

impl MidiMessage {
    /// Build from individual bytes
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | bytes[2] as u32)
    }

    /// Split into wire order
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.status(), self.data1(), self.data2()]
    }

    /// The packed 24-bit value
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn status(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn data1(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn data2(self) -> u8 {
        self.0 as u8
    }

    /// Status with the channel nibble stripped
    pub const fn kind(self) -> u8 {
        self.status() & 0xF0
    }

    /// Channel nibble of the status byte
    pub const fn channel(self) -> u8 {
        self.status() & 0x0F
    }
}

impl From<u32> for MidiMessage {
    fn from(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }
}

impl From<MidiMessage> for u32 {
    fn from(msg: MidiMessage) -> Self {
        msg.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_velocity_default() {
        assert_eq!(velocity(Button::default()), 0x0C);
    }

    #[test]
    fn test_velocity_color() {
        assert_eq!(
            velocity(Button::with_color(Color::new(1, 2))),
            0x10 * 2 + 1 + 0b1100
        );
        let b = Button {
            color: Color::new(2, 0),
            clear: true,
            copy: false,
        };
        assert_eq!(velocity(b), 2 + 0b1000);
    }

    #[test]
    fn test_velocity_clamps() {
        assert_eq!(
            velocity(Button::with_color(Color::new(1, 17))),
            0x10 * 3 + 1 + 0x0C
        );
    }

    #[test]
    fn test_key() {
        assert_eq!(key(Position::new(0, 1)), 0x00);
        assert_eq!(key(Position::new(2, 5)), 0x42);
        assert_eq!(key(Position::new(8, 8)), 0x78);
        // dead corner resolves to (8,1)
        assert_eq!(key(Position::new(8, 0)), 0x08);
    }

    #[test]
    #[should_panic(expected = "scene-row")]
    fn test_key_scene_row_panics() {
        key(Position::new(3, 0));
    }

    #[test]
    fn test_raw_channel_clamps() {
        assert_eq!(note_on_raw(0, 0x42, 0x0D), 0x90420D);
        assert_eq!(note_on_raw(2, 0x00, 0x00), 0x920000);
        assert_eq!(note_on_raw(9, 0x00, 0x00), 0x930000);
        assert_eq!(note_off_raw(7, 0x11, 0x22), 0x831122);
    }

    #[test]
    fn test_note() {
        let b = Button::with_color(Color::new(1, 0));
        assert_eq!(note_on(Position::new(2, 5), b), 0x90420D);
        assert_eq!(note_off(Position::new(2, 5), b) >> 8, 0x8042);
    }

    #[test]
    fn test_note_scene_row() {
        assert_eq!(note_on(Position::new(5, 0), Button::default()), 0xB06D0C);
        assert_eq!(note_off(Position::new(5, 0), Button::default()), 0xB06D00);
        let lit = Button::with_color(Color::AMBER);
        assert_eq!(note_off(Position::new(0, 0), lit), 0xB06800);
    }

    #[test]
    fn test_note_dead_corner() {
        assert_eq!(note_on(Position::new(8, 0), Button::default()), 0x90080C);
        assert_eq!(note_off(Position::new(8, 0), Button::default()) >> 8, 0x8008);
    }

    #[test]
    fn test_message_bytes() {
        let msg = MidiMessage::from(note_on(Position::new(2, 5), Button::default()));
        assert_eq!(msg.to_bytes(), [0x90, 0x42, 0x0C]);
        assert_eq!(msg.kind(), STATUS_NOTE_ON);
        assert_eq!(msg.channel(), 0);
        assert_eq!(MidiMessage::from_bytes([0xB0, 0x6D, 0x00]).raw(), 0xB06D00);
    }

    #[test]
    fn test_message_masks_to_24_bits() {
        assert_eq!(MidiMessage::from(0xFF90_420D).raw(), 0x90420D);
    }
}
