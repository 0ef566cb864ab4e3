//! Launchpad MIDI Protocol
//!
//! This crate maps the abstract appearance of the pad controller (grid
//! positions, two-channel LED colors, mode flags) onto the three-byte MIDI
//! messages the device understands, and decodes the messages it sends back.
//!
//! # Grid Layout
//!
//! ```text
//!        x=0  x=1  ...  x=7  x=8
//! y=0   [S0] [S1]  ... [S7]  --      scene row (controller 0x68+x)
//! y=1   [00] [01]  ... [07] [08]     key = x + (y-1)*16
//! ...
//! y=8   [70] [71]  ... [77] [78]
//! ```
//!
//! The top-right corner `(8,0)` has no physical button and aliases to `(8,1)`.
//!
//! Every value is normalized before encoding: out-of-range colors, coordinates
//! and channels are clamped, never rejected. Only logic contract violations
//! (such as asking for the key byte of a scene-row button) panic.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod events;
pub mod midi;
pub mod position;

pub use color::{clamp, Button, Color, MAX_INTENSITY};
pub use events::InputEvent;
pub use midi::{key, note_off, note_off_raw, note_on, note_on_raw, velocity, MidiMessage};
pub use position::{Position, GRID_SIZE, MAX_COORD};
