//! LED color and button appearance
//!
//! Each pad carries a bi-color LED with independent red and green channels,
//! each with four intensity levels (off, low, medium, full).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest intensity a color channel can take
pub const MAX_INTENSITY: u8 = 3;

/// Limit `value` to `min..=max`
///
/// Panics if `min > max`; that is a caller bug, not bad input.
pub fn clamp(value: u8, min: u8, max: u8) -> u8 {
    assert!(min <= max, "clamp called with min > max");
    value.max(min).min(max)
}

/// Two-channel LED color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red intensity (0-3)
    pub red: u8,
    /// Green intensity (0-3)
    pub green: u8,
}

impl Color {
    /// LED off
    pub const OFF: Color = Color::new(0, 0);
    /// Full red
    pub const RED: Color = Color::new(MAX_INTENSITY, 0);
    /// Full green
    pub const GREEN: Color = Color::new(0, MAX_INTENSITY);
    /// Full red and green
    pub const AMBER: Color = Color::new(MAX_INTENSITY, MAX_INTENSITY);

    /// Create a color without normalizing it
    pub const fn new(red: u8, green: u8) -> Self {
        Self { red, green }
    }

    /// Clamp both channels into `0..=3`
    pub fn fix(&mut self) {
        self.red = clamp(self.red, 0, MAX_INTENSITY);
        self.green = clamp(self.green, 0, MAX_INTENSITY);
    }

    /// Return a normalized copy
    pub fn fixed(mut self) -> Self {
        self.fix();
        self
    }

    /// Check if both channels are dark
    pub fn is_off(&self) -> bool {
        let c = self.fixed();
        c.red == 0 && c.green == 0
    }
}

/// Appearance of a single pad
///
/// `clear` and `copy` are the two mode flags of the velocity byte (bits 3
/// and 2). Both default to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Button {
    pub color: Color,
    pub clear: bool,
    pub copy: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            color: Color::OFF,
            clear: true,
            copy: true,
        }
    }
}

impl Button {
    /// Button with the given color and both flags set
    pub const fn with_color(color: Color) -> Self {
        Self {
            color,
            clear: true,
            copy: true,
        }
    }

    /// Normalize the color
    pub fn fix(&mut self) {
        self.color.fix();
    }

    /// Return a normalized copy
    pub fn fixed(mut self) -> Self {
        self.fix();
        self
    }
}

impl From<Color> for Button {
    fn from(color: Color) -> Self {
        Button::with_color(color)
    }
}
