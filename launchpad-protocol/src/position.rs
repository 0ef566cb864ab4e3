//! Grid coordinates

use crate::color::clamp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest valid coordinate on either axis
pub const MAX_COORD: u8 = 8;

/// Number of cells per row and per column of the logical grid
pub const GRID_SIZE: usize = MAX_COORD as usize + 1;

/// A cell on the logical 9x9 grid
///
/// Row `y = 0` is the scene row along the top edge; rows 1-8 form the pad
/// matrix plus the right-hand column at `x = 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Create a position without normalizing it
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Clamp into the grid and resolve the dead corner
    ///
    /// `(8,0)` has no button and is remapped to `(8,1)`.
    pub fn fix(&mut self) {
        self.x = clamp(self.x, 0, MAX_COORD);
        self.y = clamp(self.y, 0, MAX_COORD);
        if self.y == 0 && self.x == MAX_COORD {
            self.y = 1;
        }
    }

    /// Return a normalized copy
    pub fn fixed(mut self) -> Self {
        self.fix();
        self
    }

    /// Check if this position addresses the scene row (after normalization)
    pub fn is_scene_row(&self) -> bool {
        self.fixed().y == 0
    }

    /// Check if this is the corner that has no button of its own
    pub fn is_dead_corner(&self) -> bool {
        self.x == MAX_COORD && self.y == 0
    }

    /// Row-major index into flat grid storage
    pub fn index(&self) -> usize {
        let p = self.fixed();
        p.x as usize + p.y as usize * GRID_SIZE
    }

    /// Iterate every raw `(x, y)` on the grid, row by row
    ///
    /// Includes the dead corner; callers decide how to treat it.
    pub fn all() -> impl Iterator<Item = Position> + Clone {
        (0..=MAX_COORD).flat_map(|y| (0..=MAX_COORD).map(move |x| Position::new(x, y)))
    }
}

impl From<(u8, u8)> for Position {
    fn from((x, y): (u8, u8)) -> Self {
        Position::new(x, y)
    }
}
