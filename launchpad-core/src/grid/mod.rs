//! Grid state
//!
//! The whole appearance of the controller is one value: a fixed 9x9 table of
//! button appearances. Programs never mutate the state they are handed; they
//! clone it and return the new value.

pub mod state;

pub use state::{State, CELL_COUNT, DUMP_LEN, GLYPHS};
