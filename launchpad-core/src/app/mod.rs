//! Example program
//!
//! Lights every pad that is pressed. Nothing else: releases are ignored and
//! no effects are ever scheduled.

pub mod jamb;

pub use jamb::JambProgram;
