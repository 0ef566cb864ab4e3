//! Board-agnostic core logic for the Launchpad pad controller
//!
//! This crate contains everything between the wire protocol and the
//! application:
//!
//! - Grid state (the appearance of all 81 cells) and its text dump
//! - Reactive runtime driving state through a program's update and view
//! - Renderers turning state into text or outgoing MIDI messages
//! - The example program lighting pressed pads
//! - Program configuration
//!
//! Transport (opening a MIDI port, moving bytes) stays outside: it feeds
//! [`runtime::Message`]s into [`runtime::Runtime::dispatch`] and drains
//! [`render::MidiSink`].

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod app;
pub mod config;
pub mod grid;
pub mod render;
pub mod runtime;

pub use app::JambProgram;
pub use config::{ConfigError, ProgramConfig};
pub use grid::State;
pub use runtime::{Dispatch, Effect, Message, Program, Runtime};
