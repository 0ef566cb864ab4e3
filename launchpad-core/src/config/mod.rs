//! Program configuration
//!
//! Configuration is optional: every field has a default, and a TOML document
//! can override them when the `toml` feature is enabled.

pub mod program;

pub use program::{ConfigError, ProgramConfig, DEFAULT_PRESS_COLOR};
