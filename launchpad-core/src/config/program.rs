//! Example program configuration

use launchpad_protocol::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color a pad takes when pressed, unless configured otherwise
pub const DEFAULT_PRESS_COLOR: Color = Color::RED;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Document is not valid TOML or does not match the schema
    Parse,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Parse => f.write_str("invalid program configuration"),
        }
    }
}

/// Settings for [`JambProgram`](crate::app::JambProgram)
///
/// ```toml
/// [press]
/// red = 3
/// green = 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ProgramConfig {
    /// Color of a pressed pad; out-of-range channels are clamped
    pub press: Color,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            press: DEFAULT_PRESS_COLOR,
        }
    }
}

impl ProgramConfig {
    /// Parse from a TOML document
    ///
    /// Missing keys keep their defaults. Channel values are normalized like
    /// any other input.
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let mut config: ProgramConfig = match toml::from_str(input) {
            Ok(config) => config,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("config parse error: {}", defmt::Debug2Format(&_e));
                return Err(ConfigError::Parse);
            }
        };
        config.press.fix();

        #[cfg(feature = "defmt")]
        defmt::info!("loaded program config: press={}", config.press);

        Ok(config)
    }
}
