//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//!
//! ```toml
//! [diagnostics]
//! invalid_signal_name = "fatal"   # silent | warn | error | fatal
//! unhandled_signal = "warn"       # silent | warn | error
//!
//! [devices]
//! movement_axes = [0, 1]
//! rotation_axes = [2, 3]
//! axis_deadzone = 0.0
//! ```

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::diagnostics::Policy;
use crate::error::{InputError, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub devices: DevicesConfig,
}

/// Diagnostic delivery policies
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_invalid_signal_name")]
    pub invalid_signal_name: Policy,

    #[serde(default = "default_unhandled_signal")]
    pub unhandled_signal: Policy,
}

/// Joystick axis layout
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DevicesConfig {
    /// Axis indices feeding the movement surface (x, y).
    #[serde(default = "default_movement_axes")]
    pub movement_axes: [usize; 2],

    /// Axis indices feeding the rotation surface (x, y).
    #[serde(default = "default_rotation_axes")]
    pub rotation_axes: [usize; 2],

    #[serde(default = "default_axis_deadzone")]
    pub axis_deadzone: f32,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            invalid_signal_name: default_invalid_signal_name(),
            unhandled_signal: default_unhandled_signal(),
        }
    }
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            movement_axes: default_movement_axes(),
            rotation_axes: default_rotation_axes(),
            axis_deadzone: default_axis_deadzone(),
        }
    }
}

// Default value functions
fn default_invalid_signal_name() -> Policy { Policy::Fatal }
fn default_unhandled_signal() -> Policy { Policy::Warn }

fn default_movement_axes() -> [usize; 2] { [0, 1] }
fn default_rotation_axes() -> [usize; 2] { [2, 3] }
fn default_axis_deadzone() -> f32 { 0.0 }

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use input_signals::config::Config;
    ///
    /// let config = Config::load("config/input.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    pub fn validate(&self) -> Result<()> {
        // Unhandled signals are never allowed to stop dispatch
        if self.diagnostics.unhandled_signal == Policy::Fatal {
            return Err(InputError::Config(toml::de::Error::custom(
                "unhandled_signal cannot be 'fatal'",
            )));
        }

        // Validate axis layout
        let [mx, my] = self.devices.movement_axes;
        let [rx, ry] = self.devices.rotation_axes;
        let axes = [mx, my, rx, ry];
        for (i, a) in axes.iter().enumerate() {
            if axes[i + 1..].contains(a) {
                return Err(InputError::Config(toml::de::Error::custom(format!(
                    "axis index {} is assigned more than once",
                    a
                ))));
            }
        }

        // Validate deadzone
        if !(0.0..=0.25).contains(&self.devices.axis_deadzone) {
            return Err(InputError::Config(toml::de::Error::custom(
                "axis_deadzone must be between 0.0 and 0.25",
            )));
        }

        Ok(())
    }
}
