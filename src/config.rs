//! Builder types for configuring a [`UnitLogger`].
//!
//! [`LoggerConfig`] is the plain configuration data and [`LoggerBuilder`]
//! assembles a logger from it together with a console. The only required
//! input is the initial output flag, which defaults to enabled.

use thiserror::Error;

use crate::{logger::UnitLogger, stream_console::StdConsole};

/// Environment variable read by [`LoggerConfig::from_env`] for the initial
/// output flag.
pub const OUTPUT_ENV: &str = "UNIT_LOGGER_OUTPUT";
/// Environment variable read by [`LoggerConfig::from_env`] for the initial
/// recording flag.
pub const RECORD_ENV: &str = "UNIT_LOGGER_RECORD";

/// Errors that may occur while reading a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A flag variable held something other than a boolean word.
    #[error("invalid value {value:?} for {key}: expected one of 1/0, true/false, on/off, yes/no")]
    InvalidFlag { key: &'static str, value: String },
}

/// Initial state of a logger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoggerConfig {
    /// Whether emissions reach the console. Defaults to `true`.
    pub output_enabled: bool,
    /// Whether the logger records from creation. Defaults to `false`.
    pub start_recording: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            output_enabled: true,
            start_recording: false,
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_owned(),
        }),
    }
}

impl LoggerConfig {
    /// Read [`OUTPUT_ENV`] and [`RECORD_ENV`] from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`LoggerConfig::from_env`] but with a caller-supplied lookup.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(OUTPUT_ENV) {
            config.output_enabled = parse_flag(OUTPUT_ENV, &value)?;
        }
        if let Some(value) = lookup(RECORD_ENV) {
            config.start_recording = parse_flag(RECORD_ENV, &value)?;
        }
        Ok(config)
    }
}

/// Builder for [`UnitLogger`] instances.
#[derive(Clone, Debug)]
pub struct LoggerBuilder<C = StdConsole> {
    config: LoggerConfig,
    console: C,
}

impl Default for LoggerBuilder<StdConsole> {
    fn default() -> Self {
        Self {
            config: LoggerConfig::default(),
            console: StdConsole,
        }
    }
}

impl LoggerBuilder<StdConsole> {
    /// Create a builder using [`StdConsole`] and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> LoggerBuilder<C> {
    /// Set the initial output flag.
    pub fn with_output_enabled(mut self, enabled: bool) -> Self {
        self.config.output_enabled = enabled;
        self
    }

    /// Start recording as soon as the logger is built.
    pub fn with_recording(mut self, recording: bool) -> Self {
        self.config.start_recording = recording;
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Write to `console` instead of the current one.
    pub fn with_console<C2>(self, console: C2) -> LoggerBuilder<C2> {
        LoggerBuilder {
            config: self.config,
            console,
        }
    }

    /// Return the configuration built so far.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Build the logger.
    pub fn build<P>(self) -> UnitLogger<P, C> {
        UnitLogger::from_parts(
            self.console,
            self.config.output_enabled,
            self.config.start_recording,
        )
    }
}
