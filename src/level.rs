//! Levels accepted by [`UnitLogger`](crate::UnitLogger).
//!
//! The set mirrors the five console-style sink functions. Levels are
//! passthrough labels: the logger never filters on them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum UnitLevel {
    Debug,
    #[default]
    Log,
    Info,
    Warn,
    Error,
}

/// Returned when a string does not name a [`UnitLevel`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(String);

impl UnitLevel {
    /// Every level in declaration order.
    pub const ALL: [UnitLevel; 5] = [
        UnitLevel::Debug,
        UnitLevel::Log,
        UnitLevel::Info,
        UnitLevel::Warn,
        UnitLevel::Error,
    ];

    /// Lowercase name matching the sink function for this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            UnitLevel::Debug => "debug",
            UnitLevel::Log => "log",
            UnitLevel::Info => "info",
            UnitLevel::Warn => "warn",
            UnitLevel::Error => "error",
        }
    }

    /// Whether a console routes this level to standard error.
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, UnitLevel::Warn | UnitLevel::Error)
    }
}

impl fmt::Display for UnitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "log" => Ok(Self::Log),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

impl From<UnitLevel> for log::Level {
    fn from(level: UnitLevel) -> Self {
        match level {
            UnitLevel::Debug => log::Level::Debug,
            UnitLevel::Log | UnitLevel::Info => log::Level::Info,
            UnitLevel::Warn => log::Level::Warn,
            UnitLevel::Error => log::Level::Error,
        }
    }
}
