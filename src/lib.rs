//! Per-instance logger with recording and scoped capture.
//!
//! A [`UnitLogger`] writes payloads to a console-style sink and can record
//! them for later inspection, either manually with
//! [`UnitLogger::start_recording`] and [`UnitLogger::play_recording`] or
//! around a closure with [`UnitLogger::record`], [`UnitLogger::collect`] and
//! [`UnitLogger::silence`].

pub mod config;
pub mod console;
pub mod level;
pub mod log_compat;
pub mod log_record;
pub mod logger;
pub mod stream_console;

pub use config::{ConfigError, LoggerBuilder, LoggerConfig};
pub use console::{CollectingConsole, Console, NullConsole};
pub use level::{ParseLevelError, UnitLevel};
#[cfg(feature = "tracing-compat")]
pub use log_compat::TracingConsole;
pub use log_compat::LogConsole;
pub use log_record::{LogEntry, Recording};
pub use logger::UnitLogger;
pub use logger::scope::CaptureScope;
pub use stream_console::{StdConsole, StreamConsole};
