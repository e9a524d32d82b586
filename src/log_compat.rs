//! Consoles that forward into the `log` and `tracing` ecosystems.
//!
//! [`LogConsole`] hands each payload to the globally installed `log::Log`
//! implementation. [`TracingConsole`], available with the `tracing-compat`
//! feature, emits a `tracing` event per payload. Both map
//! [`UnitLevel::Log`] onto the ecosystem's `INFO` level.

use std::borrow::Cow;
use std::fmt;

use crate::console::{Console, forward_levels};
use crate::level::UnitLevel;

/// Default target attached to forwarded records.
pub const DEFAULT_TARGET: &str = "unit_logger";

/// Console forwarding payloads to the `log` facade.
#[derive(Clone, Debug)]
pub struct LogConsole {
    target: Cow<'static, str>,
}

impl Default for LogConsole {
    fn default() -> Self {
        Self {
            target: Cow::Borrowed(DEFAULT_TARGET),
        }
    }
}

impl LogConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `target` instead of [`DEFAULT_TARGET`] for forwarded records.
    pub fn with_target(mut self, target: impl Into<Cow<'static, str>>) -> Self {
        self.target = target.into();
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn forward<P: fmt::Display + ?Sized>(&self, level: UnitLevel, payload: &P) {
        let level = log::Level::from(level);
        log::log!(target: &*self.target, level, "{payload}");
    }
}

impl<P: fmt::Display + ?Sized> Console<P> for LogConsole {
    forward_levels!(P, forward);
}

/// Console emitting `tracing` events with target [`DEFAULT_TARGET`].
#[cfg(feature = "tracing-compat")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingConsole;

#[cfg(feature = "tracing-compat")]
impl TracingConsole {
    fn forward<P: fmt::Display + ?Sized>(&self, level: UnitLevel, payload: &P) {
        // `tracing` callsites need a constant level.
        match level {
            UnitLevel::Debug => tracing::debug!(target: DEFAULT_TARGET, "{payload}"),
            UnitLevel::Log | UnitLevel::Info => {
                tracing::info!(target: DEFAULT_TARGET, "{payload}")
            }
            UnitLevel::Warn => tracing::warn!(target: DEFAULT_TARGET, "{payload}"),
            UnitLevel::Error => tracing::error!(target: DEFAULT_TARGET, "{payload}"),
        }
    }
}

#[cfg(feature = "tracing-compat")]
impl<P: fmt::Display + ?Sized> Console<P> for TracingConsole {
    forward_levels!(P, forward);
}
