//! Fixtures providing loggers wired to a [`CollectingConsole`].
//!
//! Tests receive the logger together with a second handle on its console so
//! they can count sink calls independently of the recording buffer.

#![allow(dead_code)]

use rstest::fixture;
use unit_logger::{CollectingConsole, UnitLogger};

pub type Console = CollectingConsole<i32>;
pub type TestLogger = UnitLogger<i32, Console>;

/// Return a logger with output enabled and a handle on its console.
#[fixture]
pub fn logger_pair() -> (TestLogger, Console) {
    let console = CollectingConsole::new();
    (UnitLogger::with_console(console.clone()), console)
}

/// Return two independent loggers with their consoles.
#[fixture]
pub fn primary_and_alternate() -> ((TestLogger, Console), (TestLogger, Console)) {
    (logger_pair(), logger_pair())
}
