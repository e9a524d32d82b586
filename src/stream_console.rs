//! Stream-based consoles.
//!
//! [`StreamConsole`] writes each payload as one line to an arbitrary
//! `io::Write`. [`StdConsole`] is the default console of a
//! [`UnitLogger`](crate::UnitLogger): `debug`, `log` and `info` go to
//! standard output while `warn` and `error` go to standard error. Writes are
//! synchronous so a payload has reached the stream by the time the emission
//! call returns.

use std::{
    fmt,
    io::{self, Write},
};

use log::warn;
use parking_lot::Mutex;

use crate::console::{Console, forward_levels};
use crate::level::UnitLevel;

fn write_line<W, P>(writer: &mut W, payload: &P) -> io::Result<()>
where
    W: Write + ?Sized,
    P: fmt::Display + ?Sized,
{
    writeln!(writer, "{payload}").and_then(|()| writer.flush())
}

/// Console writing to the process's standard streams.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    fn emit<P: fmt::Display + ?Sized>(&self, level: UnitLevel, payload: &P) {
        let result = if level.is_diagnostic() {
            write_line(&mut io::stderr().lock(), payload)
        } else {
            write_line(&mut io::stdout().lock(), payload)
        };
        if let Err(err) = result {
            warn!("StdConsole: failed to write {level} payload: {err}");
        }
    }
}

impl<P: fmt::Display + ?Sized> Console<P> for StdConsole {
    forward_levels!(P, emit);
}

/// Console that writes every level to a single `io::Write` stream.
///
/// The writer sits behind a mutex so the console can be shared between
/// threads when `W: Send`.
pub struct StreamConsole<W> {
    writer: Mutex<W>,
}

impl<W: Write> StreamConsole<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn emit<P: fmt::Display + ?Sized>(&self, level: UnitLevel, payload: &P) {
        let mut writer = self.writer.lock();
        if let Err(err) = write_line(&mut *writer, payload) {
            warn!("StreamConsole: failed to write {level} payload: {err}");
        }
    }
}

impl<W> fmt::Debug for StreamConsole<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamConsole").finish_non_exhaustive()
    }
}

impl<W: Write, P: fmt::Display + ?Sized> Console<P> for StreamConsole<W> {
    forward_levels!(P, emit);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_payload() {
        let console = StreamConsole::new(Vec::new());
        console.log(&"hello");
        console.error(&42);
        Console::<str>::warn(&console, "unsized");
        let output = String::from_utf8(console.into_inner()).expect("utf8");
        assert_eq!(output, "hello\n42\nunsized\n");
    }

    #[test]
    fn write_errors_do_not_panic() {
        let console = StreamConsole::new(FailingWriter);
        console.info(&"lost");
    }

    #[test]
    fn std_console_accepts_every_level() {
        let console = StdConsole;
        for level in UnitLevel::ALL {
            console.write(level, &format!("std console {level}"));
        }
    }
}
