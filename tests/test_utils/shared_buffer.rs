//! Shared buffer utilities for stream console tests.
//!
//! Provides a thread-safe byte buffer that a [`StreamConsole`] can own while
//! the test keeps a handle for reading what was written.
//!
//! [`StreamConsole`]: unit_logger::StreamConsole

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Thread-safe wrapper around a byte buffer.
///
/// The inner buffer is kept private so tests can't mutate it without going
/// through the `Write` implementation.
#[derive(Clone, Default)]
pub struct SharedBuf {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuf {
    /// Return a snapshot of the buffer contents.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn read_output(buffer: &SharedBuf) -> String {
    String::from_utf8(buffer.contents()).expect("Buffer contains invalid UTF-8")
}
