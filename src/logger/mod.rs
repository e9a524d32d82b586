//! Core logger implementation.
//!
//! [`UnitLogger`] writes each emission to its [`Console`] and, while
//! recording, appends it to an in-memory buffer. Output and recording are
//! gated independently:
//!
//! * output is effective when [`UnitLogger::enable`] is in force and no
//!   silencing scope is open;
//! * recording is effective when [`UnitLogger::start_recording`] is in force
//!   or at least one capture scope is open.
//!
//! Scopes are counted rather than stored as booleans so nested and
//! interleaved scopes never switch each other off. See [`scope`] for the
//! scoped helpers built on top.

pub mod scope;

use std::fmt;
use std::mem;

// parking_lot avoids poisoning so a panicking scope leaves the logger usable
use parking_lot::Mutex;

use crate::console::Console;
use crate::level::UnitLevel;
use crate::log_record::LogEntry;
use crate::stream_console::StdConsole;

/// Buffered entry tagged with its position in the emission sequence.
struct Sequenced<P> {
    seq: u64,
    entry: LogEntry<P>,
}

struct State<P> {
    output_enabled: bool,
    recording_enabled: bool,
    capture_scopes: usize,
    silencing_scopes: usize,
    // output flag to restore when the outermost silencing scope closes
    saved_output: Option<bool>,
    next_seq: u64,
    buffer: Vec<Sequenced<P>>,
}

impl<P> State<P> {
    fn new(output_enabled: bool, recording_enabled: bool) -> Self {
        Self {
            output_enabled,
            recording_enabled,
            capture_scopes: 0,
            silencing_scopes: 0,
            saved_output: None,
            next_seq: 0,
            buffer: Vec::new(),
        }
    }

    fn output_active(&self) -> bool {
        self.output_enabled && self.silencing_scopes == 0
    }

    fn recording_active(&self) -> bool {
        self.recording_enabled || self.capture_scopes > 0
    }

    /// Claim the next position in the emission sequence.
    fn reserve_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Buffer `entry` at the position reserved for it, keeping the buffer
    /// sorted by sequence number even when emissions complete out of order.
    fn insert(&mut self, seq: u64, entry: LogEntry<P>) {
        let at = self.buffer.partition_point(|s| s.seq < seq);
        self.buffer.insert(at, Sequenced { seq, entry });
    }

    /// Register a capture scope and return the first sequence number it owns.
    ///
    /// The outermost silencing scope saves the output flag and forces it off.
    fn open_scope(&mut self, silenced: bool) -> u64 {
        self.capture_scopes += 1;
        if silenced {
            if self.silencing_scopes == 0 {
                self.saved_output = Some(self.output_enabled);
                self.output_enabled = false;
            }
            self.silencing_scopes += 1;
        }
        self.next_seq
    }

    fn close_scope(&mut self, silenced: bool) {
        debug_assert!(self.capture_scopes > 0, "capture scope closed twice");
        self.capture_scopes = self.capture_scopes.saturating_sub(1);
        if silenced {
            debug_assert!(self.silencing_scopes > 0, "silencing scope closed twice");
            self.silencing_scopes = self.silencing_scopes.saturating_sub(1);
            if self.silencing_scopes == 0 {
                if let Some(saved) = self.saved_output.take() {
                    self.output_enabled = saved;
                }
            }
        }
    }

    fn drain_all(&mut self) -> Vec<LogEntry<P>> {
        mem::take(&mut self.buffer)
            .into_iter()
            .map(|s| s.entry)
            .collect()
    }

    /// Remove and return entries appended at or after `seq`.
    fn drain_since(&mut self, seq: u64) -> Vec<LogEntry<P>> {
        // `insert` keeps the buffer sorted by `seq`.
        let start = self.buffer.partition_point(|s| s.seq < seq);
        self.buffer
            .split_off(start)
            .into_iter()
            .map(|s| s.entry)
            .collect()
    }
}

/// Per-instance logger with optional recording of emitted payloads.
///
/// `P` is the payload type; the logger never inspects it. `C` is the console
/// that receives payloads while output is enabled. Instances share nothing,
/// so two loggers never observe each other's emissions.
pub struct UnitLogger<P, C = StdConsole> {
    console: C,
    state: Mutex<State<P>>,
}

impl<P> UnitLogger<P, StdConsole> {
    /// Create a logger writing to the standard streams with output enabled.
    pub fn new() -> Self {
        Self::with_output(true)
    }

    /// Create a logger writing to the standard streams with output set to
    /// `output_enabled`.
    pub fn with_output(output_enabled: bool) -> Self {
        Self::from_parts(StdConsole, output_enabled, false)
    }
}

impl<P> Default for UnitLogger<P, StdConsole> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C> UnitLogger<P, C> {
    /// Create a logger writing to `console` with output enabled.
    pub fn with_console(console: C) -> Self {
        Self::from_parts(console, true, false)
    }

    pub(crate) fn from_parts(console: C, output_enabled: bool, recording_enabled: bool) -> Self {
        Self {
            console,
            state: Mutex::new(State::new(output_enabled, recording_enabled)),
        }
    }

    /// Borrow the console this logger writes to.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Turn console output on.
    pub fn enable(&self) {
        self.state.lock().output_enabled = true;
    }

    /// Turn console output off.
    pub fn disable(&self) {
        self.state.lock().output_enabled = false;
    }

    /// Whether console output is switched on.
    ///
    /// Reports `false` while a silencing scope is open. The flag is restored
    /// to its earlier value once the last silencing scope closes, and calling
    /// [`UnitLogger::enable`] inside the scope does not lift the suppression.
    pub fn is_enabled(&self) -> bool {
        self.state.lock().output_enabled
    }

    /// Whether a silencing scope is currently suppressing output.
    pub fn is_silenced(&self) -> bool {
        self.state.lock().silencing_scopes > 0
    }

    /// Start recording emissions into the buffer.
    pub fn start_recording(&self) {
        self.state.lock().recording_enabled = true;
    }

    /// Stop recording. Buffered entries are kept until played.
    ///
    /// Open capture scopes keep recording until they finish.
    pub fn stop_recording(&self) {
        self.state.lock().recording_enabled = false;
    }

    /// Whether emissions are currently appended to the buffer.
    pub fn is_recording(&self) -> bool {
        self.state.lock().recording_active()
    }

    /// Number of entries waiting to be played.
    pub fn buffered(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// Take every buffered payload, leaving the buffer empty.
    pub fn play_recording(&self) -> Vec<P> {
        self.play_recording_complete()
            .into_iter()
            .map(|e| e.payload)
            .collect()
    }

    /// Take every buffered entry with its level, leaving the buffer empty.
    pub fn play_recording_complete(&self) -> Vec<LogEntry<P>> {
        self.state.lock().drain_all()
    }
}

impl<P, C: Console<P>> UnitLogger<P, C> {
    /// Emit `payload` at `level`.
    ///
    /// The console is written first when output is effective, then the entry
    /// is buffered when recording is effective. Both gates are read together
    /// at the start of the call, and the entry's place in the buffer is
    /// reserved then too, so a scope opened while the console runs does not
    /// take it. The lock is released while the console runs, so a console
    /// may itself log through the same instance.
    pub fn emit(&self, level: UnitLevel, payload: P) {
        let (output, seq) = {
            let mut state = self.state.lock();
            let seq = if state.recording_active() {
                Some(state.reserve_seq())
            } else {
                None
            };
            (state.output_active(), seq)
        };
        if output {
            self.console.write(level, &payload);
        }
        if let Some(seq) = seq {
            self.state.lock().insert(seq, LogEntry::new(level, payload));
        }
    }

    pub fn debug(&self, payload: P) {
        self.emit(UnitLevel::Debug, payload);
    }

    pub fn log(&self, payload: P) {
        self.emit(UnitLevel::Log, payload);
    }

    pub fn info(&self, payload: P) {
        self.emit(UnitLevel::Info, payload);
    }

    pub fn warn(&self, payload: P) {
        self.emit(UnitLevel::Warn, payload);
    }

    pub fn error(&self, payload: P) {
        self.emit(UnitLevel::Error, payload);
    }
}

impl<P, C> fmt::Debug for UnitLogger<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("UnitLogger")
            .field("output_enabled", &state.output_enabled)
            .field("recording_enabled", &state.recording_enabled)
            .field("capture_scopes", &state.capture_scopes)
            .field("silencing_scopes", &state.silencing_scopes)
            .field("buffered", &state.buffer.len())
            .finish_non_exhaustive()
    }
}
