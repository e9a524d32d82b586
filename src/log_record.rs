//! Captured log entries.
//!
//! A [`LogEntry`] pairs a [`UnitLevel`] with the opaque payload passed to an
//! emission call. [`Recording`] is the ordered set of entries produced by a
//! scoped helper such as [`UnitLogger::record`](crate::UnitLogger::record).

use std::fmt;
use std::slice;
use std::vec;

use crate::level::UnitLevel;

/// A single emission as seen by the recording buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry<P> {
    /// Level of the emission call.
    pub level: UnitLevel,
    /// The value passed to the emission call, untouched.
    pub payload: P,
}

impl<P> LogEntry<P> {
    pub fn new(level: UnitLevel, payload: P) -> Self {
        Self { level, payload }
    }

    /// Split the entry into its level and payload.
    pub fn into_parts(self) -> (UnitLevel, P) {
        (self.level, self.payload)
    }
}

impl<P> From<(UnitLevel, P)> for LogEntry<P> {
    fn from((level, payload): (UnitLevel, P)) -> Self {
        Self::new(level, payload)
    }
}

impl<P: PartialEq> PartialEq<(UnitLevel, P)> for LogEntry<P> {
    fn eq(&self, other: &(UnitLevel, P)) -> bool {
        self.level == other.0 && self.payload == other.1
    }
}

impl<P: fmt::Display> fmt::Display for LogEntry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.payload)
    }
}

/// Entries captured by one scoped helper, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recording<P> {
    entries: Vec<LogEntry<P>>,
}

impl<P> Recording<P> {
    pub(crate) fn new(entries: Vec<LogEntry<P>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the captured entries.
    pub fn entries(&self) -> &[LogEntry<P>] {
        &self.entries
    }

    /// Iterate over payloads without consuming the recording.
    pub fn payloads(&self) -> impl Iterator<Item = &P> {
        self.entries.iter().map(|e| &e.payload)
    }

    /// Iterate over the level of each entry.
    pub fn levels(&self) -> impl Iterator<Item = UnitLevel> + '_ {
        self.entries.iter().map(|e| e.level)
    }

    /// Consume the recording, keeping levels alongside payloads.
    pub fn into_entries(self) -> Vec<LogEntry<P>> {
        self.entries
    }

    /// Consume the recording, discarding levels.
    pub fn into_payloads(self) -> Vec<P> {
        self.entries.into_iter().map(|e| e.payload).collect()
    }
}

impl<P> Default for Recording<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<P> From<Recording<P>> for Vec<LogEntry<P>> {
    fn from(recording: Recording<P>) -> Self {
        recording.entries
    }
}

impl<P> IntoIterator for Recording<P> {
    type Item = LogEntry<P>;
    type IntoIter = vec::IntoIter<LogEntry<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Recording<P> {
    type Item = &'a LogEntry<P>;
    type IntoIter = slice::Iter<'a, LogEntry<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
