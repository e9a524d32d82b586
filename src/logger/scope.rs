//! Scoped capture helpers for [`UnitLogger`].
//!
//! Every helper opens a [`CaptureScope`] before running the caller's closure
//! and closes it afterwards. The scope is a guard: if the closure panics,
//! returns `Err`, or the future running it is dropped, the guard still
//! releases the recording (and silencing) it acquired. Entries emitted by a
//! failed scope stay in the buffer and are returned by the next
//! [`UnitLogger::play_recording`].
//!
//! A scope only drains entries emitted after it opened. Interleaved callers
//! sharing one logger still see each other's entries, in execution order;
//! use separate loggers when isolation matters.

use std::future::Future;

use log::trace;

use super::UnitLogger;
use crate::log_record::Recording;

/// Guard that captures emissions until [`CaptureScope::finish`] is called.
///
/// Created by [`UnitLogger::capture_scope`] and
/// [`UnitLogger::silent_scope`].
#[must_use = "dropping a scope without finishing it leaves its entries in the buffer"]
pub struct CaptureScope<'a, P, C> {
    logger: &'a UnitLogger<P, C>,
    since: u64,
    silenced: bool,
    open: bool,
}

impl<'a, P, C> CaptureScope<'a, P, C> {
    fn open(logger: &'a UnitLogger<P, C>, silenced: bool) -> Self {
        let since = logger.state.lock().open_scope(silenced);
        trace!("capture scope opened at entry {since} (silenced: {silenced})");
        Self {
            logger,
            since,
            silenced,
            open: true,
        }
    }

    /// Whether this scope suppresses console output.
    pub fn is_silenced(&self) -> bool {
        self.silenced
    }

    /// Close the scope and take the entries emitted while it was open.
    pub fn finish(mut self) -> Recording<P> {
        self.open = false;
        let entries = {
            let mut state = self.logger.state.lock();
            state.close_scope(self.silenced);
            state.drain_since(self.since)
        };
        trace!("capture scope finished with {} entries", entries.len());
        Recording::new(entries)
    }
}

impl<P, C> Drop for CaptureScope<'_, P, C> {
    fn drop(&mut self) {
        if self.open {
            self.logger.state.lock().close_scope(self.silenced);
            trace!("capture scope abandoned; entries left in buffer");
        }
    }
}

impl<P, C> UnitLogger<P, C> {
    /// Open a scope that records without changing output visibility.
    pub fn capture_scope(&self) -> CaptureScope<'_, P, C> {
        CaptureScope::open(self, false)
    }

    /// Open a scope that records and suppresses console output.
    pub fn silent_scope(&self) -> CaptureScope<'_, P, C> {
        CaptureScope::open(self, true)
    }

    /// Run `f` and return the entries it emitted.
    ///
    /// Console output during `f` follows the current output setting.
    pub fn record(&self, f: impl FnOnce()) -> Recording<P> {
        let scope = self.capture_scope();
        f();
        scope.finish()
    }

    /// Like [`UnitLogger::record`] for a fallible `f`; its error is returned
    /// unchanged.
    pub fn try_record<E>(&self, f: impl FnOnce() -> Result<(), E>) -> Result<Recording<P>, E> {
        let scope = self.capture_scope();
        f()?;
        Ok(scope.finish())
    }

    /// Run the future produced by `f` to completion and return the entries
    /// emitted meanwhile.
    pub async fn record_async<F, Fut>(&self, f: F) -> Recording<P>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let scope = self.capture_scope();
        f().await;
        scope.finish()
    }

    /// Like [`UnitLogger::record_async`] for a fallible future.
    pub async fn try_record_async<F, Fut, E>(&self, f: F) -> Result<Recording<P>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let scope = self.capture_scope();
        f().await?;
        Ok(scope.finish())
    }

    /// Run `f` with console output suppressed and return the entries it
    /// emitted.
    ///
    /// The output setting is left exactly as it was.
    pub fn collect(&self, f: impl FnOnce()) -> Recording<P> {
        let scope = self.silent_scope();
        f();
        scope.finish()
    }

    /// Like [`UnitLogger::collect`] for a fallible `f`; its error is returned
    /// unchanged.
    pub fn try_collect<E>(&self, f: impl FnOnce() -> Result<(), E>) -> Result<Recording<P>, E> {
        let scope = self.silent_scope();
        f()?;
        Ok(scope.finish())
    }

    /// Asynchronous form of [`UnitLogger::collect`]. Output stays suppressed
    /// until the future settles.
    pub async fn collect_async<F, Fut>(&self, f: F) -> Recording<P>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let scope = self.silent_scope();
        f().await;
        scope.finish()
    }

    /// Like [`UnitLogger::collect_async`] for a fallible future.
    pub async fn try_collect_async<F, Fut, E>(&self, f: F) -> Result<Recording<P>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let scope = self.silent_scope();
        f().await?;
        Ok(scope.finish())
    }

    /// Run `f` with console output suppressed and return its result.
    ///
    /// Entries emitted by `f` are captured and discarded. A `Result` returned
    /// by `f` passes through untouched.
    pub fn silence<R>(&self, f: impl FnOnce() -> R) -> R {
        let scope = self.silent_scope();
        let result = f();
        drop(scope.finish());
        result
    }

    /// Asynchronous form of [`UnitLogger::silence`].
    pub async fn silence_async<F, Fut, R>(&self, f: F) -> R
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        let scope = self.silent_scope();
        let result = f().await;
        drop(scope.finish());
        result
    }
}
