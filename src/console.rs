//! Console-style sinks.
//!
//! A [`Console`] exposes one function per [`UnitLevel`]. The logger only
//! decides *whether* to call it; what a console does with the payload is its
//! own business.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::level::UnitLevel;
use crate::log_record::LogEntry;

/// Trait implemented by every sink a [`UnitLogger`](crate::UnitLogger) can
/// write to.
///
/// Consoles are not required to be `Send` or `Sync`; a logger inherits those
/// bounds from its console.
pub trait Console<P: ?Sized> {
    fn debug(&self, payload: &P);
    fn log(&self, payload: &P);
    fn info(&self, payload: &P);
    fn warn(&self, payload: &P);
    fn error(&self, payload: &P);

    /// Dispatch `payload` to the function matching `level`.
    fn write(&self, level: UnitLevel, payload: &P) {
        match level {
            UnitLevel::Debug => self.debug(payload),
            UnitLevel::Log => self.log(payload),
            UnitLevel::Info => self.info(payload),
            UnitLevel::Warn => self.warn(payload),
            UnitLevel::Error => self.error(payload),
        }
    }
}

/// Implement the five level functions of [`Console`] by forwarding to a
/// `fn(&self, UnitLevel, &P)` method on the implementing type.
macro_rules! forward_levels {
    ($P:ty, $method:ident) => {
        fn debug(&self, payload: &$P) {
            self.$method($crate::level::UnitLevel::Debug, payload)
        }
        fn log(&self, payload: &$P) {
            self.$method($crate::level::UnitLevel::Log, payload)
        }
        fn info(&self, payload: &$P) {
            self.$method($crate::level::UnitLevel::Info, payload)
        }
        fn warn(&self, payload: &$P) {
            self.$method($crate::level::UnitLevel::Warn, payload)
        }
        fn error(&self, payload: &$P) {
            self.$method($crate::level::UnitLevel::Error, payload)
        }
        fn write(&self, level: $crate::level::UnitLevel, payload: &$P) {
            self.$method(level, payload)
        }
    };
}
pub(crate) use forward_levels;

macro_rules! impl_console_for_pointer {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<P: ?Sized, C: Console<P> + ?Sized> Console<P> for $ptr {
            fn debug(&self, payload: &P) {
                (**self).debug(payload)
            }
            fn log(&self, payload: &P) {
                (**self).log(payload)
            }
            fn info(&self, payload: &P) {
                (**self).info(payload)
            }
            fn warn(&self, payload: &P) {
                (**self).warn(payload)
            }
            fn error(&self, payload: &P) {
                (**self).error(payload)
            }
            fn write(&self, level: UnitLevel, payload: &P) {
                (**self).write(level, payload)
            }
        }
    )+};
}

impl_console_for_pointer!(&C, Box<C>, Arc<C>);

/// Console that discards every payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullConsole;

impl NullConsole {
    fn discard<P: ?Sized>(&self, _level: UnitLevel, _payload: &P) {}
}

impl<P: ?Sized> Console<P> for NullConsole {
    forward_levels!(P, discard);
}

/// Console that remembers every call it receives.
///
/// Clones share storage, so a test can keep one handle while the logger owns
/// another.
#[derive(Debug)]
pub struct CollectingConsole<P> {
    calls: Arc<Mutex<Vec<LogEntry<P>>>>,
}

impl<P> Default for CollectingConsole<P> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<P> Clone for CollectingConsole<P> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<P: Clone> CollectingConsole<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of all calls received so far.
    pub fn calls(&self) -> Vec<LogEntry<P>> {
        self.calls.lock().clone()
    }

    /// Return the payloads written so far, in call order.
    pub fn payloads(&self) -> Vec<P> {
        self.calls.lock().iter().map(|e| e.payload.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of calls made through the function for `level`.
    pub fn count_at(&self, level: UnitLevel) -> usize {
        self.calls.lock().iter().filter(|e| e.level == level).count()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn push(&self, level: UnitLevel, payload: &P) {
        self.calls.lock().push(LogEntry::new(level, payload.clone()));
    }
}

impl<P: Clone> Console<P> for CollectingConsole<P> {
    forward_levels!(P, push);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_routes_to_matching_function() {
        let console = CollectingConsole::new();
        for level in UnitLevel::ALL {
            console.write(level, &level.as_str());
        }
        let calls = console.calls();
        assert_eq!(calls.len(), 5);
        for (call, level) in calls.iter().zip(UnitLevel::ALL) {
            assert_eq!(call.level, level);
            assert_eq!(call.payload, level.as_str());
        }
    }

    #[test]
    fn clones_share_storage() {
        let console = CollectingConsole::new();
        let handle = console.clone();
        console.warn(&1);
        console.warn(&2);
        console.error(&3);
        assert_eq!(handle.payloads(), vec![1, 2, 3]);
        assert_eq!(handle.count_at(UnitLevel::Warn), 2);
        handle.clear();
        assert_eq!(console.count(), 0);
    }

    #[test]
    fn pointer_consoles_forward() {
        let console = CollectingConsole::new();
        let boxed: Box<CollectingConsole<u8>> = Box::new(console.clone());
        let shared = Arc::new(console.clone());
        let borrowed = &console;
        boxed.info(&1u8);
        shared.debug(&2);
        borrowed.write(UnitLevel::Error, &3);
        assert_eq!(
            console.calls(),
            vec![
                (UnitLevel::Info, 1),
                (UnitLevel::Debug, 2),
                (UnitLevel::Error, 3),
            ]
        );
    }

    #[test]
    fn null_console_accepts_unsized_payloads() {
        let console = NullConsole;
        Console::<str>::log(&console, "dropped");
        Console::<[u8]>::write(&console, UnitLevel::Warn, b"bytes");
    }
}
