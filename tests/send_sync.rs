//! Send/Sync guarantees for core types.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};
use unit_logger::{
    CaptureScope, CollectingConsole, LogConsole, LoggerBuilder, NullConsole, StdConsole,
    StreamConsole, UnitLogger,
};

#[rstest]
fn consoles_are_send_sync() {
    assert_impl_all!(StdConsole: Send, Sync);
    assert_impl_all!(NullConsole: Send, Sync);
    assert_impl_all!(LogConsole: Send, Sync);
    assert_impl_all!(CollectingConsole<String>: Send, Sync);
    assert_impl_all!(StreamConsole<Vec<u8>>: Send, Sync);
}

#[rstest]
fn loggers_are_send_sync() {
    assert_impl_all!(UnitLogger<String>: Send, Sync);
    assert_impl_all!(UnitLogger<i32, CollectingConsole<i32>>: Send, Sync);
    assert_impl_all!(CaptureScope<'static, String, StdConsole>: Send, Sync);
    assert_impl_all!(LoggerBuilder: Send, Sync);
}

#[rstest]
fn logger_inherits_payload_bounds() {
    assert_not_impl_any!(UnitLogger<Rc<RefCell<u8>>, NullConsole>: Send, Sync);
}
