//! Per-thread log capture for unit tests.
//!
//! The `log` facade takes one global logger per process, so records and
//! flushes are kept in thread-locals: each test only sees what its own
//! thread logged, regardless of what runs beside it.

use std::cell::{Cell, RefCell};
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    static FLUSHES: Cell<usize> = const { Cell::new(0) };
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {
        FLUSHES.with(|f| f.set(f.get() + 1));
    }
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Install the capture logger (once) and clear this thread's buffers.
pub(crate) fn install() {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    FLUSHES.with(|f| f.set(0));
}

/// Drain the records logged on this thread since `install`.
pub(crate) fn take() -> Vec<(Level, String)> {
    RECORDS.with(RefCell::take)
}

/// `flush` calls made on this thread since `install`.
pub(crate) fn flushes() -> usize {
    FLUSHES.with(Cell::get)
}
