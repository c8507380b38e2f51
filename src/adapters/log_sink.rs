//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each application event's fixed text
//! to the `log` facade (ESP-IDF logger → UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        info!("{}", event.message());
    }

    fn flush(&mut self) {
        log::logger().flush();
    }
}
