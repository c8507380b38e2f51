//! Port traits: the boundary between the poll logic and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ initializer / poll loop / tick handler
//! ```
//!
//! GPIO, timer, and logging drivers implement these traits.  The domain
//! consumes them via generics, so the edge detection and init sequencing
//! are testable on the host with mock adapters.

use crate::config::SenseConfig;
use crate::error::InitError;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Switch port (driven adapter: GPIO → domain)
// ───────────────────────────────────────────────────────────────

/// The monitored digital input.
pub trait SwitchPort {
    /// Configure the pin as a sense input with the given bias and trigger.
    fn configure(&mut self, sense: SenseConfig) -> Result<(), InitError>;

    /// Current logical level.  Infallible at this layer.
    fn read_level(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Timer port (driven adapter: domain → periodic timer)
// ───────────────────────────────────────────────────────────────

/// Event-type discriminator delivered to a [`TickHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The configured period elapsed.
    Expired,
}

/// Callback invoked on the timer's own execution context at every expiry.
pub type TickHandler = fn(TimerEvent);

/// A periodic hardware timer.
pub trait TimerPort {
    /// Create the timer with default parameters and register `handler`.
    /// The timer does not run until [`enable`](TimerPort::enable).
    fn configure(&mut self, period_ms: u32, handler: TickHandler) -> Result<(), InitError>;

    /// Start periodic expiry.
    fn enable(&mut self) -> Result<(), InitError>;
}

// ───────────────────────────────────────────────────────────────
// Logger port (driven adapter: logging backend bring-up)
// ───────────────────────────────────────────────────────────────

/// Installs the logging backend.
pub trait LoggerPort {
    fn init(&mut self) -> Result<(), InitError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → log output)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);

    /// Push buffered output to the backend.  Blocks until done.
    fn flush(&mut self) {}
}
