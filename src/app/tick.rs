//! Timer tick handling and the optional tick gate.
//!
//! The tick handler runs on the timer's execution context (ESP timer task
//! on target, a helper thread on host).  It never touches poll-loop state;
//! its only link to the foreground is the [`TickGate`] signal, which the
//! poll loop waits on in [`PollMode::TickGated`](crate::config::PollMode).
//!
//! ```text
//!  timer ctx                      foreground
//!  ─────────                      ──────────
//!  handle_tick ──▶ sink "tick"
//!              └─▶ TickGate ────▶ PollLoop::run (TickGated only)
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use super::events::AppEvent;
use super::ports::{EventSink, TimerEvent};

/// Wake-up signal from the tick handler to the poll loop.
///
/// Ticks are not counted: several notifies before a `wait` release it once.
pub struct TickGate {
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl TickGate {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Mark a tick as pending.  Safe from any execution context.
    pub fn notify(&self) {
        self.signal.signal(());
    }

    /// Block the calling thread until a tick is pending, then consume it.
    pub fn wait(&self) {
        futures_lite::future::block_on(self.signal.wait());
    }

    /// Consume a pending tick without blocking.
    pub fn try_take(&self) -> bool {
        self.signal.try_take().is_some()
    }
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate shared between the registered timer callback and the poll loop.
pub static TICK_GATE: TickGate = TickGate::new();

/// Body of the timer callback: log the tick and release the gate.
pub fn handle_tick(_event: TimerEvent, sink: &mut impl EventSink, gate: &TickGate) {
    sink.emit(&AppEvent::Tick);
    gate.notify();
}
