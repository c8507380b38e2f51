//! Poll loop: the foreground core.
//!
//! [`PollLoop`] owns the [`TiltMonitor`] and drives one read/compare/log
//! cycle per iteration.  The switch and log sink are injected at call
//! sites, so the whole loop is testable with mock adapters.
//!
//! ```text
//!  SwitchPort ──▶ ┌──────────────────┐ ──▶ EventSink
//!                 │     PollLoop     │
//!    TickGate ──▶ │  TiltMonitor     │
//!                 └──────────────────┘
//! ```

use crate::config::{PollConfig, PollMode};

use super::monitor::{TiltMonitor, Transition};
use super::ports::{EventSink, SwitchPort};
use super::tick::TickGate;

/// Foreground poll loop with edge detection on the tilt switch.
pub struct PollLoop {
    monitor: TiltMonitor,
    mode: PollMode,
    iterations: u64,
    transitions: u64,
}

impl PollLoop {
    pub fn new(config: &PollConfig) -> Self {
        Self {
            monitor: TiltMonitor::new(),
            mode: config.poll_mode,
            iterations: 0,
            transitions: 0,
        }
    }

    // ── Per-iteration step ────────────────────────────────────

    /// Run one iteration: flush → read → compare → log → store.
    pub fn poll_once(
        &mut self,
        switch: &mut impl SwitchPort,
        sink: &mut impl EventSink,
    ) -> Option<Transition> {
        self.iterations = self.iterations.wrapping_add(1);

        sink.flush();

        let level = switch.read_level();
        let transition = self.monitor.observe(level);
        if let Some(t) = transition {
            self.transitions = self.transitions.wrapping_add(1);
            sink.emit(&t.into());
        }
        transition
    }

    // ── Forever loop ──────────────────────────────────────────

    /// One pass of the forever loop.  In [`PollMode::TickGated`] this
    /// blocks on `gate` first; in [`PollMode::BusySpin`] it polls at once.
    pub fn step(
        &mut self,
        switch: &mut impl SwitchPort,
        sink: &mut impl EventSink,
        gate: &TickGate,
    ) -> Option<Transition> {
        if self.mode == PollMode::TickGated {
            gate.wait();
        }
        self.poll_once(switch, sink)
    }

    /// Poll until the device is reset.
    pub fn run(
        &mut self,
        switch: &mut impl SwitchPort,
        sink: &mut impl EventSink,
        gate: &TickGate,
    ) -> ! {
        loop {
            self.step(switch, sink, gate);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> PollMode {
        self.mode
    }

    /// Level seen by the most recent iteration (`false` before the first).
    pub fn last_level(&self) -> bool {
        self.monitor.last_level()
    }

    /// Completed iterations (wraps at `u64::MAX`).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Transitions logged so far (wraps at `u64::MAX`).
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}
