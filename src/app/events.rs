//! Outbound application events.
//!
//! The poll loop, initializer, and tick handler emit these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them; in production they become log lines.

use super::monitor::Transition;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Initialization completed; the poll loop is about to start.
    Started,

    /// The tilt switch changed level.
    Switch(Transition),

    /// The periodic timer expired.
    Tick,
}

impl AppEvent {
    /// Fixed log text for this event.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Started => "Poll example started.",
            Self::Switch(Transition::On) => "switch now ON",
            Self::Switch(Transition::Off) => "switch now OFF",
            Self::Tick => "tick",
        }
    }
}

impl From<Transition> for AppEvent {
    fn from(t: Transition) -> Self {
        Self::Switch(t)
    }
}
