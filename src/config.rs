//! Poll configuration
//!
//! All tunables are compile-time defaults; the firmware has no runtime
//! configuration surface.  The struct is serde-serializable so a build can
//! dump its effective settings at boot.

use serde::{Deserialize, Serialize};

/// Input bias applied to the sensed pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Pin level the sense logic triggers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SenseLevel {
    Low,
    High,
}

/// Sense-based input configuration for the tilt switch pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseConfig {
    pub pull: Pull,
    pub level: SenseLevel,
}

impl Default for SenseConfig {
    fn default() -> Self {
        Self {
            pull: Pull::Down,
            level: SenseLevel::High,
        }
    }
}

/// How the poll loop paces itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollMode {
    /// Poll back-to-back with no delay or yield.  The tick timer only logs.
    #[default]
    BusySpin,
    /// Poll once per timer tick.
    TickGated,
}

/// Core poll configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Tick timer period (milliseconds)
    pub tick_period_ms: u32,
    /// Loop pacing
    pub poll_mode: PollMode,
    /// Pin bias and sense trigger
    pub sense: SenseConfig,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 1000, // 1 Hz
            poll_mode: PollMode::BusySpin,
            sense: SenseConfig::default(),
        }
    }
}

impl PollConfig {
    /// Reject settings the drivers cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "tick_period_ms must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Errors from [`PollConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed range validation.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
