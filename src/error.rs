//! Error types for the tilt poll firmware.
//!
//! Only initialization can fail.  Once the poll loop is running, pin reads
//! and log writes are infallible at the port level, so every variant here
//! describes a peripheral that refused to come up.  All variants are `Copy`
//! so the fatal path can log them without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Initialization errors
// ---------------------------------------------------------------------------

/// A peripheral failed to initialize.  Always fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The GPIO driver rejected the sense-input configuration (driver rc).
    Gpio(i32),
    /// The logging backend could not be installed.
    Logger,
    /// The tick timer could not be created or started (driver rc).
    Timer(i32),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(rc) => write!(f, "GPIO sense config failed (rc={rc})"),
            Self::Logger => write!(f, "logger init failed"),
            Self::Timer(rc) => write!(f, "tick timer init failed (rc={rc})"),
        }
    }
}

impl core::error::Error for InitError {}
