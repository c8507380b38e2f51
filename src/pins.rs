//! GPIO pin assignments for the tilt poll board.
//!
//! Single source of truth: drivers reference this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Tilt switch
// ---------------------------------------------------------------------------

/// Digital input: tilt switch, external pull-down.  HIGH = tilted (ON).
pub const TILT_SWITCH_GPIO: i32 = 8;
