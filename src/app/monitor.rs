//! Edge detector for the tilt switch level.

/// A strict change of the switch level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// LOW → HIGH.
    On,
    /// HIGH → LOW.
    Off,
}

/// Remembers the last observed level and reports strict transitions.
///
/// The previous level starts out `false`, so a first reading of `true`
/// is reported as [`Transition::On`].
#[derive(Debug, Default)]
pub struct TiltMonitor {
    last_observed_level: bool,
}

impl TiltMonitor {
    pub const fn new() -> Self {
        Self {
            last_observed_level: false,
        }
    }

    /// Compare `level` against the previous reading, then store it.
    pub fn observe(&mut self, level: bool) -> Option<Transition> {
        let transition = match (self.last_observed_level, level) {
            (false, true) => Some(Transition::On),
            (true, false) => Some(Transition::Off),
            _ => None,
        };
        self.last_observed_level = level;
        transition
    }

    pub fn last_level(&self) -> bool {
        self.last_observed_level
    }
}
