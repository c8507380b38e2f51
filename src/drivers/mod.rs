//! Peripheral drivers: GPIO sense configuration and the tick timer.

pub mod hw_init;
pub mod hw_timer;
