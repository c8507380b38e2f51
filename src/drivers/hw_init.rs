//! One-shot GPIO configuration and raw level reads.
//!
//! Configures the tilt switch pin as a sense input using raw ESP-IDF sys
//! calls.  Called once from the initializer before the poll loop starts,
//! and before logging is up, so nothing here logs.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real `gpio_config` / `gpio_get_level`.
//! On host/test: the level comes from a simulation atomic (default LOW).

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::config::SenseConfig;
#[cfg(target_os = "espidf")]
use crate::config::{Pull, SenseLevel};
use crate::error::InitError;

#[cfg(not(target_os = "espidf"))]
static SIM_LEVEL: AtomicBool = AtomicBool::new(false);

/// Drive the simulated pin level seen by [`gpio_read`] on host builds.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_level(high: bool) {
    SIM_LEVEL.store(high, Ordering::Relaxed);
}

// ── Sense input ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn configure_sense_input(pin: i32, sense: SenseConfig) -> Result<(), InitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: if sense.pull == Pull::Up {
            gpio_pullup_t_GPIO_PULLUP_ENABLE
        } else {
            gpio_pullup_t_GPIO_PULLUP_DISABLE
        },
        pull_down_en: if sense.pull == Pull::Down {
            gpio_pulldown_t_GPIO_PULLDOWN_ENABLE
        } else {
            gpio_pulldown_t_GPIO_PULLDOWN_DISABLE
        },
        intr_type: match sense.level {
            SenseLevel::High => gpio_int_type_t_GPIO_INTR_HIGH_LEVEL,
            SenseLevel::Low => gpio_int_type_t_GPIO_INTR_LOW_LEVEL,
        },
        ..Default::default()
    };
    // SAFETY: Called once from the single-threaded init path; `cfg` lives
    // for the duration of the call.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(InitError::Gpio(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_sense_input(_pin: i32, _sense: SenseConfig) -> Result<(), InitError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    SIM_LEVEL.load(Ordering::Relaxed)
}
