//! Tilt switch adapters: concrete [`SwitchPort`] implementations.
//!
//! - [`GpioSwitch`] drives a numbered ESP-IDF GPIO through the raw
//!   `hw_init` helpers (simulation atomic on host).
//! - [`PinSwitch`] wraps any `embedded-hal` 1.0 input pin.  The HAL's
//!   typestate has already fixed the pin mode, so `configure` only records
//!   the requested sense settings.

use embedded_hal::digital::{Error as _, InputPin};
use log::{debug, warn};

use crate::app::ports::SwitchPort;
use crate::config::SenseConfig;
use crate::drivers::hw_init;
use crate::error::InitError;

// ── GpioSwitch ────────────────────────────────────────────────

/// Tilt switch on a numbered GPIO.
pub struct GpioSwitch {
    gpio: i32,
}

impl GpioSwitch {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// GPIO pin this switch is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl SwitchPort for GpioSwitch {
    fn configure(&mut self, sense: SenseConfig) -> Result<(), InitError> {
        hw_init::configure_sense_input(self.gpio, sense)
    }

    fn read_level(&mut self) -> bool {
        hw_init::gpio_read(self.gpio)
    }
}

// ── PinSwitch ─────────────────────────────────────────────────

/// Tilt switch on a HAL input pin.
///
/// A failed read reports the last good level, so a flaky read can never
/// produce a transition.
pub struct PinSwitch<P> {
    pin: P,
    last_good: bool,
    sense: Option<SenseConfig>,
}

impl<P: InputPin> PinSwitch<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_good: false,
            sense: None,
        }
    }

    /// Sense settings passed to `configure`, if it has run.
    pub fn sense(&self) -> Option<SenseConfig> {
        self.sense
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> SwitchPort for PinSwitch<P> {
    fn configure(&mut self, sense: SenseConfig) -> Result<(), InitError> {
        debug!("switch: HAL pin, sense {:?}/{:?} fixed by typestate", sense.pull, sense.level);
        self.sense = Some(sense);
        Ok(())
    }

    fn read_level(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => {
                self.last_good = level;
                level
            }
            Err(e) => {
                warn!("switch: pin read failed ({:?}), holding {}", e.kind(), self.last_good);
                self.last_good
            }
        }
    }
}
