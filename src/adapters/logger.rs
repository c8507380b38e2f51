//! Logging backend bring-up.
//!
//! - **`target_os = "espidf"`**: installs `esp_idf_logger` as the `log`
//!   facade backend.
//! - **`not(target_os = "espidf")`**: no-op; host tests and tools install
//!   their own logger if they want output.

use crate::app::ports::LoggerPort;
use crate::error::InitError;

/// Logger adapter for the ESP32 platform.
#[derive(Debug, Default)]
pub struct EspLogger;

impl EspLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerPort for EspLogger {
    #[cfg(target_os = "espidf")]
    fn init(&mut self) -> Result<(), InitError> {
        esp_idf_logger::init().map_err(|_| InitError::Logger)
    }

    #[cfg(not(target_os = "espidf"))]
    fn init(&mut self) -> Result<(), InitError> {
        Ok(())
    }
}
