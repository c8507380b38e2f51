//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements   | Connects to                 |
//! |------------|--------------|-----------------------------|
//! | `switch`   | SwitchPort   | ESP32 GPIO / embedded-hal   |
//! | `logger`   | LoggerPort   | esp_idf_logger              |
//! | `log_sink` | EventSink    | Serial log output           |
//!
//! The tick timer lives in [`drivers::hw_timer`](crate::drivers::hw_timer)
//! and implements `TimerPort` directly.

pub mod log_sink;
pub mod logger;
pub mod switch;
