//! Application core: pure domain logic, zero I/O.
//!
//! Edge detection, the poll loop, init sequencing, and tick handling.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod init;
pub mod monitor;
pub mod ports;
pub mod service;
pub mod tick;
