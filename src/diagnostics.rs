//! Fatal-path diagnostics.
//!
//! There is no recovery path on this device: an init failure or a panic
//! ends in a halted CPU.  What we can do is make sure the reason reaches
//! the serial console before that happens.

use core::fmt::Display;

/// Install a panic hook that logs the reason and flushes the logger
/// before the default handler aborts.
///
/// Call once at boot, before anything that may panic.
pub fn install_panic_handler() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("PANIC: {}", panic_reason(info.payload()));
        log::logger().flush();
        default_hook(info);
    }));
}

/// Log `err`, flush, and stop forever.
///
/// Used for initialization failures: no retry, no degraded mode.
pub fn halt(err: impl Display) -> ! {
    log::error!("init failed: {}, halting", err);
    log::logger().flush();
    loop {
        std::thread::park();
    }
}

fn panic_reason(payload: &(dyn core::any::Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}
