//! Periodic tick timer.
//!
//! On ESP-IDF this wraps an `esp_timer` periodic timer.  The registered
//! [`TickHandler`] travels through the timer's opaque `arg` pointer, so
//! the C callback needs no static state.  Callbacks execute in the ESP
//! timer task context (not ISR), so the handler may log.
//!
//! On simulation targets a named helper thread sleeps for the period and
//! invokes the handler until the timer is dropped.

use crate::app::ports::{TickHandler, TimerEvent, TimerPort};
use crate::error::InitError;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(not(target_os = "espidf"))]
use std::sync::Arc;
#[cfg(not(target_os = "espidf"))]
use std::sync::atomic::{AtomicBool, Ordering};

/// Return code reported by the simulated timer for misuse.
#[cfg(not(target_os = "espidf"))]
const SIM_INVALID_STATE: i32 = -1;

pub struct TickTimer {
    period_ms: u32,
    #[cfg(target_os = "espidf")]
    handle: esp_timer_handle_t,
    #[cfg(not(target_os = "espidf"))]
    handler: Option<TickHandler>,
    #[cfg(not(target_os = "espidf"))]
    running: Arc<AtomicBool>,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer {
    pub fn new() -> Self {
        Self {
            period_ms: 0,
            #[cfg(target_os = "espidf")]
            handle: core::ptr::null_mut(),
            #[cfg(not(target_os = "espidf"))]
            handler: None,
            #[cfg(not(target_os = "espidf"))]
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Configured period, or 0 before [`TimerPort::configure`].
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

// ── ESP-IDF implementation ────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(arg: *mut core::ffi::c_void) {
    // SAFETY: `arg` was produced from a `TickHandler` in `configure()`;
    // fn pointers and data pointers have the same size on this target.
    let handler = unsafe { core::mem::transmute::<*mut core::ffi::c_void, TickHandler>(arg) };
    handler(TimerEvent::Expired);
}

#[cfg(target_os = "espidf")]
impl TimerPort for TickTimer {
    fn configure(&mut self, period_ms: u32, handler: TickHandler) -> Result<(), InitError> {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: handler as *mut core::ffi::c_void,
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"tick\0".as_ptr() as *const _,
            skip_unhandled_events: true,
        };
        // SAFETY: Called once from the single-threaded init path; `args` is
        // copied by esp_timer_create and `self.handle` outlives the timer.
        let ret = unsafe { esp_timer_create(&args, &raw mut self.handle) };
        if ret != ESP_OK as i32 {
            return Err(InitError::Timer(ret));
        }
        self.period_ms = period_ms;
        Ok(())
    }

    fn enable(&mut self) -> Result<(), InitError> {
        if self.handle.is_null() {
            return Err(InitError::Timer(ESP_ERR_INVALID_STATE as i32));
        }
        let period_us = u64::from(self.period_ms) * 1_000;
        // SAFETY: handle is a live timer created in configure().
        let ret = unsafe { esp_timer_start_periodic(self.handle, period_us) };
        if ret != ESP_OK as i32 {
            return Err(InitError::Timer(ret));
        }
        info!("hw_timer: tick@{}ms started", self.period_ms);
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
impl Drop for TickTimer {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        // SAFETY: handle is valid until esp_timer_delete; stop on a
        // non-running timer just returns ESP_ERR_INVALID_STATE.
        unsafe {
            esp_timer_stop(self.handle);
            esp_timer_delete(self.handle);
        }
        self.handle = core::ptr::null_mut();
    }
}

// ── Simulation implementation ─────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl TimerPort for TickTimer {
    fn configure(&mut self, period_ms: u32, handler: TickHandler) -> Result<(), InitError> {
        if period_ms == 0 {
            return Err(InitError::Timer(SIM_INVALID_STATE));
        }
        self.period_ms = period_ms;
        self.handler = Some(handler);
        Ok(())
    }

    fn enable(&mut self) -> Result<(), InitError> {
        let handler = self.handler.ok_or(InitError::Timer(SIM_INVALID_STATE))?;
        if self.running.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let period = std::time::Duration::from_millis(u64::from(self.period_ms));
        let running = Arc::clone(&self.running);
        std::thread::Builder::new()
            .name("tick".into())
            .spawn(move || {
                while running.load(Ordering::Acquire) {
                    std::thread::sleep(period);
                    if running.load(Ordering::Acquire) {
                        handler(TimerEvent::Expired);
                    }
                }
            })
            .map_err(|_| InitError::Timer(SIM_INVALID_STATE))?;

        log::info!("hw_timer(sim): tick@{}ms thread started", self.period_ms);
        Ok(())
    }
}

#[cfg(not(target_os = "espidf"))]
impl Drop for TickTimer {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}
