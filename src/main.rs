//! Tilt poll firmware, main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  GpioSwitch     EspLogger     TickTimer    LogEventSink  │
//! │  (SwitchPort)   (LoggerPort)  (TimerPort)  (EventSink)   │
//! │                                                          │
//! │  ───────────────── Port Trait Boundary ──────────────    │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  initialize() → PollLoop (TiltMonitor)             │  │
//! │  │  handle_tick() → TickGate                          │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;

use tiltpoll::adapters::log_sink::LogEventSink;
use tiltpoll::adapters::logger::EspLogger;
use tiltpoll::adapters::switch::GpioSwitch;
use tiltpoll::app::init::initialize;
use tiltpoll::app::ports::TimerEvent;
use tiltpoll::app::service::PollLoop;
use tiltpoll::app::tick::{TICK_GATE, handle_tick};
use tiltpoll::config::PollConfig;
use tiltpoll::diagnostics;
use tiltpoll::drivers::hw_timer::TickTimer;
use tiltpoll::pins;

/// Registered with the tick timer; runs in the ESP timer task.
fn on_timer_tick(event: TimerEvent) {
    handle_tick(event, &mut LogEventSink::new(), &TICK_GATE);
}

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    diagnostics::install_panic_handler();

    let config = PollConfig::default();
    if let Err(e) = config.validate() {
        diagnostics::halt(e);
    }

    let mut switch = GpioSwitch::new(pins::TILT_SWITCH_GPIO);
    let mut logger = EspLogger::new();
    let mut timer = TickTimer::new();
    let mut sink = LogEventSink::new();

    // Any init failure is fatal. `timer` must stay alive for the life of
    // the loop below, which never returns.
    if let Err(e) = initialize(
        &mut switch,
        &mut logger,
        &mut timer,
        &mut sink,
        &config,
        on_timer_tick,
    ) {
        diagnostics::halt(e);
    }

    let mut poll = PollLoop::new(&config);
    poll.run(&mut switch, &mut sink, &TICK_GATE)
}
