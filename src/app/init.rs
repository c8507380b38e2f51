//! One-shot startup sequence.
//!
//! Order is fixed: sense pin → logging → timer configure → timer enable →
//! startup announcement.  The first failure aborts the sequence and is
//! returned to the caller, which treats it as fatal.

use log::debug;

use crate::config::PollConfig;
use crate::error::InitError;

use super::events::AppEvent;
use super::ports::{EventSink, LoggerPort, SwitchPort, TickHandler, TimerPort};

/// Bring up every peripheral the poll loop depends on.
pub fn initialize(
    switch: &mut impl SwitchPort,
    logger: &mut impl LoggerPort,
    timer: &mut impl TimerPort,
    sink: &mut impl EventSink,
    config: &PollConfig,
    on_tick: TickHandler,
) -> Result<(), InitError> {
    switch.configure(config.sense)?;
    logger.init()?;

    timer.configure(config.tick_period_ms, on_tick)?;
    timer.enable()?;

    debug!(
        "init: sense {:?}/{:?}, tick every {}ms, mode={:?}",
        config.sense.pull, config.sense.level, config.tick_period_ms, config.poll_mode
    );
    sink.emit(&AppEvent::Started);
    Ok(())
}
