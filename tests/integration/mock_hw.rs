//! Mock hardware adapters for integration tests.
//!
//! Every port call is appended to a shared journal so tests can assert on
//! the exact order of operations across the switch, logger, timer, and
//! sink without touching real registers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tiltpoll::app::events::AppEvent;
use tiltpoll::app::ports::{EventSink, LoggerPort, SwitchPort, TickHandler, TimerEvent, TimerPort};
use tiltpoll::config::SenseConfig;
use tiltpoll::error::InitError;

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ConfigureSwitch(SenseConfig),
    ReadLevel(bool),
    LoggerInit,
    TimerConfigure { period_ms: u32 },
    TimerEnable,
    Emit(AppEvent),
    Flush,
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

// ── MockSwitch ────────────────────────────────────────────────

/// Replays scripted levels; reads past the end return LOW.
pub struct MockSwitch {
    journal: Journal,
    levels: VecDeque<bool>,
    pub fail_configure: Option<InitError>,
}

impl MockSwitch {
    pub fn new(journal: &Journal, levels: &[bool]) -> Self {
        Self {
            journal: Rc::clone(journal),
            levels: levels.iter().copied().collect(),
            fail_configure: None,
        }
    }
}

impl SwitchPort for MockSwitch {
    fn configure(&mut self, sense: SenseConfig) -> Result<(), InitError> {
        self.journal.borrow_mut().push(Call::ConfigureSwitch(sense));
        match self.fail_configure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn read_level(&mut self) -> bool {
        let level = self.levels.pop_front().unwrap_or(false);
        self.journal.borrow_mut().push(Call::ReadLevel(level));
        level
    }
}

// ── MockLogger ────────────────────────────────────────────────

pub struct MockLogger {
    journal: Journal,
    pub fail: bool,
}

impl MockLogger {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Rc::clone(journal),
            fail: false,
        }
    }
}

impl LoggerPort for MockLogger {
    fn init(&mut self) -> Result<(), InitError> {
        self.journal.borrow_mut().push(Call::LoggerInit);
        if self.fail {
            Err(InitError::Logger)
        } else {
            Ok(())
        }
    }
}

// ── MockTimer ─────────────────────────────────────────────────

pub struct MockTimer {
    journal: Journal,
    pub handler: Option<TickHandler>,
    pub fail_configure: Option<i32>,
    pub fail_enable: Option<i32>,
}

impl MockTimer {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Rc::clone(journal),
            handler: None,
            fail_configure: None,
            fail_enable: None,
        }
    }

    /// Simulate one expiry by calling the registered handler.
    pub fn fire(&self) {
        let handler = self.handler.expect("timer not configured");
        handler(TimerEvent::Expired);
    }
}

impl TimerPort for MockTimer {
    fn configure(&mut self, period_ms: u32, handler: TickHandler) -> Result<(), InitError> {
        self.journal
            .borrow_mut()
            .push(Call::TimerConfigure { period_ms });
        if let Some(rc) = self.fail_configure {
            return Err(InitError::Timer(rc));
        }
        self.handler = Some(handler);
        Ok(())
    }

    fn enable(&mut self) -> Result<(), InitError> {
        self.journal.borrow_mut().push(Call::TimerEnable);
        match self.fail_enable {
            Some(rc) => Err(InitError::Timer(rc)),
            None => Ok(()),
        }
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    journal: Journal,
}

impl RecordingSink {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Rc::clone(journal),
        }
    }

    /// Log text of every emitted event, in order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.journal
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Emit(e) => Some(e.message()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.journal.borrow_mut().push(Call::Emit(*event));
    }

    fn flush(&mut self) {
        self.journal.borrow_mut().push(Call::Flush);
    }
}
