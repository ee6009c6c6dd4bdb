use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, NaiveDateTime};

/// Wall-clock source consulted for every "now"-anchored constraint.
///
/// The clock is injectable so the drag state machine and the indicator
/// tick stay deterministic under synthetic input.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock; the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Settable clock backed by a shared cell.
///
/// Clones observe the same instant, so a test holds one handle and hands
/// another to the engine.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: chrono::Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
