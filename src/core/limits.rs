use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Fallback applied when the configured minimum width is not positive.
pub const DEFAULT_MIN_SELECTION_WIDTH_PX: f64 = 40.0;

/// Hard ceiling on how far past the current instant a selection may end.
pub const FUTURE_CEILING_HOURS: i64 = 12;

/// Selection constraints shared by every live widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionLimits {
    pub min_selection_width_px: f64,
    pub min_duration_minutes: i64,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            min_selection_width_px: DEFAULT_MIN_SELECTION_WIDTH_PX,
            min_duration_minutes: 0,
        }
    }
}

impl SelectionLimits {
    /// Effective pixel minimum: non-positive (or non-finite) configured
    /// values fall back to [`DEFAULT_MIN_SELECTION_WIDTH_PX`].
    #[must_use]
    pub fn effective_min_width_px(self) -> f64 {
        if self.min_selection_width_px > 0.0 {
            self.min_selection_width_px
        } else {
            DEFAULT_MIN_SELECTION_WIDTH_PX
        }
    }
}

/// Single-threaded shared handle over [`SelectionLimits`].
///
/// Each engine holds a clone; registry-level setters write the value once
/// and every instance observes the latest write on its next recompute.
#[derive(Debug, Clone, Default)]
pub struct SharedLimits {
    inner: Rc<Cell<SelectionLimits>>,
}

impl SharedLimits {
    #[must_use]
    pub fn new(limits: SelectionLimits) -> Self {
        Self {
            inner: Rc::new(Cell::new(limits)),
        }
    }

    #[must_use]
    pub fn get(&self) -> SelectionLimits {
        self.inner.get()
    }

    pub fn set(&self, limits: SelectionLimits) {
        self.inner.set(limits);
    }

    pub fn set_min_selection_width_px(&self, width_px: f64) {
        let mut limits = self.get();
        limits.min_selection_width_px = width_px;
        self.set(limits);
    }

    pub fn set_min_duration_minutes(&self, minutes: i64) {
        let mut limits = self.get();
        limits.min_duration_minutes = minutes;
        self.set(limits);
    }
}
