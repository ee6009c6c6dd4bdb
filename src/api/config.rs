use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Fixed span of the timeline in the primary variant.
pub const DEFAULT_TOTAL_HOURS: u32 = 13;

const DEFAULT_WINDOW_START_SLOTS: f64 = 2.0;
const DEFAULT_WINDOW_END_SLOTS: f64 = 4.0;

/// Public widget bootstrap configuration.
///
/// This type is serializable so host applications can persist/load widget
/// setup without inventing their own ad-hoc format. Shared selection
/// limits are not part of it; they travel through the registry's shared
/// channel so one write reaches every live instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Rendered container width at creation time.
    pub width_px: f64,
    #[serde(default = "default_total_hours")]
    pub total_hours: u32,
    /// Default selection start, in hour slots from the track origin.
    #[serde(default = "default_window_start_slots")]
    pub default_window_start_slots: f64,
    /// Default selection end, in hour slots from the track origin.
    #[serde(default = "default_window_end_slots")]
    pub default_window_end_slots: f64,
}

impl WidgetConfig {
    /// Creates a config with the primary-variant defaults: a 13-hour track
    /// and a 2-to-4-hours-from-anchor default window.
    #[must_use]
    pub fn new(width_px: f64) -> Self {
        Self {
            width_px,
            total_hours: default_total_hours(),
            default_window_start_slots: default_window_start_slots(),
            default_window_end_slots: default_window_end_slots(),
        }
    }

    /// Sets the timeline span in hours.
    #[must_use]
    pub fn with_total_hours(mut self, total_hours: u32) -> Self {
        self.total_hours = total_hours;
        self
    }

    /// Sets the default selection window in hour slots from the origin.
    #[must_use]
    pub fn with_default_window_slots(mut self, start_slots: f64, end_slots: f64) -> Self {
        self.default_window_start_slots = start_slots;
        self.default_window_end_slots = end_slots;
        self
    }

    pub(crate) fn validate(self) -> WidgetResult<Self> {
        if !self.width_px.is_finite() || self.width_px < 0.0 {
            return Err(WidgetError::InvalidConfig(
                "container width must be finite and >= 0".to_owned(),
            ));
        }

        if self.total_hours == 0 {
            return Err(WidgetError::InvalidConfig(
                "track must span at least one hour".to_owned(),
            ));
        }

        if !self.default_window_start_slots.is_finite()
            || !self.default_window_end_slots.is_finite()
            || self.default_window_start_slots < 0.0
            || self.default_window_end_slots > f64::from(self.total_hours)
            || self.default_window_start_slots >= self.default_window_end_slots
        {
            return Err(WidgetError::InvalidConfig(
                "default window must satisfy 0 <= start < end <= total hours".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> WidgetResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_total_hours() -> u32 {
    DEFAULT_TOTAL_HOURS
}

fn default_window_start_slots() -> f64 {
    DEFAULT_WINDOW_START_SLOTS
}

fn default_window_end_slots() -> f64 {
    DEFAULT_WINDOW_END_SLOTS
}
