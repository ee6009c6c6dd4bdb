use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Plain selection value decoupled from any rendering surface.
///
/// `duration_minutes` is the rounded difference between the derived
/// timestamps; `is_valid` is advisory (duration meets the configured
/// minimum) and never blocks the selection itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowValue {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
    pub is_valid: bool,
}
