use crate::core::HourBlocks;
use crate::error::{WidgetError, WidgetResult};

/// Backend-agnostic projection of one widget update.
///
/// A surface maps this 1:1 onto its host: selection offset and width to
/// element geometry, labels to the time label, `valid` to both the invalid
/// styling and the validity attribute read by surrounding form validation,
/// `indicator_px` to the live clock marker (`None` hides it).
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetFrame {
    pub track_width_px: f64,
    pub selection_left_px: f64,
    pub selection_width_px: f64,
    pub start_label: String,
    pub end_label: String,
    pub duration_minutes: i64,
    pub valid: bool,
    pub indicator_px: Option<f64>,
    pub hour_blocks: HourBlocks,
}

impl WidgetFrame {
    pub fn validate(&self) -> WidgetResult<()> {
        if !self.track_width_px.is_finite() || self.track_width_px < 0.0 {
            return Err(WidgetError::InvalidInput(format!(
                "frame track width must be finite and >= 0, got {}",
                self.track_width_px
            )));
        }

        if !self.selection_left_px.is_finite() || !self.selection_width_px.is_finite() {
            return Err(WidgetError::InvalidInput(
                "frame selection bounds must be finite".to_owned(),
            ));
        }

        if self.selection_width_px < 0.0 {
            return Err(WidgetError::InvalidInput(format!(
                "frame selection width must be >= 0, got {}",
                self.selection_width_px
            )));
        }

        if let Some(indicator_px) = self.indicator_px {
            if !indicator_px.is_finite()
                || indicator_px < 0.0
                || indicator_px > self.track_width_px
            {
                return Err(WidgetError::InvalidInput(format!(
                    "visible indicator must sit on the track, got {indicator_px}"
                )));
            }
        }

        Ok(())
    }
}
