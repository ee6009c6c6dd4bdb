use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Pixel/time mapping for one widget instance.
///
/// The pixel origin is the start of the hour in which the instance was
/// created; the track ends `total_hours` later. Width changes on resize,
/// the anchor never does.
///
/// Both conversions are total: a zero-width track maps every pixel to the
/// track start and every time to pixel `0.0`, so hidden containers degrade
/// to the anchor instant instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    track_start: NaiveDateTime,
    total_hours: u32,
    width_px: f64,
}

impl TrackGeometry {
    /// Creates a geometry anchored to the start of `anchor`'s hour.
    pub fn new(anchor: NaiveDateTime, total_hours: u32, width_px: f64) -> WidgetResult<Self> {
        if total_hours == 0 {
            return Err(WidgetError::InvalidConfig(
                "track must span at least one hour".to_owned(),
            ));
        }
        if !width_px.is_finite() || width_px < 0.0 {
            return Err(WidgetError::InvalidConfig(
                "track width must be finite and >= 0".to_owned(),
            ));
        }

        let track_start = anchor
            .date()
            .and_hms_opt(anchor.hour(), 0, 0)
            .ok_or_else(|| WidgetError::InvalidConfig("anchor hour out of range".to_owned()))?;

        Ok(Self {
            track_start,
            total_hours,
            width_px,
        })
    }

    #[must_use]
    pub fn anchor_hour(self) -> u32 {
        self.track_start.hour()
    }

    #[must_use]
    pub fn track_start(self) -> NaiveDateTime {
        self.track_start
    }

    #[must_use]
    pub fn track_end(self) -> NaiveDateTime {
        self.track_start + Duration::hours(i64::from(self.total_hours))
    }

    #[must_use]
    pub fn total_hours(self) -> u32 {
        self.total_hours
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.width_px
    }

    /// Pixel width of one hour slot; `0.0` on a zero-width track.
    #[must_use]
    pub fn hour_width_px(self) -> f64 {
        if self.width_px <= 0.0 {
            0.0
        } else {
            self.width_px / f64::from(self.total_hours)
        }
    }

    /// Re-reads the container width after a resize.
    ///
    /// Negative widths are clamped to zero; only non-finite input is rejected.
    pub fn set_width_px(&mut self, width_px: f64) -> WidgetResult<()> {
        if !width_px.is_finite() {
            return Err(WidgetError::InvalidInput(
                "track width must be finite".to_owned(),
            ));
        }
        self.width_px = width_px.max(0.0);
        Ok(())
    }

    /// Maps a pixel offset to the absolute time it represents.
    ///
    /// Sub-minute precision is preserved; offsets past the end of the
    /// anchor day roll over onto the next calendar day.
    #[must_use]
    pub fn pixel_to_time(self, px: f64) -> NaiveDateTime {
        if self.width_px <= 0.0 || !px.is_finite() {
            return self.track_start;
        }

        let offset_ms = (px / self.width_px) * f64::from(self.total_hours) * MS_PER_HOUR;
        self.track_start + Duration::milliseconds(offset_ms.round() as i64)
    }

    /// Maps an absolute time to its pixel offset on the track.
    ///
    /// The result is not clamped; times outside the track produce offsets
    /// outside `[0, width_px]` and callers decide how to treat them.
    #[must_use]
    pub fn time_to_pixel(self, time: NaiveDateTime) -> f64 {
        if self.width_px <= 0.0 {
            return 0.0;
        }

        let offset_ms = (time - self.track_start).num_milliseconds() as f64;
        offset_ms / (f64::from(self.total_hours) * MS_PER_HOUR) * self.width_px
    }
}
