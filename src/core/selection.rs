use serde::{Deserialize, Serialize};

/// Selection edges in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub start_px: f64,
    pub end_px: f64,
}

impl SelectionBounds {
    #[must_use]
    pub fn new(start_px: f64, end_px: f64) -> Self {
        Self { start_px, end_px }
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.end_px - self.start_px
    }
}

/// Clamp envelope for one drag recompute.
///
/// `now_px` is the current instant's pixel, `ceiling_px` the pixel of the
/// future ceiling. Both are sampled when the recompute runs, not when the
/// drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEnvelope {
    pub now_px: f64,
    pub ceiling_px: f64,
    pub track_width_px: f64,
    pub min_width_px: f64,
}

/// Translates the whole selection by `dx`, holding the drag-start width.
///
/// The start edge is clamped to the now floor and the track; if the end
/// then overshoots the future ceiling, both edges are pulled back together
/// and the now floor is re-applied.
#[must_use]
pub fn moved(origin: SelectionBounds, dx: f64, env: DragEnvelope) -> SelectionBounds {
    let width = origin.width_px();

    let mut start = (origin.start_px + dx)
        .max(env.now_px)
        .min(env.track_width_px - width);
    let mut end = start + width;

    if end > env.ceiling_px {
        end = env.ceiling_px;
        start = end - width;
        if start < env.now_px {
            start = env.now_px;
        }
    }

    SelectionBounds::new(start, end)
}

/// New start edge for a left-handle drag: never before the now floor,
/// never closer than `min_width_px` to the (unchanged) end edge.
#[must_use]
pub fn resized_left(origin_start_px: f64, dx: f64, end_px: f64, env: DragEnvelope) -> f64 {
    (origin_start_px + dx)
        .max(env.now_px)
        .min(end_px - env.min_width_px)
}

/// New end edge for a right-handle drag: capped by the track and the
/// future ceiling, never closer than `min_width_px` to the start edge.
#[must_use]
pub fn resized_right(origin_end_px: f64, dx: f64, start_px: f64, env: DragEnvelope) -> f64 {
    (origin_end_px + dx)
        .min(env.track_width_px)
        .min(env.ceiling_px)
        .max(start_px + env.min_width_px)
}

/// End edge while a fresh selection tracks the pointer directly.
#[must_use]
pub fn extended_to(pointer_x_px: f64, start_px: f64, env: DragEnvelope) -> f64 {
    pointer_x_px
        .min(env.track_width_px)
        .min(env.ceiling_px)
        .max(start_px + env.min_width_px)
}

/// Bounds for a selection re-initialized by a click on the track
/// background.
///
/// The start snaps to the click but never before the now floor; the end
/// opens one minimum width to the right, capped by the ceiling and the
/// track. If the capped result is narrower than the minimum, the start is
/// pulled back, again no further than the now floor.
#[must_use]
pub fn reinitialized_at(click_x_px: f64, env: DragEnvelope) -> SelectionBounds {
    let mut start = env.now_px.max(click_x_px);
    let end = (start + env.min_width_px)
        .min(env.ceiling_px)
        .min(env.track_width_px);

    if end - start < env.min_width_px {
        start = end - env.min_width_px;
        if start < env.now_px {
            start = env.now_px;
        }
    }

    SelectionBounds::new(start, end)
}
