mod frame;
mod null_surface;

pub use frame::WidgetFrame;
pub use null_surface::NullSurface;

use crate::error::WidgetResult;

/// Contract implemented by any host rendering surface.
///
/// Surfaces receive a fully materialized, deterministic `WidgetFrame` so
/// host-toolkit code remains isolated from geometry and interaction
/// logic.
pub trait Surface {
    fn apply(&mut self, frame: &WidgetFrame) -> WidgetResult<()>;
}
