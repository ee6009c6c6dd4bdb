pub mod clock;
pub mod geometry;
pub mod limits;
pub mod selection;
pub mod track;

pub use clock::{Clock, ManualClock, SystemClock};
pub use geometry::TrackGeometry;
pub use limits::{
    DEFAULT_MIN_SELECTION_WIDTH_PX, FUTURE_CEILING_HOURS, SelectionLimits, SharedLimits,
};
pub use selection::{DragEnvelope, SelectionBounds};
pub use track::{BlockShade, HourBlock, HourBlocks, Meridiem, build_hour_blocks};
