use serde::{Deserialize, Serialize};

use crate::core::{SelectionBounds, SelectionLimits};
use crate::interaction::DragKind;

use super::WindowValue;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetContext {
    pub track_width_px: f64,
    pub total_hours: u32,
    pub selection: SelectionBounds,
    pub active_drag: Option<DragKind>,
    pub limits: SelectionLimits,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// Dispatched on every render/update pass, including repeated passes
    /// over unchanged state.
    SelectionChanged {
        value: WindowValue,
        /// Zero-padded `HH:MM` rendering of the start timestamp.
        start_label: String,
        /// Zero-padded `HH:MM` rendering of the end timestamp.
        end_label: String,
    },
    /// The wall-clock hour moved past the anchor hour, so the fixed hour
    /// grid is stale; the host is expected to rebuild the page.
    ReloadRequested { anchor_hour: u32, current_hour: u32 },
}

/// Observer hook interface for host integrations.
///
/// Observers receive events and a read-only context snapshot without
/// mutating engine internals directly.
pub trait WidgetObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &WidgetEvent, context: WidgetContext);
}
