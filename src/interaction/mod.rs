use serde::{Deserialize, Serialize};

use crate::core::SelectionBounds;

/// Hit-test classification of a pointer-down target.
///
/// The host surface owns the actual hit testing; the engine only needs to
/// know which recognized region the pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// Left resize handle.
    HandleLeft,
    /// Right resize handle.
    HandleRight,
    /// The selection body.
    Selection,
    /// Track background outside the selection.
    Track,
}

/// Active drag classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    Move,
    ResizeLeft,
    ResizeRight,
    NewSelection,
}

impl DragKind {
    #[must_use]
    pub fn from_target(target: PointerTarget) -> Self {
        match target {
            PointerTarget::HandleLeft => Self::ResizeLeft,
            PointerTarget::HandleRight => Self::ResizeRight,
            PointerTarget::Selection => Self::Move,
            PointerTarget::Track => Self::NewSelection,
        }
    }
}

/// Snapshot taken at pointer-down.
///
/// Deltas for the whole drag are computed against these values, so the
/// selection never accumulates per-event rounding drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragOrigin {
    pub kind: DragKind,
    pub pointer_x_px: f64,
    pub bounds: SelectionBounds,
}

/// Abstract input interface for the widget.
///
/// Pointer events, frame ticks and container resizes all arrive through
/// the same channel, so tests drive the widget with synthetic events
/// instead of simulating pointer hardware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { target: PointerTarget, x_px: f64 },
    PointerMove { x_px: f64 },
    PointerUp,
    FrameTick,
    Resize { width_px: f64 },
}

/// Per-instance drag state machine.
///
/// At most one drag is live at a time; pointer-move without an active
/// drag is a no-op, and pointer-up clears any drag unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    drag: Option<DragOrigin>,
}

impl InteractionState {
    #[must_use]
    pub fn active_drag(self) -> Option<DragOrigin> {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.drag.is_some()
    }

    pub fn on_pointer_down(&mut self, kind: DragKind, pointer_x_px: f64, bounds: SelectionBounds) {
        self.drag = Some(DragOrigin {
            kind,
            pointer_x_px,
            bounds,
        });
    }

    pub fn on_pointer_up(&mut self) {
        self.drag = None;
    }
}
