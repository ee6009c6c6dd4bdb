use chrono::{Duration, Timelike};
use tracing::{debug, info};

use crate::core::{
    Clock, DragEnvelope, FUTURE_CEILING_HOURS, HourBlocks, SelectionBounds, SelectionLimits,
    SharedLimits, SystemClock, TrackGeometry, build_hour_blocks, selection,
};
use crate::error::{WidgetError, WidgetResult};
use crate::interaction::{DragKind, InputEvent, InteractionState, PointerTarget};
use crate::render::{Surface, WidgetFrame};

use super::{WidgetConfig, WidgetContext, WidgetEvent, WidgetObserver, WindowValue};

/// Outcome of one animation-frame tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Indicator refreshed; `Some` carries its pixel offset, `None` means
    /// the current instant lies outside the track and the marker is hidden.
    IndicatorUpdated(Option<f64>),
    /// The wall-clock hour rolled past the anchor hour; the hour grid is
    /// stale and the host must perform a full reload.
    ReloadRequired,
}

/// Per-instance widget engine.
///
/// Owns the geometry, the selection, and the drag state machine, and
/// projects every update onto the injected [`Surface`]. All interaction
/// arrives through [`InputEvent`]s or the equivalent named methods.
pub struct TimeWindowEngine<S: Surface> {
    surface: S,
    geometry: TrackGeometry,
    hour_blocks: HourBlocks,
    selection: SelectionBounds,
    interaction: InteractionState,
    limits: SharedLimits,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn WidgetObserver>>,
    indicator_px: Option<f64>,
    stale: bool,
}

impl<S: Surface> std::fmt::Debug for TimeWindowEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeWindowEngine")
            .field("geometry", &self.geometry)
            .field("hour_blocks", &self.hour_blocks)
            .field("selection", &self.selection)
            .field("interaction", &self.interaction)
            .field("limits", &self.limits)
            .field("observers", &self.observers.len())
            .field("indicator_px", &self.indicator_px)
            .field("stale", &self.stale)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> TimeWindowEngine<S> {
    /// Creates an engine on the local wall clock.
    pub fn new(surface: S, config: WidgetConfig, limits: SharedLimits) -> WidgetResult<Self> {
        Self::new_with_clock(surface, config, limits, Box::new(SystemClock))
    }

    /// Creates an engine on an injected clock.
    ///
    /// The anchor hour and the default selection window are derived from
    /// the clock's current instant, and the initial frame is applied
    /// before the engine is returned.
    pub fn new_with_clock(
        surface: S,
        config: WidgetConfig,
        limits: SharedLimits,
        clock: Box<dyn Clock>,
    ) -> WidgetResult<Self> {
        let config = config.validate()?;
        let geometry = TrackGeometry::new(clock.now(), config.total_hours, config.width_px)?;
        let hour_blocks = build_hour_blocks(geometry.anchor_hour(), config.total_hours);

        let hour_width = geometry.hour_width_px();
        let selection = SelectionBounds::new(
            hour_width * config.default_window_start_slots,
            hour_width * config.default_window_end_slots,
        );

        let mut engine = Self {
            surface,
            geometry,
            hour_blocks,
            selection,
            interaction: InteractionState::default(),
            limits,
            clock,
            observers: Vec::new(),
            indicator_px: None,
            stale: false,
        };
        engine.update_display()?;
        Ok(engine)
    }

    /// Dispatches one abstract input event.
    pub fn apply_input(&mut self, event: InputEvent) -> WidgetResult<()> {
        match event {
            InputEvent::PointerDown { target, x_px } => self.pointer_down(target, x_px),
            InputEvent::PointerMove { x_px } => self.pointer_move(x_px),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::FrameTick => self.frame_tick().map(|_| ()),
            InputEvent::Resize { width_px } => self.resize(width_px),
        }
    }

    /// Starts a drag classified by the pointer target.
    ///
    /// A track-background press additionally re-initializes the selection
    /// at the click position before the drag origin is captured.
    pub fn pointer_down(&mut self, target: PointerTarget, x_px: f64) -> WidgetResult<()> {
        if !x_px.is_finite() {
            return Err(WidgetError::InvalidInput(
                "pointer x must be finite".to_owned(),
            ));
        }

        let kind = DragKind::from_target(target);
        if kind == DragKind::NewSelection {
            self.selection = selection::reinitialized_at(x_px, self.envelope());
        }
        self.interaction.on_pointer_down(kind, x_px, self.selection);
        debug!(?kind, x_px, "drag started");

        self.update_display()
    }

    /// Recomputes bounds for the active drag; a no-op without one.
    pub fn pointer_move(&mut self, x_px: f64) -> WidgetResult<()> {
        if !x_px.is_finite() {
            return Err(WidgetError::InvalidInput(
                "pointer x must be finite".to_owned(),
            ));
        }

        let Some(origin) = self.interaction.active_drag() else {
            return Ok(());
        };

        let env = self.envelope();
        let dx = x_px - origin.pointer_x_px;
        match origin.kind {
            DragKind::Move => {
                self.selection = selection::moved(origin.bounds, dx, env);
            }
            DragKind::ResizeLeft => {
                self.selection.start_px =
                    selection::resized_left(origin.bounds.start_px, dx, self.selection.end_px, env);
            }
            DragKind::ResizeRight => {
                self.selection.end_px = selection::resized_right(
                    origin.bounds.end_px,
                    dx,
                    self.selection.start_px,
                    env,
                );
            }
            DragKind::NewSelection => {
                self.selection.end_px = selection::extended_to(x_px, self.selection.start_px, env);
            }
        }

        self.update_display()
    }

    /// Ends any active drag unconditionally.
    pub fn pointer_up(&mut self) -> WidgetResult<()> {
        self.interaction.on_pointer_up();
        self.update_display()
    }

    /// One step of the live clock indicator.
    ///
    /// Detects the hourly rollover first: a stale grid emits
    /// [`WidgetEvent::ReloadRequested`] once and keeps reporting
    /// [`TickOutcome::ReloadRequired`] until the host rebuilds the page.
    pub fn frame_tick(&mut self) -> WidgetResult<TickOutcome> {
        let now = self.clock.now();
        if now.hour() != self.geometry.anchor_hour() {
            if !self.stale {
                self.stale = true;
                info!(
                    anchor_hour = self.geometry.anchor_hour(),
                    current_hour = now.hour(),
                    "hour grid stale, requesting full reload"
                );
                let event = WidgetEvent::ReloadRequested {
                    anchor_hour: self.geometry.anchor_hour(),
                    current_hour: now.hour(),
                };
                self.emit_event(&event);
            }
            return Ok(TickOutcome::ReloadRequired);
        }

        let now_px = self.geometry.time_to_pixel(now);
        self.indicator_px = if now_px < 0.0 || now_px > self.geometry.width_px() {
            None
        } else {
            Some(now_px)
        };

        self.refresh_surface()?;
        Ok(TickOutcome::IndicatorUpdated(self.indicator_px))
    }

    /// Adapts to a container size change.
    ///
    /// Pixel bounds are preserved as-is; their time interpretation shifts
    /// with the new width.
    pub fn resize(&mut self, width_px: f64) -> WidgetResult<()> {
        self.geometry.set_width_px(width_px)?;
        self.update_display()
    }

    /// Projects current state to the surface and notifies observers.
    ///
    /// Purely observational: selection state is untouched, and repeated
    /// calls over unchanged state produce identical frames. The change
    /// event is re-dispatched on every call.
    pub fn update_display(&mut self) -> WidgetResult<()> {
        self.refresh_surface()?;

        let value = self.value();
        let event = WidgetEvent::SelectionChanged {
            value,
            start_label: value.start.format("%H:%M").to_string(),
            end_label: value.end.format("%H:%M").to_string(),
        };
        self.emit_event(&event);
        Ok(())
    }

    /// Current selection as a plain value object.
    #[must_use]
    pub fn value(&self) -> WindowValue {
        let start = self.geometry.pixel_to_time(self.selection.start_px);
        let end = self.geometry.pixel_to_time(self.selection.end_px);
        let duration_minutes = ((end - start).num_milliseconds() as f64 / 60_000.0).round() as i64;

        WindowValue {
            start,
            end,
            duration_minutes,
            is_valid: duration_minutes >= self.limits.get().min_duration_minutes,
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn WidgetObserver>) {
        self.observers.push(observer);
    }

    /// Removes the observer with the given id; returns whether one was found.
    pub fn remove_observer(&mut self, id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn selection(&self) -> SelectionBounds {
        self.selection
    }

    #[must_use]
    pub fn active_drag(&self) -> Option<DragKind> {
        self.interaction.active_drag().map(|origin| origin.kind)
    }

    #[must_use]
    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    #[must_use]
    pub fn hour_blocks(&self) -> &HourBlocks {
        &self.hour_blocks
    }

    #[must_use]
    pub fn limits(&self) -> SelectionLimits {
        self.limits.get()
    }

    #[must_use]
    pub fn indicator_px(&self) -> Option<f64> {
        self.indicator_px
    }

    /// Whether the hour grid has gone stale since creation.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn envelope(&self) -> DragEnvelope {
        let now = self.clock.now();
        DragEnvelope {
            now_px: self.geometry.time_to_pixel(now),
            ceiling_px: self
                .geometry
                .time_to_pixel(now + Duration::hours(FUTURE_CEILING_HOURS)),
            track_width_px: self.geometry.width_px(),
            min_width_px: self.limits.get().effective_min_width_px(),
        }
    }

    fn refresh_surface(&mut self) -> WidgetResult<()> {
        let frame = self.build_frame();
        self.surface.apply(&frame)
    }

    fn build_frame(&self) -> WidgetFrame {
        let value = self.value();
        WidgetFrame {
            track_width_px: self.geometry.width_px(),
            selection_left_px: self.selection.start_px,
            selection_width_px: self.selection.width_px(),
            start_label: value.start.format("%H:%M").to_string(),
            end_label: value.end.format("%H:%M").to_string(),
            duration_minutes: value.duration_minutes,
            valid: value.is_valid,
            indicator_px: self.indicator_px,
            hour_blocks: self.hour_blocks.clone(),
        }
    }

    fn emit_event(&mut self, event: &WidgetEvent) {
        let context = WidgetContext {
            track_width_px: self.geometry.width_px(),
            total_hours: self.geometry.total_hours(),
            selection: self.selection,
            active_drag: self.active_drag(),
            limits: self.limits.get(),
        };
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
