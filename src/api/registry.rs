use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Clock, SharedLimits};
use crate::error::WidgetResult;
use crate::render::Surface;

use super::{TimeWindowEngine, WidgetConfig};

/// Identifier for one registered widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(u64);

impl WidgetId {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Explicit registry of live widget instances.
///
/// Every engine created through the registry shares one limits channel,
/// so the registry-level setters write once and then re-render each
/// registered instance; the new constraints take effect immediately and
/// uniformly. Removing an instance is its teardown.
pub struct WidgetRegistry<S: Surface> {
    engines: IndexMap<WidgetId, TimeWindowEngine<S>>,
    limits: SharedLimits,
    next_id: u64,
}

impl<S: Surface> Default for WidgetRegistry<S> {
    fn default() -> Self {
        Self::with_limits(SharedLimits::default())
    }
}

impl<S: Surface> WidgetRegistry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limits(limits: SharedLimits) -> Self {
        Self {
            engines: IndexMap::new(),
            limits,
            next_id: 0,
        }
    }

    /// Handle to the shared limits channel.
    #[must_use]
    pub fn limits(&self) -> SharedLimits {
        self.limits.clone()
    }

    /// Creates and registers an engine on the local wall clock.
    pub fn insert(&mut self, config: WidgetConfig, surface: S) -> WidgetResult<WidgetId> {
        let engine = TimeWindowEngine::new(surface, config, self.limits.clone())?;
        Ok(self.register(engine))
    }

    /// Creates and registers an engine on an injected clock.
    pub fn insert_with_clock(
        &mut self,
        config: WidgetConfig,
        surface: S,
        clock: Box<dyn Clock>,
    ) -> WidgetResult<WidgetId> {
        let engine = TimeWindowEngine::new_with_clock(surface, config, self.limits.clone(), clock)?;
        Ok(self.register(engine))
    }

    /// Unregisters an instance; listeners and ticks for it end here.
    pub fn remove(&mut self, id: WidgetId) -> Option<TimeWindowEngine<S>> {
        self.engines.shift_remove(&id)
    }

    #[must_use]
    pub fn engine(&self, id: WidgetId) -> Option<&TimeWindowEngine<S>> {
        self.engines.get(&id)
    }

    pub fn engine_mut(&mut self, id: WidgetId) -> Option<&mut TimeWindowEngine<S>> {
        self.engines.get_mut(&id)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<WidgetId> {
        self.engines.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Sets the minimum selection width and re-renders every instance.
    pub fn set_min_selection_width_px(&mut self, width_px: f64) -> WidgetResult<()> {
        self.limits.set_min_selection_width_px(width_px);
        debug!(width_px, "minimum selection width updated");
        self.refresh_all()
    }

    /// Sets the minimum duration and re-renders every instance.
    pub fn set_min_duration_minutes(&mut self, minutes: i64) -> WidgetResult<()> {
        self.limits.set_min_duration_minutes(minutes);
        debug!(minutes, "minimum duration updated");
        self.refresh_all()
    }

    /// Re-runs the render/update step on every registered instance.
    pub fn refresh_all(&mut self) -> WidgetResult<()> {
        for engine in self.engines.values_mut() {
            engine.update_display()?;
        }
        Ok(())
    }

    fn register(&mut self, engine: TimeWindowEngine<S>) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.engines.insert(id, engine);
        id
    }
}
