mod config;
mod engine;
mod events;
mod registry;
mod value;

pub use config::{DEFAULT_TOTAL_HOURS, WidgetConfig};
pub use engine::{TickOutcome, TimeWindowEngine};
pub use events::{WidgetContext, WidgetEvent, WidgetObserver};
pub use registry::{WidgetId, WidgetRegistry};
pub use value::WindowValue;
