//! timewindow-rs: headless time-window selection widget engine.
//!
//! This crate provides a Rust-idiomatic API and a strict split between
//! pixel/time geometry, drag constraint solving, and surface projection,
//! so the full widget state machine is testable with synthetic input
//! events and no real rendering host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimeWindowEngine, WidgetConfig, WidgetRegistry};
pub use error::{WidgetError, WidgetResult};
