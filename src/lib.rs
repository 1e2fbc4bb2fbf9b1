//! scrollyplot crate root: module wiring and re-exports.
//!
//! A scroll-driven scatter plot built on egui/eframe. As the reader scrolls
//! through narrative steps, the chart animates its points, axis labels and
//! optionally a color encoding to match the active step.
//!
//! - `data`: dataset, scales, colors, step table and chart layout
//! - `animation`: tweening used for fire-and-forget transitions
//! - `surface`: retained chart state (points, labels, scales)
//! - `scroll`: step-entry detection against a trigger line
//! - `debounce`: quiet-window debouncing for resizes
//! - `controller`: the update and resize operations
//! - `events`: subscription to step, status and resize events
//! - `config`, `error`: YAML configuration and error types
//! - `app`: the native window

pub mod animation;
pub mod app;
pub mod config;
pub mod controller;
pub mod data;
pub mod debounce;
pub mod error;
pub mod events;
pub mod scroll;
pub mod surface;

pub use app::{run_scrollyplot, ScrollyApp};
pub use config::ScrollyConfig;
pub use controller::{StatusRegion, StoryController};
pub use data::dataset::{dataset, Field, Record};
pub use data::steps::{select_step, status_message, StepSpec};
pub use error::{Result, ScrollyError};
pub use events::{EventController, EventFilter, EventKind, StoryEvent};
