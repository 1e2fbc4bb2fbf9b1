//! Native egui front end.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`story_app`]   | [`ScrollyApp`]: per-frame wiring of narrative, chart and resize debounce |
//! | [`steps_ui`]    | Scrollable step sections; registers their extents with the observer |
//! | [`chart_ui`]    | Painting axes, points, axis labels and the status line |
//! | [`run`]         | [`run_scrollyplot()`] entry point and icon loading |

mod chart_ui;
mod run;
mod steps_ui;
mod story_app;

pub use run::run_scrollyplot;
pub use story_app::ScrollyApp;
