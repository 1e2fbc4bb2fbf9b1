//! Configuration for the scrollytelling window.
//!
//! Every field has a default that reproduces the stock demo, so an empty
//! YAML document is a valid configuration. Load a file with
//! [`ScrollyConfig::load`]; the result is validated before it is returned.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::color::{parse_hex, to_hex, DEFAULT_FILL, DEFAULT_STROKE};
use crate::data::layout::ChartSizing;
use crate::error::{Result, ScrollyError};
use crate::scroll::ObserverConfig;
use crate::surface::PointStyle;

// ─────────────────────────────────────────────────────────────────────────────
// Timing
// ─────────────────────────────────────────────────────────────────────────────

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Point position/color transition.
    pub point_transition_ms: u64,
    /// Axis label fade-in.
    pub label_fade_ms: u64,
    /// Quiet window before a resize is handled.
    pub resize_debounce_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            point_transition_ms: 1000,
            label_fade_ms: 500,
            resize_debounce_ms: 250,
        }
    }
}

impl TimingConfig {
    pub fn point_transition_secs(&self) -> f64 {
        self.point_transition_ms as f64 / 1000.0
    }

    pub fn label_fade_secs(&self) -> f64 {
        self.label_fade_ms as f64 / 1000.0
    }

    pub fn resize_debounce_secs(&self) -> f64 {
        self.resize_debounce_ms as f64 / 1000.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Point style
// ─────────────────────────────────────────────────────────────────────────────

/// Serializable mirror of [`PointStyle`] with hex colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyleConfig {
    pub radius: f32,
    pub opacity: f32,
    pub stroke_width: f32,
    pub fill: String,
    pub stroke: String,
}

impl Default for PointStyleConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            opacity: 0.8,
            stroke_width: 2.0,
            fill: to_hex(DEFAULT_FILL),
            stroke: to_hex(DEFAULT_STROKE),
        }
    }
}

impl PointStyleConfig {
    pub fn to_style(&self) -> Result<PointStyle> {
        let fill = parse_hex(&self.fill)
            .ok_or_else(|| ScrollyError::invalid(format!("bad fill color {:?}", self.fill)))?;
        let stroke = parse_hex(&self.stroke)
            .ok_or_else(|| ScrollyError::invalid(format!("bad stroke color {:?}", self.stroke)))?;
        Ok(PointStyle {
            radius: self.radius,
            opacity: self.opacity,
            stroke_width: self.stroke_width,
            fill,
            stroke,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Narrative
// ─────────────────────────────────────────────────────────────────────────────

/// Text of one scroll step section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepText {
    pub heading: String,
    pub body: String,
}

impl StepText {
    fn new(heading: &str, body: &str) -> Self {
        Self {
            heading: heading.to_string(),
            body: body.to_string(),
        }
    }
}

fn default_steps() -> Vec<StepText> {
    vec![
        StepText::new(
            "Foo against Bar",
            "Nine records, three numbers each. We start by placing every record by its \
             foo value across and its bar value up.",
        ),
        StepText::new(
            "Bar against Baz",
            "Scroll on and the same points travel: now bar runs along the bottom and \
             baz climbs the side.",
        ),
        StepText::new(
            "Baz against Foo",
            "Swap once more. Baz takes the horizontal axis and foo the vertical one.",
        ),
        StepText::new(
            "Baz, in color",
            "Same layout, one more channel: each point is now colored by its baz value, \
             from deep purple at zero to bright yellow at ten.",
        ),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// ScrollyConfig
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollyConfig {
    /// Window title.
    pub title: String,
    /// Initial inner window size in logical pixels.
    pub window_size: [f32; 2],
    pub chart: ChartSizing,
    pub points: PointStyleConfig,
    pub timing: TimingConfig,
    pub observer: ObserverConfig,
    /// Text shown above the first step.
    pub intro: String,
    /// Text shown below the last step.
    pub outro: String,
    pub steps: Vec<StepText>,
}

impl Default for ScrollyConfig {
    fn default() -> Self {
        Self {
            title: "Scrollytelling".to_string(),
            window_size: [1100.0, 760.0],
            chart: ChartSizing::default(),
            points: PointStyleConfig::default(),
            timing: TimingConfig::default(),
            observer: ObserverConfig::default(),
            intro: "Scroll down to walk through the data.".to_string(),
            outro: "That's the whole story.".to_string(),
            steps: default_steps(),
        }
    }
}

impl ScrollyConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(s: &str) -> Result<Self> {
        let cfg: ScrollyConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| ScrollyError::io(path, e))?;
        let cfg = Self::from_yaml(&s)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values the chart cannot work with.
    pub fn validate(&self) -> Result<()> {
        let offset = self.observer.trigger_offset;
        if !(0.0..=1.0).contains(&offset) {
            return Err(ScrollyError::invalid(format!(
                "observer.trigger_offset must be within [0, 1], got {}",
                offset
            )));
        }
        if self.timing.point_transition_ms == 0 || self.timing.label_fade_ms == 0 {
            return Err(ScrollyError::invalid("transition durations must be positive"));
        }
        if self.steps.is_empty() {
            return Err(ScrollyError::invalid("at least one step is required"));
        }
        if !(self.chart.max_size > 0.0) {
            return Err(ScrollyError::invalid("chart.max_size must be positive"));
        }
        self.points.to_style()?;
        Ok(())
    }
}
