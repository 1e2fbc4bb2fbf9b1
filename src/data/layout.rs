//! Chart dimensions: margins and the square plotting area.

use serde::{Deserialize, Serialize};

/// Space reserved around the plotting area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 40.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

/// Sizing rules for the chart: cap, container padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSizing {
    /// Outer size cap, margins included.
    pub max_size: f64,
    /// Horizontal padding subtracted from the measured container width.
    pub padding: f64,
    pub margin: Margins,
}

impl Default for ChartSizing {
    fn default() -> Self {
        Self {
            max_size: 500.0,
            padding: 40.0,
            margin: Margins::default(),
        }
    }
}

/// Inner plotting area. Always square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub margin: Margins,
    pub width: f64,
    pub height: f64,
}

impl ChartLayout {
    /// Layout for a container of `container_width` pixels.
    ///
    /// The side is `min(container - padding, max_size) - left - right`.
    /// Tiny containers may produce a negative side; that is not guarded.
    pub fn fit(sizing: &ChartSizing, container_width: f64) -> Self {
        let available = (container_width - sizing.padding).min(sizing.max_size);
        let side = available - sizing.margin.left - sizing.margin.right;
        Self {
            margin: sizing.margin,
            width: side,
            height: side,
        }
    }

    /// Layout used before the first container measurement.
    pub fn initial(sizing: &ChartSizing) -> Self {
        let side = sizing.max_size - sizing.margin.left - sizing.margin.right;
        Self {
            margin: sizing.margin,
            width: side,
            height: side,
        }
    }

    /// Full drawing surface size, margins included.
    pub fn outer_size(&self) -> (f64, f64) {
        (
            self.width + self.margin.left + self.margin.right,
            self.height + self.margin.top + self.margin.bottom,
        )
    }
}
