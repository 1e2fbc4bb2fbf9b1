//! Numeric-to-pixel and numeric-to-color scales.
//!
//! Position scales map a fixed domain onto a mutable pixel range and
//! extrapolate linearly outside the domain. The color scale normalizes its
//! input against the domain and samples a [`ColorRamp`].

use egui::Color32;

use crate::data::color::ColorRamp;

/// Linear map from `domain` to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Replace the output interval. Called on layout changes only.
    pub fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    /// Map `value` into the range. No clamping.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            // Degenerate domain: everything lands on the range midpoint.
            return (r0 + r1) * 0.5;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    ///
    /// Tick spacing is a power of ten times 1, 2 or 5.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut lo, mut hi) = self.domain;
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        if count == 0 || !(hi > lo) {
            return vec![lo];
        }
        let step = tick_step(lo, hi, count);
        let start = (lo / step).ceil() as i64;
        let stop = (hi / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }

    /// Spacing between the values produced by [`ticks`](Self::ticks).
    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = self.domain;
        tick_step(lo.min(hi), lo.max(hi), count.max(1))
    }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Format a tick value with just enough decimals for the given spacing.
pub fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 || step <= 0.0 {
        format!("{:.0}", value)
    } else {
        let decimals = (-step.log10()).ceil() as usize;
        format!("{:.*}", decimals, value)
    }
}

/// Sequential color scale: domain value to a color on a ramp.
#[derive(Debug, Clone, Copy)]
pub struct SequentialColorScale {
    domain: (f64, f64),
    ramp: ColorRamp,
}

impl SequentialColorScale {
    pub fn new(domain: (f64, f64), ramp: ColorRamp) -> Self {
        Self { domain, ramp }
    }

    /// Plasma-colored scale over `domain`.
    pub fn plasma(domain: (f64, f64)) -> Self {
        Self::new(domain, ColorRamp::Plasma)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Color for `value`. Values outside the domain clamp to the ramp ends.
    pub fn scale(&self, value: f64) -> Color32 {
        let (d0, d1) = self.domain;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        self.ramp.sample(t)
    }
}
