//! The render surface: scales, point markers and axis labels.
//!
//! The surface holds retained state for everything the chart paints. It is
//! mutated only by [`StoryController`](crate::controller::StoryController);
//! the egui layer reads it each frame through the `*_at(now)` accessors.

use egui::Color32;

use crate::animation::{Easing, Tween};
use crate::data::color::{darker, DEFAULT_FILL, DEFAULT_STROKE, STROKE_DARKEN};
use crate::data::dataset::Record;
use crate::data::layout::ChartLayout;
use crate::data::scale::{format_tick, LinearScale, SequentialColorScale};
use crate::data::steps::StepSpec;

/// Domain shared by every field.
pub const DOMAIN: (f64, f64) = (0.0, 10.0);

/// Approximate number of ticks per axis.
pub const TICK_COUNT: usize = 10;

/// Fixed styling of point markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub radius: f32,
    pub opacity: f32,
    pub stroke_width: f32,
    pub fill: Color32,
    pub stroke: Color32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            radius: 10.0,
            opacity: 0.8,
            stroke_width: 2.0,
            fill: DEFAULT_FILL,
            stroke: DEFAULT_STROKE,
        }
    }
}

/// Where a point should end up for a given step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTarget {
    pub x: f64,
    pub y: f64,
    pub fill: Color32,
    pub stroke: Color32,
}

/// One circle, keyed by record id.
#[derive(Debug, Clone)]
pub struct PointMarker {
    pub id: u32,
    pub cx: Tween<f64>,
    pub cy: Tween<f64>,
    pub fill: Tween<Color32>,
    pub stroke: Tween<Color32>,
}

impl PointMarker {
    /// Center in plot-area pixels (origin at the top-left of the inner area).
    pub fn position_at(&self, now: f64) -> (f64, f64) {
        (self.cx.value_at(now), self.cy.value_at(now))
    }

    fn is_running(&self, now: f64) -> bool {
        self.cx.is_running(now)
            || self.cy.is_running(now)
            || self.fill.is_running(now)
            || self.stroke.is_running(now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A text label along one axis. Fades in after creation.
#[derive(Debug, Clone)]
pub struct AxisLabel {
    pub axis: Axis,
    pub text: String,
    pub opacity: Tween<f32>,
}

impl AxisLabel {
    /// Text anchor in plot-area pixels. The y label is drawn rotated by -90°.
    pub fn anchor(&self, layout: &ChartLayout) -> (f64, f64) {
        match self.axis {
            Axis::X => (layout.width / 2.0, layout.height + 40.0),
            Axis::Y => (-40.0, layout.height / 2.0),
        }
    }
}

/// A tick on an axis: pixel offset along the axis and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

pub struct RenderSurface {
    layout: ChartLayout,
    x_scale: LinearScale,
    y_scale: LinearScale,
    color_scale: SequentialColorScale,
    style: PointStyle,
    records: &'static [Record],
    points: Vec<PointMarker>,
    labels: Vec<AxisLabel>,
}

impl RenderSurface {
    /// Build the surface and place every record at its foo/bar position.
    pub fn new(layout: ChartLayout, records: &'static [Record], style: PointStyle) -> Self {
        let x_scale = LinearScale::new(DOMAIN, (0.0, layout.width));
        let y_scale = LinearScale::new(DOMAIN, (layout.height, 0.0));
        let points = records
            .iter()
            .map(|r| PointMarker {
                id: r.id,
                cx: Tween::settled(x_scale.scale(r.foo)),
                cy: Tween::settled(y_scale.scale(r.bar)),
                fill: Tween::settled(style.fill),
                stroke: Tween::settled(style.stroke),
            })
            .collect();
        Self {
            layout,
            x_scale,
            y_scale,
            color_scale: SequentialColorScale::plasma(DOMAIN),
            style,
            records,
            points,
            labels: Vec::new(),
        }
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn color_scale(&self) -> &SequentialColorScale {
        &self.color_scale
    }

    pub fn style(&self) -> &PointStyle {
        &self.style
    }

    pub fn points(&self) -> &[PointMarker] {
        &self.points
    }

    pub fn labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    pub fn point(&self, id: u32) -> Option<&PointMarker> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Apply new dimensions and update the scale ranges to match.
    pub fn set_layout(&mut self, layout: ChartLayout) {
        self.layout = layout;
        self.x_scale.set_range((0.0, layout.width));
        self.y_scale.set_range((layout.height, 0.0));
    }

    /// Target attributes of `record` under `encoding`.
    pub fn target_for(&self, record: &Record, encoding: &StepSpec) -> PointTarget {
        let xv = record.value(encoding.x_field);
        let yv = record.value(encoding.y_field);
        let (fill, stroke) = if encoding.use_color {
            let c = self.color_scale.scale(xv);
            (c, darker(c, STROKE_DARKEN))
        } else {
            (self.style.fill, self.style.stroke)
        };
        PointTarget {
            x: self.x_scale.scale(xv),
            y: self.y_scale.scale(yv),
            fill,
            stroke,
        }
    }

    /// Animate every point to its target under `encoding`, all on one timeline.
    pub fn transition_points(&mut self, encoding: &StepSpec, now: f64, duration: f64) {
        let targets: Vec<PointTarget> = self
            .records
            .iter()
            .map(|r| self.target_for(r, encoding))
            .collect();
        for (point, target) in self.points.iter_mut().zip(targets) {
            point.cx.retarget(target.x, now, duration, Easing::CubicInOut);
            point.cy.retarget(target.y, now, duration, Easing::CubicInOut);
            point.fill.retarget(target.fill, now, duration, Easing::CubicInOut);
            point.stroke.retarget(target.stroke, now, duration, Easing::CubicInOut);
        }
    }

    /// Move every point to its target position under `encoding` without animation.
    ///
    /// Colors are left alone.
    pub fn snap_points(&mut self, encoding: &StepSpec) {
        let targets: Vec<PointTarget> = self
            .records
            .iter()
            .map(|r| self.target_for(r, encoding))
            .collect();
        for (point, target) in self.points.iter_mut().zip(targets) {
            point.cx.snap(target.x);
            point.cy.snap(target.y);
        }
    }

    /// Drop the existing axis labels and add fresh ones that fade in.
    pub fn replace_labels(&mut self, encoding: &StepSpec, now: f64, duration: f64) {
        self.labels.clear();
        for (axis, text) in [(Axis::X, encoding.x_label), (Axis::Y, encoding.y_label)] {
            let mut opacity = Tween::settled(0.0f32);
            opacity.animate_from(0.0, 1.0, now, duration, Easing::Linear);
            self.labels.push(AxisLabel {
                axis,
                text: text.to_string(),
                opacity,
            });
        }
    }

    /// Ticks along the bottom axis.
    pub fn x_ticks(&self) -> Vec<Tick> {
        axis_ticks(&self.x_scale)
    }

    /// Ticks along the left axis.
    pub fn y_ticks(&self) -> Vec<Tick> {
        axis_ticks(&self.y_scale)
    }

    /// Whether anything on the surface is still moving at `now`.
    pub fn is_animating(&self, now: f64) -> bool {
        self.points.iter().any(|p| p.is_running(now))
            || self.labels.iter().any(|l| l.opacity.is_running(now))
    }
}

fn axis_ticks(scale: &LinearScale) -> Vec<Tick> {
    let step = scale.tick_step(TICK_COUNT);
    scale
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|v| Tick {
            offset: scale.scale(v),
            label: format_tick(v, step),
        })
        .collect()
}
