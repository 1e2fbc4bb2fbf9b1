//! Story controller: the single mutation point for the chart.
//!
//! Two event sources drive it, scroll step entries and (debounced) resizes.
//! Both end up here. The controller owns the view state (current step), the
//! [`RenderSurface`], the [`StepObserver`] and the status region.
//!
//! All operations take the current time in seconds so that animation
//! timelines are explicit and reproducible.

use crate::config::{ScrollyConfig, TimingConfig};
use crate::data::dataset::dataset;
use crate::data::layout::{ChartLayout, ChartSizing};
use crate::data::steps::{select_step, status_message};
use crate::error::Result;
use crate::events::{EventController, EventKind, ResizeMeta, StepMeta, StoryEvent};
use crate::scroll::{StepEnter, StepObserver};
use crate::surface::RenderSurface;

/// Text region read by assistive technology.
///
/// `seq` increases on every write, even when the text is unchanged, so the
/// UI can re-announce it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegion {
    text: String,
    seq: u64,
}

impl StatusRegion {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    fn set(&mut self, text: String) {
        self.text = text;
        self.seq += 1;
    }
}

pub struct StoryController {
    surface: RenderSurface,
    sizing: ChartSizing,
    timing: TimingConfig,
    observer: StepObserver,
    current_step: i64,
    active_section: Option<usize>,
    status: StatusRegion,
    events: Option<EventController>,
}

impl StoryController {
    pub fn new(config: &ScrollyConfig) -> Result<Self> {
        let style = config.points.to_style()?;
        let layout = ChartLayout::initial(&config.chart);
        Ok(Self {
            surface: RenderSurface::new(layout, dataset(), style),
            sizing: config.chart,
            timing: config.timing,
            observer: StepObserver::new(config.observer),
            current_step: 0,
            active_section: None,
            status: StatusRegion::default(),
            events: None,
        })
    }

    /// Publish events to `ctrl`'s subscribers.
    pub fn with_events(mut self, ctrl: EventController) -> Self {
        self.events = Some(ctrl);
        self
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn observer(&self) -> &StepObserver {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut StepObserver {
        &mut self.observer
    }

    pub fn current_step(&self) -> i64 {
        self.current_step
    }

    /// The one step section currently flagged active, if any was entered yet.
    pub fn active_section(&self) -> Option<usize> {
        self.active_section
    }

    pub fn status(&self) -> &StatusRegion {
        &self.status
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.surface.is_animating(now)
    }

    /// Show step `step_index`.
    ///
    /// Stores the step, starts the point transition, replaces the axis labels
    /// and rewrites the status text. The transition is not awaited; calling
    /// again mid-flight retargets from the current positions.
    pub fn update(&mut self, step_index: i64, now: f64) {
        self.current_step = step_index;
        let encoding = select_step(step_index);
        log::debug!(
            "step {}: x={} y={} color={}",
            step_index,
            encoding.x_field.name(),
            encoding.y_field.name(),
            encoding.use_color
        );

        self.surface
            .transition_points(&encoding, now, self.timing.point_transition_secs());
        self.emit(StoryEvent::new(EventKind::TRANSITION, now));

        self.surface
            .replace_labels(&encoding, now, self.timing.label_fade_secs());

        let message = status_message(step_index, &encoding);
        self.status.set(message.clone());
        let mut evt = StoryEvent::new(EventKind::STATUS, now);
        evt.status = Some(message);
        self.emit(evt);
    }

    /// React to a step section crossing the trigger line.
    pub fn on_step_enter(&mut self, enter: StepEnter, now: f64) {
        log::debug!("step {} entered ({:?})", enter.index, enter.direction);
        self.active_section = Some(enter.index);
        let mut evt = StoryEvent::new(EventKind::STEP_ENTER, now);
        evt.step = Some(StepMeta {
            index: enter.index,
            direction: enter.direction,
        });
        self.emit(evt);
        self.update(enter.index as i64, now);
    }

    /// Run the observer for the current scroll position and handle any entry.
    pub fn observe_scroll(
        &mut self,
        scroll_offset: f32,
        viewport_height: f32,
        now: f64,
    ) -> Option<StepEnter> {
        let enter = self.observer.observe(scroll_offset, viewport_height)?;
        self.on_step_enter(enter, now);
        Some(enter)
    }

    /// Fit the chart to a container of `container_width` pixels.
    ///
    /// Points snap to the current step's positions without animation; the
    /// axis labels are recreated and the observer is told to re-measure.
    pub fn handle_resize(&mut self, container_width: f64, now: f64) {
        let layout = ChartLayout::fit(&self.sizing, container_width);
        log::debug!(
            "resize: container {:.0}px -> plot side {:.0}px",
            container_width,
            layout.width
        );
        self.surface.set_layout(layout);

        let encoding = select_step(self.current_step);
        self.surface.snap_points(&encoding);
        self.surface
            .replace_labels(&encoding, now, self.timing.label_fade_secs());

        self.observer.resize();

        let mut evt = StoryEvent::new(EventKind::RESIZE, now);
        evt.resize = Some(ResizeMeta {
            container_width,
            side: layout.width,
        });
        self.emit(evt);
    }

    fn emit(&self, event: StoryEvent) {
        if let Some(ctrl) = &self.events {
            ctrl.emit(event);
        }
    }
}
