//! Scroll observer: detects when a narrative step crosses the trigger line.
//!
//! The egui layer registers the vertical extent of each step section (in
//! scroll-content coordinates) every frame, then calls [`StepObserver::observe`]
//! with the current scroll offset. An entry event fires whenever the step
//! under the trigger line changes, scrolling down or up. Exits are not
//! reported.

use serde::{Deserialize, Serialize};

/// Observer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Trigger line position as a fraction of the viewport height.
    pub trigger_offset: f32,
    /// Paint the trigger line over the narrative column.
    pub debug: bool,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            trigger_offset: 0.5,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// A step section crossed the trigger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEnter {
    pub index: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct StepBounds {
    top: f32,
    bottom: f32,
}

pub struct StepObserver {
    config: ObserverConfig,
    bounds: Vec<Option<StepBounds>>,
    // Step under the line at the previous observation; `None` in a gap.
    under_line: Option<usize>,
    entered: Option<usize>,
    last_offset: Option<f32>,
}

impl StepObserver {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            bounds: Vec::new(),
            under_line: None,
            entered: None,
            last_offset: None,
        }
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Record where step `index` sits in the scroll content.
    pub fn set_step_bounds(&mut self, index: usize, top: f32, bottom: f32) {
        if self.bounds.len() <= index {
            self.bounds.resize(index + 1, None);
        }
        self.bounds[index] = Some(StepBounds { top, bottom });
    }

    /// Trigger line in content coordinates.
    pub fn trigger_line(&self, scroll_offset: f32, viewport_height: f32) -> f32 {
        scroll_offset + self.config.trigger_offset * viewport_height
    }

    /// Step whose extent contains the trigger line, if any.
    pub fn step_at(&self, line: f32) -> Option<usize> {
        self.bounds.iter().position(|b| match b {
            Some(b) => line >= b.top && line < b.bottom,
            None => false,
        })
    }

    /// Check the trigger line against the registered steps.
    ///
    /// Returns an entry event whenever the line moves into a step it was not
    /// inside at the previous observation. Leaving a step for the gap and
    /// coming back into it counts as a new entry. While the line sits in a gap
    /// nothing fires and [`entered`](Self::entered) keeps the last step.
    /// Without registered extents (right after [`resize`](Self::resize)) the
    /// observation is skipped.
    pub fn observe(&mut self, scroll_offset: f32, viewport_height: f32) -> Option<StepEnter> {
        let direction = match self.last_offset {
            Some(prev) if scroll_offset < prev => Direction::Up,
            _ => Direction::Down,
        };
        self.last_offset = Some(scroll_offset);

        if self.bounds.iter().all(Option::is_none) {
            return None;
        }

        let line = self.trigger_line(scroll_offset, viewport_height);
        let current = self.step_at(line);
        let previous = std::mem::replace(&mut self.under_line, current);
        let index = current?;
        if previous == Some(index) {
            return None;
        }
        self.entered = Some(index);
        Some(StepEnter { index, direction })
    }

    /// Layout changed: forget the measured step extents.
    ///
    /// They are re-registered on the next frame.
    pub fn resize(&mut self) {
        self.bounds.clear();
    }

    pub fn entered(&self) -> Option<usize> {
        self.entered
    }
}
