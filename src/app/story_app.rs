//! The eframe [`App`](eframe::App) wiring narrative, chart and resize handling.

use std::time::Duration;

use crate::config::ScrollyConfig;
use crate::controller::StoryController;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::events::EventController;

use super::chart_ui;
use super::steps_ui::{self, Narrative};

/// Minimum change in container width treated as a resize.
const RESIZE_EPSILON: f32 = 0.5;

pub struct ScrollyApp {
    controller: StoryController,
    narrative: Narrative,
    resize_debounce: Debouncer,
    last_container_width: Option<f32>,
    announced_seq: u64,
}

impl ScrollyApp {
    pub fn new(cfg: &ScrollyConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            controller: StoryController::new(cfg)?,
            narrative: Narrative {
                intro: cfg.intro.clone(),
                outro: cfg.outro.clone(),
                steps: cfg.steps.clone(),
            },
            resize_debounce: Debouncer::new(cfg.timing.resize_debounce_secs()),
            last_container_width: None,
            announced_seq: 0,
        })
    }

    pub fn with_events(mut self, ctrl: EventController) -> Self {
        self.controller = self.controller.with_events(ctrl);
        self
    }

    /// Track the chart container width.
    ///
    /// The first measurement sizes the chart and shows step 0 right away;
    /// later changes only go through after the debounce window.
    fn track_container(&mut self, width: f32, now: f64) {
        match self.last_container_width {
            None => {
                self.controller.handle_resize(width as f64, now);
                self.controller.update(0, now);
                log::info!("scrollytelling demo loaded");
            }
            Some(prev) if (prev - width).abs() > RESIZE_EPSILON => {
                self.resize_debounce.poke(now);
            }
            Some(_) => {}
        }
        self.last_container_width = Some(width);

        if self.resize_debounce.fire_if_quiet(now) {
            self.controller.handle_resize(width as f64, now);
        }
    }
}

impl eframe::App for ScrollyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        egui::SidePanel::left("narrative_panel")
            .resizable(true)
            .default_width(460.0)
            .show(ctx, |ui| {
                let geom = steps_ui::narrative_ui(ui, &self.narrative, &mut self.controller);
                self.controller
                    .observe_scroll(geom.offset, geom.viewport_height, now);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.track_container(ui.available_width(), now);
            ui.vertical_centered(|ui| {
                chart_ui::chart_ui(ui, &self.controller, now);
                ui.add_space(8.0);
                chart_ui::status_ui(ui, self.controller.status());
            });
        });

        let status = self.controller.status();
        if status.seq() != self.announced_seq {
            chart_ui::announce_status(ctx, status);
            self.announced_seq = status.seq();
        }

        if self.controller.is_animating(now) {
            ctx.request_repaint();
        } else if let Some(left) = self.resize_debounce.remaining(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(left));
        }
    }
}
