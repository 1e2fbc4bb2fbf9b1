//! Narrative column: scrollable step sections feeding the scroll observer.

use egui::{Color32, Stroke};

use crate::config::StepText;
use crate::controller::StoryController;

/// Narrative content shown in the left column.
pub(super) struct Narrative {
    pub intro: String,
    pub outro: String,
    pub steps: Vec<StepText>,
}

/// Scroll geometry of the narrative after this frame.
pub(super) struct ScrollGeometry {
    pub offset: f32,
    pub viewport_height: f32,
}

const ACTIVE_FILL: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);

pub(super) fn narrative_ui(
    ui: &mut egui::Ui,
    narrative: &Narrative,
    controller: &mut StoryController,
) -> ScrollGeometry {
    let viewport_height = ui.available_height();
    let active = controller.active_section();

    let output = egui::ScrollArea::vertical()
        .id_salt("narrative")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let content_top = ui.cursor().top();

            ui.add_space(viewport_height * 0.3);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(egui_phosphor::regular::ARROW_DOWN).size(20.0));
                ui.label(egui::RichText::new(&narrative.intro).size(16.0));
            });
            ui.add_space(viewport_height * 0.4);

            for (i, step) in narrative.steps.iter().enumerate() {
                let is_active = active == Some(i);
                let frame = if is_active {
                    egui::Frame::group(ui.style())
                        .fill(ACTIVE_FILL.gamma_multiply(0.15))
                        .stroke(Stroke::new(2.0, ACTIVE_FILL))
                } else {
                    egui::Frame::group(ui.style())
                };
                let resp = frame.inner_margin(16.0).show(ui, |ui| {
                    ui.set_min_height(viewport_height * 0.6);
                    ui.set_width(ui.available_width());
                    let heading = if is_active {
                        format!("{} {}", egui_phosphor::regular::CARET_RIGHT, step.heading)
                    } else {
                        step.heading.clone()
                    };
                    ui.heading(heading);
                    ui.add_space(6.0);
                    ui.label(&step.body);
                });
                let rect = resp.response.rect;
                controller.observer_mut().set_step_bounds(
                    i,
                    rect.top() - content_top,
                    rect.bottom() - content_top,
                );
                ui.add_space(viewport_height * 0.3);
            }

            ui.add_space(viewport_height * 0.2);
            ui.label(egui::RichText::new(&narrative.outro).size(16.0));
            ui.add_space(viewport_height * 0.6);
        });

    if controller.observer().config().debug {
        let inner = output.inner_rect;
        let y = inner.top() + controller.observer().config().trigger_offset * inner.height();
        ui.painter()
            .hline(inner.x_range(), y, Stroke::new(1.0, Color32::RED));
    }

    ScrollGeometry {
        offset: output.state.offset.y,
        viewport_height: output.inner_rect.height(),
    }
}
