//! Painting the render surface: axes, points, axis labels and status line.

use std::f32::consts::FRAC_PI_2;

use egui::{epaint::TextShape, Align2, FontId, Pos2, Stroke, Vec2};

use crate::controller::{StatusRegion, StoryController};
use crate::surface::{Axis, RenderSurface};

const TICK_LEN: f32 = 6.0;

/// Allocate the chart's outer rectangle and paint the surface into it.
pub(super) fn chart_ui(ui: &mut egui::Ui, controller: &StoryController, now: f64) {
    let surface = controller.surface();
    let layout = surface.layout();
    let (outer_w, outer_h) = layout.outer_size();
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(outer_w.max(0.0) as f32, outer_h.max(0.0) as f32),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let origin = rect.min + Vec2::new(layout.margin.left as f32, layout.margin.top as f32);
    let at = |x: f64, y: f64| origin + Vec2::new(x as f32, y as f32);

    let axis_color = ui.visuals().weak_text_color();
    let text_color = ui.visuals().text_color();
    let tick_font = FontId::proportional(11.0);

    draw_axes(&painter, surface, origin, axis_color, &tick_font);

    let style = surface.style();
    for point in surface.points() {
        let (x, y) = point.position_at(now);
        let fill = point.fill.value_at(now).gamma_multiply(style.opacity);
        let stroke = point.stroke.value_at(now).gamma_multiply(style.opacity);
        painter.circle(
            at(x, y),
            style.radius,
            fill,
            Stroke::new(style.stroke_width, stroke),
        );
    }

    let label_font = FontId::proportional(14.0);
    for label in surface.labels() {
        let color = text_color.gamma_multiply(label.opacity.value_at(now));
        let (ax, ay) = label.anchor(layout);
        let anchor = at(ax, ay);
        match label.axis {
            Axis::X => {
                painter.text(anchor, Align2::CENTER_CENTER, &label.text, label_font.clone(), color);
            }
            Axis::Y => {
                let galley = painter.layout_no_wrap(label.text.clone(), label_font.clone(), color);
                let size = galley.size();
                // Rotating by -90° maps the galley center (w/2, h/2) to (h/2, -w/2).
                let pos = Pos2::new(anchor.x - size.y / 2.0, anchor.y + size.x / 2.0);
                painter.add(TextShape::new(pos, galley, color).with_angle(-FRAC_PI_2));
            }
        }
    }
}

fn draw_axes(
    painter: &egui::Painter,
    surface: &RenderSurface,
    origin: Pos2,
    color: egui::Color32,
    font: &FontId,
) {
    let layout = surface.layout();
    let w = layout.width as f32;
    let h = layout.height as f32;
    let stroke = Stroke::new(1.0, color);

    // Bottom axis.
    let base_y = origin.y + h;
    painter.line_segment([Pos2::new(origin.x, base_y), Pos2::new(origin.x + w, base_y)], stroke);
    for tick in surface.x_ticks() {
        let x = origin.x + tick.offset as f32;
        painter.line_segment([Pos2::new(x, base_y), Pos2::new(x, base_y + TICK_LEN)], stroke);
        painter.text(
            Pos2::new(x, base_y + TICK_LEN + 2.0),
            Align2::CENTER_TOP,
            &tick.label,
            font.clone(),
            color,
        );
    }

    // Left axis.
    painter.line_segment([origin, Pos2::new(origin.x, origin.y + h)], stroke);
    for tick in surface.y_ticks() {
        let y = origin.y + tick.offset as f32;
        painter.line_segment([Pos2::new(origin.x - TICK_LEN, y), Pos2::new(origin.x, y)], stroke);
        painter.text(
            Pos2::new(origin.x - TICK_LEN - 3.0, y),
            Align2::RIGHT_CENTER,
            &tick.label,
            font.clone(),
            color,
        );
    }
}

/// The status line under the chart.
pub(super) fn status_ui(ui: &mut egui::Ui, status: &StatusRegion) {
    let text = status.text().to_string();
    let resp = ui.label(egui::RichText::new(&text).italics());
    resp.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &text));
}

/// Push an accessibility announcement for the current status text.
pub(super) fn announce_status(ctx: &egui::Context, status: &StatusRegion) {
    let info = egui::WidgetInfo::labeled(egui::WidgetType::Label, true, status.text());
    ctx.output_mut(|o| o.events.push(egui::output::OutputEvent::ValueChanged(info)));
}
