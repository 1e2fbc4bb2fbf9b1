//! Top-level entry point for running the story as a native window.

use crate::config::ScrollyConfig;
use crate::error::Result;
use crate::events::EventController;

use super::story_app::ScrollyApp;

/// Launch the scrollytelling window.
///
/// Builds a [`ScrollyApp`] from `cfg`, wires `events` (if given) to the
/// controller, and enters the eframe event loop. Blocks until the window is
/// closed.
pub fn run_scrollyplot(cfg: ScrollyConfig, events: Option<EventController>) -> Result<()> {
    let mut app = ScrollyApp::new(&cfg)?;
    if let Some(ctrl) = events {
        app = app.with_events(ctrl);
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(cfg.title.clone())
        .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

/// Render the crate's `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the file is missing or cannot be rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_renders() {
        let icon = load_app_icon_svg().expect("icon.svg should render");
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
        // Opaque background color of the artwork.
        assert!(icon.rgba.chunks(4).any(|px| px == [0x1f, 0x23, 0x30, 0xff]));
    }
}
