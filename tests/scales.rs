use egui::Color32;
use scrollyplot::data::color::{darker, ColorRamp};
use scrollyplot::data::layout::{ChartLayout, ChartSizing};
use scrollyplot::data::scale::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_scale_maps_domain_ends() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 400.0));
    assert!(approx(s.scale(0.0), 0.0));
    assert!(approx(s.scale(10.0), 400.0));
    assert!(approx(s.scale(4.0), 160.0));
}

#[test]
fn linear_scale_extrapolates_without_clamping() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 400.0));
    assert!(approx(s.scale(15.0), 600.0));
    assert!(approx(s.scale(-5.0), -200.0));
}

#[test]
fn inverted_range_for_y_axis() {
    let s = LinearScale::new((0.0, 10.0), (400.0, 0.0));
    assert!(approx(s.scale(0.0), 400.0));
    assert!(approx(s.scale(1.0), 360.0));
    assert!(approx(s.scale(10.0), 0.0));
}

#[test]
fn set_range_keeps_domain() {
    let mut s = LinearScale::new((0.0, 10.0), (0.0, 400.0));
    s.set_range((0.0, 200.0));
    assert_eq!(s.domain(), (0.0, 10.0));
    assert!(approx(s.scale(5.0), 100.0));
}

#[test]
fn ticks_cover_unit_domain() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 400.0));
    let ticks = s.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks.last(), Some(&10.0));
    assert_eq!(s.tick_step(10), 1.0);
    assert_eq!(s.ticks(5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn tick_labels_use_step_precision() {
    assert_eq!(format_tick(3.0, 1.0), "3");
    assert_eq!(format_tick(0.5, 0.5), "0.5");
    assert_eq!(format_tick(0.25, 0.05), "0.25");
}

#[test]
fn plasma_scale_endpoints_and_clamping() {
    let c = SequentialColorScale::plasma((0.0, 10.0));
    assert_eq!(c.scale(0.0), Color32::from_rgb(13, 8, 135));
    assert_eq!(c.scale(10.0), Color32::from_rgb(240, 249, 33));
    assert_eq!(c.scale(-3.0), c.scale(0.0));
    assert_eq!(c.scale(42.0), c.scale(10.0));
}

#[test]
fn plasma_distinguishes_neighbouring_integers() {
    let c = SequentialColorScale::plasma((0.0, 10.0));
    for v in 0..10 {
        assert_ne!(c.scale(v as f64), c.scale(v as f64 + 1.0), "value {}", v);
    }
}

#[test]
fn ramp_handles_nan() {
    assert_eq!(ColorRamp::Plasma.sample(f64::NAN), ColorRamp::Plasma.sample(0.0));
}

#[test]
fn darker_reduces_channels() {
    let c = Color32::from_rgb(200, 100, 50);
    let d = darker(c, 0.5);
    let [r, g, b, a] = d.to_srgba_unmultiplied();
    assert!(r < 200 && g < 100 && b < 50);
    assert_eq!(a, 255);
    assert_eq!(darker(c, 0.0), c);
}

#[test]
fn layout_caps_wide_containers() {
    let sizing = ChartSizing::default();
    let l = ChartLayout::fit(&sizing, 800.0);
    assert_eq!(l.width, 400.0);
    assert_eq!(l.height, l.width);
    assert_eq!(l.outer_size(), (500.0, 490.0));
}

#[test]
fn layout_follows_narrow_containers() {
    let sizing = ChartSizing::default();
    let l = ChartLayout::fit(&sizing, 300.0);
    assert_eq!(l.width, 160.0);
    assert_eq!(l.height, 160.0);
}

#[test]
fn layout_does_not_clamp_tiny_containers() {
    let sizing = ChartSizing::default();
    let l = ChartLayout::fit(&sizing, 50.0);
    assert!(l.width < 0.0);
    assert_eq!(l.width, l.height);
}

#[test]
fn initial_layout_is_square_at_the_cap() {
    let l = ChartLayout::initial(&ChartSizing::default());
    assert_eq!(l.width, 400.0);
    assert_eq!(l.height, 400.0);
}
