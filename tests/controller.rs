use scrollyplot::data::color::{darker, DEFAULT_FILL, DEFAULT_STROKE, STROKE_DARKEN};
use scrollyplot::data::dataset::dataset;
use scrollyplot::events::{EventController, EventFilter, EventKind};
use scrollyplot::scroll::{Direction, StepEnter};
use scrollyplot::surface::Axis;
use scrollyplot::{select_step, status_message, ScrollyConfig, StoryController};

// Far enough past every transition to read settled values.
const LATER: f64 = 100.0;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn controller() -> StoryController {
    StoryController::new(&ScrollyConfig::default()).unwrap()
}

#[test]
fn update_places_every_record_on_its_step_fields() {
    let mut c = controller();
    for step in [0i64, 1, 2, 3, -1, 9] {
        c.update(step, 0.0);
        let encoding = select_step(step);
        let surface = c.surface();
        for record in dataset() {
            let p = surface.point(record.id).unwrap();
            let (x, y) = p.position_at(LATER);
            assert!(approx(x, surface.x_scale().scale(record.value(encoding.x_field))));
            assert!(approx(y, surface.y_scale().scale(record.value(encoding.y_field))));
        }
    }
}

#[test]
fn step_zero_scenario_positions() {
    let mut c = controller();
    c.update(0, 0.0);
    let s = c.surface();
    // 400px square plot: x = v * 40, y = 400 - v * 40.
    let (x0, y0) = s.point(0).unwrap().position_at(LATER);
    assert!(approx(x0, s.x_scale().scale(4.0)) && approx(x0, 160.0));
    assert!(approx(y0, s.y_scale().scale(1.0)) && approx(y0, 360.0));
    let (x5, y5) = s.point(5).unwrap().position_at(LATER);
    assert!(approx(x5, 360.0));
    assert!(approx(y5, 40.0));
}

#[test]
fn color_step_encodes_baz() {
    let mut c = controller();
    c.update(3, 0.0);
    let s = c.surface();
    let fill2 = s.point(2).unwrap().fill.value_at(LATER);
    let fill4 = s.point(4).unwrap().fill.value_at(LATER);
    assert_ne!(fill2, fill4);
    assert_eq!(fill2, s.color_scale().scale(9.0));
    assert_eq!(fill4, s.color_scale().scale(8.0));
    assert_eq!(
        s.point(2).unwrap().stroke.value_at(LATER),
        darker(fill2, STROKE_DARKEN)
    );
}

#[test]
fn leaving_color_step_restores_theme_colors() {
    let mut c = controller();
    c.update(3, 0.0);
    c.update(2, 5.0);
    for p in c.surface().points() {
        assert_eq!(p.fill.value_at(LATER), DEFAULT_FILL);
        assert_eq!(p.stroke.value_at(LATER), DEFAULT_STROKE);
    }
}

#[test]
fn status_text_follows_template() {
    let mut c = controller();
    for step in 0..5 {
        c.update(step, 0.0);
        assert_eq!(c.status().text(), status_message(step, &select_step(step)));
    }
    c.update(3, 0.0);
    assert_eq!(
        c.status().text(),
        "Step 4: Now showing Baz Values (Color Encoded) versus Foo Values"
    );
}

#[test]
fn status_is_rewritten_even_when_unchanged() {
    let mut c = controller();
    c.update(1, 0.0);
    let seq = c.status().seq();
    let text = c.status().text().to_string();
    c.update(1, 0.1);
    assert_eq!(c.status().text(), text);
    assert_eq!(c.status().seq(), seq + 1);
}

#[test]
fn transition_is_animated_over_one_second() {
    let mut c = controller();
    c.update(1, 10.0);
    let encoding = select_step(1);
    let record = &dataset()[1];
    let s = c.surface();
    let p = s.point(record.id).unwrap();
    let target_x = s.x_scale().scale(record.value(encoding.x_field));
    let start_x = s.x_scale().scale(record.foo);

    assert!(approx(p.cx.value_at(10.0), start_x));
    let mid = p.cx.value_at(10.5);
    assert!(approx(mid, (start_x + target_x) / 2.0));
    assert!(approx(p.cx.value_at(11.0), target_x));
    assert!(c.is_animating(10.9));
    assert!(!c.is_animating(11.0));
}

#[test]
fn retarget_mid_flight_starts_from_displayed_position() {
    let mut c = controller();
    c.update(1, 0.0);
    let before = c.surface().point(3).unwrap().position_at(0.4);
    c.update(2, 0.4);
    let after = c.surface().point(3).unwrap().position_at(0.4);
    assert!(approx(before.0, after.0));
    assert!(approx(before.1, after.1));
    assert_eq!(c.current_step(), 2);
}

#[test]
fn labels_are_replaced_and_fade_in() {
    let mut c = controller();
    c.update(0, 0.0);
    c.update(3, 2.0);
    let labels = c.surface().labels();
    assert_eq!(labels.len(), 2);
    let x = labels.iter().find(|l| l.axis == Axis::X).unwrap();
    let y = labels.iter().find(|l| l.axis == Axis::Y).unwrap();
    assert_eq!(x.text, "Baz Values (Color Encoded)");
    assert_eq!(y.text, "Foo Values");
    assert_eq!(x.opacity.value_at(2.0), 0.0);
    assert!((x.opacity.value_at(2.25) - 0.5).abs() < 1e-6);
    assert_eq!(x.opacity.value_at(2.5), 1.0);
}

#[test]
fn resize_caps_dimension_for_wide_containers() {
    let mut c = controller();
    c.handle_resize(800.0, 0.0);
    let l = c.surface().layout();
    assert_eq!(l.width, 400.0);
    assert_eq!(l.height, 400.0);
    assert_eq!(c.surface().x_scale().range(), (0.0, 400.0));
    assert_eq!(c.surface().y_scale().range(), (400.0, 0.0));
}

#[test]
fn resize_snaps_points_for_current_step() {
    let mut c = controller();
    c.update(1, 0.0);
    c.handle_resize(340.0, 0.2);
    let s = c.surface();
    assert_eq!(s.layout().width, 200.0);
    let encoding = select_step(1);
    for record in dataset() {
        let (x, y) = s.point(record.id).unwrap().position_at(0.2);
        assert!(approx(x, s.x_scale().scale(record.value(encoding.x_field))));
        assert!(approx(y, s.y_scale().scale(record.value(encoding.y_field))));
    }
}

#[test]
fn resize_twice_is_idempotent() {
    let mut once = controller();
    once.update(2, 0.0);
    once.handle_resize(420.0, 5.0);

    let mut twice = controller();
    twice.update(2, 0.0);
    twice.handle_resize(420.0, 5.0);
    twice.handle_resize(420.0, 5.0);

    assert_eq!(once.surface().layout(), twice.surface().layout());
    for (a, b) in once.surface().points().iter().zip(twice.surface().points()) {
        assert_eq!(a.position_at(5.0), b.position_at(5.0));
        assert_eq!(a.position_at(LATER), b.position_at(LATER));
    }
    assert_eq!(once.current_step(), twice.current_step());
}

#[test]
fn resize_recreates_labels_for_current_step() {
    let mut c = controller();
    c.update(1, 0.0);
    c.handle_resize(600.0, 3.0);
    let labels = c.surface().labels();
    assert_eq!(labels.len(), 2);
    assert!(labels.iter().any(|l| l.text == "Bar Values"));
    assert!(labels.iter().any(|l| l.text == "Baz Values"));
    assert_eq!(labels[0].opacity.value_at(3.0), 0.0);
}

#[test]
fn step_enter_marks_active_section_and_updates() {
    let mut c = controller();
    assert_eq!(c.active_section(), None);
    c.on_step_enter(
        StepEnter {
            index: 2,
            direction: Direction::Down,
        },
        0.0,
    );
    assert_eq!(c.active_section(), Some(2));
    assert_eq!(c.current_step(), 2);
    c.on_step_enter(
        StepEnter {
            index: 1,
            direction: Direction::Up,
        },
        1.0,
    );
    assert_eq!(c.active_section(), Some(1));
    assert_eq!(c.current_step(), 1);
}

#[test]
fn events_are_published() {
    let ctrl = EventController::new();
    let status_rx = ctrl.subscribe(EventFilter::only(EventKind::STATUS));
    let step_rx = ctrl.subscribe(EventFilter::only(EventKind::STEP_ENTER));
    let resize_rx = ctrl.subscribe(EventFilter::only(EventKind::RESIZE));
    let mut c = controller().with_events(ctrl);

    c.on_step_enter(
        StepEnter {
            index: 1,
            direction: Direction::Down,
        },
        4.0,
    );
    let step = step_rx.try_recv().unwrap();
    assert_eq!(step.step.unwrap().index, 1);
    let status = status_rx.try_recv().unwrap();
    assert_eq!(
        status.status.as_deref(),
        Some("Step 2: Now showing Bar Values versus Baz Values")
    );
    assert_eq!(status.timestamp, 4.0);

    c.handle_resize(800.0, 5.0);
    let resize = resize_rx.try_recv().unwrap().resize.unwrap();
    assert_eq!(resize.container_width, 800.0);
    assert_eq!(resize.side, 400.0);
}

#[test]
fn scroll_observation_drives_updates() {
    let mut c = controller();
    c.observer_mut().set_step_bounds(0, 100.0, 300.0);
    c.observer_mut().set_step_bounds(1, 400.0, 600.0);
    c.observer_mut().set_step_bounds(2, 700.0, 900.0);

    // Trigger line at offset + 100.
    assert_eq!(c.observe_scroll(0.0, 200.0, 0.0).map(|e| e.index), Some(0));
    assert_eq!(c.observe_scroll(50.0, 200.0, 0.1), None);
    assert_eq!(c.observe_scroll(650.0, 200.0, 0.2).map(|e| e.index), Some(2));
    assert_eq!(c.current_step(), 2);
    assert_eq!(c.active_section(), Some(2));
}

#[test]
fn scrolling_back_into_a_step_reannounces_it() {
    let mut c = controller();
    c.observer_mut().set_step_bounds(0, 100.0, 200.0);
    c.observer_mut().set_step_bounds(1, 250.0, 400.0);

    assert!(c.observe_scroll(0.0, 200.0, 0.0).is_some());
    // Line at 220 sits in the gap: step 0 stays active, nothing updates.
    let seq = c.status().seq();
    assert_eq!(c.observe_scroll(120.0, 200.0, 0.1), None);
    assert_eq!(c.active_section(), Some(0));
    assert_eq!(c.status().seq(), seq);

    let enter = c.observe_scroll(20.0, 200.0, 0.2).unwrap();
    assert_eq!(enter.index, 0);
    assert_eq!(enter.direction, Direction::Up);
    assert!(c.status().seq() > seq);
    assert_eq!(c.status().text(), "Step 1: Now showing Foo Values versus Bar Values");
    for label in c.surface().labels() {
        assert_eq!(label.opacity.value_at(0.2), 0.0);
    }
}
