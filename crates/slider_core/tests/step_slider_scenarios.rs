use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;
use slider_core::{
    evenly_spaced_metrics, Direction, DragTracking, Point, RecordingSurface, Rect, SliderConfig,
    StepSlider,
};

type Reported = Rc<RefCell<Vec<u32>>>;

fn row(container: Rect) -> RecordingSurface {
    RecordingSurface::evenly_spaced(Direction::Horizontal, container, 20.0, 5)
}

fn discrete_row() -> RecordingSurface {
    row(Rect::new(0.0, 0.0, 500.0, 20.0))
}

fn calc_row() -> RecordingSurface {
    row(Rect::new(100.0, 50.0, 500.0, 20.0))
}

fn build(
    config: SliderConfig,
    surface: RecordingSurface,
) -> (StepSlider<RecordingSurface>, Reported) {
    let reported: Reported = Rc::default();
    let sink = reported.clone();
    let slider = StepSlider::new(
        config.on_step_change(move |step| sink.borrow_mut().push(step)),
        surface,
    )
    .expect("slider");
    (slider, reported)
}

fn last_offset(slider: &StepSlider<RecordingSurface>) -> f64 {
    slider
        .surface()
        .last_placement()
        .expect("placement")
        .offset
}

#[test]
fn discrete_drag_to_item_center_selects_that_item() {
    let (mut slider, reported) = build(SliderConfig::new(5).marked_item(Some(1)), discrete_row());

    assert_eq!(slider.pointer_down(), Some(DragTracking::Acquire));
    slider.pointer_move(Point::new(370.0, 10.0));

    assert_eq!(*reported.borrow(), vec![3]);
    assert_eq!(slider.current_step(), 3);
    assert_eq!(slider.surface().current_item, Some(3));
    assert_eq!(last_offset(&slider), 360.0);

    assert_eq!(slider.pointer_up(), Some(DragTracking::Release));
    assert!(!slider.is_dragging());
}

#[test]
fn axis_aligned_drag_reports_every_step_crossed() {
    let (mut slider, reported) = build(SliderConfig::new(5), discrete_row());

    slider.pointer_down();
    for x in [130.0, 140.0, 250.0, 480.0] {
        slider.pointer_move(Point::new(x, 10.0));
    }

    assert_eq!(*reported.borrow(), vec![1, 2, 4]);
}

#[test]
fn continuous_pointer_at_left_edge_resolves_to_step_zero() {
    let (mut slider, reported) = build(
        SliderConfig::new(5).steps_between(9).marked_item(Some(2)),
        calc_row(),
    );
    assert_eq!(slider.current_step(), 20);

    slider.pointer_down();
    slider.pointer_move(Point::new(110.0, 60.0));

    assert_eq!(*reported.borrow(), vec![0]);
    assert_eq!(slider.current_step(), 0);
    assert_eq!(last_offset(&slider), 0.0);
}

#[test]
fn continuous_drag_snaps_to_twelve_pixel_steps() {
    let (mut slider, reported) = build(SliderConfig::new(5).steps_between(9), calc_row());

    slider.pointer_down();
    slider.pointer_move(Point::new(173.0, 60.0));
    slider.pointer_move(Point::new(175.0, 60.0));
    slider.pointer_move(Point::new(181.0, 60.0));

    assert_eq!(*reported.borrow(), vec![5, 6]);
    assert_eq!(last_offset(&slider), 72.0);
}

#[test]
fn drag_never_places_track_outside_container() {
    let (mut slider, reported) = build(SliderConfig::new(5).steps_between(9), calc_row());
    slider.pointer_down();

    for x in [-10_000.0, 0.0, 99.0, 345.5, 601.0, 10_000.0] {
        slider.pointer_move(Point::new(x, -400.0));
        let offset = last_offset(&slider);
        assert!((0.0..=480.0).contains(&offset), "offset {offset} for x {x}");
    }
    assert!(reported.borrow().iter().all(|step| *step <= 40));
}

#[test]
fn click_reports_item_index_scaled_by_steps_between() {
    let (mut slider, reported) = build(SliderConfig::new(5).steps_between(9), calc_row());

    for index in 0..5 {
        slider.click_item(index);
    }

    assert_eq!(*reported.borrow(), vec![0, 10, 20, 30, 40]);
    assert_eq!(slider.surface().current_item, Some(4));
}

#[test]
fn set_step_stays_in_range_and_is_idempotent() {
    let (mut slider, reported) = build(SliderConfig::new(5).steps_between(9), calc_row());

    for step in -3..=45 {
        slider.set_step(step);
        let once = slider.surface().last_placement();
        slider.set_step(step);
        let twice = slider.surface().last_placement();

        assert_eq!(once, twice);
        let offset = last_offset(&slider);
        assert!((0.0..=480.0).contains(&offset), "offset {offset} for step {step}");
    }
    assert_eq!(slider.current_step(), 40);
    assert!(reported.borrow().is_empty());
}

#[test]
fn discrete_set_step_keeps_exactly_one_marker() {
    let (mut slider, _) = build(SliderConfig::new(5), discrete_row());

    for step in 0..5 {
        slider.set_step(i64::from(step));
        assert_eq!(slider.surface().current_item, Some(step as usize));
        assert_eq!(slider.current_step(), step);
    }

    slider.set_step(99);
    assert_eq!(slider.surface().current_item, Some(4));
    slider.set_step(-7);
    assert_eq!(slider.surface().current_item, Some(0));
}

#[test]
fn repeated_set_step_does_not_move_marker_again() {
    let (mut slider, _) = build(SliderConfig::new(5), discrete_row());
    slider.set_step(2);
    let moves = slider.surface().marker_moves;

    slider.set_step(2);

    assert_eq!(slider.surface().marker_moves, moves);
}

#[test]
fn resize_mid_drag_rederives_direction_without_notifying() {
    let (mut slider, reported) = build(SliderConfig::new(5), discrete_row());
    slider.pointer_down();
    slider.pointer_move(Point::new(370.0, 10.0));
    assert_eq!(*reported.borrow(), vec![3]);

    slider.surface_mut().relayout(evenly_spaced_metrics(
        Direction::Vertical,
        Rect::new(0.0, 0.0, 20.0, 500.0),
        20.0,
        5,
    ));
    slider.resize();

    let placement = slider.surface().last_placement().expect("placement");
    assert_eq!(placement.direction, Direction::Vertical);
    assert_eq!(placement.offset, 360.0);
    assert_eq!(slider.direction(), Direction::Vertical);
    assert!(slider.is_dragging());
    assert_eq!(*reported.borrow(), vec![3]);
}

#[test]
fn dispose_releases_drag_and_freezes_slider() {
    let (mut slider, reported) = build(SliderConfig::new(5), discrete_row());
    slider.pointer_down();

    assert_eq!(slider.dispose(), Some(DragTracking::Release));
    let placements = slider.surface().placements.len();

    slider.set_step(3);
    slider.click_item(2);
    slider.pointer_move(Point::new(250.0, 10.0));

    assert!(slider.is_disposed());
    assert_eq!(slider.surface().placements.len(), placements);
    assert!(reported.borrow().is_empty());
    assert_eq!(slider.dispose(), None);
}
