use super::*;
use crate::style::model::SweepDirection;

const HD: Canvas = Canvas::new(1920, 1080);
const SQUARE: Canvas = Canvas::new(1080, 1080);

fn dial(direction: SweepDirection) -> DialSpec {
    DialSpec {
        wedge_alpha: 200,
        track_alpha: 28,
        ring_color: ColorDef::hex(0x333333),
        ring_width_px: 5.0,
        start_angle_deg: -90.0,
        direction,
        margin_px: 80.0,
        overlay_digits: true,
        ticks: None,
        hour_numbers: None,
        center_dot: None,
    }
}

#[test]
fn bar_is_half_filled_at_half_elapsed() {
    let g = bar_geometry(&BarSpec::default(), HD, 1.0, 0.5);
    assert_eq!(g.track, Rect::new(80.0, 1040.0, 1840.0, 1046.0));
    assert_eq!(g.fill, Rect::new(80.0, 1040.0, 960.0, 1046.0));
    assert_eq!(g.fraction, 0.5);
}

#[test]
fn bar_endpoints_follow_elapsed_ratio() {
    let empty = bar_geometry(&BarSpec::default(), HD, 1.0, 0.0);
    assert_eq!(empty.fill.width(), 0.0);
    let full = bar_geometry(&BarSpec::default(), HD, 1.0, 1.0);
    assert_eq!(full.fill, full.track);
}

#[test]
fn remaining_fill_runs_right_to_left() {
    let spec = BarSpec {
        fill: BarFill::Remaining,
        direction: FillDirection::RightToLeft,
        ..BarSpec::default()
    };
    let g = bar_geometry(&spec, HD, 1.0, 0.25);
    assert_eq!(g.fraction, 0.75);
    assert_eq!(g.fill.x1, g.track.x1);
    assert!((g.fill.width() - g.track.width() * 0.75).abs() < 1e-9);

    let done = bar_geometry(&spec, HD, 1.0, 1.0);
    assert_eq!(done.fill.width(), 0.0);
}

#[test]
fn bar_scales_with_canvas() {
    let g = bar_geometry(&BarSpec::default(), Canvas::new(960, 540), 0.5, 0.5);
    assert_eq!(g.track, Rect::new(40.0, 520.0, 920.0, 523.0));
}

#[test]
fn wedge_sweep_tracks_remaining_time() {
    let d = dial(SweepDirection::Clockwise);
    let full = wedge_geometry(&d, SQUARE, 1.0, 0.0);
    assert!(full.is_full());
    assert_eq!(full.radius, 460.0);
    assert_eq!(full.center, Point::new(540.0, 540.0));

    let half = wedge_geometry(&d, SQUARE, 1.0, 0.5);
    assert_eq!(half.sweep_deg, 180.0);

    let none = wedge_geometry(&d, SQUARE, 1.0, 1.0);
    assert!(none.is_empty());
    assert_eq!(none.sweep_deg, 0.0);
}

#[test]
fn wedge_contains_follows_direction() {
    let cw = wedge_geometry(&dial(SweepDirection::Clockwise), SQUARE, 1.0, 0.75);
    // A quarter turn clockwise from 12 o'clock covers the upper-right quadrant.
    assert!(cw.contains(Point::new(640.0, 440.0)));
    assert!(!cw.contains(Point::new(440.0, 440.0)));
    assert!(!cw.contains(Point::new(640.0, 640.0)));

    let ccw = wedge_geometry(&dial(SweepDirection::CounterClockwise), SQUARE, 1.0, 0.75);
    assert_eq!(ccw.sweep_deg, -90.0);
    assert!(ccw.contains(Point::new(440.0, 440.0)));
    assert!(!ccw.contains(Point::new(640.0, 440.0)));
}

#[test]
fn empty_wedge_contains_nothing() {
    let g = wedge_geometry(&dial(SweepDirection::Clockwise), SQUARE, 1.0, 1.0);
    assert!(!g.contains(Point::new(540.0, 300.0)));
    assert!(!g.contains(g.center));
}

#[test]
fn pie_path_spans_the_wedge() {
    let g = wedge_geometry(&dial(SweepDirection::Clockwise), SQUARE, 1.0, 0.5);
    let bbox = pie_path(&g).bounding_box();
    assert!((bbox.x0 - 540.0).abs() < 1.0, "{bbox:?}");
    assert!((bbox.x1 - 1000.0).abs() < 1.0, "{bbox:?}");
    assert!((bbox.y0 - 80.0).abs() < 1.0, "{bbox:?}");
    assert!((bbox.y1 - 1000.0).abs() < 1.0, "{bbox:?}");
}

#[test]
fn arc_sweeps_with_elapsed_time() {
    let spec = ArcSpec {
        color: None,
        width_px: 8.0,
        track_alpha: 60,
        margin_px: 60.0,
    };
    let g = arc_geometry(&spec, HD, 1.0, 0.25);
    assert_eq!(g.radius, 480.0);
    assert_eq!(g.sweep_deg, 90.0);
    assert_eq!(g.start_angle_deg, -90.0);
    assert_eq!(arc_geometry(&spec, HD, 1.0, 0.0).sweep_deg, 0.0);
}
