use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    assert!(
        FrameRange::new(FrameIndex(3), FrameIndex(3))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn canvas_from_request_rejects_non_positive_and_oversized() {
    assert!(Canvas::from_request(0, 10).is_err());
    assert!(Canvas::from_request(10, -1).is_err());
    assert!(Canvas::from_request(70_000, 10).is_err());
    assert_eq!(Canvas::from_request(64, 32).unwrap(), Canvas::new(64, 32));
}

#[test]
fn canvas_scale_uses_tighter_axis() {
    let reference = Canvas::new(1920, 1080);
    assert!((reference.scale_to(Canvas::new(960, 540)) - 0.5).abs() < 1e-12);
    assert!((reference.scale_to(Canvas::new(1920, 540)) - 0.5).abs() < 1e-12);
    assert!((reference.scale_to(reference) - 1.0).abs() < 1e-12);
}

#[test]
fn pop_front_drains_in_order() {
    let mut r = FrameRange::first(3);
    let drained: Vec<u64> = std::iter::from_fn(|| r.pop_front()).map(|f| f.0).collect();
    assert_eq!(drained, vec![0, 1, 2]);
    assert!(r.is_empty());
    assert_eq!(r.pop_front(), None);
}
