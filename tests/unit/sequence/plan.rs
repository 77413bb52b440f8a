use super::*;

#[test]
fn zero_fps_is_rejected() {
    let err = CountdownPlan::new(0, 10, 10).unwrap_err();
    assert!(matches!(err, CountdownError::InvalidInput(_)));
}

#[test]
fn each_second_gets_fps_frames() {
    let plan = CountdownPlan::new(2, 3, 3).unwrap();
    assert_eq!(plan.frame_count(), 8);
    let remaining: Vec<i64> = plan.frames().map(|(_, r)| r).collect();
    assert_eq!(remaining, vec![3, 3, 2, 2, 1, 1, 0, 0]);
    assert_eq!(plan.remaining_at(FrameIndex(8)), None);
    assert_eq!(plan.total_seconds(), 3);
}

#[test]
fn short_duration_stops_before_zero() {
    let plan = CountdownPlan::new(1, 2, 10).unwrap();
    let remaining: Vec<i64> = plan.frames().map(|(_, r)| r).collect();
    assert_eq!(remaining, vec![10, 9, 8]);
    assert_eq!(plan.total_seconds(), 10);
}

#[test]
fn duration_longer_than_start_is_capped() {
    let plan = CountdownPlan::new(30, 86_400, 60).unwrap();
    assert_eq!(plan.shown_seconds(), 61);
    assert_eq!(plan.frame_count(), 61 * 30);
    assert_eq!(plan.remaining_at(FrameIndex(61 * 30 - 1)), Some(0));
}

#[test]
fn zero_start_is_a_single_finished_second() {
    let plan = CountdownPlan::new(3, 100, 0).unwrap();
    assert_eq!(plan.frame_count(), 3);
    assert_eq!(plan.total_seconds(), 1);
    assert!(plan.frames().all(|(_, r)| r == 0));
}

#[test]
fn frames_iterator_reports_exact_size() {
    let plan = CountdownPlan::new(30, 86_400, 86_400).unwrap();
    let mut it = plan.frames();
    assert_eq!(it.size_hint().0 as u64, plan.frame_count());
    it.next();
    assert_eq!(it.size_hint().0 as u64, plan.frame_count() - 1);
    assert_eq!(plan.range().len_frames(), 2_592_030);
}

#[test]
fn frames_cover_the_plan_range() {
    let plan = CountdownPlan::new(4, 5, 5).unwrap();
    let range = plan.range();
    assert_eq!(range.start, FrameIndex(0));
    assert_eq!(range.len_frames(), plan.frame_count());
    assert_eq!(plan.remaining_at(range.end), None);
    assert_eq!(plan.remaining_at(FrameIndex(range.end.0 - 1)), Some(0));

    let indices: Vec<FrameIndex> = plan.frames().map(|(i, _)| i).collect();
    assert_eq!(indices.len() as u64, range.len_frames());
    assert!(indices.iter().all(|&i| range.contains(i)));
    assert!(indices.windows(2).all(|w| w[1].0 == w[0].0 + 1));
}
