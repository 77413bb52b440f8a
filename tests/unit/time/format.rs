use super::*;

#[test]
fn known_values() {
    let p = format(86_400).unwrap();
    assert_eq!((p.hours, p.minutes, p.seconds), (24, 0, 0));

    let p = format(3661).unwrap();
    assert_eq!((p.hours, p.minutes, p.seconds), (1, 1, 1));

    let p = format(0).unwrap();
    assert_eq!((p.hours, p.minutes, p.seconds), (0, 0, 0));
}

#[test]
fn fields_recombine_and_stay_in_range() {
    let total = 90_061i64;
    for r in (0..=total).step_by(7) {
        let p = format(r).unwrap();
        assert_eq!(p.total_seconds(), r as u64);
        assert!(p.minutes < 60);
        assert!(p.seconds < 60);
    }
}

#[test]
fn display_is_zero_padded() {
    assert_eq!(format(0).unwrap().to_string(), "00:00:00");
    assert_eq!(format(45_296).unwrap().to_string(), "12:34:56");
    assert_eq!(format(360_000).unwrap().to_string(), "100:00:00");
}

#[test]
fn join_uses_custom_separator() {
    assert_eq!(format(3661).unwrap().join(" : "), "01 : 01 : 01");
}

#[test]
fn negative_remaining_is_rejected() {
    assert!(matches!(format(-1), Err(CountdownError::InvalidInput(_))));
}

#[test]
fn elapsed_ratio_endpoints() {
    assert_eq!(elapsed_ratio(0, 60).unwrap(), 1.0);
    assert_eq!(elapsed_ratio(60, 60).unwrap(), 0.0);
    assert!((elapsed_ratio(43_200, 86_400).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn elapsed_ratio_clamps_past_start() {
    assert_eq!(elapsed_ratio(120, 60).unwrap(), 0.0);
}

#[test]
fn elapsed_ratio_is_monotone_as_remaining_decreases() {
    let total = 3600;
    let mut prev = -1.0;
    for r in (0..=total).rev() {
        let e = elapsed_ratio(r, total).unwrap();
        assert!(e >= prev);
        assert!((0.0..=1.0).contains(&e));
        prev = e;
    }
}

#[test]
fn elapsed_ratio_rejects_bad_inputs() {
    assert!(matches!(
        elapsed_ratio(0, 0),
        Err(CountdownError::InvalidInput(_))
    ));
    assert!(matches!(
        elapsed_ratio(0, -5),
        Err(CountdownError::InvalidInput(_))
    ));
    assert!(matches!(
        elapsed_ratio(-1, 10),
        Err(CountdownError::InvalidInput(_))
    ));
}
