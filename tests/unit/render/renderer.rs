use super::*;

fn req(style: &str, remaining: i64, total: i64, w: i64, h: i64) -> FrameRequest {
    FrameRequest::new(style, remaining, total, w, h)
}

#[test]
fn dimensions_are_checked_before_style_and_time() {
    let r = FrameRenderer::new();
    let err = r.render(&req("not-a-style", -1, 0, 0, 10)).unwrap_err();
    assert!(matches!(
        err,
        CountdownError::InvalidDimensions {
            width: 0,
            height: 10
        }
    ));
    let err = r.render(&req("modern", 1, 2, 70_000, 10)).unwrap_err();
    assert!(matches!(err, CountdownError::InvalidDimensions { .. }));
}

#[test]
fn style_is_checked_before_time() {
    let err = FrameRenderer::new()
        .render(&req("not-a-style", -1, 0, 32, 32))
        .unwrap_err();
    assert!(matches!(err, CountdownError::UnsupportedStyle(_)));
}

#[test]
fn bad_time_inputs_are_invalid_input() {
    let r = FrameRenderer::new();
    for (remaining, total) in [(-1, 10), (0, 0), (5, -3)] {
        let err = r.render(&req("modern", remaining, total, 32, 18)).unwrap_err();
        assert!(
            matches!(err, CountdownError::InvalidInput(_)),
            "({remaining}, {total}) -> {err}"
        );
    }
}

#[test]
fn small_frames_are_opaque_and_sized() {
    let r = FrameRenderer::new();
    for name in ["modern", "neon", "elegant", "circle-classic", "circle-neon"] {
        let frame = r.render(&req(name, 30, 60, 96, 54)).unwrap();
        assert_eq!((frame.width, frame.height), (96, 54));
        assert_eq!(frame.data.len(), 96 * 54 * 4);
        assert!(frame.premultiplied);
        assert!(
            frame.data.chunks_exact(4).all(|px| px[3] == 255),
            "{name} has transparent pixels"
        );
    }
}

#[test]
fn indicator_geometry_matches_presentation() {
    let r = FrameRenderer::new();
    let geom = |name: &str| r.indicator_geometry(&req(name, 30, 60, 1920, 1080)).unwrap();
    assert!(matches!(geom("modern"), IndicatorGeometry::Bar(b) if b.fraction == 0.5));
    assert!(matches!(geom("elegant"), IndicatorGeometry::Arc(a) if a.sweep_deg == 180.0));
    assert!(matches!(geom("classic"), IndicatorGeometry::None));
    assert!(matches!(geom("circle-classic"), IndicatorGeometry::Wedge(w) if w.sweep_deg == 180.0));
}

#[test]
fn geometry_scales_with_output_size() {
    let r = FrameRenderer::new();
    let IndicatorGeometry::Bar(bar) = r
        .indicator_geometry(&req("modern", 0, 60, 960, 540))
        .unwrap()
    else {
        panic!("modern has a bar");
    };
    assert_eq!(bar.track.x0, 40.0);
    assert_eq!(bar.fill, bar.track);
}

#[test]
fn custom_registry_renders_dial_without_overlay() {
    let mut def = StyleRegistry::builtin().get("circle-modern").unwrap().clone();
    def.name = "dial-below".to_owned();
    def.text_offset = Vec2::new(0.0, 500.0);
    if let Presentation::Circle(dial) = &mut def.presentation {
        dial.overlay_digits = false;
    }
    let registry = StyleRegistry::from_definitions(vec![def]).unwrap();
    let r = FrameRenderer::new().with_registry(registry);
    assert_eq!(r.registry().list(), vec!["dial-below"]);

    let frame = r.render(&req("dial-below", 10, 20, 108, 108)).unwrap();
    assert_eq!(frame.data.len(), 108 * 108 * 4);
    assert!(r.render(&req("modern", 10, 20, 108, 108)).is_err());
}

#[test]
fn renderer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FrameRenderer>();
}

#[test]
fn largest_hour_number_step_renders() {
    let mut def = StyleRegistry::builtin().get("circle-classic").unwrap().clone();
    def.name = "big-steps".to_owned();
    if let Presentation::Circle(dial) = &mut def.presentation
        && let Some(numbers) = &mut dial.hour_numbers
    {
        numbers.step = crate::style::model::MAX_HOUR_STEP;
    }
    let r = FrameRenderer::new().with_registry(StyleRegistry::from_definitions(vec![def]).unwrap());
    assert!(r.render(&req("big-steps", 10, 20, 108, 108)).is_ok());
}
