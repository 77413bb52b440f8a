use super::*;
use crate::style::model::{
    Background, GlowSpec, MAX_BLUR_PX, MAX_HOUR_STEP, Presentation, ShadowSpec, StyleKind,
};
use kurbo::Vec2;

#[test]
fn builtin_catalog_validates() {
    let all: Vec<StyleDefinition> = StyleRegistry::builtin().iter().cloned().collect();
    let rebuilt = StyleRegistry::from_definitions(all).unwrap();
    assert_eq!(rebuilt.len(), 20);
}

#[test]
fn builtin_order_is_digital_then_circle() {
    let reg = StyleRegistry::builtin();
    let names = reg.list();
    assert_eq!(names.first(), Some(&"modern"));
    assert_eq!(names.get(10), Some(&"circle-modern"));
    assert_eq!(names.last(), Some(&"circle-elegant"));

    let kinds: Vec<StyleKind> = reg.iter().map(StyleDefinition::kind).collect();
    assert!(kinds[..10].iter().all(|k| *k == StyleKind::Digital));
    assert!(kinds[10..].iter().all(|k| *k == StyleKind::Circle));
}

#[test]
fn list_is_stable_across_calls() {
    let reg = StyleRegistry::builtin();
    assert_eq!(reg.list(), reg.list());
}

#[test]
fn get_unknown_is_unsupported_style() {
    let err = StyleRegistry::builtin().get("not-a-style").unwrap_err();
    assert!(matches!(err, CountdownError::UnsupportedStyle(name) if name == "not-a-style"));
    assert!(!StyleRegistry::builtin().contains("all"));
}

#[test]
fn duplicate_names_are_rejected() {
    let modern = StyleRegistry::builtin().get("modern").unwrap().clone();
    let err = StyleRegistry::from_definitions(vec![modern.clone(), modern]).unwrap_err();
    assert!(err.to_string().contains("duplicate style name"));
}

#[test]
fn reserved_all_is_rejected() {
    let mut def = StyleRegistry::builtin().get("classic").unwrap().clone();
    def.name = "all".to_owned();
    assert!(StyleRegistry::from_definitions(vec![def]).is_err());
}

#[test]
fn overrides_replace_in_place_and_append() {
    let base = StyleRegistry::builtin();
    let mut classic = base.get("classic").unwrap().clone();
    classic.description = "patched".to_owned();
    let mut extra = base.get("modern").unwrap().clone();
    extra.name = "modern-alt".to_owned();

    let reg = base.with_overrides(vec![classic, extra]).unwrap();
    assert_eq!(reg.len(), 21);
    assert_eq!(reg.list()[1], "classic");
    assert_eq!(reg.get("classic").unwrap().description, "patched");
    assert_eq!(reg.list().last(), Some(&"modern-alt"));
}

#[test]
fn style_pack_parses_json_definitions() {
    let json = r##"
{
  "styles": [
    {
      "name": "ocean",
      "description": "Deep blue",
      "canvas": { "width": 1280, "height": 720 },
      "background": { "gradient": { "stops": [
        { "offset": 0.0, "color": "#001f3f" },
        { "offset": 1.0, "color": "#0074d9" }
      ] } },
      "text_color": "#ffffff",
      "accent_color": "#7fdbff",
      "font": { "size_px": 160 },
      "presentation": { "kind": "digital", "indicator": { "type": "bar" } }
    },
    {
      "name": "ocean-dial",
      "canvas": { "width": 720, "height": 720 },
      "background": { "solid": "#001f3f" },
      "text_color": "#ffffff",
      "accent_color": "#7fdbff",
      "font": { "size_px": 60, "weight": "regular" },
      "presentation": {
        "kind": "circle",
        "wedge_alpha": 200,
        "ring_color": "#ffffff",
        "ring_width_px": 3,
        "direction": "counter_clockwise"
      }
    }
  ]
}
"##;
    let pack = StylePack::from_json_str(json).unwrap();
    let reg = StyleRegistry::from_definitions(pack.styles).unwrap();
    assert_eq!(reg.list(), vec!["ocean", "ocean-dial"]);

    let ocean = reg.get("ocean").unwrap();
    assert_eq!(ocean.kind(), StyleKind::Digital);
    assert_eq!(ocean.font.separator, ":");
    assert!(matches!(ocean.background, Background::Gradient { .. }));

    let dial = reg.get("ocean-dial").unwrap();
    assert_eq!(dial.kind(), StyleKind::Circle);
}

#[test]
fn style_pack_reports_serde_errors() {
    let err = StylePack::from_json_str("{\"styles\": [{}]}").unwrap_err();
    assert!(matches!(err, CountdownError::Serde(_)));
}

#[test]
fn gradient_with_single_stop_fails_validation() {
    let mut def = StyleRegistry::builtin().get("gradient").unwrap().clone();
    def.name = "broken".to_owned();
    if let Background::Gradient { stops, .. } = &mut def.background {
        stops.truncate(1);
    }
    assert!(matches!(
        StyleRegistry::from_definitions(vec![def]),
        Err(CountdownError::Validation(_))
    ));
}

fn dial_variant(edit: impl FnOnce(&mut crate::style::model::DialSpec)) -> StyleDefinition {
    let mut def = StyleRegistry::builtin().get("circle-classic").unwrap().clone();
    def.name = "dial-variant".to_owned();
    if let Presentation::Circle(dial) = &mut def.presentation {
        edit(dial);
    }
    def
}

fn assert_rejected(def: StyleDefinition) {
    assert!(matches!(
        StyleRegistry::from_definitions(vec![def]),
        Err(CountdownError::Validation(_))
    ));
}

#[test]
fn oversized_hour_number_step_is_rejected() {
    assert_rejected(dial_variant(|dial| {
        if let Some(numbers) = &mut dial.hour_numbers {
            numbers.step = u32::MAX;
        }
    }));
    let ok = dial_variant(|dial| {
        if let Some(numbers) = &mut dial.hour_numbers {
            numbers.step = MAX_HOUR_STEP;
        }
    });
    assert!(StyleRegistry::from_definitions(vec![ok]).is_ok());
}

#[test]
fn hour_number_count_is_bounded() {
    for count in [0, 10_000] {
        assert_rejected(dial_variant(|dial| {
            if let Some(numbers) = &mut dial.hour_numbers {
                numbers.count = count;
            }
        }));
    }
}

#[test]
fn tick_count_is_bounded() {
    for count in [0, 1_000_000] {
        assert_rejected(dial_variant(|dial| {
            if let Some(ticks) = &mut dial.ticks {
                ticks.count = count;
            }
        }));
    }
}

#[test]
fn blur_radii_are_bounded() {
    let mut glow = StyleRegistry::builtin().get("neon").unwrap().clone();
    glow.name = "huge-glow".to_owned();
    glow.effects.glow = Some(GlowSpec {
        radius_px: 1.0e6,
        strength: 1.0,
        color: None,
    });
    assert_rejected(glow);

    for blur_px in [f64::NAN, -1.0, MAX_BLUR_PX + 1.0] {
        let mut shadow = StyleRegistry::builtin().get("modern").unwrap().clone();
        shadow.name = "bad-shadow".to_owned();
        shadow.effects.shadow = Some(ShadowSpec {
            offset: Vec2::new(4.0, 4.0),
            color: shadow.text_color,
            blur_px,
        });
        assert_rejected(shadow);
    }
}
