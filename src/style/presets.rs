//! Built-in style catalog: ten digital styles followed by ten circle styles.

use crate::foundation::core::{Canvas, Vec2};
use crate::style::color::ColorDef;
use crate::style::model::{
    ArcSpec, Background, BarSpec, BorderSpec, DialSpec, DigitalIndicator, DigitalSpec, DotSpec,
    Effects, FontSpec, FontWeight, GlowSpec, HourNumbersSpec, LabelSpec, PanelSpec, Presentation,
    ShadowSpec, StyleDefinition, SweepDirection, TickSpec, VignetteSpec,
};

const DIGITAL_CANVAS: Canvas = Canvas::new(1920, 1080);
const CIRCLE_CANVAS: Canvas = Canvas::new(1080, 1080);

const PURPLE_TOP: u32 = 0x667eea;
const PURPLE_BOTTOM: u32 = 0x764ba2;
const CHARCOAL_TOP: u32 = 0x1a1a1a;

pub(crate) fn builtin_styles() -> Vec<StyleDefinition> {
    let mut out = digital_styles();
    out.extend(circle_styles());
    out
}

fn digital_styles() -> Vec<StyleDefinition> {
    vec![
        StyleDefinition {
            labels: Some(labels(0x555555)),
            digit_panel: Some(panel(0x1a1a2e)),
            presentation: bar(),
            ..digital(
                "modern",
                "Clean modern look with dark background and cyan text",
                solid(0x0a0a0a),
                0x00e5ff,
                280.0,
            )
        },
        StyleDefinition {
            effects: Effects {
                border: Some(border(0xffffff, 4.0)),
                ..Effects::default()
            },
            ..digital(
                "classic",
                "Traditional white on black with serif-style digits",
                solid(0x000000),
                0xffffff,
                300.0,
            )
        },
        StyleDefinition {
            font: font(220.0, FontWeight::Bold, " : "),
            effects: Effects {
                glow: Some(glow(12.0)),
                ..Effects::default()
            },
            ..digital(
                "neon",
                "Neon glow effect on dark purple background",
                solid(0x0d0221),
                0xff2afc,
                220.0,
            )
        },
        StyleDefinition {
            font: font(260.0, FontWeight::Light, ":"),
            labels: Some(labels(0xaaaaaa)),
            ..digital(
                "minimal",
                "Minimal white background with thin gray text",
                solid(0xffffff),
                0x333333,
                260.0,
            )
        },
        StyleDefinition {
            digit_panel: Some(panel(0x0f0a00)),
            effects: Effects {
                glow: Some(glow(12.0)),
                border: Some(border(0x332200, 8.0)),
                ..Effects::default()
            },
            ..digital(
                "retro",
                "Retro LED display with amber digits on dark background",
                solid(0x1a1000),
                0xff8c00,
                300.0,
            )
        },
        StyleDefinition {
            labels: Some(labels(0xdddddd)),
            effects: Effects {
                shadow: Some(ShadowSpec {
                    offset: Vec2::new(6.0, 8.0),
                    color: ColorDef::hex(0x000000).with_alpha8(70),
                    blur_px: 10.0,
                }),
                ..Effects::default()
            },
            presentation: bar(),
            ..digital(
                "gradient",
                "Vibrant gradient background with white text",
                Background::vertical(ColorDef::hex(PURPLE_TOP), ColorDef::hex(PURPLE_BOTTOM)),
                0xffffff,
                280.0,
            )
        },
        StyleDefinition {
            font: font(260.0, FontWeight::Regular, ":"),
            labels: Some(labels(0x006b1a)),
            effects: Effects {
                glow: Some(glow(12.0)),
                border: Some(border(0x00ff41, 2.0)),
                ..Effects::default()
            },
            ..digital(
                "terminal",
                "Hacker-style green on black terminal look",
                solid(0x0c0c0c),
                0x00ff41,
                260.0,
            )
        },
        StyleDefinition {
            font: font(220.0, FontWeight::Regular, " : "),
            effects: Effects {
                glow: Some(glow(12.0)),
                vignette: Some(VignetteSpec { strength: 0.45 }),
                ..Effects::default()
            },
            ..digital(
                "cinematic",
                "Cinematic widescreen with gold text on dark gradient",
                Background::vertical(ColorDef::hex(CHARCOAL_TOP), ColorDef::hex(0x000000)),
                0xd4af37,
                220.0,
            )
        },
        StyleDefinition {
            font: FontSpec {
                italic: true,
                ..font(300.0, FontWeight::Bold, ":")
            },
            labels: Some(labels(0x666666)),
            digit_panel: Some(panel(0x1c1c1c)),
            presentation: bar(),
            ..digital(
                "sport",
                "Sporty bold red countdown with progress bar",
                solid(0x111111),
                0xff1744,
                300.0,
            )
        },
        StyleDefinition {
            font: font(180.0, FontWeight::Light, "  :  "),
            accent_color: ColorDef::hex(0x8d6e63),
            labels: Some(labels(0x8d6e63)),
            presentation: Presentation::Digital(DigitalSpec {
                indicator: Some(DigitalIndicator::Arc(ArcSpec {
                    color: None,
                    width_px: 8.0,
                    track_alpha: 60,
                    margin_px: 60.0,
                })),
            }),
            ..digital(
                "elegant",
                "Elegant cream background with dark brown text and circle progress",
                solid(0xf5f0e8),
                0x3e2723,
                180.0,
            )
        },
    ]
}

fn circle_styles() -> Vec<StyleDefinition> {
    vec![
        circle(
            "circle-modern",
            "Modern dark circle timer with cyan wedge",
            solid(0x0a0a0a),
            0x00e5ff,
            90.0,
            Dial {
                wedge: 0x00e5ff,
                wedge_alpha: 180,
                ring: 0x00e5ff,
                ring_width: 6.0,
                ticks: Some(ticks(ColorDef::hex(0x00e5ff), 25.0, 12.0)),
                numbers: None,
                dot: Some(0x00e5ff),
            },
        ),
        circle(
            "circle-classic",
            "Classic Time Timer style with red wedge on white",
            solid(0xffffff),
            0x333333,
            80.0,
            Dial {
                wedge: 0xe53935,
                wedge_alpha: 200,
                ring: 0x333333,
                ring_width: 5.0,
                ticks: Some(ticks(ColorDef::hex(0x333333), 30.0, 15.0)),
                numbers: Some(0x666666),
                dot: Some(0x333333),
            },
        ),
        StyleDefinition {
            effects: Effects {
                glow: Some(glow(9.0)),
                ..Effects::default()
            },
            ..circle(
                "circle-neon",
                "Neon glowing circle timer on dark purple",
                solid(0x0d0221),
                0xff2afc,
                90.0,
                Dial {
                    wedge: 0xff2afc,
                    wedge_alpha: 150,
                    ring: 0xff2afc,
                    ring_width: 4.0,
                    ticks: Some(ticks(ColorDef::hex(0xff2afc), 20.0, 10.0)),
                    numbers: None,
                    dot: None,
                },
            )
        },
        StyleDefinition {
            font: font(80.0, FontWeight::Light, ":"),
            ..circle(
                "circle-minimal",
                "Minimal circle timer with thin ring on white",
                solid(0xffffff),
                0x333333,
                80.0,
                Dial {
                    wedge: 0x90caf9,
                    wedge_alpha: 140,
                    ring: 0xcccccc,
                    ring_width: 2.0,
                    ticks: Some(ticks(ColorDef::hex(0xcccccc), 15.0, 0.0)),
                    numbers: None,
                    dot: None,
                },
            )
        },
        StyleDefinition {
            effects: Effects {
                glow: Some(glow(9.0)),
                ..Effects::default()
            },
            ..circle(
                "circle-retro",
                "Retro amber circle timer with LED look",
                solid(0x1a1000),
                0xff8c00,
                90.0,
                Dial {
                    wedge: 0xff8c00,
                    wedge_alpha: 160,
                    ring: 0xff8c00,
                    ring_width: 5.0,
                    ticks: Some(ticks(ColorDef::hex(0xff8c00), 25.0, 12.0)),
                    numbers: None,
                    dot: Some(0xff8c00),
                },
            )
        },
        circle(
            "circle-gradient",
            "Circle timer on vibrant purple gradient",
            Background::vertical(ColorDef::hex(PURPLE_TOP), ColorDef::hex(PURPLE_BOTTOM)),
            0xffffff,
            80.0,
            Dial {
                wedge: 0xffffff,
                wedge_alpha: 120,
                ring: 0xffffff,
                ring_width: 4.0,
                ticks: Some(ticks(ColorDef::hex(0xffffff).with_alpha8(0xcc), 20.0, 10.0)),
                numbers: None,
                dot: Some(0xffffff),
            },
        ),
        StyleDefinition {
            font: font(80.0, FontWeight::Regular, ":"),
            effects: Effects {
                glow: Some(glow(9.0)),
                ..Effects::default()
            },
            ..circle(
                "circle-terminal",
                "Terminal green circle timer on black",
                solid(0x0c0c0c),
                0x00ff41,
                80.0,
                Dial {
                    wedge: 0x00ff41,
                    wedge_alpha: 130,
                    ring: 0x00ff41,
                    ring_width: 3.0,
                    ticks: Some(ticks(ColorDef::hex(0x00ff41), 20.0, 10.0)),
                    numbers: None,
                    dot: None,
                },
            )
        },
        StyleDefinition {
            effects: Effects {
                glow: Some(glow(9.0)),
                vignette: Some(VignetteSpec { strength: 0.35 }),
                ..Effects::default()
            },
            ..circle(
                "circle-cinematic",
                "Cinematic gold circle timer on dark gradient",
                Background::vertical(ColorDef::hex(CHARCOAL_TOP), ColorDef::hex(0x000000)),
                0xd4af37,
                90.0,
                Dial {
                    wedge: 0xd4af37,
                    wedge_alpha: 160,
                    ring: 0xd4af37,
                    ring_width: 5.0,
                    ticks: Some(ticks(ColorDef::hex(0xd4af37), 25.0, 12.0)),
                    numbers: Some(0x8a7a2a),
                    dot: Some(0xd4af37),
                },
            )
        },
        StyleDefinition {
            font: FontSpec {
                italic: true,
                ..font(100.0, FontWeight::Bold, ":")
            },
            ..circle(
                "circle-sport",
                "Sporty red circle timer with bold digits",
                solid(0x111111),
                0xff1744,
                100.0,
                Dial {
                    wedge: 0xff1744,
                    wedge_alpha: 180,
                    ring: 0xff1744,
                    ring_width: 6.0,
                    ticks: Some(ticks(ColorDef::hex(0xff1744), 30.0, 15.0)),
                    numbers: None,
                    dot: Some(0xff1744),
                },
            )
        },
        StyleDefinition {
            font: font(80.0, FontWeight::Regular, ":"),
            ..circle(
                "circle-elegant",
                "Elegant cream circle timer with brown wedge",
                solid(0xf5f0e8),
                0x3e2723,
                80.0,
                Dial {
                    wedge: 0x8d6e63,
                    wedge_alpha: 150,
                    ring: 0x3e2723,
                    ring_width: 3.0,
                    ticks: Some(ticks(ColorDef::hex(0x8d6e63), 25.0, 12.0)),
                    numbers: Some(0x8d6e63),
                    dot: Some(0x3e2723),
                },
            )
        },
    ]
}

fn digital(
    name: &str,
    description: &str,
    background: Background,
    text: u32,
    size_px: f64,
) -> StyleDefinition {
    StyleDefinition {
        name: name.to_owned(),
        description: description.to_owned(),
        canvas: DIGITAL_CANVAS,
        background,
        text_color: ColorDef::hex(text),
        accent_color: ColorDef::hex(text),
        font: font(size_px, FontWeight::Bold, ":"),
        text_offset: Vec2::ZERO,
        labels: None,
        digit_panel: None,
        effects: Effects::default(),
        presentation: Presentation::Digital(DigitalSpec::default()),
    }
}

struct Dial {
    wedge: u32,
    wedge_alpha: u8,
    ring: u32,
    ring_width: f64,
    ticks: Option<TickSpec>,
    numbers: Option<u32>,
    dot: Option<u32>,
}

fn circle(
    name: &str,
    description: &str,
    background: Background,
    text: u32,
    size_px: f64,
    dial: Dial,
) -> StyleDefinition {
    StyleDefinition {
        name: name.to_owned(),
        description: description.to_owned(),
        canvas: CIRCLE_CANVAS,
        background,
        text_color: ColorDef::hex(text),
        accent_color: ColorDef::hex(dial.wedge),
        font: font(size_px, FontWeight::Bold, ":"),
        text_offset: Vec2::ZERO,
        labels: None,
        digit_panel: None,
        effects: Effects::default(),
        presentation: Presentation::Circle(DialSpec {
            wedge_alpha: dial.wedge_alpha,
            track_alpha: 28,
            ring_color: ColorDef::hex(dial.ring),
            ring_width_px: dial.ring_width,
            start_angle_deg: -90.0,
            direction: SweepDirection::Clockwise,
            margin_px: 80.0,
            overlay_digits: true,
            ticks: dial.ticks,
            hour_numbers: dial.numbers.map(|c| HourNumbersSpec {
                color: ColorDef::hex(c),
                count: 12,
                step: 2,
                size_ratio: 1.0 / 3.0,
            }),
            center_dot: dial.dot.map(|c| DotSpec {
                color: ColorDef::hex(c),
                radius_px: 8.0,
            }),
        }),
    }
}

fn solid(rgb: u32) -> Background {
    Background::Solid(ColorDef::hex(rgb))
}

fn font(size_px: f64, weight: FontWeight, separator: &str) -> FontSpec {
    FontSpec {
        size_px,
        weight,
        italic: false,
        separator: separator.to_owned(),
    }
}

fn labels(rgb: u32) -> LabelSpec {
    LabelSpec {
        color: ColorDef::hex(rgb),
        size_ratio: 1.0 / 6.0,
        gap_px: 30.0,
    }
}

fn panel(rgb: u32) -> PanelSpec {
    PanelSpec {
        color: ColorDef::hex(rgb),
        pad_x_px: 60.0,
        pad_y_px: 40.0,
        radius_px: 30.0,
    }
}

fn border(rgb: u32, width_px: f64) -> BorderSpec {
    BorderSpec {
        color: ColorDef::hex(rgb),
        width_px,
    }
}

fn glow(radius_px: f64) -> GlowSpec {
    GlowSpec {
        radius_px,
        strength: 0.85,
        color: None,
    }
}

fn bar() -> Presentation {
    Presentation::Digital(DigitalSpec {
        indicator: Some(DigitalIndicator::Bar(BarSpec::default())),
    })
}

fn ticks(color: ColorDef, major_len_px: f64, minor_len_px: f64) -> TickSpec {
    TickSpec {
        color,
        major_len_px,
        minor_len_px,
        count: 60,
        major_every: 5,
    }
}
