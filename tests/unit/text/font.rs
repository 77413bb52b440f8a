use super::*;
use crate::style::model::FontWeight;

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn system_font() -> Option<LoadedFont> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok())
        .and_then(|bytes| LoadedFont::from_bytes(bytes).ok())
}

fn style(size_px: f64) -> TextStyle {
    TextStyle {
        size_px,
        weight: FontWeight::Regular,
        italic: false,
    }
}

#[test]
fn garbage_bytes_are_rejected() {
    let err = LoadedFont::from_bytes(b"definitely not a font".to_vec()).unwrap_err();
    assert!(matches!(err, CountdownError::Validation(_)));
}

#[test]
fn loaded_font_reports_family_and_measures() {
    let Some(font) = system_font() else {
        return;
    };
    assert!(!font.family().trim().is_empty());

    let small = font.measure("12:34:56", &style(32.0)).unwrap();
    let large = font.measure("12:34:56", &style(64.0)).unwrap();
    assert!(small.width > 0.0 && small.height > 0.0);
    assert!(large.width > small.width);
}

#[test]
fn loaded_font_rejects_non_positive_size() {
    let Some(font) = system_font() else {
        return;
    };
    assert!(font.measure("0", &style(0.0)).is_err());
}

#[test]
fn loaded_font_draws_ink() {
    let Some(font) = system_font() else {
        return;
    };
    let mut ctx = vello_cpu::RenderContext::new(200, 80);
    font.draw(
        &mut ctx,
        "88",
        &style(48.0),
        Point::new(10.0, 10.0),
        ColorDef::hex(0xffffff),
    )
    .unwrap();
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(200, 80);
    ctx.render_to_pixmap(&mut pixmap);
    assert!(pixmap.data_as_u8_slice().chunks_exact(4).any(|px| px[3] > 0));
}
