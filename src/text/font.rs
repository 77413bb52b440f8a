use std::fmt;
use std::sync::Mutex;

use crate::foundation::core::{Affine, Point};
use crate::foundation::error::{CountdownError, CountdownResult};
use crate::render::raster::affine_to_cpu;
use crate::style::color::ColorDef;
use crate::text::{TextExtent, TextFace, TextStyle};

/// Parley brush placeholder; paint is chosen at draw time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Ink;

/// Stateful helper for building Parley layouts against one registered family.
struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Ink>,
}

impl TextLayoutEngine {
    fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and return the family name they provide.
    fn register(&mut self, font_bytes: &[u8]) -> CountdownResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            CountdownError::validation("no font families registered from font bytes")
        })?;

        self.font_ctx
            .collection
            .family_name(family_id)
            .map(str::to_owned)
            .ok_or_else(|| CountdownError::validation("registered font family has no name"))
    }

    fn layout_line(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
    ) -> CountdownResult<parley::Layout<Ink>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CountdownError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Borrowed(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(Ink));

        let mut layout: parley::Layout<Ink> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Caller-supplied TrueType/OpenType face shaped with `parley`.
///
/// The weight and italic hints are ignored; the font file decides both.
pub struct LoadedFont {
    family: String,
    data: vello_cpu::peniko::FontData,
    engine: Mutex<TextLayoutEngine>,
}

impl LoadedFont {
    /// Validate and load font bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> CountdownResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let family = engine.register(&bytes)?;
        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Ok(Self {
            family,
            data,
            engine: Mutex::new(engine),
        })
    }

    /// Family name reported by the font.
    pub fn family(&self) -> &str {
        &self.family
    }

    fn with_layout<T>(
        &self,
        text: &str,
        size_px: f64,
        f: impl FnOnce(&parley::Layout<Ink>) -> T,
    ) -> CountdownResult<T> {
        let mut engine = self
            .engine
            .lock()
            .map_err(|_| anyhow::anyhow!("text layout engine lock poisoned"))?;
        let layout = engine.layout_line(text, &self.family, size_px as f32)?;
        Ok(f(&layout))
    }
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFont")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl TextFace for LoadedFont {
    fn measure(&self, text: &str, style: &TextStyle) -> CountdownResult<TextExtent> {
        self.with_layout(text, style.size_px, |layout| TextExtent {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
        })
    }

    fn draw(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        style: &TextStyle,
        origin: Point,
        color: ColorDef,
    ) -> CountdownResult<()> {
        self.with_layout(text, style.size_px, |layout| {
            ctx.set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));
            ctx.set_paint(color.to_paint());
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&self.data)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
