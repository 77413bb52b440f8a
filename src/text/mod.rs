//! Text faces used for the time string, captions and dial numbers.
//!
//! Two faces implement [`TextFace`]: the built-in [`stroke::StrokeFace`], which needs no font
//! files and renders identically everywhere, and [`font::LoadedFont`], which shapes caller-supplied
//! TrueType/OpenType bytes with `parley`.

pub(crate) mod font;
pub(crate) mod stroke;

use std::fmt;

use crate::foundation::core::Point;
use crate::foundation::error::CountdownResult;
use crate::style::color::ColorDef;
use crate::style::model::FontWeight;

/// Size and shape hints for one piece of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in output pixels.
    pub size_px: f64,
    /// Weight hint; faces without weight variants may ignore it.
    pub weight: FontWeight,
    /// Slant hint; faces without italic variants may ignore it.
    pub italic: bool,
}

/// Bounding box of laid-out text, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Horizontal extent in pixels.
    pub width: f64,
    /// Vertical extent in pixels.
    pub height: f64,
}

impl TextExtent {
    /// Top-left corner that centers this extent on `center`.
    pub fn centered_at(self, center: Point) -> Point {
        Point::new(center.x - self.width / 2.0, center.y - self.height / 2.0)
    }
}

/// Something that can measure and draw a single line of text.
///
/// `draw` must paint inside the box reported by `measure` for the same text and style, placed
/// with its top-left corner at `origin`.
pub trait TextFace: Send + Sync + fmt::Debug {
    /// Extent of `text` laid out on one line.
    fn measure(&self, text: &str, style: &TextStyle) -> CountdownResult<TextExtent>;

    /// Paint `text` into `ctx` with its measured box starting at `origin`.
    fn draw(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        style: &TextStyle,
        origin: Point,
        color: ColorDef,
    ) -> CountdownResult<()>;
}
