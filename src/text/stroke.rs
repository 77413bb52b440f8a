use kurbo::{Cap, Circle, Join, Shape, Stroke, StrokeOpts};

use crate::foundation::core::{Affine, BezPath, Point};
use crate::foundation::error::CountdownResult;
use crate::render::raster::{affine_to_cpu, bezpath_to_cpu};
use crate::style::color::ColorDef;
use crate::text::{TextExtent, TextFace, TextStyle};

/// Cap height as a fraction of the nominal font size.
const CAP_RATIO: f64 = 0.72;
/// Glyph grid height in units; the grid is 4 units wide for full-width glyphs.
const GRID_H: f64 = 6.0;
/// Gap between neighbouring glyphs, in grid units.
const TRACKING: f64 = 1.5;
/// Horizontal shear of italic text relative to cap height.
const ITALIC_SLANT: f64 = 0.2;
/// Dot radius relative to stroke width.
const DOT_SCALE: f64 = 0.7;
const TOLERANCE: f64 = 0.05;

type Polyline = &'static [(f64, f64)];

struct Glyph {
    advance: f64,
    strokes: &'static [Polyline],
    dots: &'static [(f64, f64)],
}

const fn lines(advance: f64, strokes: &'static [Polyline]) -> Glyph {
    Glyph {
        advance,
        strokes,
        dots: &[],
    }
}

const BOX: Polyline = &[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 0.0)];
const S_SHAPE: Polyline = &[
    (4.0, 0.0),
    (0.0, 0.0),
    (0.0, 3.0),
    (4.0, 3.0),
    (4.0, 6.0),
    (0.0, 6.0),
];

static SPACE: Glyph = lines(3.0, &[]);

fn glyph(c: char) -> &'static Glyph {
    static DIGITS: [Glyph; 10] = [
        lines(4.0, &[BOX]),
        lines(
            4.0,
            &[&[(1.0, 1.0), (2.0, 0.0), (2.0, 6.0)], &[(1.0, 6.0), (3.0, 6.0)]],
        ),
        lines(
            4.0,
            &[&[
                (0.0, 0.0),
                (4.0, 0.0),
                (4.0, 3.0),
                (0.0, 3.0),
                (0.0, 6.0),
                (4.0, 6.0),
            ]],
        ),
        lines(
            4.0,
            &[
                &[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0)],
                &[(1.0, 3.0), (4.0, 3.0)],
            ],
        ),
        lines(
            4.0,
            &[&[(0.0, 0.0), (0.0, 3.0), (4.0, 3.0)], &[(4.0, 0.0), (4.0, 6.0)]],
        ),
        lines(4.0, &[S_SHAPE]),
        lines(
            4.0,
            &[&[
                (4.0, 0.0),
                (0.0, 0.0),
                (0.0, 6.0),
                (4.0, 6.0),
                (4.0, 3.0),
                (0.0, 3.0),
            ]],
        ),
        lines(4.0, &[&[(0.0, 0.0), (4.0, 0.0), (1.5, 6.0)]]),
        lines(4.0, &[BOX, &[(0.0, 3.0), (4.0, 3.0)]]),
        lines(
            4.0,
            &[&[
                (4.0, 3.0),
                (0.0, 3.0),
                (0.0, 0.0),
                (4.0, 0.0),
                (4.0, 6.0),
                (0.0, 6.0),
            ]],
        ),
    ];

    static LETTERS: [Glyph; 26] = [
        // A
        lines(
            4.0,
            &[&[(0.0, 6.0), (2.0, 0.0), (4.0, 6.0)], &[(0.7, 4.0), (3.3, 4.0)]],
        ),
        // B
        lines(
            4.0,
            &[
                &[
                    (0.0, 6.0),
                    (0.0, 0.0),
                    (3.0, 0.0),
                    (4.0, 1.0),
                    (4.0, 2.0),
                    (3.0, 3.0),
                    (0.0, 3.0),
                ],
                &[(3.0, 3.0), (4.0, 4.0), (4.0, 5.0), (3.0, 6.0), (0.0, 6.0)],
            ],
        ),
        // C
        lines(4.0, &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0)]]),
        // D
        lines(
            4.0,
            &[&[
                (0.0, 0.0),
                (2.5, 0.0),
                (4.0, 1.5),
                (4.0, 4.5),
                (2.5, 6.0),
                (0.0, 6.0),
                (0.0, 0.0),
            ]],
        ),
        // E
        lines(
            4.0,
            &[
                &[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0)],
                &[(0.0, 3.0), (3.0, 3.0)],
            ],
        ),
        // F
        lines(
            4.0,
            &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0)], &[(0.0, 3.0), (3.0, 3.0)]],
        ),
        // G
        lines(
            4.0,
            &[&[
                (4.0, 0.0),
                (0.0, 0.0),
                (0.0, 6.0),
                (4.0, 6.0),
                (4.0, 3.0),
                (2.0, 3.0),
            ]],
        ),
        // H
        lines(
            4.0,
            &[
                &[(0.0, 0.0), (0.0, 6.0)],
                &[(4.0, 0.0), (4.0, 6.0)],
                &[(0.0, 3.0), (4.0, 3.0)],
            ],
        ),
        // I
        lines(
            2.0,
            &[
                &[(1.0, 0.0), (1.0, 6.0)],
                &[(0.0, 0.0), (2.0, 0.0)],
                &[(0.0, 6.0), (2.0, 6.0)],
            ],
        ),
        // J
        lines(4.0, &[&[(4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 4.0)]]),
        // K
        lines(
            4.0,
            &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 0.0), (0.0, 3.0), (4.0, 6.0)]],
        ),
        // L
        lines(4.0, &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0)]]),
        // M
        lines(
            4.0,
            &[&[(0.0, 6.0), (0.0, 0.0), (2.0, 3.0), (4.0, 0.0), (4.0, 6.0)]],
        ),
        // N
        lines(
            4.0,
            &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 6.0), (4.0, 0.0)]],
        ),
        // O
        lines(4.0, &[BOX]),
        // P
        lines(
            4.0,
            &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]],
        ),
        // Q
        lines(4.0, &[BOX, &[(2.5, 4.5), (4.0, 6.0)]]),
        // R
        lines(
            4.0,
            &[
                &[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)],
                &[(2.0, 3.0), (4.0, 6.0)],
            ],
        ),
        // S
        lines(4.0, &[S_SHAPE]),
        // T
        lines(
            4.0,
            &[&[(0.0, 0.0), (4.0, 0.0)], &[(2.0, 0.0), (2.0, 6.0)]],
        ),
        // U
        lines(4.0, &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 0.0)]]),
        // V
        lines(4.0, &[&[(0.0, 0.0), (2.0, 6.0), (4.0, 0.0)]]),
        // W
        lines(
            4.0,
            &[&[(0.0, 0.0), (1.0, 6.0), (2.0, 3.0), (3.0, 6.0), (4.0, 0.0)]],
        ),
        // X
        lines(
            4.0,
            &[&[(0.0, 0.0), (4.0, 6.0)], &[(4.0, 0.0), (0.0, 6.0)]],
        ),
        // Y
        lines(
            4.0,
            &[&[(0.0, 0.0), (2.0, 3.0), (4.0, 0.0)], &[(2.0, 3.0), (2.0, 6.0)]],
        ),
        // Z
        lines(
            4.0,
            &[&[(0.0, 0.0), (4.0, 0.0), (0.0, 6.0), (4.0, 6.0)]],
        ),
    ];

    static COLON: Glyph = Glyph {
        advance: 2.0,
        strokes: &[],
        dots: &[(1.0, 1.8), (1.0, 4.2)],
    };
    static PERIOD: Glyph = Glyph {
        advance: 2.0,
        strokes: &[],
        dots: &[(1.0, 5.6)],
    };
    static MINUS: Glyph = lines(4.0, &[&[(0.5, 3.0), (3.5, 3.0)]]);

    match c.to_ascii_uppercase() {
        d @ '0'..='9' => &DIGITS[(d as u8 - b'0') as usize],
        l @ 'A'..='Z' => &LETTERS[(l as u8 - b'A') as usize],
        ':' => &COLON,
        '.' => &PERIOD,
        '-' => &MINUS,
        _ => &SPACE,
    }
}

/// Built-in monoline vector face.
///
/// Every glyph is a set of polylines on a 4x6 grid stroked with round caps and joins, so the
/// output depends only on the text and the style. Digits share one advance width, which keeps
/// the time string from shifting between frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrokeFace;

struct Metrics {
    unit: f64,
    cap: f64,
    stroke: f64,
    slant: f64,
}

impl Metrics {
    fn new(style: &TextStyle) -> Self {
        let cap = style.size_px.max(0.0) * CAP_RATIO;
        Self {
            unit: cap / GRID_H,
            cap,
            stroke: (cap * style.weight.stroke_ratio()).max(1.0),
            slant: if style.italic { ITALIC_SLANT } else { 0.0 },
        }
    }

    fn pad(&self) -> f64 {
        self.stroke / 2.0
    }
}

fn advance_units(text: &str) -> f64 {
    let n = text.chars().count();
    let glyphs: f64 = text.chars().map(|c| glyph(c).advance).sum();
    glyphs + TRACKING * n.saturating_sub(1) as f64
}

impl StrokeFace {
    /// Filled outline of `text` in local coordinates, top-left of the measured box at the origin.
    pub(crate) fn outline(&self, text: &str, style: &TextStyle) -> BezPath {
        let m = Metrics::new(style);
        let mut centerline = BezPath::new();
        let mut dots = Vec::new();

        let mut pen = 0.0;
        for c in text.chars() {
            let g = glyph(c);
            let map = |(gx, gy): (f64, f64)| {
                let y = gy * m.unit;
                Point::new(m.pad() + pen + gx * m.unit + m.slant * (m.cap - y), m.pad() + y)
            };

            for poly in g.strokes {
                let Some((&first, rest)) = poly.split_first() else {
                    continue;
                };
                let closed = poly.len() > 2 && poly.last() == Some(&first);
                centerline.move_to(map(first));
                let rest = if closed { &rest[..rest.len() - 1] } else { rest };
                for &p in rest {
                    centerline.line_to(map(p));
                }
                if closed {
                    centerline.close_path();
                }
            }
            dots.extend(g.dots.iter().map(|&d| map(d)));

            pen += (g.advance + TRACKING) * m.unit;
        }

        let pen_style = Stroke::new(m.stroke)
            .with_caps(Cap::Round)
            .with_join(Join::Round);
        let mut out = kurbo::stroke(
            centerline.iter(),
            &pen_style,
            &StrokeOpts::default(),
            TOLERANCE,
        );
        for center in dots {
            out.extend(Circle::new(center, m.stroke * DOT_SCALE).path_elements(TOLERANCE));
        }
        out
    }
}

impl TextFace for StrokeFace {
    fn measure(&self, text: &str, style: &TextStyle) -> CountdownResult<TextExtent> {
        let m = Metrics::new(style);
        if text.is_empty() {
            return Ok(TextExtent::default());
        }
        Ok(TextExtent {
            width: advance_units(text) * m.unit + m.slant * m.cap + m.stroke,
            height: m.cap + m.stroke,
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
        let outline = self.outline(text, style);
        if outline.elements().is_empty() {
            return Ok(());
        }
        ctx.set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));
        ctx.set_paint(color.to_paint());
        ctx.fill_path(&bezpath_to_cpu(&outline));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/stroke.rs"]
mod tests;
