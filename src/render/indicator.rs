//! Progress indicators: the digital bar and ring, and the circle dial.
//!
//! Geometry is computed by pure functions so fill fractions and sweep angles can be checked
//! without sampling pixels; the `draw_*` functions only turn that geometry into paths.

use kurbo::{Cap, Circle, Shape};

use crate::foundation::core::{BezPath, Canvas, Point, Rect, Vec2};
use crate::foundation::error::CountdownResult;
use crate::render::raster::{fill, fill_rect, stroke};
use crate::style::color::ColorDef;
use crate::style::model::{ArcSpec, BarFill, BarSpec, DialSpec, FillDirection, FontWeight};
use crate::text::{TextFace, TextStyle};

const PATH_TOLERANCE: f64 = 0.1;
/// Sweeps smaller than this (in degrees) are treated as empty.
const MIN_SWEEP_DEG: f64 = 1e-6;
const MAJOR_TICK_WIDTH: f64 = 3.0;
const MINOR_TICK_WIDTH: f64 = 1.0;
/// Extra gap between the longest tick and the hour numbers.
const NUMBER_GAP: f64 = 30.0;

/// Geometry of a horizontal progress bar, in output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    /// Full extent of the dimmed track.
    pub track: Rect,
    /// Filled part; zero width when empty.
    pub fill: Rect,
    /// Filled fraction of the track, `0..=1`.
    pub fraction: f64,
}

/// Geometry of the digital progress ring, in output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    /// Ring center.
    pub center: Point,
    /// Outer radius of the ring.
    pub radius: f64,
    /// Track stroke width; the progress arc is twice as wide.
    pub width: f64,
    /// Start of the progress arc in degrees (`-90` is 12 o'clock).
    pub start_angle_deg: f64,
    /// Progress sweep in degrees, clockwise.
    pub sweep_deg: f64,
}

/// Geometry of the circle-style wedge, in output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeGeometry {
    /// Dial center.
    pub center: Point,
    /// Dial radius.
    pub radius: f64,
    /// Wedge start angle in degrees (`-90` is 12 o'clock, positive turns clockwise).
    pub start_angle_deg: f64,
    /// Signed sweep in degrees; negative for counter-clockwise dials.
    pub sweep_deg: f64,
}

impl WedgeGeometry {
    /// Whether the wedge has collapsed to nothing.
    pub fn is_empty(&self) -> bool {
        self.sweep_deg.abs() < MIN_SWEEP_DEG
    }

    /// Whether the wedge covers the whole dial.
    pub fn is_full(&self) -> bool {
        self.sweep_deg.abs() >= 360.0 - MIN_SWEEP_DEG
    }

    /// Whether `p` lies inside the wedge.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_empty() || (p - self.center).hypot() > self.radius {
            return false;
        }
        if self.is_full() {
            return true;
        }
        let d = p - self.center;
        let angle = d.y.atan2(d.x).to_degrees();
        let rel = if self.sweep_deg >= 0.0 {
            angle - self.start_angle_deg
        } else {
            self.start_angle_deg - angle
        };
        rel.rem_euclid(360.0) <= self.sweep_deg.abs()
    }
}

/// Indicator geometry for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IndicatorGeometry {
    /// The style has no progress indicator.
    None,
    /// Digital bar.
    Bar(BarGeometry),
    /// Digital ring.
    Arc(ArcGeometry),
    /// Circle dial wedge.
    Wedge(WedgeGeometry),
}

/// Bar track and fill for `elapsed_ratio`, with measurements scaled by `scale`.
pub fn bar_geometry(bar: &BarSpec, canvas: Canvas, scale: f64, elapsed_ratio: f64) -> BarGeometry {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let margin = bar.margin_px * scale;
    let y0 = h - bar.bottom_offset_px * scale;
    let track = Rect::new(margin, y0, (w - margin).max(margin), y0 + bar.height_px * scale);

    let elapsed = elapsed_ratio.clamp(0.0, 1.0);
    let fraction = match bar.fill {
        BarFill::Elapsed => elapsed,
        BarFill::Remaining => 1.0 - elapsed,
    };
    let fill_w = track.width() * fraction;
    let fill = match bar.direction {
        FillDirection::LeftToRight => Rect::new(track.x0, track.y0, track.x0 + fill_w, track.y1),
        FillDirection::RightToLeft => Rect::new(track.x1 - fill_w, track.y0, track.x1, track.y1),
    };
    BarGeometry {
        track,
        fill,
        fraction,
    }
}

/// Ring geometry for `elapsed_ratio`: the arc grows clockwise from 12 o'clock.
pub fn arc_geometry(arc: &ArcSpec, canvas: Canvas, scale: f64, elapsed_ratio: f64) -> ArcGeometry {
    let min_side = f64::from(canvas.width.min(canvas.height));
    ArcGeometry {
        center: canvas.center(),
        radius: (min_side / 2.0 - arc.margin_px * scale).max(0.0),
        width: arc.width_px * scale,
        start_angle_deg: -90.0,
        sweep_deg: elapsed_ratio.clamp(0.0, 1.0) * 360.0,
    }
}

/// Wedge geometry for `elapsed_ratio`: the sweep is `(1 - elapsed_ratio) * 360°`.
pub fn wedge_geometry(
    dial: &DialSpec,
    canvas: Canvas,
    scale: f64,
    elapsed_ratio: f64,
) -> WedgeGeometry {
    let min_side = f64::from(canvas.width.min(canvas.height));
    let remaining = 1.0 - elapsed_ratio.clamp(0.0, 1.0);
    WedgeGeometry {
        center: canvas.center(),
        radius: (min_side / 2.0 - dial.margin_px * scale).max(0.0),
        start_angle_deg: dial.start_angle_deg,
        sweep_deg: remaining * 360.0 * dial.direction.sign(),
    }
}

pub(crate) fn draw_bar(
    ctx: &mut vello_cpu::RenderContext,
    geom: &BarGeometry,
    color: ColorDef,
    track_alpha: u8,
) {
    fill_rect(ctx, geom.track, color.with_alpha8(track_alpha));
    fill_rect(ctx, geom.fill, color);
}

pub(crate) fn draw_arc(
    ctx: &mut vello_cpu::RenderContext,
    geom: &ArcGeometry,
    color: ColorDef,
    track_alpha: u8,
) {
    if geom.radius <= 0.0 {
        return;
    }
    let track = Circle::new(geom.center, geom.radius - geom.width / 2.0).to_path(PATH_TOLERANCE);
    stroke(ctx, &track, geom.width, Cap::Butt, color.with_alpha8(track_alpha));

    if geom.sweep_deg < MIN_SWEEP_DEG {
        return;
    }
    let progress_width = geom.width * 2.0;
    let r = (geom.radius - progress_width / 2.0).max(0.0);
    let path = if geom.sweep_deg >= 360.0 - MIN_SWEEP_DEG {
        Circle::new(geom.center, r).to_path(PATH_TOLERANCE)
    } else {
        kurbo::Arc::new(
            geom.center,
            Vec2::new(r, r),
            geom.start_angle_deg.to_radians(),
            geom.sweep_deg.to_radians(),
            0.0,
        )
        .to_path(PATH_TOLERANCE)
    };
    stroke(ctx, &path, progress_width, Cap::Butt, color);
}

/// Closed pie slice; a full circle when the sweep covers the whole turn.
pub(crate) fn pie_path(geom: &WedgeGeometry) -> BezPath {
    if geom.is_full() {
        return Circle::new(geom.center, geom.radius).to_path(PATH_TOLERANCE);
    }
    let start = geom.start_angle_deg.to_radians();
    let arc = kurbo::Arc::new(
        geom.center,
        Vec2::new(geom.radius, geom.radius),
        start,
        geom.sweep_deg.to_radians(),
        0.0,
    );
    let mut path = BezPath::new();
    path.move_to(geom.center);
    path.line_to(geom.center + Vec2::from_angle(start) * geom.radius);
    path.extend(arc.append_iter(PATH_TOLERANCE));
    path.close_path();
    path
}

/// Everything a dial needs besides its spec.
pub(crate) struct DialPaint<'a> {
    pub(crate) accent: ColorDef,
    pub(crate) scale: f64,
    pub(crate) number_size_px: f64,
    pub(crate) face: &'a dyn TextFace,
}

/// Track disc, wedge, ring, ticks, hour numbers and center dot, in that order.
pub(crate) fn draw_dial(
    ctx: &mut vello_cpu::RenderContext,
    dial: &DialSpec,
    geom: &WedgeGeometry,
    paint: &DialPaint<'_>,
) -> CountdownResult<()> {
    if geom.radius <= 0.0 {
        return Ok(());
    }
    let s = paint.scale;
    let disc = Circle::new(geom.center, geom.radius).to_path(PATH_TOLERANCE);
    fill(ctx, &disc, paint.accent.with_alpha8(dial.track_alpha));

    if !geom.is_empty() {
        fill(ctx, &pie_path(geom), paint.accent.with_alpha8(dial.wedge_alpha));
    }

    let ring_w = dial.ring_width_px * s;
    if ring_w > 0.0 {
        let ring = Circle::new(geom.center, geom.radius - ring_w / 2.0).to_path(PATH_TOLERANCE);
        stroke(ctx, &ring, ring_w, Cap::Butt, dial.ring_color);
    }

    let mut longest_tick = 0.0f64;
    if let Some(ticks) = &dial.ticks {
        longest_tick = ticks.major_len_px.max(ticks.minor_len_px) * s;
        let count = ticks.count.max(1);
        let outer = geom.radius - ring_w;
        for i in 0..count {
            let major = ticks.major_every > 0 && i % ticks.major_every == 0;
            let (len, width) = if major {
                (ticks.major_len_px * s, MAJOR_TICK_WIDTH * s)
            } else {
                (ticks.minor_len_px * s, MINOR_TICK_WIDTH * s)
            };
            if len <= 0.0 {
                continue;
            }
            let dir = Vec2::from_angle((f64::from(i) * 360.0 / f64::from(count) - 90.0).to_radians());
            let mut line = BezPath::new();
            line.move_to(geom.center + dir * (outer - len));
            line.line_to(geom.center + dir * outer);
            stroke(ctx, &line, width.max(1.0), Cap::Butt, ticks.color);
        }
    }

    if let Some(numbers) = &dial.hour_numbers {
        let r = geom.radius - ring_w - longest_tick - NUMBER_GAP * s;
        let style = TextStyle {
            size_px: paint.number_size_px,
            weight: FontWeight::Regular,
            italic: false,
        };
        let count = numbers.count.max(1);
        for i in 0..count {
            let label = (u64::from(i) * u64::from(numbers.step)).to_string();
            let dir = Vec2::from_angle((f64::from(i) * 360.0 / f64::from(count) - 90.0).to_radians());
            let extent = paint.face.measure(&label, &style)?;
            let origin = extent.centered_at(geom.center + dir * r);
            paint.face.draw(ctx, &label, &style, origin, numbers.color)?;
        }
    }

    if let Some(dot) = &dial.center_dot {
        let path = Circle::new(geom.center, dot.radius_px * s).to_path(PATH_TOLERANCE);
        fill(ctx, &path, dot.color);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/indicator.rs"]
mod tests;
