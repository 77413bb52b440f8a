use kurbo::{Cap, Join, PathEl, Stroke, StrokeOpts};

use crate::foundation::core::{Affine, BezPath, Rect};
use crate::foundation::error::{CountdownError, CountdownResult};
use crate::foundation::math::{add_sat_u8, lerp_u8, mul_div255_u8};
use crate::style::color::ColorDef;
use crate::style::model::{Background, GradientAxis, GradientStop};

const STROKE_TOLERANCE: f64 = 0.05;

/// Premultiplied RGBA8 pixel buffer that passes are composited into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Raster {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl Raster {
    pub(crate) fn transparent(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height) * 4;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    pub(crate) fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Fill the whole raster with a solid color or a gradient.
    pub(crate) fn fill_background(&mut self, bg: &Background) {
        match bg {
            Background::Solid(c) => {
                let px = c.to_rgba8_premul();
                for d in self.data.chunks_exact_mut(4) {
                    d.copy_from_slice(&px);
                }
            }
            Background::Gradient { axis, stops } => self.fill_gradient(*axis, stops),
        }
    }

    fn fill_gradient(&mut self, axis: GradientAxis, stops: &[GradientStop]) {
        let (w, h) = (usize::from(self.width), usize::from(self.height));
        let steps = match axis {
            GradientAxis::Vertical => h,
            GradientAxis::Horizontal => w,
        };
        // `t = i / steps` so the last row stops just short of the final stop.
        let ramp: Vec<[u8; 4]> = (0..steps)
            .map(|i| sample_stops(stops, i as f64 / steps.max(1) as f64))
            .collect();

        for (y, row) in self.data.chunks_exact_mut(w * 4).enumerate() {
            for (x, d) in row.chunks_exact_mut(4).enumerate() {
                let px = match axis {
                    GradientAxis::Vertical => ramp[y],
                    GradientAxis::Horizontal => ramp[x],
                };
                d.copy_from_slice(&px);
            }
        }
    }

    /// Darken towards the corners. `strength` is the fraction of light removed at a corner.
    pub(crate) fn apply_vignette(&mut self, strength: f64) {
        let strength = strength.clamp(0.0, 1.0);
        if strength <= 0.0 {
            return;
        }
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let (cx, cy) = (w / 2.0, h / 2.0);
        let max_d = (cx * cx + cy * cy).sqrt().max(1.0);
        let row_len = usize::from(self.width) * 4;

        for (y, row) in self.data.chunks_exact_mut(row_len).enumerate() {
            let dy = y as f64 + 0.5 - cy;
            for (x, d) in row.chunks_exact_mut(4).enumerate() {
                let dx = x as f64 + 0.5 - cx;
                let t = smoothstep(0.35, 1.0, (dx * dx + dy * dy).sqrt() / max_d);
                let keep = ((1.0 - strength * t) * 255.0).round().clamp(0.0, 255.0) as u16;
                for c in d.iter_mut().take(3) {
                    *c = mul_div255_u8(u16::from(*c), keep);
                }
            }
        }
    }

    /// Composite `src` over `self` with its top-left corner at `(x, y)`, clipped to `self`.
    pub(crate) fn composite_over(&mut self, src: &Raster, x: i32, y: i32, opacity: f32) {
        let op = ((opacity.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16;
        if op == 0 {
            return;
        }
        let (dw, dh) = (i32::from(self.width), i32::from(self.height));
        let (sw, sh) = (i32::from(src.width), i32::from(src.height));

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + sw).min(dw);
        let y1 = (y + sh).min(dh);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let span = (x1 - x0) as usize * 4;
        for dy in y0..y1 {
            let sy = dy - y;
            let d_start = (dy as usize * dw as usize + x0 as usize) * 4;
            let s_start = (sy as usize * sw as usize + (x0 - x) as usize) * 4;
            premul_over_row(
                &mut self.data[d_start..d_start + span],
                &src.data[s_start..s_start + span],
                op,
            );
        }
    }

    /// Gaussian blur in place. `radius_px` is the kernel half-width; sigma is half of it.
    pub(crate) fn blur(&mut self, radius_px: f64) -> CountdownResult<()> {
        let radius = radius_px.max(0.0).round() as u32;
        if radius == 0 {
            return Ok(());
        }
        let sigma = (radius_px / 2.0).max(0.5) as f32;
        self.data =
            blur_rgba8_premul_q16(&self.data, u32::from(self.width), u32::from(self.height), radius, sigma)?;
        Ok(())
    }
}

/// One vello_cpu drawing surface; rasterized into a [`Raster`] when done.
pub(crate) struct Layer {
    ctx: vello_cpu::RenderContext,
}

impl Layer {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            ctx: vello_cpu::RenderContext::new(width, height),
        }
    }

    pub(crate) fn ctx(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    pub(crate) fn rasterize(mut self) -> Raster {
        let (w, h) = (self.ctx.width(), self.ctx.height());
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Raster {
            width: w,
            height: h,
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

/// Fill `path` (in pixel coordinates) with `color`.
pub(crate) fn fill(ctx: &mut vello_cpu::RenderContext, path: &BezPath, color: ColorDef) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_paint());
    ctx.fill_path(&bezpath_to_cpu(path));
}

pub(crate) fn fill_rect(ctx: &mut vello_cpu::RenderContext, rect: Rect, color: ColorDef) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_paint());
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
}

/// Stroke `path` by expanding it to an outline and filling that.
pub(crate) fn stroke(
    ctx: &mut vello_cpu::RenderContext,
    path: &BezPath,
    width: f64,
    cap: Cap,
    color: ColorDef,
) {
    if width <= 0.0 {
        return;
    }
    let style = Stroke::new(width).with_caps(cap).with_join(Join::Round);
    let outline = kurbo::stroke(path.iter(), &style, &StrokeOpts::default(), STROKE_TOLERANCE);
    fill(ctx, &outline, color);
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Premultiplied color of the gradient at `t`; stops must be sorted by offset.
fn sample_stops(stops: &[GradientStop], t: f64) -> [u8; 4] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0, 0, 0, 0];
    };
    if t <= first.offset {
        return first.color.to_rgba8_premul();
    }
    if t >= last.offset {
        return last.color.to_rgba8_premul();
    }
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let local = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
            let (ca, cb) = (a.color.to_rgba8_premul(), b.color.to_rgba8_premul());
            return [
                lerp_u8(ca[0], cb[0], local),
                lerp_u8(ca[1], cb[1], local),
                lerp_u8(ca[2], cb[2], local),
                lerp_u8(ca[3], cb[3], local),
            ];
        }
    }
    last.color.to_rgba8_premul()
}

fn premul_over_row(dst: &mut [u8], src: &[u8], op: u16) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = mul_div255_u8(u16::from(s[3]), op);
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - u16::from(sa);
        d[3] = add_sat_u8(sa, mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            let sc = mul_div255_u8(u16::from(s[c]), op);
            let dc = mul_div255_u8(u16::from(d[c]), inv);
            d[c] = add_sat_u8(sc, dc);
        }
    }
}

fn smoothstep(a: f64, b: f64, x: f64) -> f64 {
    if x <= a {
        return 0.0;
    }
    if x >= b {
        return 1.0;
    }
    let t = (x - a) / (b - a);
    t * t * (3.0 - 2.0 * t)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> CountdownResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(CountdownError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| (-f64::from(i * i) / denom).exp())
        .collect();
    let sum: f64 = weights_f.iter().sum();

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }
    Ok(weights)
}

fn blur_rgba8_premul_q16(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> CountdownResult<Vec<u8>> {
    let expected = (width as usize) * (height as usize) * 4;
    if src.len() != expected {
        return Err(CountdownError::validation(
            "blur expects a width*height*4 buffer",
        ));
    }
    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected];
    let mut out = vec![0u8; expected];
    horizontal_blur_q16(src, &mut tmp, width, height, &kernel);
    vertical_blur_q16(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn horizontal_blur_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_blur_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let (w, h) = (width as i32, height as i32);
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
