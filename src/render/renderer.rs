use std::borrow::Cow;
use std::sync::Arc;

use kurbo::{Cap, RoundedRect, Shape};
use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Point, Rect, Vec2};
use crate::foundation::error::{CountdownError, CountdownResult};
use crate::render::frame::RenderedFrame;
use crate::render::indicator::{
    DialPaint, IndicatorGeometry, arc_geometry, bar_geometry, draw_arc, draw_bar, draw_dial,
    wedge_geometry,
};
use crate::render::raster::{Layer, Raster, fill, stroke};
use crate::style::color::ColorDef;
use crate::style::model::{
    DigitalIndicator, FontWeight, LabelSpec, Presentation, StyleDefinition,
};
use crate::style::registry::StyleRegistry;
use crate::text::stroke::StrokeFace;
use crate::text::{TextExtent, TextFace, TextStyle};
use crate::time::format::{TimeParts, elapsed_ratio, format};

const LABEL_NAMES: [&str; 3] = ["HOURS", "MINUTES", "SECONDS"];
const PATH_TOLERANCE: f64 = 0.1;

/// Everything needed to render one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRequest {
    /// Seconds left on the countdown; must be `>= 0`.
    pub remaining_seconds: i64,
    /// Full countdown duration; must be `> 0`.
    pub total_seconds: i64,
    /// Registry name of the style.
    pub style: String,
    /// Output width in pixels.
    pub width: i64,
    /// Output height in pixels.
    pub height: i64,
}

impl FrameRequest {
    /// Request for `style` at `remaining_seconds` of `total_seconds`, unvalidated.
    pub fn new(
        style: impl Into<String>,
        remaining_seconds: i64,
        total_seconds: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            remaining_seconds,
            total_seconds,
            style: style.into(),
            width,
            height,
        }
    }
}

/// Stateless renderer mapping a [`FrameRequest`] to a composed raster.
///
/// Holds only immutable data (a style registry and a text face), so one instance can be shared
/// across threads.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    registry: Cow<'static, StyleRegistry>,
    face: Arc<dyn TextFace>,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated per-frame inputs.
struct Frame<'a> {
    style: &'a StyleDefinition,
    canvas: Canvas,
    width: u16,
    height: u16,
    scale: f64,
    parts: TimeParts,
    elapsed: f64,
}

/// The laid-out time string.
struct TimeText {
    text: String,
    style: TextStyle,
    extent: TextExtent,
    origin: Point,
}

impl FrameRenderer {
    /// Renderer over the built-in styles using the built-in stroke face.
    pub fn new() -> Self {
        Self {
            registry: Cow::Borrowed(StyleRegistry::builtin()),
            face: Arc::new(StrokeFace),
        }
    }

    /// Replace the style registry.
    pub fn with_registry(mut self, registry: StyleRegistry) -> Self {
        self.registry = Cow::Owned(registry);
        self
    }

    /// Replace the text face used for all text.
    pub fn with_face(mut self, face: Arc<dyn TextFace>) -> Self {
        self.face = face;
        self
    }

    /// Styles this renderer resolves names against.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Render one frame.
    ///
    /// Checks dimensions, then the style name, then the time values; nothing is drawn unless all
    /// three are valid.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn render(&self, req: &FrameRequest) -> CountdownResult<RenderedFrame> {
        let frame = self.prepare(req)?;
        let style = frame.style;
        let face = self.face.as_ref();

        let mut raster = Raster::transparent(frame.width, frame.height);
        raster.fill_background(&style.background);
        if let Some(vignette) = &style.effects.vignette {
            raster.apply_vignette(vignette.strength);
        }

        let text_center = match &style.presentation {
            Presentation::Circle(dial) if dial.overlay_digits => frame.canvas.center(),
            _ => frame.canvas.center() + style.text_offset * frame.scale,
        };
        let text = self.layout_time(&frame, text_center)?;

        self.decoration_pass(&mut raster, &frame, &text);

        let mut fg = Layer::new(frame.width, frame.height);
        match &style.presentation {
            Presentation::Digital(digital) => {
                self.text_pass(&mut raster, &mut fg, &frame, &text)?;
                match &digital.indicator {
                    Some(DigitalIndicator::Bar(bar)) => {
                        let geom = bar_geometry(bar, frame.canvas, frame.scale, frame.elapsed);
                        let color = bar.color.unwrap_or(style.accent_color);
                        draw_bar(fg.ctx(), &geom, color, bar.track_alpha);
                    }
                    Some(DigitalIndicator::Arc(arc)) => {
                        let geom = arc_geometry(arc, frame.canvas, frame.scale, frame.elapsed);
                        let color = arc.color.unwrap_or(style.accent_color);
                        draw_arc(fg.ctx(), &geom, color, arc.track_alpha);
                    }
                    None => {}
                }
            }
            Presentation::Circle(dial) => {
                let geom = wedge_geometry(dial, frame.canvas, frame.scale, frame.elapsed);
                let paint = DialPaint {
                    accent: style.accent_color,
                    scale: frame.scale,
                    number_size_px: dial
                        .hour_numbers
                        .as_ref()
                        .map_or(0.0, |n| style.font.size_px * n.size_ratio * frame.scale),
                    face,
                };
                if dial.overlay_digits {
                    let mut dial_layer = Layer::new(frame.width, frame.height);
                    draw_dial(dial_layer.ctx(), dial, &geom, &paint)?;
                    raster.composite_over(&dial_layer.rasterize(), 0, 0, 1.0);
                    self.text_pass(&mut raster, &mut fg, &frame, &text)?;
                } else {
                    self.text_pass(&mut raster, &mut fg, &frame, &text)?;
                    draw_dial(fg.ctx(), dial, &geom, &paint)?;
                }
            }
        }
        raster.composite_over(&fg.rasterize(), 0, 0, 1.0);

        tracing::debug!(text = %text.text, elapsed = frame.elapsed, "frame composed");
        Ok(RenderedFrame {
            width: frame.canvas.width,
            height: frame.canvas.height,
            data: raster.into_data(),
            premultiplied: true,
        })
    }

    /// Indicator geometry the renderer would draw for `req`, after the same validation.
    pub fn indicator_geometry(&self, req: &FrameRequest) -> CountdownResult<IndicatorGeometry> {
        let frame = self.prepare(req)?;
        Ok(match &frame.style.presentation {
            Presentation::Digital(d) => match &d.indicator {
                Some(DigitalIndicator::Bar(bar)) => IndicatorGeometry::Bar(bar_geometry(
                    bar,
                    frame.canvas,
                    frame.scale,
                    frame.elapsed,
                )),
                Some(DigitalIndicator::Arc(arc)) => IndicatorGeometry::Arc(arc_geometry(
                    arc,
                    frame.canvas,
                    frame.scale,
                    frame.elapsed,
                )),
                None => IndicatorGeometry::None,
            },
            Presentation::Circle(dial) => IndicatorGeometry::Wedge(wedge_geometry(
                dial,
                frame.canvas,
                frame.scale,
                frame.elapsed,
            )),
        })
    }

    fn prepare(&self, req: &FrameRequest) -> CountdownResult<Frame<'_>> {
        let canvas = Canvas::from_request(req.width, req.height)?;
        let to_u16 = |v: u32| {
            u16::try_from(v).map_err(|_| CountdownError::invalid_dimensions(req.width, req.height))
        };
        let (width, height) = (to_u16(canvas.width)?, to_u16(canvas.height)?);

        let style = self.registry.get(&req.style)?;
        let parts = format(req.remaining_seconds)?;
        let elapsed = elapsed_ratio(req.remaining_seconds, req.total_seconds)?;

        Ok(Frame {
            style,
            canvas,
            width,
            height,
            scale: style.canvas.scale_to(canvas),
            parts,
            elapsed,
        })
    }

    fn layout_time(&self, frame: &Frame<'_>, center: Point) -> CountdownResult<TimeText> {
        let font = &frame.style.font;
        let text = frame.parts.join(&font.separator);
        let style = TextStyle {
            size_px: font.size_px * frame.scale,
            weight: font.weight,
            italic: font.italic,
        };
        let extent = self.face.measure(&text, &style)?;
        Ok(TimeText {
            origin: extent.centered_at(center),
            text,
            style,
            extent,
        })
    }

    /// Border and digit panel.
    fn decoration_pass(&self, raster: &mut Raster, frame: &Frame<'_>, text: &TimeText) {
        let style = frame.style;
        if style.effects.border.is_none() && style.digit_panel.is_none() {
            return;
        }
        let s = frame.scale;
        let mut layer = Layer::new(frame.width, frame.height);

        if let Some(border) = &style.effects.border {
            let bw = border.width_px * s;
            let (w, h) = (f64::from(frame.canvas.width), f64::from(frame.canvas.height));
            let inset = Rect::new(bw / 2.0, bw / 2.0, w - bw / 2.0, h - bw / 2.0);
            stroke(layer.ctx(), &inset.to_path(PATH_TOLERANCE), bw, Cap::Butt, border.color);
        }

        if let Some(panel) = &style.digit_panel {
            let rect = Rect::new(
                text.origin.x - panel.pad_x_px * s,
                text.origin.y - panel.pad_y_px * s,
                text.origin.x + text.extent.width + panel.pad_x_px * s,
                text.origin.y + text.extent.height + panel.pad_y_px * s,
            );
            let path = RoundedRect::from_rect(rect, panel.radius_px * s).to_path(PATH_TOLERANCE);
            fill(layer.ctx(), &path, panel.color);
        }

        raster.composite_over(&layer.rasterize(), 0, 0, 1.0);
    }

    /// Shadow and glow straight into `raster`, then crisp text and labels into `fg`.
    fn text_pass(
        &self,
        raster: &mut Raster,
        fg: &mut Layer,
        frame: &Frame<'_>,
        text: &TimeText,
    ) -> CountdownResult<()> {
        let style = frame.style;
        let s = frame.scale;

        if let Some(shadow) = &style.effects.shadow {
            self.blurred_copy(raster, text, shadow.color, shadow.offset * s, shadow.blur_px * s, 1.0)?;
        }
        if let Some(glow) = &style.effects.glow {
            let color = glow.color.unwrap_or(style.text_color);
            let strength = glow.strength.clamp(0.0, 1.0) as f32;
            self.blurred_copy(raster, text, color, Vec2::ZERO, glow.radius_px * s, strength)?;
        }

        self.face
            .draw(fg.ctx(), &text.text, &text.style, text.origin, style.text_color)?;

        if let Some(labels) = &style.labels {
            self.draw_labels(fg, frame, text, labels)?;
        }
        Ok(())
    }

    /// Render the time text into a small layer, blur it and composite it at its offset.
    fn blurred_copy(
        &self,
        raster: &mut Raster,
        text: &TimeText,
        color: ColorDef,
        offset: Vec2,
        blur_px: f64,
        opacity: f32,
    ) -> CountdownResult<()> {
        let blur_px = blur_px.max(0.0);
        let margin = blur_px.ceil() + 2.0;
        let origin = text.origin + offset;
        let x0 = (origin.x - margin).floor();
        let y0 = (origin.y - margin).floor();
        let side = |v: f64| (v.ceil() as u32).clamp(1, u32::from(u16::MAX)) as u16;
        let lw = side(text.extent.width + 2.0 * margin + 1.0);
        let lh = side(text.extent.height + 2.0 * margin + 1.0);

        let mut layer = Layer::new(lw, lh);
        let local = Point::new(origin.x - x0, origin.y - y0);
        self.face
            .draw(layer.ctx(), &text.text, &text.style, local, color)?;
        let mut copy = layer.rasterize();
        copy.blur(blur_px)?;
        raster.composite_over(&copy, x0 as i32, y0 as i32, opacity);
        Ok(())
    }

    /// `HOURS` / `MINUTES` / `SECONDS` centered under their digit groups.
    fn draw_labels(
        &self,
        fg: &mut Layer,
        frame: &Frame<'_>,
        text: &TimeText,
        labels: &LabelSpec,
    ) -> CountdownResult<()> {
        let sep = &frame.style.font.separator;
        let [hh, mm, ss] = frame.parts.fields();
        let through = [
            hh.clone(),
            format!("{hh}{sep}{mm}"),
            format!("{hh}{sep}{mm}{sep}{ss}"),
        ];
        let groups = [&hh, &mm, &ss];

        let label_style = TextStyle {
            size_px: frame.style.font.size_px * labels.size_ratio * frame.scale,
            weight: FontWeight::Regular,
            italic: false,
        };
        let y = text.origin.y + text.extent.height + labels.gap_px * frame.scale;

        for ((name, prefix), group) in LABEL_NAMES.iter().zip(&through).zip(groups) {
            let end = self.face.measure(prefix, &text.style)?.width;
            let group_w = self.face.measure(group, &text.style)?.width;
            let center_x = text.origin.x + end - group_w / 2.0;

            let extent = self.face.measure(name, &label_style)?;
            let origin = Point::new(center_x - extent.width / 2.0, y);
            self.face
                .draw(fg.ctx(), name, &label_style, origin, labels.color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
