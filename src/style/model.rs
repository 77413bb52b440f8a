use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::{CountdownError, CountdownResult};
use crate::style::color::ColorDef;

/// Which rendering branch a style uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    /// `HH:MM:SS` text with an optional linear (or ring) progress indicator.
    Digital,
    /// Time-Timer-like dial whose wedge shows the remaining time.
    Circle,
}

/// Immutable presentation parameters for one named style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinition {
    /// Unique registry key.
    pub name: String,
    /// One-line description used when listing styles.
    #[serde(default)]
    pub description: String,
    /// Reference canvas all pixel measurements are authored against.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Background,
    /// Color of the time text.
    pub text_color: ColorDef,
    /// Color of progress indicators (bar fill, arc, dial wedge).
    pub accent_color: ColorDef,
    /// Text size and shape hints.
    pub font: FontSpec,
    /// Offset of the time text from the canvas center, in reference pixels.
    #[serde(default)]
    pub text_offset: Vec2,
    /// `HOURS` / `MINUTES` / `SECONDS` captions below the digit groups.
    #[serde(default)]
    pub labels: Option<LabelSpec>,
    /// Rounded panel drawn behind the digits.
    #[serde(default)]
    pub digit_panel: Option<PanelSpec>,
    /// Glow, shadow, border and vignette.
    #[serde(default)]
    pub effects: Effects,
    /// Kind-specific parameters.
    pub presentation: Presentation,
}

/// Largest glow or shadow blur radius, in reference pixels.
pub const MAX_BLUR_PX: f64 = 256.0;
/// Most tick marks a dial may carry.
pub const MAX_TICKS: u32 = 720;
/// Most numbers a dial may carry.
pub const MAX_HOUR_NUMBERS: u32 = 60;
/// Largest increment between neighbouring dial numbers.
pub const MAX_HOUR_STEP: u32 = 1_000_000;

impl StyleDefinition {
    /// The rendering branch this style dispatches to.
    pub fn kind(&self) -> StyleKind {
        match self.presentation {
            Presentation::Digital(_) => StyleKind::Digital,
            Presentation::Circle(_) => StyleKind::Circle,
        }
    }

    /// Check invariants that the type system cannot express.
    pub fn validate(&self) -> CountdownResult<()> {
        let fail = |msg: String| Err(CountdownError::validation(format!("style '{}': {msg}", self.name)));

        if self.name.trim().is_empty() {
            return Err(CountdownError::validation("style name must be non-empty"));
        }
        if self.name == "all" {
            return fail("\"all\" is reserved for selecting every style".to_owned());
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return fail("reference canvas must be non-empty".to_owned());
        }
        if !(self.font.size_px.is_finite() && self.font.size_px > 0.0) {
            return fail("font.size_px must be finite and > 0".to_owned());
        }
        if let Background::Gradient { stops, .. } = &self.background {
            if stops.len() < 2 {
                return fail("gradient needs at least two stops".to_owned());
            }
            let mut prev = 0.0;
            for s in stops {
                if !(0.0..=1.0).contains(&s.offset) || s.offset < prev {
                    return fail("gradient stop offsets must ascend within [0, 1]".to_owned());
                }
                prev = s.offset;
            }
        }
        if let Some(glow) = &self.effects.glow
            && !(glow.radius_px.is_finite() && (0.0..=MAX_BLUR_PX).contains(&glow.radius_px))
        {
            return fail(format!("glow.radius_px must be within [0, {MAX_BLUR_PX}]"));
        }
        if let Some(shadow) = &self.effects.shadow
            && !(shadow.blur_px.is_finite() && (0.0..=MAX_BLUR_PX).contains(&shadow.blur_px))
        {
            return fail(format!("shadow.blur_px must be within [0, {MAX_BLUR_PX}]"));
        }
        if let Some(border) = &self.effects.border
            && !(border.width_px.is_finite() && border.width_px > 0.0)
        {
            return fail("border.width_px must be finite and > 0".to_owned());
        }
        match &self.presentation {
            Presentation::Digital(d) => match &d.indicator {
                Some(DigitalIndicator::Bar(bar)) if bar.height_px <= 0.0 => {
                    fail("bar.height_px must be > 0".to_owned())
                }
                Some(DigitalIndicator::Arc(arc)) if arc.width_px <= 0.0 => {
                    fail("arc.width_px must be > 0".to_owned())
                }
                _ => Ok(()),
            },
            Presentation::Circle(dial) => {
                if dial.ring_width_px < 0.0 {
                    return fail("dial.ring_width_px must be >= 0".to_owned());
                }
                if let Some(ticks) = &dial.ticks
                    && !(1..=MAX_TICKS).contains(&ticks.count)
                {
                    return fail(format!("dial.ticks.count must be within [1, {MAX_TICKS}]"));
                }
                if let Some(numbers) = &dial.hour_numbers {
                    if !(1..=MAX_HOUR_NUMBERS).contains(&numbers.count) {
                        return fail(format!(
                            "dial.hour_numbers.count must be within [1, {MAX_HOUR_NUMBERS}]"
                        ));
                    }
                    if numbers.step > MAX_HOUR_STEP {
                        return fail(format!(
                            "dial.hour_numbers.step must be <= {MAX_HOUR_STEP}"
                        ));
                    }
                }
                Ok(())
            }
        }
    }
}

/// Background fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// One flat color.
    Solid(ColorDef),
    /// Linear interpolation between ordered stops along an axis.
    Gradient {
        /// Interpolation axis.
        #[serde(default)]
        axis: GradientAxis,
        /// Ordered color stops; offsets ascend within `[0, 1]`.
        stops: Vec<GradientStop>,
    },
}

impl Background {
    /// Two-stop vertical gradient.
    pub fn vertical(top: ColorDef, bottom: ColorDef) -> Self {
        Self::Gradient {
            axis: GradientAxis::Vertical,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: top,
                },
                GradientStop {
                    offset: 1.0,
                    color: bottom,
                },
            ],
        }
    }
}

/// Axis a gradient varies along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientAxis {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// One gradient stop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the axis, `0..=1`.
    pub offset: f64,
    /// Color at `offset`.
    pub color: ColorDef,
}

/// Stroke weight hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Thin strokes.
    Light,
    /// Medium strokes.
    Regular,
    /// Heavy strokes.
    #[default]
    Bold,
}

impl FontWeight {
    /// Stroke thickness relative to cap height for the built-in stroke face.
    pub fn stroke_ratio(self) -> f64 {
        match self {
            Self::Light => 0.055,
            Self::Regular => 0.09,
            Self::Bold => 0.13,
        }
    }
}

/// Font parameters for the time text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font size in reference pixels.
    pub size_px: f64,
    /// Weight hint.
    #[serde(default)]
    pub weight: FontWeight,
    /// Slant hint.
    #[serde(default)]
    pub italic: bool,
    /// String placed between the `HH`, `MM` and `SS` fields.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    ":".to_owned()
}

/// Captions under each digit group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelSpec {
    /// Caption color.
    pub color: ColorDef,
    /// Caption size relative to the time font size.
    #[serde(default = "default_label_ratio")]
    pub size_ratio: f64,
    /// Gap between the digits and the captions, in reference pixels.
    #[serde(default = "default_label_gap")]
    pub gap_px: f64,
}

fn default_label_ratio() -> f64 {
    1.0 / 6.0
}

fn default_label_gap() -> f64 {
    30.0
}

/// Rounded rectangle behind the digits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Panel fill.
    pub color: ColorDef,
    /// Horizontal padding around the text bounds.
    #[serde(default = "default_panel_pad_x")]
    pub pad_x_px: f64,
    /// Vertical padding around the text bounds.
    #[serde(default = "default_panel_pad_y")]
    pub pad_y_px: f64,
    /// Corner radius.
    #[serde(default = "default_panel_radius")]
    pub radius_px: f64,
}

fn default_panel_pad_x() -> f64 {
    60.0
}

fn default_panel_pad_y() -> f64 {
    40.0
}

fn default_panel_radius() -> f64 {
    30.0
}

/// Optional decorative layers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    /// Blurred halo under the text.
    #[serde(default)]
    pub glow: Option<GlowSpec>,
    /// Offset (optionally blurred) copy under the text.
    #[serde(default)]
    pub shadow: Option<ShadowSpec>,
    /// Rectangular frame inset along the canvas edges.
    #[serde(default)]
    pub border: Option<BorderSpec>,
    /// Radial darkening toward the corners.
    #[serde(default)]
    pub vignette: Option<VignetteSpec>,
}

/// Glow parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlowSpec {
    /// Blur radius in reference pixels.
    pub radius_px: f64,
    /// Opacity multiplier applied to the blurred layer.
    #[serde(default = "default_glow_strength")]
    pub strength: f64,
    /// Glow color; defaults to the text color.
    #[serde(default)]
    pub color: Option<ColorDef>,
}

fn default_glow_strength() -> f64 {
    0.85
}

/// Drop shadow parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowSpec {
    /// Offset in reference pixels.
    pub offset: Vec2,
    /// Shadow color.
    pub color: ColorDef,
    /// Blur radius in reference pixels (`0` for a hard shadow).
    #[serde(default)]
    pub blur_px: f64,
}

/// Border parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderSpec {
    /// Stroke color.
    pub color: ColorDef,
    /// Stroke width in reference pixels.
    pub width_px: f64,
}

/// Vignette parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VignetteSpec {
    /// Darkening at the corners, `0..=1`.
    pub strength: f64,
}

/// Kind-specific parameters; the variant fixes the [`StyleKind`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Presentation {
    /// Text-first presentation.
    Digital(DigitalSpec),
    /// Dial presentation.
    Circle(DialSpec),
}

/// Digital presentation parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DigitalSpec {
    /// Optional progress indicator.
    #[serde(default)]
    pub indicator: Option<DigitalIndicator>,
}

/// Progress indicator for digital styles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DigitalIndicator {
    /// Horizontal bar.
    Bar(BarSpec),
    /// Ring around the digits, filled clockwise from 12 o'clock.
    Arc(ArcSpec),
}

/// What the filled part of a bar represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarFill {
    /// Grows from empty to full as time elapses.
    #[default]
    Elapsed,
    /// Shrinks from full to empty as time elapses.
    Remaining,
}

/// Side a bar fills from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillDirection {
    /// Anchored at the left edge.
    #[default]
    LeftToRight,
    /// Anchored at the right edge.
    RightToLeft,
}

/// Bar indicator geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    /// Fill color; defaults to the style accent color.
    #[serde(default)]
    pub color: Option<ColorDef>,
    /// Bar thickness.
    #[serde(default = "default_bar_height")]
    pub height_px: f64,
    /// Horizontal inset from both canvas edges.
    #[serde(default = "default_bar_margin")]
    pub margin_px: f64,
    /// Distance from the canvas bottom to the bar top.
    #[serde(default = "default_bar_bottom")]
    pub bottom_offset_px: f64,
    /// Alpha of the dimmed track behind the fill.
    #[serde(default = "default_bar_track_alpha")]
    pub track_alpha: u8,
    /// What the filled part represents.
    #[serde(default)]
    pub fill: BarFill,
    /// Side the fill grows from.
    #[serde(default)]
    pub direction: FillDirection,
}

impl Default for BarSpec {
    fn default() -> Self {
        Self {
            color: None,
            height_px: default_bar_height(),
            margin_px: default_bar_margin(),
            bottom_offset_px: default_bar_bottom(),
            track_alpha: default_bar_track_alpha(),
            fill: BarFill::default(),
            direction: FillDirection::default(),
        }
    }
}

fn default_bar_height() -> f64 {
    6.0
}

fn default_bar_margin() -> f64 {
    80.0
}

fn default_bar_bottom() -> f64 {
    40.0
}

fn default_bar_track_alpha() -> u8 {
    40
}

/// Ring indicator geometry for digital styles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    /// Arc color; defaults to the style accent color.
    #[serde(default)]
    pub color: Option<ColorDef>,
    /// Track stroke width; the progress arc is drawn twice as wide.
    #[serde(default = "default_arc_width")]
    pub width_px: f64,
    /// Alpha of the full-circle track.
    #[serde(default = "default_arc_track_alpha")]
    pub track_alpha: u8,
    /// Inset of the ring from the nearer canvas edge.
    #[serde(default = "default_arc_margin")]
    pub margin_px: f64,
}

fn default_arc_width() -> f64 {
    8.0
}

fn default_arc_track_alpha() -> u8 {
    60
}

fn default_arc_margin() -> f64 {
    60.0
}

/// Rotation sense of the dial wedge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepDirection {
    /// Clockwise on screen.
    #[default]
    Clockwise,
    /// Counter-clockwise on screen.
    CounterClockwise,
}

impl SweepDirection {
    pub(crate) fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Dial parameters for circle styles. The wedge uses the style accent color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialSpec {
    /// Wedge opacity.
    pub wedge_alpha: u8,
    /// Opacity of the dimmed full disc representing the total duration.
    #[serde(default = "default_dial_track_alpha")]
    pub track_alpha: u8,
    /// Outer ring color.
    pub ring_color: ColorDef,
    /// Outer ring stroke width.
    pub ring_width_px: f64,
    /// Wedge start angle in degrees; `-90` is 12 o'clock, positive angles turn clockwise.
    #[serde(default = "default_start_angle")]
    pub start_angle_deg: f64,
    /// Wedge sweep direction.
    #[serde(default)]
    pub direction: SweepDirection,
    /// Inset of the dial from the nearer canvas edge.
    #[serde(default = "default_dial_margin")]
    pub margin_px: f64,
    /// Draw the time text centered on top of the dial.
    #[serde(default = "default_true")]
    pub overlay_digits: bool,
    /// Minute tick marks.
    #[serde(default)]
    pub ticks: Option<TickSpec>,
    /// Numbers around the inside of the ring.
    #[serde(default)]
    pub hour_numbers: Option<HourNumbersSpec>,
    /// Dot at the dial center.
    #[serde(default)]
    pub center_dot: Option<DotSpec>,
}

fn default_dial_track_alpha() -> u8 {
    28
}

fn default_start_angle() -> f64 {
    -90.0
}

fn default_dial_margin() -> f64 {
    80.0
}

fn default_true() -> bool {
    true
}

/// Tick marks around the dial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickSpec {
    /// Tick color.
    pub color: ColorDef,
    /// Length of major ticks (`0` hides them).
    pub major_len_px: f64,
    /// Length of minor ticks (`0` hides them).
    pub minor_len_px: f64,
    /// Number of ticks around the full circle.
    #[serde(default = "default_tick_count")]
    pub count: u32,
    /// Every n-th tick is major.
    #[serde(default = "default_major_every")]
    pub major_every: u32,
}

fn default_tick_count() -> u32 {
    60
}

fn default_major_every() -> u32 {
    5
}

/// Numbers placed inside the ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HourNumbersSpec {
    /// Number color.
    pub color: ColorDef,
    /// How many numbers around the dial.
    #[serde(default = "default_hour_count")]
    pub count: u32,
    /// Value increment between neighbouring numbers.
    #[serde(default = "default_hour_step")]
    pub step: u32,
    /// Number size relative to the time font size.
    #[serde(default = "default_hour_ratio")]
    pub size_ratio: f64,
}

fn default_hour_count() -> u32 {
    12
}

fn default_hour_step() -> u32 {
    2
}

fn default_hour_ratio() -> f64 {
    1.0 / 3.0
}

/// Center dot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DotSpec {
    /// Dot color.
    pub color: ColorDef,
    /// Dot radius.
    #[serde(default = "default_dot_radius")]
    pub radius_px: f64,
}

fn default_dot_radius() -> f64 {
    8.0
}

#[cfg(test)]
#[path = "../../tests/unit/style/model.rs"]
mod tests;
