//! Countdown is a deterministic frame renderer for countdown-timer videos.
//!
//! Given a remaining time, a total duration, a named style and an output size, it produces one
//! premultiplied RGBA8 raster. Rendering is pure: identical requests give identical bytes, and
//! a [`FrameRenderer`] can be shared across threads.
//!
//! - Look up a [`StyleDefinition`] in the [`StyleRegistry`] (20 built-ins, JSON packs on top)
//! - Render single frames with [`FrameRenderer::render`]
//! - Drive whole countdowns with [`CountdownPlan`] and [`render_sequence`] into a [`FrameSink`]
//!
//! Video assembly is left to external tools such as `ffmpeg`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod render;
pub(crate) mod sequence;
pub(crate) mod style;
pub(crate) mod text;
pub(crate) mod time;

pub use crate::foundation::core::{Canvas, FrameIndex, FrameRange, Point, Rect, Vec2};
pub use crate::foundation::error::{CountdownError, CountdownResult};

pub use crate::render::frame::RenderedFrame;
pub use crate::render::indicator::{
    ArcGeometry, BarGeometry, IndicatorGeometry, WedgeGeometry, arc_geometry, bar_geometry,
    wedge_geometry,
};
pub use crate::render::renderer::{FrameRenderer, FrameRequest};
pub use crate::sequence::pipeline::{
    PREVIEW_REMAINING_SECONDS, PREVIEW_TOTAL_SECONDS, SequenceOpts, SequenceStats,
    preview_request, render_sequence,
};
pub use crate::sequence::plan::{CountdownPlan, PlanFrames};
pub use crate::sequence::selection::StyleSelection;
pub use crate::sequence::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::style::color::ColorDef;
pub use crate::style::model::{
    ArcSpec, Background, BarFill, BarSpec, BorderSpec, DialSpec, DigitalIndicator, DigitalSpec,
    DotSpec, Effects, FillDirection, FontSpec, FontWeight, GlowSpec, GradientAxis, GradientStop,
    HourNumbersSpec, LabelSpec, PanelSpec, Presentation, ShadowSpec, StyleDefinition, StyleKind,
    SweepDirection, TickSpec, VignetteSpec,
};
pub use crate::style::registry::{StylePack, StyleRegistry};
pub use crate::text::font::LoadedFont;
pub use crate::text::stroke::StrokeFace;
pub use crate::text::{TextExtent, TextFace, TextStyle};
pub use crate::time::format::{TimeParts, elapsed_ratio, format};
