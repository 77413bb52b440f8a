use crate::foundation::error::{CountdownError, CountdownResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Zero-based position of a frame in a rendered sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open span of frame indices, `start..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the span.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Span `start..end`; fails with `InvalidInput` when `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> CountdownResult<Self> {
        if start > end {
            return Err(CountdownError::invalid_input(format!(
                "frame range start {} is past its end {}",
                start.0, end.0
            )));
        }
        Ok(Self { start, end })
    }

    /// Frames `0..count`.
    pub const fn first(count: u64) -> Self {
        Self {
            start: FrameIndex(0),
            end: FrameIndex(count),
        }
    }

    /// Number of frames in the span.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Whether the span has no frames.
    pub fn is_empty(self) -> bool {
        self.len_frames() == 0
    }

    /// Whether `index` lies in `start..end`.
    pub fn contains(self, index: FrameIndex) -> bool {
        self.start <= index && index < self.end
    }

    /// Removes and returns the first index, shrinking the span from the front.
    pub fn pop_front(&mut self) -> Option<FrameIndex> {
        if self.is_empty() {
            return None;
        }
        let index = self.start;
        self.start = FrameIndex(index.0 + 1);
        Some(index)
    }
}

/// Pixel size of a raster, or of the reference canvas a style was designed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas of `width` x `height` pixels; not validated.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Validate signed request dimensions against what the CPU raster can hold (`u16` per axis).
    pub fn from_request(width: i64, height: i64) -> CountdownResult<Self> {
        let fits = |v: i64| v > 0 && v <= i64::from(u16::MAX);
        if !fits(width) || !fits(height) {
            return Err(CountdownError::invalid_dimensions(width, height));
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    /// Uniform factor that maps measurements authored for `self` onto `target`.
    pub fn scale_to(self, target: Canvas) -> f64 {
        let sx = f64::from(target.width) / f64::from(self.width.max(1));
        let sy = f64::from(target.height) / f64::from(self.height.max(1));
        sx.min(sy)
    }

    /// Center point in pixel coordinates.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
