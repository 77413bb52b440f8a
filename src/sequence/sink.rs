use std::path::{Path, PathBuf};

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CountdownError, CountdownResult};
use crate::render::frame::RenderedFrame;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Output frames per second.
    pub fps: u32,
    /// Number of frames that will be pushed.
    pub frame_count: u64,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order between
/// one `begin` and one `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> CountdownResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &RenderedFrame) -> CountdownResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> CountdownResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, RenderedFrame)>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, RenderedFrame)] {
        &self.frames
    }

    /// Consume the sink, keeping its frames.
    pub fn into_frames(self) -> Vec<(FrameIndex, RenderedFrame)> {
        self.frames
    }

    /// Whether `end` was called after the last `begin`.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> CountdownResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RenderedFrame) -> CountdownResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> CountdownResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes `frame_{index:08}.png` files (RGB8) into one directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    written: u64,
}

impl PngSequenceSink {
    /// Sink writing into `dir`, created on `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: 0,
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of files written since the last `begin`.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// `<dir>/frame_NNNNNNNN.png` for `index`.
    pub fn path_for(&self, index: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:08}.png", index.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> CountdownResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            CountdownError::io(format!("create output dir '{}': {e}", self.dir.display()))
        })?;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RenderedFrame) -> CountdownResult<()> {
        write_png(&self.path_for(idx), frame)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> CountdownResult<()> {
        tracing::debug!(dir = %self.dir.display(), frames = self.written, "png sequence closed");
        Ok(())
    }
}

/// Encode one frame as an RGB8 PNG.
pub fn write_png(path: &Path, frame: &RenderedFrame) -> CountdownResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_rgb8(),
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| CountdownError::io(format!("write '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sink.rs"]
mod tests;
