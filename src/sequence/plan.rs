use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{CountdownError, CountdownResult};

/// Frame-by-frame schedule of a countdown video.
///
/// Every second from `start_seconds` down to `max(0, start_seconds - duration_seconds)` is held
/// for exactly `fps` frames, so the final value gets a full second on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CountdownPlan {
    fps: u32,
    duration_seconds: u64,
    start_seconds: u64,
}

impl CountdownPlan {
    /// Plan of `duration_seconds` counting down from `start_seconds` at `fps`.
    pub fn new(fps: u32, duration_seconds: u64, start_seconds: u64) -> CountdownResult<Self> {
        if fps == 0 {
            return Err(CountdownError::invalid_input("fps must be >= 1"));
        }
        if i64::try_from(start_seconds).is_err() {
            return Err(CountdownError::invalid_input(format!(
                "start seconds out of range (got {start_seconds})"
            )));
        }
        let plan = Self {
            fps,
            duration_seconds,
            start_seconds,
        };
        if plan.shown_seconds().checked_mul(u64::from(fps)).is_none() {
            return Err(CountdownError::invalid_input(
                "frame count overflows u64",
            ));
        }
        Ok(plan)
    }

    /// Frames per second.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Requested countdown length.
    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    /// Remaining seconds on the first frame.
    pub fn start_seconds(&self) -> u64 {
        self.start_seconds
    }

    /// Number of distinct second values shown.
    pub fn shown_seconds(&self) -> u64 {
        self.duration_seconds.min(self.start_seconds) + 1
    }

    /// `shown_seconds() * fps`.
    pub fn frame_count(&self) -> u64 {
        self.shown_seconds() * u64::from(self.fps)
    }

    /// Every frame of the countdown, `0..frame_count()`.
    pub fn range(&self) -> FrameRange {
        FrameRange::first(self.frame_count())
    }

    /// Total used for the elapsed ratio; a zero start still renders as a finished countdown.
    pub fn total_seconds(&self) -> i64 {
        self.start_seconds.max(1) as i64
    }

    /// Remaining seconds shown at `index`, or `None` past the end.
    pub fn remaining_at(&self, index: FrameIndex) -> Option<i64> {
        if !self.range().contains(index) {
            return None;
        }
        Some((self.start_seconds - index.0 / u64::from(self.fps)) as i64)
    }

    /// Lazily yields `(index, remaining)` for every frame.
    pub fn frames(&self) -> PlanFrames {
        PlanFrames {
            plan: *self,
            left: self.range(),
        }
    }
}

/// Iterator returned by [`CountdownPlan::frames`].
#[derive(Clone, Debug)]
pub struct PlanFrames {
    plan: CountdownPlan,
    left: FrameRange,
}

impl Iterator for PlanFrames {
    type Item = (FrameIndex, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.left.pop_front()?;
        let remaining = self.plan.remaining_at(index)?;
        Some((index, remaining))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.left.len_frames()).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/plan.rs"]
mod tests;
