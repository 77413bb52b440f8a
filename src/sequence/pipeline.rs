use rayon::prelude::*;

use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{CountdownError, CountdownResult};
use crate::render::frame::RenderedFrame;
use crate::render::renderer::{FrameRenderer, FrameRequest};
use crate::sequence::plan::CountdownPlan;
use crate::sequence::sink::{FrameSink, SinkConfig};

/// Remaining time shown on preview stills (12:34:56).
pub const PREVIEW_REMAINING_SECONDS: i64 = 12 * 3600 + 34 * 60 + 56;
/// Countdown length assumed for preview stills (24h).
pub const PREVIEW_TOTAL_SECONDS: i64 = 24 * 3600;

/// How [`render_sequence`] schedules its work.
#[derive(Clone, Debug)]
pub struct SequenceOpts {
    /// Render the distinct seconds of each chunk on a rayon pool.
    pub parallel: bool,
    /// Frames pulled from the plan per chunk; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Pool size when `parallel`; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for SequenceOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters reported by [`render_sequence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceStats {
    /// Frames pushed to the sink.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames that reused a render of the same second.
    pub frames_elided: u64,
}

/// Request for the representative preview still of `style`.
pub fn preview_request(style: &str, size: Canvas) -> FrameRequest {
    FrameRequest::new(
        style,
        PREVIEW_REMAINING_SECONDS,
        PREVIEW_TOTAL_SECONDS,
        i64::from(size.width),
        i64::from(size.height),
    )
}

/// Render every frame of `plan` into `sink`, in index order.
///
/// Frames are processed `opts.chunk_size` at a time. Within a chunk each distinct second is
/// rendered once and pushed for all of its frames.
#[tracing::instrument(level = "info", skip(renderer, sink, opts), fields(frames = plan.frame_count()))]
pub fn render_sequence(
    renderer: &FrameRenderer,
    style: &str,
    plan: &CountdownPlan,
    size: Canvas,
    sink: &mut dyn FrameSink,
    opts: &SequenceOpts,
) -> CountdownResult<SequenceStats> {
    let (w, h) = (i64::from(size.width), i64::from(size.height));
    Canvas::from_request(w, h)?;
    renderer.registry().get(style)?;
    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        validate_threads(opts.threads)?;
        None
    };

    let total = plan.total_seconds();
    let frames_total = plan.range().len_frames();
    let chunk_size = opts.chunk_size.max(1);
    let progress_every = u64::from(plan.fps()) * 60;
    let mut next_progress = progress_every;
    let mut stats = SequenceStats::default();

    sink.begin(SinkConfig {
        width: size.width,
        height: size.height,
        fps: plan.fps(),
        frame_count: frames_total,
    })?;

    let render_one =
        |remaining: &i64| renderer.render(&FrameRequest::new(style, *remaining, total, w, h));

    let mut frames = plan.frames();
    loop {
        let chunk: Vec<(FrameIndex, i64)> = frames.by_ref().take(chunk_size).collect();
        let Some(&(_, last_remaining)) = chunk.last() else {
            break;
        };

        // Remaining time never increases with the index, so equal seconds are adjacent.
        let mut distinct = Vec::<i64>::new();
        let mut slot_of = Vec::<usize>::with_capacity(chunk.len());
        for &(_, remaining) in &chunk {
            if distinct.last() != Some(&remaining) {
                distinct.push(remaining);
            }
            slot_of.push(distinct.len() - 1);
        }

        let rendered: Vec<CountdownResult<RenderedFrame>> = match &pool {
            Some(pool) => pool.install(|| distinct.par_iter().map(&render_one).collect()),
            None => distinct.iter().map(&render_one).collect(),
        };
        let rendered = rendered.into_iter().collect::<CountdownResult<Vec<_>>>()?;

        for (&(index, _), &slot) in chunk.iter().zip(&slot_of) {
            sink.push_frame(index, &rendered[slot])?;
        }

        stats.frames_total += chunk.len() as u64;
        stats.frames_rendered += distinct.len() as u64;
        stats.frames_elided += (chunk.len() - distinct.len()) as u64;

        if stats.frames_total >= next_progress {
            tracing::info!(
                style,
                done = stats.frames_total,
                total = frames_total,
                remaining = last_remaining,
                "sequence progress"
            );
            next_progress = (stats.frames_total / progress_every + 1) * progress_every;
        }
    }

    sink.end()?;
    tracing::info!(
        style,
        frames = stats.frames_total,
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "sequence complete"
    );
    Ok(stats)
}

fn validate_threads(threads: Option<usize>) -> CountdownResult<()> {
    if threads == Some(0) {
        return Err(CountdownError::invalid_input(
            "threads must be >= 1 when set",
        ));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> CountdownResult<rayon::ThreadPool> {
    validate_threads(threads)?;
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/pipeline.rs"]
mod tests;
