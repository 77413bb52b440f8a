use super::*;
use crate::sequence::sink::InMemorySink;

const SMALL: Canvas = Canvas::new(64, 36);

fn run(plan: &CountdownPlan, opts: &SequenceOpts) -> (SequenceStats, InMemorySink) {
    let mut sink = InMemorySink::new();
    let stats = render_sequence(
        &FrameRenderer::new(),
        "modern",
        plan,
        SMALL,
        &mut sink,
        opts,
    )
    .unwrap();
    (stats, sink)
}

#[test]
fn each_second_is_rendered_once_per_chunk() {
    let plan = CountdownPlan::new(2, 3, 3).unwrap();
    let (stats, sink) = run(&plan, &SequenceOpts::default());
    assert_eq!(
        stats,
        SequenceStats {
            frames_total: 8,
            frames_rendered: 4,
            frames_elided: 4,
        }
    );
    assert!(sink.is_ended());
    assert_eq!(sink.config().map(|c| c.frame_count), Some(8));

    let (stats, _) = run(
        &plan,
        &SequenceOpts {
            chunk_size: 3,
            ..SequenceOpts::default()
        },
    );
    assert_eq!(stats.frames_rendered, 5);
    assert_eq!(stats.frames_elided, 3);
}

#[test]
fn frames_of_one_second_are_identical() {
    let plan = CountdownPlan::new(2, 1, 1).unwrap();
    let (_, sink) = run(&plan, &SequenceOpts::default());
    let frames: Vec<&RenderedFrame> = sink.frames().iter().map(|(_, f)| f).collect();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0], frames[1]);
    assert_eq!(frames[2], frames[3]);
    assert_ne!(frames[1], frames[2]);
}

#[test]
fn zero_threads_is_rejected() {
    let plan = CountdownPlan::new(1, 1, 1).unwrap();
    let mut sink = InMemorySink::new();
    for parallel in [false, true] {
        let opts = SequenceOpts {
            parallel,
            threads: Some(0),
            ..SequenceOpts::default()
        };
        let err = render_sequence(&FrameRenderer::new(), "modern", &plan, SMALL, &mut sink, &opts)
            .unwrap_err();
        assert!(matches!(err, CountdownError::InvalidInput(_)));
    }
}

#[test]
fn bad_style_fails_before_the_sink_opens() {
    let plan = CountdownPlan::new(1, 1, 1).unwrap();
    let mut sink = InMemorySink::new();
    let err = render_sequence(
        &FrameRenderer::new(),
        "not-a-style",
        &plan,
        SMALL,
        &mut sink,
        &SequenceOpts::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CountdownError::UnsupportedStyle(_)));
    assert!(sink.config().is_none());
}

#[test]
fn preview_shows_twelve_thirty_four_fifty_six() {
    let req = preview_request("neon", Canvas::new(1280, 720));
    assert_eq!(req.remaining_seconds, 45_296);
    assert_eq!(req.total_seconds, 86_400);
    assert_eq!((req.width, req.height), (1280, 720));
    assert_eq!(req.style, "neon");
}

#[test]
fn sink_receives_every_index_of_the_plan_range() {
    let plan = CountdownPlan::new(3, 2, 5).unwrap();
    let (stats, sink) = run(
        &plan,
        &SequenceOpts {
            chunk_size: 4,
            ..SequenceOpts::default()
        },
    );
    let range = plan.range();
    assert_eq!(stats.frames_total, range.len_frames());
    let pushed: Vec<FrameIndex> = sink.frames().iter().map(|(i, _)| *i).collect();
    let expected: Vec<FrameIndex> = (range.start.0..range.end.0).map(FrameIndex).collect();
    assert_eq!(pushed, expected);
}
