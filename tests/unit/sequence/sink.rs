use super::*;

fn tiny_frame() -> RenderedFrame {
    RenderedFrame {
        width: 2,
        height: 2,
        data: [255, 0, 0, 255].repeat(4),
        premultiplied: true,
    }
}

#[test]
fn png_names_are_zero_padded() {
    let sink = PngSequenceSink::new("out");
    assert_eq!(
        sink.path_for(FrameIndex(0)),
        PathBuf::from("out").join("frame_00000000.png")
    );
    assert_eq!(
        sink.path_for(FrameIndex(1234)),
        PathBuf::from("out").join("frame_00001234.png")
    );
}

#[test]
fn png_sink_creates_dir_and_writes_rgb() {
    let dir = PathBuf::from("target").join("unit_png_sink").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let mut sink = PngSequenceSink::new(&dir);
    let config = SinkConfig {
        width: 2,
        height: 2,
        fps: 1,
        frame_count: 1,
    };
    sink.begin(config).unwrap();
    sink.push_frame(FrameIndex(7), &tiny_frame()).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.written(), 1);

    let img = image::open(dir.join("frame_00000007.png")).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgb8);
    assert_eq!(img.to_rgb8().get_pixel(1, 1).0, [255, 0, 0]);
}

#[test]
fn in_memory_sink_resets_on_begin() {
    let mut sink = InMemorySink::new();
    let config = SinkConfig {
        width: 2,
        height: 2,
        fps: 1,
        frame_count: 1,
    };
    sink.begin(config).unwrap();
    sink.push_frame(FrameIndex(0), &tiny_frame()).unwrap();
    sink.end().unwrap();
    assert!(sink.is_ended());
    sink.begin(config).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_ended());
    assert_eq!(sink.config(), Some(config));
}
