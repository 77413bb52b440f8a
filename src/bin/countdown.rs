use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use countdown::{
    Canvas, CountdownPlan, FrameRenderer, FrameRequest, LoadedFont, PngSequenceSink,
    SequenceOpts, StylePack, StyleRegistry, StyleSelection, preview_request, render_sequence,
    write_png,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "countdown", version, about = "Render countdown-timer frames as PNG files")]
struct Cli {
    /// JSON style pack merged over the built-in styles.
    #[arg(long, global = true)]
    styles: Option<PathBuf>,

    /// TrueType/OpenType font used instead of the built-in stroke face.
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available styles.
    List,
    /// Write one preview still per style (12:34:56 of 24:00:00).
    Preview(PreviewArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a full countdown as a numbered PNG sequence.
    Render(RenderArgs),
}

#[derive(Args, Debug, Clone, Copy)]
struct SizeArgs {
    /// Output width; defaults to the style's reference canvas.
    #[arg(long)]
    width: Option<u32>,

    /// Output height; defaults to the style's reference canvas.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Style name, or `all`.
    #[arg(long, default_value = "all")]
    style: StyleSelection,

    /// Output directory.
    #[arg(long, default_value = "previews")]
    out: PathBuf,

    #[command(flatten)]
    size: SizeArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Style name.
    #[arg(long)]
    style: String,

    /// Seconds left on the countdown.
    #[arg(long)]
    remaining: i64,

    /// Full countdown duration in seconds.
    #[arg(long)]
    total: i64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    size: SizeArgs,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Style name, or `all`.
    #[arg(long)]
    style: StyleSelection,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Seconds of countdown to render.
    #[arg(long, default_value_t = 86_400)]
    duration: u64,

    /// Remaining seconds on the first frame.
    #[arg(long, default_value_t = 86_400)]
    start: u64,

    /// Output root; frames go to `<output>/<style>/`.
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Render distinct seconds on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (defaults to the number of CPUs).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per render chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    #[command(flatten)]
    size: SizeArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let renderer = build_renderer(cli.styles.as_deref(), cli.font.as_deref())?;
    match cli.cmd {
        Command::List => cmd_list(&renderer),
        Command::Preview(args) => cmd_preview(&renderer, args),
        Command::Frame(args) => cmd_frame(&renderer, args),
        Command::Render(args) => cmd_render(&renderer, args),
    }
}

fn build_renderer(styles: Option<&Path>, font: Option<&Path>) -> anyhow::Result<FrameRenderer> {
    let mut renderer = FrameRenderer::new();
    if let Some(path) = styles {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read style pack '{}'", path.display()))?;
        let pack = StylePack::from_json_str(&json)
            .with_context(|| format!("parse style pack '{}'", path.display()))?;
        let registry = StyleRegistry::builtin()
            .with_overrides(pack.styles)
            .with_context(|| format!("apply style pack '{}'", path.display()))?;
        renderer = renderer.with_registry(registry);
    }
    if let Some(path) = font {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let font = LoadedFont::from_bytes(bytes)
            .with_context(|| format!("load font '{}'", path.display()))?;
        tracing::info!(family = font.family(), "using loaded font");
        renderer = renderer.with_face(Arc::new(font));
    }
    Ok(renderer)
}

/// Requested size, falling back to the style's reference canvas per axis.
fn output_size(renderer: &FrameRenderer, style: &str, size: SizeArgs) -> anyhow::Result<Canvas> {
    let reference = renderer.registry().get(style)?.canvas;
    Ok(Canvas::new(
        size.width.unwrap_or(reference.width),
        size.height.unwrap_or(reference.height),
    ))
}

fn cmd_list(renderer: &FrameRenderer) -> anyhow::Result<()> {
    let registry = renderer.registry();
    for style in registry.iter() {
        println!("{} - {}", style.name, style.description);
    }
    println!("{} styles", registry.len());
    Ok(())
}

fn cmd_preview(renderer: &FrameRenderer, args: PreviewArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    for name in args.style.resolve(renderer.registry())? {
        let size = output_size(renderer, &name, args.size)?;
        let frame = renderer
            .render(&preview_request(&name, size))
            .with_context(|| format!("render preview '{name}'"))?;
        let path = args.out.join(format!("preview_{name}.png"));
        write_png(&path, &frame)?;
        tracing::info!(path = %path.display(), "wrote preview");
    }
    Ok(())
}

fn cmd_frame(renderer: &FrameRenderer, args: FrameArgs) -> anyhow::Result<()> {
    let size = output_size(renderer, &args.style, args.size)?;
    let req = FrameRequest::new(
        &args.style,
        args.remaining,
        args.total,
        i64::from(size.width),
        i64::from(size.height),
    );
    let frame = renderer.render(&req)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;
    tracing::info!(path = %args.out.display(), "wrote frame");
    Ok(())
}

fn cmd_render(renderer: &FrameRenderer, args: RenderArgs) -> anyhow::Result<()> {
    let plan = CountdownPlan::new(args.fps, args.duration, args.start)?;
    let opts = SequenceOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let names = args.style.resolve(renderer.registry())?;
    tracing::info!(
        styles = names.len(),
        frames_per_style = plan.frame_count(),
        fps = plan.fps(),
        "rendering countdown"
    );

    for name in names {
        let size = output_size(renderer, &name, args.size)?;
        let dir = args.output.join(&name);
        let mut sink = PngSequenceSink::new(&dir);
        let stats = render_sequence(renderer, &name, &plan, size, &mut sink, &opts)
            .with_context(|| format!("render style '{name}'"))?;
        tracing::info!(
            style = %name,
            frames = stats.frames_total,
            rendered = stats.frames_rendered,
            dir = %dir.display(),
            "style done"
        );
        tracing::info!(
            "assemble with: ffmpeg -framerate {fps} -i {frames} -c:v libx264 -pix_fmt yuv420p {video}",
            fps = plan.fps(),
            frames = dir.join("frame_%08d.png").display(),
            video = args.output.join(format!("{name}.mp4")).display(),
        );
    }
    Ok(())
}
