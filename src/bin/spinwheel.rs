use std::{
    fs::File,
    io::{BufReader, BufWriter, Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spinwheel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animated wheel as a GIF.
    Render(RenderArgs),
    /// Render a single scheduled frame as a PNG.
    Frame(FrameArgs),
    /// Read a request JSON on stdin and print the base64 GIF response JSON on stdout.
    Handle(WheelArgs),
}

#[derive(Args, Debug)]
struct WheelArgs {
    /// JSON file with any of `frame_count`, `width`, `height`, `radius`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of spin frames (between the two pause frames).
    #[arg(long)]
    frames: Option<u32>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Wheel radius in pixels.
    #[arg(long)]
    radius: Option<u32>,

    /// Rasterize frames on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (defaults to one per core).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Comma separated list of items.
    #[arg(short, long)]
    items: String,

    /// Output GIF path.
    #[arg(short, long)]
    out: PathBuf,

    /// Play the animation once instead of looping.
    #[arg(long)]
    once: bool,

    #[command(flatten)]
    wheel: WheelArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Comma separated list of items.
    #[arg(short, long)]
    items: String,

    /// Scheduled frame index (0 is the leading pause).
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Output PNG path.
    #[arg(short, long)]
    out: PathBuf,

    #[command(flatten)]
    wheel: WheelArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Handle(args) => cmd_handle(args),
    }
}

impl WheelArgs {
    fn config(&self) -> anyhow::Result<spinwheel::WheelConfig> {
        let mut cfg = match &self.config {
            Some(path) => read_config_json(path)?,
            None => spinwheel::WheelConfig::default(),
        };
        if let Some(v) = self.frames {
            cfg.frame_count = v;
        }
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.radius {
            cfg.radius = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    fn threading(&self) -> spinwheel::RenderThreading {
        spinwheel::RenderThreading {
            parallel: self.parallel,
            threads: self.threads,
        }
    }
}

fn read_config_json(path: &Path) -> anyhow::Result<spinwheel::WheelConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg: spinwheel::WheelConfig = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config JSON '{}'", path.display()))?;
    Ok(cfg)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = args.wheel.config()?;
    let items = spinwheel::parse_items(&args.items);
    let opts = spinwheel::RenderOpts {
        threading: args.wheel.threading(),
        gif: spinwheel::GifOptions {
            repeat: (!args.once).then_some(spinwheel::Repeat::Infinite),
        },
        ..spinwheel::RenderOpts::default()
    };

    // render before touching the filesystem so a bad item list leaves no empty file behind
    let bytes = spinwheel::render_gif(&items, &cfg, &opts)?;

    ensure_parent_dir(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    w.write_all(&bytes)
        .and_then(|()| w.flush())
        .with_context(|| format!("write gif '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.wheel.config()?;
    let items = spinwheel::parse_items(&args.items);
    let frame = spinwheel::render_frame(&items, &cfg, args.index, &spinwheel::BitmapFont)?;

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.canvas.to_rgba8(),
        frame.canvas.width(),
        frame.canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} (delay {})", args.out.display(), frame.delay);
    Ok(())
}

fn cmd_handle(args: WheelArgs) -> anyhow::Result<()> {
    let cfg = args.config()?;
    let opts = spinwheel::RenderOpts {
        threading: args.threading(),
        ..spinwheel::RenderOpts::default()
    };

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("read request from stdin")?;
    let req: spinwheel::GifRequest =
        serde_json::from_str(&input).context("parse request JSON")?;

    let resp = spinwheel::handle_request_with(&req, &cfg, &opts)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &resp).context("write response JSON")?;
    writeln!(out).context("write response JSON")?;
    Ok(())
}
