use std::{io::Write, sync::Arc};

use rayon::prelude::*;

use crate::{
    anim::{Animation, Frame},
    encode::gif::{GifOptions, encode_gif, write_gif},
    foundation::{
        config::{WheelConfig, validate_items},
        core::WheelGeometry,
        error::{WheelError, WheelResult},
    },
    palette::{
        items::{WheelItem, assign_items},
        table::Palette,
    },
    raster::text::{BitmapFont, TextRenderer},
    wheel::{
        paint::WheelScene,
        schedule::frame_schedule,
        state::{FramePose, plan_poses},
    },
};

/// How the per-frame rasterization is distributed.
///
/// The angle trajectory is always derived serially; only painting the known poses runs in
/// parallel.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Worker count for the parallel path; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl RenderThreading {
    pub fn validate(&self) -> WheelResult<()> {
        if self.threads == Some(0) {
            return Err(WheelError::invalid_input(
                "render threads must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Options for [`render_animation_with`].
#[derive(Clone)]
pub struct RenderOpts<'a> {
    pub threading: RenderThreading,
    pub text: &'a dyn TextRenderer,
    pub gif: GifOptions,
}

impl Default for RenderOpts<'_> {
    fn default() -> Self {
        Self {
            threading: RenderThreading::default(),
            text: &BitmapFont,
            gif: GifOptions::default(),
        }
    }
}

/// Renders the full wheel animation with the built-in font, sequentially.
pub fn render_animation<S: AsRef<str>>(labels: &[S], cfg: &WheelConfig) -> WheelResult<Animation> {
    render_animation_with(labels, cfg, &RenderOpts::default())
}

/// Renders `cfg.frame_count + 2` frames: a pause, the spin, and a long pause on the result.
///
/// Input is validated before any canvas is allocated.
#[tracing::instrument(skip(labels, opts), fields(items = labels.len()))]
pub fn render_animation_with<S: AsRef<str>>(
    labels: &[S],
    cfg: &WheelConfig,
    opts: &RenderOpts<'_>,
) -> WheelResult<Animation> {
    opts.threading.validate()?;
    let prepared = Prepared::new(labels, cfg)?;
    let scene = prepared.scene(cfg, opts.text);
    let poses = plan_poses(prepared.items.len(), &frame_schedule(cfg.frame_count));

    let canvases = if opts.threading.parallel {
        let pool = worker_pool(opts.threading.threads)?;
        pool.install(|| {
            poses
                .par_iter()
                .map(|pose| scene.paint(pose.state.angle))
                .collect::<Vec<_>>()
        })
    } else {
        poses.iter().map(|pose| scene.paint(pose.state.angle)).collect()
    };

    let mut anim = Animation::new(cfg.width, cfg.height, Arc::clone(&prepared.palette));
    for (pose, canvas) in poses.iter().zip(canvases) {
        anim.push(Frame {
            canvas,
            delay: pose.frame.delay,
        })?;
    }

    tracing::debug!(
        frames = anim.len(),
        palette = anim.palette().len(),
        parallel = opts.threading.parallel,
        "rendered wheel animation"
    );
    Ok(anim)
}

/// Renders only the scheduled frame at `index` (0 is the leading pause).
///
/// The trajectory up to that frame is still derived, so the result equals the same frame of a
/// full render.
pub fn render_frame<S: AsRef<str>>(
    labels: &[S],
    cfg: &WheelConfig,
    index: usize,
    text: &dyn TextRenderer,
) -> WheelResult<Frame> {
    let prepared = Prepared::new(labels, cfg)?;
    let schedule = frame_schedule(cfg.frame_count);
    if index >= schedule.len() {
        return Err(WheelError::invalid_input(format!(
            "frame index {index} out of range (animation has {} frames)",
            schedule.len()
        )));
    }

    let poses = plan_poses(prepared.items.len(), &schedule[..=index]);
    let FramePose { frame, state } = poses[index];
    let canvas = prepared.scene(cfg, text).paint(state.angle);
    Ok(Frame {
        canvas,
        delay: frame.delay,
    })
}

/// Renders and encodes to GIF bytes.
pub fn render_gif<S: AsRef<str>>(
    labels: &[S],
    cfg: &WheelConfig,
    opts: &RenderOpts<'_>,
) -> WheelResult<Vec<u8>> {
    let anim = render_animation_with(labels, cfg, opts)?;
    encode_gif(&anim, &opts.gif)
}

/// Renders and writes the GIF stream to `writer`. Nothing is written if rendering fails.
pub fn render_gif_to<S: AsRef<str>, W: Write>(
    labels: &[S],
    cfg: &WheelConfig,
    opts: &RenderOpts<'_>,
    writer: W,
) -> WheelResult<()> {
    let anim = render_animation_with(labels, cfg, opts)?;
    write_gif(&anim, &opts.gif, writer)
}

struct Prepared {
    items: Vec<WheelItem>,
    palette: Arc<Palette>,
}

impl Prepared {
    fn new<S: AsRef<str>>(labels: &[S], cfg: &WheelConfig) -> WheelResult<Self> {
        validate_items(labels)?;
        cfg.validate()?;
        let items = assign_items(labels);
        let palette = Arc::new(Palette::for_items(&items)?);
        Ok(Self { items, palette })
    }

    fn scene<'a>(&'a self, cfg: &WheelConfig, text: &'a dyn TextRenderer) -> WheelScene<'a> {
        WheelScene {
            items: &self.items,
            palette: Arc::clone(&self.palette),
            width: cfg.width,
            height: cfg.height,
            geometry: WheelGeometry::new(cfg.width, cfg.height, cfg.radius),
            text,
        }
    }
}

fn worker_pool(threads: Option<usize>) -> WheelResult<rayon::ThreadPool> {
    threads
        .into_iter()
        .fold(rayon::ThreadPoolBuilder::new(), |b, n| b.num_threads(n))
        .build()
        .map_err(|e| WheelError::Other(anyhow::Error::new(e).context("start render workers")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
