use std::{borrow::Cow, io::Write};

use anyhow::Context as _;

use crate::{
    anim::Animation,
    foundation::error::{WheelError, WheelResult},
    palette::table::MAX_PALETTE_LEN,
};

pub use ::gif::Repeat;

/// Options for [`encode_gif`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifOptions {
    /// Loop behaviour written as a NETSCAPE2.0 extension; `None` omits the extension and leaves
    /// looping to the viewer.
    pub repeat: Option<Repeat>,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            repeat: Some(Repeat::Infinite),
        }
    }
}

/// Serializes `anim` into a complete GIF stream.
///
/// The shared palette becomes the global color table and every frame covers the whole canvas.
/// Either the full stream is returned or an error; partial output never escapes.
#[tracing::instrument(skip(anim), fields(frames = anim.len(), width = anim.width(), height = anim.height()))]
pub fn encode_gif(anim: &Animation, opts: &GifOptions) -> WheelResult<Vec<u8>> {
    let (width, height) = check_encodable(anim)?;

    let table = anim.palette().to_rgb_bytes();
    let frame_len = anim.width() as usize * anim.height() as usize;
    let mut out = Vec::with_capacity(64 + table.len() + anim.len() * frame_len / 2);

    let mut enc = ::gif::Encoder::new(&mut out, width, height, &table)?;
    if let Some(repeat) = opts.repeat {
        enc.set_repeat(repeat)?;
    }

    for frame in anim.frames() {
        let gif_frame = ::gif::Frame {
            width,
            height,
            delay: frame.delay,
            buffer: Cow::Borrowed(frame.canvas.pixels()),
            ..::gif::Frame::default()
        };
        enc.write_frame(&gif_frame)?;
    }

    enc.into_inner()
        .map_err(|e| WheelError::encoding(format!("failed to finish gif stream: {e}")))?;

    tracing::debug!(bytes = out.len(), "encoded gif");
    Ok(out)
}

/// Encodes in memory first, then writes the finished stream to `writer`.
pub fn write_gif<W: Write>(anim: &Animation, opts: &GifOptions, mut writer: W) -> WheelResult<()> {
    let bytes = encode_gif(anim, opts)?;
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .context("write gif stream")?;
    Ok(())
}

fn check_encodable(anim: &Animation) -> WheelResult<(u16, u16)> {
    if anim.is_empty() {
        return Err(WheelError::encoding("animation has no frames"));
    }
    if anim.palette().len() > MAX_PALETTE_LEN {
        return Err(WheelError::encoding(format!(
            "palette has {} colors, gif supports at most {MAX_PALETTE_LEN}",
            anim.palette().len()
        )));
    }
    let width = u16::try_from(anim.width())
        .map_err(|_| WheelError::encoding(format!("width {} exceeds gif limit", anim.width())))?;
    let height = u16::try_from(anim.height())
        .map_err(|_| WheelError::encoding(format!("height {} exceeds gif limit", anim.height())))?;
    Ok((width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
