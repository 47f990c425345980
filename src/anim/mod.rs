//! Rendered frames and the animation handed to the encoder.

use std::sync::Arc;

use crate::{
    foundation::error::{WheelError, WheelResult},
    palette::table::{BACKGROUND_INDEX, Palette},
    raster::canvas::Canvas,
};

/// A finished canvas and how long it stays on screen (GIF centiseconds).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub canvas: Canvas,
    pub delay: u16,
}

/// Ordered frames sharing one palette.
#[derive(Clone, Debug)]
pub struct Animation {
    width: u32,
    height: u32,
    palette: Arc<Palette>,
    background_index: u8,
    frames: Vec<Frame>,
}

impl Animation {
    pub fn new(width: u32, height: u32, palette: Arc<Palette>) -> Self {
        Self {
            width,
            height,
            palette,
            background_index: BACKGROUND_INDEX,
            frames: Vec::new(),
        }
    }

    /// Appends a frame; it must match the animation's size and palette.
    pub fn push(&mut self, frame: Frame) -> WheelResult<()> {
        let c = &frame.canvas;
        if c.width() != self.width || c.height() != self.height {
            return Err(WheelError::invalid_input(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                c.width(),
                c.height(),
                self.width,
                self.height
            )));
        }
        if !Arc::ptr_eq(c.palette(), &self.palette) && **c.palette() != *self.palette {
            return Err(WheelError::invalid_input(
                "frame palette differs from the animation palette",
            ));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    pub fn background_index(&self) -> u8 {
        self.background_index
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn delays(&self) -> Vec<u16> {
        self.frames.iter().map(|f| f.delay).collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/mod.rs"]
mod tests;
