use std::sync::Arc;

use crate::{
    foundation::core::Point,
    palette::table::{BACKGROUND_INDEX, Palette},
};

/// One frame's pixel buffer: `width * height` palette indices in row-major order.
///
/// Every stored index is a valid entry of the shared palette. Writes outside the canvas bounds
/// and writes of indices the palette does not contain are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    palette: Arc<Palette>,
}

impl Canvas {
    /// A canvas cleared to the background index.
    pub fn new(width: u32, height: u32, palette: Arc<Palette>) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND_INDEX; width as usize * height as usize],
            palette,
        }
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

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn accepts(&self, index: u8) -> bool {
        let ok = usize::from(index) < self.palette.len();
        debug_assert!(ok, "palette index {index} out of range");
        ok
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, p: Point, index: u8) {
        if !self.accepts(index) {
            return;
        }
        if let Some(i) = self.offset(p.x, p.y) {
            self.pixels[i] = index;
        }
    }

    /// Fills `x0..=x1` on row `y`, clipped to the canvas. An empty range paints nothing.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, index: u8) {
        if !self.accepts(index) || y < 0 || y as u32 >= self.height || x1 < x0 {
            return;
        }
        let max_x = self.width as i32 - 1;
        let (lo, hi) = (x0.max(0), x1.min(max_x));
        if lo > hi {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + lo as usize..=row + hi as usize].fill(index);
    }

    /// Expands the indices to straight RGBA8 (alpha always 255).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let lut: Vec<[u8; 4]> = self
            .palette
            .colors()
            .iter()
            .map(|c| [c.r, c.g, c.b, 255])
            .collect();
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &idx in &self.pixels {
            out.extend_from_slice(&lut[usize::from(idx)]);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
