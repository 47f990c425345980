use crate::{
    foundation::core::{Point, Rgb8},
    raster::{canvas::Canvas, font8x8},
};

/// Text drawing capability used for segment labels.
///
/// `origin` is the left end of the text baseline. Implementations must only write palette
/// indices handed to them.
pub trait TextRenderer: Send + Sync {
    /// Advance width of `text` in pixels.
    fn measure(&self, text: &str) -> i32;

    fn draw(&self, canvas: &mut Canvas, origin: Point, text: &str, index: u8);
}

/// Draws `text` horizontally centered on `anchor`, whose `y` is the baseline.
pub fn draw_text_centered(
    renderer: &dyn TextRenderer,
    canvas: &mut Canvas,
    anchor: Point,
    text: &str,
    color: Rgb8,
) {
    let index = canvas.palette().index(color);
    let width = renderer.measure(text);
    let origin = Point::new(anchor.x - width / 2, anchor.y);
    renderer.draw(canvas, origin, text, index);
}

/// Fixed-advance renderer backed by the built-in 8x8 font.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapFont;

impl TextRenderer for BitmapFont {
    fn measure(&self, text: &str) -> i32 {
        text.chars().count() as i32 * font8x8::GLYPH_WIDTH
    }

    fn draw(&self, canvas: &mut Canvas, origin: Point, text: &str, index: u8) {
        let top = origin.y - font8x8::ASCENT;
        for (n, ch) in text.chars().enumerate() {
            let left = origin.x + n as i32 * font8x8::GLYPH_WIDTH;
            for (row, bits) in font8x8::glyph_or_fallback(ch).iter().enumerate() {
                for col in 0..font8x8::GLYPH_WIDTH {
                    if bits & (1 << col) != 0 {
                        canvas.set(Point::new(left + col, top + row as i32), index);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/text.rs"]
mod tests;
