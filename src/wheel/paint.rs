use std::sync::Arc;

use crate::{
    foundation::{
        core::{Point, Rgb8, WheelGeometry},
        math::segment_step,
    },
    palette::{
        items::WheelItem,
        table::{LINE_INDEX, Palette},
    },
    raster::{
        canvas::Canvas,
        text::{TextRenderer, draw_text_centered},
        triangle::fill_triangle_index,
    },
};

/// Distance between the rim and a segment's label anchor.
pub const LABEL_INSET: f64 = 50.0;
/// Gap between the top of the rim and the start of the pointer.
pub const POINTER_GAP: f64 = 10.0;
pub const POINTER_LEN: i32 = 30;

/// Everything a frame needs besides the rotation angle.
#[derive(Clone)]
pub struct WheelScene<'a> {
    pub items: &'a [WheelItem],
    pub palette: Arc<Palette>,
    pub width: u32,
    pub height: u32,
    pub geometry: WheelGeometry,
    pub text: &'a dyn TextRenderer,
}

impl WheelScene<'_> {
    /// Paints one frame with the first segment starting at `start_angle`.
    pub fn paint(&self, start_angle: f64) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, Arc::clone(&self.palette));
        let step = segment_step(self.items.len());

        let mut angle = start_angle;
        for item in self.items {
            self.paint_segment(&mut canvas, item, angle, step);
            angle += step;
        }

        self.paint_pointer(&mut canvas);
        canvas
    }

    /// Rim triangle plus three triangles filling the outer arc, then the label on top.
    fn paint_segment(&self, canvas: &mut Canvas, item: &WheelItem, angle: f64, step: f64) {
        let g = &self.geometry;
        let index = self.palette.index(item.primary);

        let center = g.center_px();
        let start = g.rim(angle);
        let end = g.rim(angle + step);
        fill_triangle_index(canvas, center, start, end, index);

        let mid = g.rim(angle + step / 2.0);
        let q1 = g.rim(angle + step / 4.0);
        let q3 = g.rim(angle + (step / 4.0) * 3.0);
        fill_triangle_index(canvas, start, q1, mid, index);
        fill_triangle_index(canvas, start, mid, end, index);
        fill_triangle_index(canvas, mid, q3, end, index);

        let anchor = g.polar(angle + step / 2.0, g.radius - LABEL_INSET);
        draw_text_centered(self.text, canvas, anchor, &item.label, Rgb8::WHITE);
    }

    /// Fixed 3px wide marker hanging over the top of the wheel.
    fn paint_pointer(&self, canvas: &mut Canvas) {
        let g = &self.geometry;
        let x = g.center.x as i32;
        let top = (g.center.y - g.radius - POINTER_GAP) as i32;
        for dy in 0..POINTER_LEN {
            for dx in -1..=1 {
                canvas.set(Point::new(x + dx, top + dy), LINE_INDEX);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wheel/paint.rs"]
mod tests;
