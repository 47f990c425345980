use std::sync::{Arc, Mutex};

use super::*;
use crate::palette::table::Palette;

fn canvas(w: u32, h: u32) -> Canvas {
    let palette = Palette::new(vec![Rgb8::WHITE, Rgb8::BLACK]).unwrap();
    Canvas::new(w, h, Arc::new(palette))
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<(Point, String, u8)>>,
}

impl TextRenderer for Recorder {
    fn measure(&self, text: &str) -> i32 {
        text.len() as i32 * 7
    }

    fn draw(&self, _canvas: &mut Canvas, origin: Point, text: &str, index: u8) {
        self.calls
            .lock()
            .unwrap()
            .push((origin, text.to_string(), index));
    }
}

#[test]
fn centered_draw_offsets_by_half_the_measured_width() {
    let r = Recorder::default();
    let mut c = canvas(10, 10);
    draw_text_centered(&r, &mut c, Point::new(100, 40), "abc", Rgb8::BLACK);

    let calls = r.calls.lock().unwrap();
    // 21px wide, half truncates to 10
    assert_eq!(calls.as_slice(), &[(Point::new(90, 40), "abc".to_string(), 1)]);
}

#[test]
fn bitmap_font_measures_chars_not_bytes() {
    assert_eq!(BitmapFont.measure(""), 0);
    assert_eq!(BitmapFont.measure("ab"), 16);
    assert_eq!(BitmapFont.measure("né"), 16);
}

#[test]
fn bitmap_font_draws_above_baseline() {
    let mut c = canvas(16, 16);
    BitmapFont.draw(&mut c, Point::new(0, 10), "I", 1);

    let inked: Vec<(i32, i32)> = (0..16)
        .flat_map(|y| (0..16).map(move |x| (x, y)))
        .filter(|&(x, y)| c.get(x, y) == Some(1))
        .collect();
    assert!(!inked.is_empty());
    // rows 0..=6 of the glyph land on y 3..=9
    assert!(inked.iter().all(|&(x, y)| (3..=9).contains(&y) && x < 8));
    // 'I' top bar is 0x1E: columns 1..=4
    assert_eq!(c.get(0, 3), Some(0));
    assert_eq!(c.get(1, 3), Some(1));
    assert_eq!(c.get(4, 3), Some(1));
    assert_eq!(c.get(5, 3), Some(0));
}

#[test]
fn bitmap_font_clips_at_canvas_edges() {
    let mut c = canvas(4, 4);
    BitmapFont.draw(&mut c, Point::new(-3, 2), "WW", 1);
    assert!(c.pixels().iter().all(|&p| p <= 1));
}
