use std::sync::Arc;

use super::*;
use crate::palette::table::Palette;

const INK: Rgb8 = Rgb8::new(10, 200, 30);

fn canvas(w: u32, h: u32) -> Canvas {
    let palette = Palette::new(vec![Rgb8::WHITE, Rgb8::BLACK, INK]).unwrap();
    Canvas::new(w, h, Arc::new(palette))
}

/// Filled column range per row, `None` for rows without ink.
fn spans(c: &Canvas) -> Vec<Option<(i32, i32)>> {
    (0..c.height() as i32)
        .map(|y| {
            let xs: Vec<i32> = (0..c.width() as i32)
                .filter(|&x| c.get(x, y) == Some(2))
                .collect();
            xs.first().map(|&first| (first, *xs.last().unwrap()))
        })
        .collect()
}

#[test]
fn right_triangle_with_horizontal_top() {
    let mut c = canvas(6, 6);
    fill_triangle(&mut c, Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), INK);

    assert_eq!(
        spans(&c),
        vec![
            Some((0, 4)),
            Some((0, 3)),
            Some((0, 2)),
            Some((0, 1)),
            Some((0, 0)),
            None,
        ]
    );
}

#[test]
fn right_triangle_with_horizontal_bottom() {
    let mut c = canvas(6, 6);
    fill_triangle(&mut c, Point::new(4, 4), Point::new(0, 0), Point::new(0, 4), INK);

    assert_eq!(
        spans(&c),
        vec![
            Some((0, 0)),
            Some((0, 1)),
            Some((0, 2)),
            Some((0, 3)),
            Some((0, 4)),
            None,
        ]
    );
}

#[test]
fn vertex_order_does_not_matter() {
    let (a, b, d) = (Point::new(1, 1), Point::new(7, 3), Point::new(3, 8));
    let mut reference = canvas(10, 10);
    fill_triangle(&mut reference, a, b, d, INK);

    for (p0, p1, p2) in [(b, a, d), (d, b, a), (a, d, b), (b, d, a), (d, a, b)] {
        let mut c = canvas(10, 10);
        fill_triangle(&mut c, p0, p1, p2, INK);
        assert_eq!(c.pixels(), reference.pixels());
    }
}

#[test]
fn flat_triangle_fills_single_row() {
    let mut c = canvas(8, 4);
    fill_triangle(&mut c, Point::new(1, 2), Point::new(5, 2), Point::new(3, 2), INK);

    let s = spans(&c);
    assert_eq!(s[2], Some((1, 5)));
    assert_eq!(s.iter().filter(|r| r.is_some()).count(), 1);
}

#[test]
fn off_canvas_parts_are_clipped() {
    let mut c = canvas(4, 4);
    fill_triangle(&mut c, Point::new(-5, -5), Point::new(10, -5), Point::new(-5, 10), INK);
    assert!(c.pixels().iter().all(|&p| p == 2 || p == 0));
    assert_eq!(c.get(0, 0), Some(2));
}

#[test]
fn fill_uses_palette_index_of_color() {
    let mut c = canvas(4, 4);
    fill_triangle(&mut c, Point::new(0, 0), Point::new(3, 0), Point::new(0, 3), Rgb8::BLACK);
    assert_eq!(c.get(0, 0), Some(1));
    assert!(c.pixels().iter().all(|&p| p < 3));
}
