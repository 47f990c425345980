use std::mem::swap;

use crate::{
    foundation::{
        core::{Point, Rgb8},
        math::interpolate,
    },
    raster::canvas::Canvas,
};

/// Scanline-fills the triangle `p0 p1 p2` with the palette entry closest to `color`.
///
/// Which edge chain forms the left boundary is decided once, at the middle row of the long
/// edge, and then used for every row. This assumes the two chains do not cross; for a
/// degenerate triangle whose chains do cross, rows past the crossing come out empty.
pub fn fill_triangle(canvas: &mut Canvas, p0: Point, p1: Point, p2: Point, color: Rgb8) {
    let index = canvas.palette().index(color);
    fill_triangle_index(canvas, p0, p1, p2, index);
}

pub fn fill_triangle_index(canvas: &mut Canvas, p0: Point, p1: Point, p2: Point, index: u8) {
    let (p0, p1, p2) = sort_by_y(p0, p1, p2);

    let mut x012 = interpolate(p0.y, p0.x, p1.y, p1.x);
    let x12 = interpolate(p1.y, p1.x, p2.y, p2.x);
    let x02 = interpolate(p0.y, p0.x, p2.y, p2.x);

    // p1's row is shared by both short edges
    x012.pop();
    x012.extend_from_slice(&x12);

    let m = x02.len() / 2;
    let (left, right) = if x02[m] < x012[m] {
        (&x02, &x012)
    } else {
        (&x012, &x02)
    };

    for (row, (&xl, &xr)) in left.iter().zip(right.iter()).enumerate() {
        canvas.fill_span(p0.y + row as i32, xl, xr, index);
    }
}

/// Stable three-way sort by ascending `y`.
fn sort_by_y(mut p0: Point, mut p1: Point, mut p2: Point) -> (Point, Point, Point) {
    if p1.y < p0.y {
        swap(&mut p0, &mut p1);
    }
    if p2.y < p0.y {
        swap(&mut p0, &mut p2);
    }
    if p2.y < p1.y {
        swap(&mut p1, &mut p2);
    }
    (p0, p1, p2)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/triangle.rs"]
mod tests;
