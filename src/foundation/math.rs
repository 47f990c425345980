/// Interpolates the x coordinate of an edge for every scanline in `y0..=y1`.
///
/// The slope is computed once in `f32` and accumulated as a running sum, truncating each
/// sample toward zero. Rounding error therefore compounds along the edge, which keeps the
/// rasterized output stable across implementations of the same running-sum scheme.
///
/// A single-row edge (`y0 == y1`) yields `[x0]`. A reversed range yields no samples.
pub fn interpolate(y0: i32, x0: i32, y1: i32, x1: i32) -> Vec<i32> {
    if y0 == y1 {
        return vec![x0];
    }
    if y1 < y0 {
        return Vec::new();
    }

    let rows = (y1 - y0) as usize + 1;
    let mut out = Vec::with_capacity(rows);
    let slope = (x1 as f32 - x0 as f32) / (y1 as f32 - y0 as f32);
    let mut x = x0 as f32;
    for _ in 0..rows {
        out.push(x as i32);
        x += slope;
    }
    out
}

/// Angular width of one wheel segment.
pub fn segment_step(item_count: usize) -> f64 {
    (2.0 * std::f64::consts::PI) / item_count as f64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
