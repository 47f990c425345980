use crate::{
    foundation::{
        core::Rgb8,
        error::{WheelError, WheelResult},
    },
    palette::items::WheelItem,
};

/// Index of the background color in every wheel palette.
pub const BACKGROUND_INDEX: u8 = 0;
/// Index of the pointer/line color in every wheel palette.
pub const LINE_INDEX: u8 = 1;

/// Most colors an indexed frame can address.
pub const MAX_PALETTE_LEN: usize = 256;

/// Ordered list of colors addressed by canvas pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb8>) -> WheelResult<Self> {
        if colors.is_empty() {
            return Err(WheelError::invalid_input("palette must not be empty"));
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(WheelError::encoding(format!(
                "palette has {} colors, indexed output supports at most {MAX_PALETTE_LEN}",
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    /// `[white, black, item0.primary, item0.secondary, item1.primary, ...]`
    pub fn for_items(items: &[WheelItem]) -> WheelResult<Self> {
        let mut colors = Vec::with_capacity(2 + items.len() * 2);
        colors.push(Rgb8::WHITE);
        colors.push(Rgb8::BLACK);
        for item in items {
            colors.push(item.primary);
            colors.push(item.secondary);
        }
        Self::new(colors)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    pub fn get(&self, index: u8) -> Option<Rgb8> {
        self.colors.get(usize::from(index)).copied()
    }

    /// Index of the entry closest to `color`.
    ///
    /// Exact matches resolve to their first occurrence, so repeated colors always share the
    /// earliest index. Ties between inexact candidates also go to the earliest entry.
    pub fn index(&self, color: Rgb8) -> u8 {
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let d = c.distance_sq(color);
            if d == 0 {
                return i as u8;
            }
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        best as u8
    }

    /// Flattened `r, g, b` triples, the layout of a GIF color table.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/table.rs"]
mod tests;
