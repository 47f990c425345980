use crate::foundation::core::Rgb8;

/// Base colors cycled through by wheel items in order.
pub const BASE_PALETTE: [Rgb8; 6] = [
    Rgb8::new(3, 71, 50),
    Rgb8::new(0, 129, 72),
    Rgb8::new(198, 192, 19),
    Rgb8::new(239, 138, 23),
    Rgb8::new(239, 41, 23),
    Rgb8::new(6, 214, 160),
];

/// Channel-wise complement, taken modulo 255 so a full channel maps to 0.
pub fn complement(c: Rgb8) -> Rgb8 {
    fn ch(v: u8) -> u8 {
        (255 - v) % 255
    }
    Rgb8::new(ch(c.r), ch(c.g), ch(c.b))
}

/// One labeled wheel segment and its color pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelItem {
    pub label: String,
    pub primary: Rgb8,
    pub secondary: Rgb8,
}

impl WheelItem {
    /// Colors are assigned by position: `BASE_PALETTE[index % 6]` and its complement.
    pub fn at(index: usize, label: impl Into<String>) -> Self {
        let primary = BASE_PALETTE[index % BASE_PALETTE.len()];
        Self {
            label: label.into(),
            primary,
            secondary: complement(primary),
        }
    }
}

pub fn assign_items<S: AsRef<str>>(labels: &[S]) -> Vec<WheelItem> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| WheelItem::at(i, label.as_ref()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/palette/items.rs"]
mod tests;
