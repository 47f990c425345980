use crate::foundation::error::{WheelError, WheelResult};

/// Largest number of wheel items accepted by the renderer.
pub const MAX_ITEMS: usize = 20;

/// Largest canvas area, in pixels, a single frame may cover.
pub const MAX_CANVAS_PIXELS: u64 = 4096 * 4096;

/// Render-time configuration of the wheel animation.
///
/// Every field falls back to its default when missing from a serialized config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Number of spin frames between the leading and trailing pause frames.
    pub frame_count: u32,
    pub width: u32,
    pub height: u32,
    pub radius: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            frame_count: 60,
            width: 600,
            height: 600,
            radius: 250,
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> WheelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WheelError::invalid_input(
                "canvas width/height must be non-zero",
            ));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(WheelError::invalid_input(format!(
                "canvas {}x{} exceeds the 65535px limit of the output format",
                self.width, self.height
            )));
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > MAX_CANVAS_PIXELS {
            return Err(WheelError::invalid_input(format!(
                "canvas {}x{} exceeds {MAX_CANVAS_PIXELS} pixels",
                self.width, self.height
            )));
        }
        if self.radius == 0 {
            return Err(WheelError::invalid_input("wheel radius must be non-zero"));
        }
        // Keeps every rim point within one canvas side of the canvas.
        let longest_side = self.width.max(self.height);
        if self.radius > longest_side {
            return Err(WheelError::invalid_input(format!(
                "wheel radius {} exceeds the longest canvas side {longest_side}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Checks the item list before any rendering work is done.
pub fn validate_items<S: AsRef<str>>(items: &[S]) -> WheelResult<()> {
    if items.is_empty() {
        return Err(WheelError::invalid_input(
            "at least one wheel item is required",
        ));
    }
    if items.len() > MAX_ITEMS {
        return Err(WheelError::invalid_input(format!(
            "invalid number of items: {} (max {MAX_ITEMS})",
            items.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
