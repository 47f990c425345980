use kurbo::Vec2;

/// Integer pixel coordinate. `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates a floating point position toward zero on both axes.
    pub fn from_f64_trunc(p: kurbo::Point) -> Self {
        Self {
            x: p.x as i32,
            y: p.y as i32,
        }
    }
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared euclidean distance in RGB space.
    pub fn distance_sq(self, other: Self) -> u32 {
        fn sq(a: u8, b: u8) -> u32 {
            let d = i32::from(a) - i32::from(b);
            (d * d) as u32
        }
        sq(self.r, other.r) + sq(self.g, other.g) + sq(self.b, other.b)
    }
}

/// Center and radius of the wheel in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    pub center: kurbo::Point,
    pub radius: f64,
}

impl WheelGeometry {
    /// Center is the integer half of each canvas dimension.
    pub fn new(width: u32, height: u32, radius: u32) -> Self {
        Self {
            center: kurbo::Point::new(f64::from(width / 2), f64::from(height / 2)),
            radius: f64::from(radius),
        }
    }

    /// Point at `dist` from the center along `angle` (radians, clockwise on screen).
    pub fn polar(&self, angle: f64, dist: f64) -> Point {
        Point::from_f64_trunc(self.center + Vec2::from_angle(angle) * dist)
    }

    pub fn rim(&self, angle: f64) -> Point {
        self.polar(angle, self.radius)
    }

    pub fn center_px(&self) -> Point {
        Point::from_f64_trunc(self.center)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
