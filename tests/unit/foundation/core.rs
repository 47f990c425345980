use super::*;

#[test]
fn trunc_rounds_toward_zero() {
    assert_eq!(
        Point::from_f64_trunc(kurbo::Point::new(2.9, -2.9)),
        Point::new(2, -2)
    );
}

#[test]
fn geometry_center_uses_integer_half() {
    let g = WheelGeometry::new(601, 9, 4);
    assert_eq!(g.center_px(), Point::new(300, 4));
    assert_eq!(g.radius, 4.0);
}

#[test]
fn rim_points_on_axes() {
    let g = WheelGeometry::new(600, 600, 250);
    assert_eq!(g.rim(0.0), Point::new(550, 300));
    assert_eq!(g.rim(std::f64::consts::PI), Point::new(50, 300));
    // sin(pi/2) is exactly 1.0, cos(pi/2) is a tiny positive value
    assert_eq!(g.rim(std::f64::consts::FRAC_PI_2), Point::new(300, 550));
    assert_eq!(g.polar(0.0, 200.0), Point::new(500, 300));
}

#[test]
fn color_distance() {
    assert_eq!(Rgb8::WHITE.distance_sq(Rgb8::WHITE), 0);
    assert_eq!(Rgb8::new(1, 2, 3).distance_sq(Rgb8::new(0, 0, 0)), 14);
}
