use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A 2D point (or vector) in grid space. `x` increases to the right and `y`
/// increases downwards, which matches most 2D graphics libraries.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    pub fn distance_to(self, other: Point2) -> f64 {
        nalgebra::distance(
            &nalgebra::Point2::from(self),
            &nalgebra::Point2::from(other),
        )
    }

    /// Length of this point, treated as a vector from the origin
    pub fn magnitude(self) -> f64 {
        self.distance_to(Self::ORIGIN)
    }

    /// Build a point from polar coordinates. `angle` is in radians, measured
    /// clockwise from the positive x axis (since y points down).
    pub fn from_polar(distance: f64, angle: f64) -> Self {
        Self::new(distance * angle.cos(), distance * angle.sin())
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(point: Point2) -> Self {
        nalgebra::Point2::new(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_arithmetic() {
        let p = Point2::new(1.0, -2.0);
        assert_eq!(p + Point2::new(0.5, 0.5), Point2::new(1.5, -1.5));
        assert_eq!(p - Point2::new(1.0, 1.0), Point2::new(0.0, -3.0));
        assert_eq!(p * 2.0, Point2::new(2.0, -4.0));
        assert_eq!(-p, Point2::new(-1.0, 2.0));
        assert_eq!(p.to_string(), "(1, -2)");
    }

    #[test]
    fn test_distance_to() {
        assert_approx_eq!(Point2::ORIGIN.distance_to(Point2::ORIGIN), 0.0);
        assert_approx_eq!(
            Point2::new(1.0, 1.0).distance_to(Point2::new(4.0, 5.0)),
            5.0
        );
        assert_approx_eq!(Point2::new(-3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_from_polar() {
        let p = Point2::from_polar(2.0, std::f64::consts::FRAC_PI_2);
        assert_approx_eq!(p.x, 0.0);
        assert_approx_eq!(p.y, 2.0);
    }

    #[test]
    fn test_nalgebra_roundtrip() {
        let p = Point2::new(0.25, -7.5);
        let converted: nalgebra::Point2<f64> = p.into();
        assert_eq!(Point2::from(converted), p);
    }
}
