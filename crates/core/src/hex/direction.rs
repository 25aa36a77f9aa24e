use crate::Point2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Height of one row of hexagons, relative to the horizontal distance between
/// two adjacent centers: `3 / (2 * sqrt(3))`, AKA `sqrt(3) / 2`.
const ROW_HEIGHT: f64 = 0.866_025_403_784_438_6;

/// The 6 directions in which hexagons line up side-to-side. We use "pointy
/// topped" hexagons, so two of the neighbors are directly left and right, and
/// the other four are diagonal.
///
/// Iteration order (and the order neighbors are always reported in) is
/// clockwise, starting with [HexDirection::UpLeft].
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexDirection {
    UpLeft,
    UpRight,
    Right,
    DownRight,
    DownLeft,
    Left,
}

impl HexDirection {
    /// All directions, in the order the ring walk uses them to trace the edges
    /// of a layer. The walk takes the first 5 of these for each layer, after
    /// reaching the layer's top-left corner with the last one.
    pub const WALK_ORDER: [Self; 6] = [
        Self::Right,
        Self::DownRight,
        Self::DownLeft,
        Self::Left,
        Self::UpLeft,
        Self::UpRight,
    ];

    /// Position of this direction in the clockwise iteration order
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::DownRight => Self::UpLeft,
            Self::DownLeft => Self::UpRight,
            Self::Left => Self::Right,
        }
    }

    /// Offset from one hexagon center to its neighbor in this direction, for a
    /// grid with a scale of 1. The horizontal component is always unit length;
    /// `skew` stretches the vertical component.
    pub fn unit_vector(self, skew: f64) -> Point2 {
        let dy = ROW_HEIGHT * skew;
        match self {
            Self::UpLeft => Point2::new(-0.5, -dy),
            Self::UpRight => Point2::new(0.5, -dy),
            Self::Right => Point2::new(1.0, 0.0),
            Self::DownRight => Point2::new(0.5, dy),
            Self::DownLeft => Point2::new(-0.5, dy),
            Self::Left => Point2::new(-1.0, 0.0),
        }
    }
}
