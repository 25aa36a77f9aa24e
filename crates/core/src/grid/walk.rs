use crate::{hex::HexDirection, util, GridConfig, Point2};

/// Simulate the ring walk to lay out every hexagon center in a grid. The
/// returned list is indexed by hex ID. See the [crate::hex] module docs for a
/// description of the walk.
pub fn walk_centers(config: &GridConfig) -> Vec<Point2> {
    let step = |direction: HexDirection| {
        direction.unit_vector(config.skew) * config.scale
    };

    let mut centers = Vec::with_capacity(util::grid_len(config.layers));
    let mut cursor = Point2::ORIGIN;
    for layer in 0..=config.layers {
        // First hexagon of the layer
        centers.push(cursor);

        // Climb to the top-left corner
        for _ in 1..layer {
            cursor += step(HexDirection::UpRight);
            centers.push(cursor);
        }

        // Trace the remaining 5 sides of the ring
        for &direction in &HexDirection::WALK_ORDER[..5] {
            let delta = step(direction);
            for _ in 0..layer {
                cursor += delta;
                centers.push(cursor);
            }
        }

        // Hop out to the start of the next ring
        if layer < config.layers {
            cursor += step(HexDirection::UpLeft);
        }
    }

    centers
}
