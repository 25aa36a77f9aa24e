//! Neighbor resolution, straight from hex IDs.
//!
//! Along the middle of a ring's side, the neighbor in a given direction is
//! always the same distance away in ID space. The hexagon outside of it is one
//! ring further out, and each ring is 6 hexagons longer than the one inside
//! it, so the gap grows by 6 per layer. That gives every neighbor the form
//! `id + rings * 6L + steps`, where `rings` is -1, 0, or 1. The only
//! wrinkles are where a ring turns a corner, and where the ring walk closes
//! back on itself at the first hexagon of the layer (the seam).
//!
//! These offsets fall out of the exact order of the ring walk. If the walk
//! ever changes, they all need to be re-derived.

use crate::hex::{HexDirection, HexId, RingPosition};

/// A jump through ID space from a hexagon to one of its neighbors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Offset {
    /// How many rings to move outwards (negative for inwards)
    rings: i8,
    /// Constant added after the ring jump
    steps: i8,
}

impl Offset {
    const fn new(rings: i8, steps: i8) -> Self {
        Self { rings, steps }
    }

    fn apply(self, id: HexId, layer: u16) -> HexId {
        let jump = i64::from(self.rings) * 6 * i64::from(layer)
            + i64::from(self.steps);
        // Inward jumps never go below 0 for a hexagon that's off-center
        (i64::from(id) + jump) as HexId
    }
}

/// The offsets that resolve a neighbor in one particular direction
struct NeighborRule {
    /// Offset for hexagons along each section, excluding its corner
    edge: [Offset; 6],
    /// Offset for the corner at the end of each section
    corner: [Offset; 6],
    /// Offset for the first hexagon of a layer, if it doesn't follow the
    /// section 0 offsets
    seam: Option<Offset>,
}

const fn o(rings: i8, steps: i8) -> Offset {
    Offset::new(rings, steps)
}

const UP_LEFT: NeighborRule = NeighborRule {
    edge: [o(1, 1), o(1, 1), o(0, -1), o(-1, 2), o(-1, 2), o(0, 1)],
    corner: [o(1, 1), o(1, 1), o(0, -1), o(-1, 2), o(0, 1), o(0, 1)],
    seam: None,
};

const UP_RIGHT: NeighborRule = NeighborRule {
    edge: [o(0, 1), o(1, 2), o(1, 2), o(0, -1), o(-1, 1), o(-1, 1)],
    corner: [o(1, 2), o(1, 2), o(1, 2), o(0, -1), o(-1, 1), o(-1, 1)],
    seam: None,
};

const RIGHT: NeighborRule = NeighborRule {
    edge: [o(-1, 6), o(0, 1), o(1, 3), o(1, 3), o(0, -1), o(-1, 0)],
    corner: [o(0, 1), o(1, 3), o(1, 3), o(1, 3), o(0, -1), o(-1, 0)],
    seam: None,
};

const DOWN_RIGHT: NeighborRule = NeighborRule {
    edge: [o(-1, 5), o(-1, 5), o(0, 1), o(1, 4), o(1, 4), o(0, -1)],
    corner: [o(-1, 5), o(0, 1), o(1, 4), o(1, 4), o(1, 4), o(0, -1)],
    // Last hexagon of the previous layer
    seam: Some(o(0, -1)),
};

const DOWN_LEFT: NeighborRule = NeighborRule {
    edge: [o(0, -1), o(-1, 4), o(-1, 4), o(0, 1), o(1, 5), o(1, 5)],
    corner: [o(0, -1), o(-1, 4), o(0, 1), o(1, 5), o(1, 5), o(1, 5)],
    // Last hexagon of this layer
    seam: Some(o(1, -1)),
};

const LEFT: NeighborRule = NeighborRule {
    edge: [o(1, 0), o(0, -1), o(-1, 3), o(-1, 3), o(0, 1), o(1, 6)],
    corner: [o(1, 0), o(0, -1), o(-1, 3), o(0, 1), o(1, 6), o(1, 6)],
    seam: None,
};

impl HexDirection {
    fn neighbor_rule(self) -> &'static NeighborRule {
        match self {
            Self::UpLeft => &UP_LEFT,
            Self::UpRight => &UP_RIGHT,
            Self::Right => &RIGHT,
            Self::DownRight => &DOWN_RIGHT,
            Self::DownLeft => &DOWN_LEFT,
            Self::Left => &LEFT,
        }
    }
}

/// Get the ID of the hexagon adjacent to `id` in the given direction. This
/// works for any ID, in any size grid, so the result may be outside the grid
/// that `id` belongs to. It's up to the caller to filter those out.
pub fn neighbor_of(id: HexId, direction: HexDirection) -> HexId {
    // The center's neighbors are all of layer 1, which the walk visits in
    // clockwise order starting from up-left
    if id == 0 {
        return direction.index() as HexId + 1;
    }

    let position = RingPosition::of(id);
    let rule = direction.neighbor_rule();
    let section = usize::from(position.section);
    let offset = match rule.seam {
        Some(seam) if position.is_layer_start() => seam,
        _ if position.is_corner() => rule.corner[section],
        _ => rule.edge[section],
    };
    offset.apply(id, position.layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::index;
    use strum::IntoEnumIterator;

    fn all_neighbors(id: HexId) -> Vec<HexId> {
        HexDirection::iter()
            .map(|direction| neighbor_of(id, direction))
            .collect()
    }

    #[test]
    fn test_center() {
        assert_eq!(all_neighbors(0), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_first_two_layers() {
        // Pinned from a hand-drawn map of the walk, see the module docs of
        // the parent module
        assert_eq!(all_neighbors(1), vec![8, 9, 2, 0, 6, 7]);
        assert_eq!(all_neighbors(2), vec![9, 10, 11, 3, 0, 1]);
        assert_eq!(all_neighbors(3), vec![2, 11, 12, 13, 4, 0]);
        assert_eq!(all_neighbors(4), vec![0, 3, 13, 14, 15, 5]);
        assert_eq!(all_neighbors(5), vec![6, 0, 4, 15, 16, 17]);
        assert_eq!(all_neighbors(6), vec![7, 1, 0, 5, 17, 18]);

        assert_eq!(all_neighbors(7), vec![20, 8, 1, 6, 18, 19]);
        assert_eq!(all_neighbors(8), vec![21, 22, 9, 1, 7, 20]);
        assert_eq!(all_neighbors(11), vec![10, 25, 26, 12, 3, 2]);
        assert_eq!(all_neighbors(15), vec![5, 4, 14, 31, 32, 16]);
        assert_eq!(all_neighbors(18), vec![19, 7, 6, 17, 35, 36]);
    }

    /// If B is A's neighbor in some direction, A must be B's neighbor in the
    /// opposite direction
    #[test]
    fn test_symmetry() {
        for id in 0..=index::layer_end(30) {
            for direction in HexDirection::iter() {
                let neighbor = neighbor_of(id, direction);
                assert_eq!(
                    neighbor_of(neighbor, direction.opposite()),
                    id,
                    "{} is {:?} of {}, but not the other way around",
                    neighbor,
                    direction,
                    id
                );
            }
        }
    }

    /// Neighbors are never more than one layer away, and all 6 are distinct
    #[test]
    fn test_neighbor_layers() {
        for id in 1..=index::layer_end(30) {
            let layer = index::layer_of(id);
            let mut neighbors = all_neighbors(id);
            for neighbor in &neighbors {
                let neighbor_layer = index::layer_of(*neighbor);
                assert!(
                    (i32::from(neighbor_layer) - i32::from(layer)).abs() <= 1,
                    "{} (layer {}) has neighbor {} (layer {})",
                    id,
                    layer,
                    neighbor,
                    neighbor_layer
                );
            }
            neighbors.sort_unstable();
            neighbors.dedup();
            assert_eq!(neighbors.len(), 6, "duplicate neighbors for {}", id);
        }
    }

    /// A corner has 3 neighbors in the next layer out, any other hexagon has 2
    #[test]
    fn test_outward_neighbor_count() {
        for id in 1..=index::layer_end(20) {
            let layer = index::layer_of(id);
            let outward = all_neighbors(id)
                .into_iter()
                .filter(|neighbor| index::layer_of(*neighbor) > layer)
                .count();
            let expected = if index::is_corner_hex(id) { 3 } else { 2 };
            assert_eq!(outward, expected, "outward neighbors of {}", id);
        }
    }
}
