//! Closed-form arithmetic that maps hex IDs to their place in the ring walk.
//! None of these functions check the ID against a grid's bounds; that's the
//! grid's job.

use crate::hex::{HexId, RingPosition};

/// The layer (ring) that an ID falls in. The center is layer 0.
///
/// Layer `L` covers `3L(L-1)+1 ..= 3L(L+1)`, so `sqrt(id / 3)` always lands
/// strictly within half a step of `L`, and rounding recovers it exactly.
pub fn layer_of(id: HexId) -> u16 {
    (f64::from(id) / 3.0).sqrt().round() as u16
}

/// First ID of the given layer
pub fn layer_start(layer: u16) -> HexId {
    match HexId::from(layer) {
        0 => 0,
        l => 3 * l * (l - 1) + 1,
    }
}

/// Last ID of the given layer
pub fn layer_end(layer: u16) -> HexId {
    let l = HexId::from(layer);
    3 * l * (l + 1)
}

/// Number of hexagons in the given layer
pub fn layer_len(layer: u16) -> u32 {
    match u32::from(layer) {
        0 => 1,
        l => 6 * l,
    }
}

/// ID of one of the 6 corners of a layer. Corners are numbered clockwise:
/// 0 (top-left), 1 (top-right), 2 (right), 3 (bottom-right), 4 (bottom-left),
/// 5 (left). Corner `c` is the last hexagon of section `c`. Layer 0 has no
/// real corners, so every corner of it is the center.
pub fn corner_hex(layer: u16, corner: u8) -> HexId {
    match HexId::from(layer) {
        0 => 0,
        l => (3 * l + HexId::from(corner) - 2) * l,
    }
}

/// Is the given ID a corner of its layer? See [corner_hex].
pub fn is_corner_hex(id: HexId) -> bool {
    let RingPosition { layer, section, .. } = RingPosition::of(id);
    layer > 0 && corner_hex(layer, section) == id
}
