//! This module holds the indexing scheme for ring-based hexagon grids.
//!
//! ## Hex IDs
//!
//! Every hexagon in a grid is identified by a single integer, its
//! [HexId]. IDs are assigned by a *ring walk*: the center hexagon is 0, then
//! each ring (AKA layer) around it is walked in turn, handing out consecutive
//! IDs. Layer `L` (for `L >= 1`) holds exactly `6L` hexagons, so the IDs of
//! layer `L` are the contiguous range `3L(L-1)+1 ..= 3L(L+1)`.
//!
//! ```text
//!       8     9     10
//!    7     1     2     11
//! 18    6     0     3     12
//!    17    5     4     13
//!       16    15    14
//! ```
//!
//! ### The Walk
//!
//! The walk for layer `L` starts one step up-left of where the previous
//! layer's walk ended, which is that layer's left corner. From there it moves up-right `L-1` times to reach the
//! top-left corner, then takes `L` steps in each of these directions, in
//! order: right, down-right, down-left, left, up-left. That visits all `6L`
//! hexagons of the ring. Then it jumps one step up-left, into the next ring.
//!
//! ## Ring Coordinates
//!
//! Because the walk is so regular, an ID can be turned back into its place in
//! the ring with closed-form arithmetic. See [RingPosition]:
//!
//! - **Layer:** `round(sqrt(id / 3))`
//! - **Position:** offset from the first ID of the layer, in `[0, 6L)`
//! - **Section:** which of the 6 sides of the ring the hexagon is on. Each
//!   section is `L` hexagons long, and ends with a corner hexagon.
//!
//! Neighbors are resolved from those coordinates as well, see
//! [HexGrid::neighbors_of](crate::HexGrid::neighbors_of).

mod direction;
pub(crate) mod index;
pub(crate) mod neighbor;

pub use self::direction::HexDirection;
use derive_more::{Display, Error};
use serde::Serialize;

/// Unique identifier of a single hexagon in a grid. See module-level docs for
/// how these are assigned.
///
/// IDs are stored as `u32`. The biggest grid we allow (10k layers) has about
/// 300 million hexagons, so this leaves plenty of room.
pub type HexId = u32;

/// Error returned when a hex ID is passed to a grid that doesn't contain it.
#[derive(Copy, Clone, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "hex ID {} is out of range [0, {}]", id, max_hex_id)]
pub struct HexIdOutOfRange {
    pub id: HexId,
    pub max_hex_id: HexId,
}

/// The location of a hexagon within its ring. Every hex ID maps to exactly one
/// of these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RingPosition {
    /// Distance from the center, in hexagons. The center is layer 0.
    pub layer: u16,
    /// Zero-based offset from the first hexagon of the layer
    pub position: u32,
    /// Which side of the ring the hexagon is on, in `0..6`. Sections are
    /// ordered clockwise: 0 (top-left), 1 (top), 2 (top-right),
    /// 3 (bottom-right), 4 (bottom), 5 (bottom-left). The center is always
    /// section 0.
    pub section: u8,
}

impl RingPosition {
    /// Get the ring position of any hex ID
    pub fn of(id: HexId) -> Self {
        let layer = index::layer_of(id);
        let position = id - index::layer_start(layer);
        let section = if id == 0 {
            0
        } else {
            // Same as floor(position / 6L * 6), without the float math
            (position / u32::from(layer)) as u8
        };
        Self {
            layer,
            position,
            section,
        }
    }

    /// Is this hexagon one of the 6 corners of its ring? The last hexagon of
    /// each section is a corner. The center is not a corner.
    pub fn is_corner(&self) -> bool {
        self.layer > 0 && (self.position + 1) % u32::from(self.layer) == 0
    }

    /// Is this the first hexagon of its ring? That's where the ring walk
    /// starts, so this hexagon sits next to the last one in the ring.
    pub fn is_layer_start(&self) -> bool {
        self.layer > 0 && self.position == 0
    }
}
