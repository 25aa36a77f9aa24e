mod walk;

use crate::{
    hex::{index, neighbor, HexDirection, HexId, HexIdOutOfRange, RingPosition},
    timed, GridConfig, NumRange, Point2,
};
use anyhow::Context;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use std::f64::consts::PI;
use strum::IntoEnumIterator;
use validator::Validate;

/// Distance from a hexagon's center to its top vertex, relative to the
/// horizontal distance between two adjacent centers (at a skew of 1)
const VERTEX_HEIGHT: f64 = 0.577_350_269_189_625_8; // 2 / (2 * sqrt(3))

/// A fully built hex grid. Contains the config that defined it, plus the center
/// position of every hexagon, indexed by hex ID.
///
/// Grids are immutable. To change the scale of a grid, build a new one with
/// [HexGrid::with_scale]. Hex IDs and all the structural relationships
/// between them (layers, sections, neighbors) stay the same, only positions
/// change.
///
/// Every query that takes a hex ID checks that ID against the grid first, and
/// returns a [HexIdOutOfRange] error (wrapped in an [anyhow::Error]) if the
/// grid doesn't contain it.
#[derive(Clone, Debug, Serialize)]
pub struct HexGrid {
    /// The config used to build this grid. This can never change after the
    /// grid is built.
    config: GridConfig,

    /// ID of the last hexagon in the outermost layer, which is also the
    /// number of hexagons minus one
    max_hex_id: HexId,

    /// The bounding box around all hexagon centers
    bounds: Bounds,

    /// The center position of every hexagon, indexed by ID
    centers: Vec<Point2>,
}

impl HexGrid {
    /// Build a new grid with the given config. This lays out every hexagon up
    /// front, so it takes time proportional to the number of hexagons. Returns
    /// an error if the config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        info!("Building hex grid with config {:?}", config);
        config.validate().context("invalid grid config")?;

        let centers = timed!("Ring walk", walk::walk_centers(&config));
        let bounds = Bounds::around(&centers);
        Ok(Self {
            config,
            max_hex_id: index::layer_end(config.layers),
            bounds,
            centers,
        })
    }

    /// Build a copy of this grid with a different scale. Every center gets
    /// recomputed; the hex IDs and everything derived from them don't change.
    /// Returns an error if the new scale is invalid.
    pub fn with_scale(&self, scale: f64) -> anyhow::Result<Self> {
        debug!("Rescaling hex grid from {} to {}", self.config.scale, scale);
        Self::new(GridConfig {
            scale,
            ..self.config
        })
    }

    /// Get a reference to the config that defines this grid.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of rings around the center hexagon
    pub fn layers(&self) -> u16 {
        self.config.layers
    }

    /// ID of the last hexagon in the grid. Every ID in `0..=max_hex_id` is a
    /// valid hexagon.
    pub fn max_hex_id(&self) -> HexId {
        self.max_hex_id
    }

    /// Total number of hexagons in the grid
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// A grid always holds at least its center hexagon, so this is always
    /// false. It's only here to pair with [Self::len].
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Does this grid contain a hexagon with the given ID?
    pub fn contains(&self, id: HexId) -> bool {
        id <= self.max_hex_id
    }

    /// Center positions of every hexagon, indexed by hex ID
    pub fn centers(&self) -> &[Point2] {
        &self.centers
    }

    /// Center position of a single hexagon
    pub fn center(&self, id: HexId) -> anyhow::Result<Point2> {
        self.check_id(id)?;
        Ok(self.centers[id as usize])
    }

    /// The bounding box around all hexagon centers. Note that this is
    /// **centers only**, the hexagons themselves poke out past it.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn min_x(&self) -> f64 {
        self.bounds.x.min
    }

    pub fn max_x(&self) -> f64 {
        self.bounds.x.max
    }

    pub fn min_y(&self) -> f64 {
        self.bounds.y.min
    }

    pub fn max_y(&self) -> f64 {
        self.bounds.y.max
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// Offsets of the 6 vertices of a single hexagon, relative to its center.
    /// Scale and skew are already applied, so add these to any center to get
    /// an outline that tiles with its neighbors. Vertices are in clockwise
    /// order, starting with the top one.
    pub fn hexagon_points(&self) -> [Point2; 6] {
        let GridConfig { scale, skew, .. } = self.config;
        let dx = 0.5 * scale;
        let dy = VERTEX_HEIGHT * skew * scale;
        [
            Point2::new(0.0, -dy),
            Point2::new(dx, -dy / 2.0),
            Point2::new(dx, dy / 2.0),
            Point2::new(0.0, dy),
            Point2::new(-dx, dy / 2.0),
            Point2::new(-dx, -dy / 2.0),
        ]
    }

    /// The absolute positions of the 6 vertices of a hexagon. See
    /// [Self::hexagon_points] for the ordering.
    pub fn hexagon_outline(&self, id: HexId) -> anyhow::Result<[Point2; 6]> {
        let center = self.center(id)?;
        let mut points = self.hexagon_points();
        for point in &mut points {
            *point += center;
        }
        Ok(points)
    }

    /// Offset from a hexagon center to its neighbor's, in each direction. The
    /// grid's scale and skew are applied. Ordered the same as
    /// [HexDirection::WALK_ORDER], so the first one points right.
    pub fn directions(&self) -> [Point2; 6] {
        let GridConfig { scale, skew, .. } = self.config;
        HexDirection::WALK_ORDER.map(|direction| direction.unit_vector(skew) * scale)
    }

    /// The layer (ring) that a hexagon is in. The center is layer 0.
    pub fn layer_of(&self, id: HexId) -> anyhow::Result<u16> {
        Ok(self.ring_position(id)?.layer)
    }

    /// Which of the 6 sides of its ring a hexagon is on. See
    /// [RingPosition::section].
    pub fn section_of(&self, id: HexId) -> anyhow::Result<u8> {
        Ok(self.ring_position(id)?.section)
    }

    /// Offset of a hexagon from the first hexagon in its layer
    pub fn position_in_layer(&self, id: HexId) -> anyhow::Result<u32> {
        Ok(self.ring_position(id)?.position)
    }

    /// Layer, position, and section of a hexagon, all at once
    pub fn ring_position(&self, id: HexId) -> anyhow::Result<RingPosition> {
        self.check_id(id)?;
        Ok(RingPosition::of(id))
    }

    /// First ID in the same layer as the given hexagon
    pub fn layer_start_hex_id(&self, id: HexId) -> anyhow::Result<HexId> {
        Ok(index::layer_start(self.layer_of(id)?))
    }

    /// First ID in the layer just outside the given hexagon's layer. This may
    /// be outside the grid, if the hexagon is in the outermost layer.
    pub fn next_layer_start_hex_id(&self, id: HexId) -> anyhow::Result<HexId> {
        Ok(index::layer_start(self.layer_of(id)? + 1))
    }

    /// First ID in the layer just inside the given hexagon's layer. `None` for
    /// the center, since nothing is inside it.
    pub fn previous_layer_start_hex_id(
        &self,
        id: HexId,
    ) -> anyhow::Result<Option<HexId>> {
        let layer = self.layer_of(id)?;
        Ok(layer.checked_sub(1).map(index::layer_start))
    }

    /// Number of hexagons in the same layer as the given one. That's `6L` for
    /// layer `L`, or 1 for the center.
    pub fn hexagons_in_layer(&self, id: HexId) -> anyhow::Result<u32> {
        Ok(index::layer_len(self.layer_of(id)?))
    }

    /// ID of one of the 6 corners of a layer. Corners are numbered clockwise
    /// from the top-left: 0 (top-left), 1 (top-right), 2 (right),
    /// 3 (bottom-right), 4 (bottom-left), 5 (left). Returns an error if the
    /// layer isn't in this grid or the corner isn't in `0..=5`.
    pub fn corner_hex(&self, layer: u16, corner: u8) -> anyhow::Result<HexId> {
        NumRange::new(0, self.config.layers).ensure_contains("layer", layer)?;
        NumRange::new(0, 5).ensure_contains("corner", corner)?;
        Ok(index::corner_hex(layer, corner))
    }

    /// Is the given hexagon one of the 6 corners of its layer? The center
    /// isn't a corner.
    pub fn is_corner_hex(&self, id: HexId) -> anyhow::Result<bool> {
        self.check_id(id)?;
        Ok(index::is_corner_hex(id))
    }

    /// ID of the hexagon adjacent to the given one, in one direction. The
    /// result **may be outside the grid**, if the hexagon is on the outer
    /// edge. Use [Self::neighbor] if you want those filtered out.
    pub fn neighbor_candidate(
        &self,
        id: HexId,
        direction: HexDirection,
    ) -> anyhow::Result<HexId> {
        self.check_id(id)?;
        Ok(neighbor::neighbor_of(id, direction))
    }

    /// ID of the hexagon adjacent to the given one, in one direction. `None`
    /// if that neighbor would be outside the grid.
    pub fn neighbor(
        &self,
        id: HexId,
        direction: HexDirection,
    ) -> anyhow::Result<Option<HexId>> {
        let candidate = self.neighbor_candidate(id, direction)?;
        Ok(Some(candidate).filter(|neighbor| self.contains(*neighbor)))
    }

    /// All hexagons adjacent to the given one. Neighbors are in clockwise
    /// order starting from up-left: up-left, up-right, right, down-right,
    /// down-left, left. Any neighbors that would be outside the grid are left
    /// out, so hexagons on the outer edge get fewer than 6.
    pub fn neighbors_of(&self, id: HexId) -> anyhow::Result<Vec<HexId>> {
        self.check_id(id)?;
        Ok(HexDirection::iter()
            .map(|direction| neighbor::neighbor_of(id, direction))
            .filter(|neighbor| self.contains(*neighbor))
            .collect())
    }

    /// Find the hexagon whose center is closest to the given point. This
    /// checks every hexagon, so it's linear in the size of the grid. If two
    /// centers are equally close, the lower ID wins.
    ///
    /// Points outside the grid still resolve to the closest hexagon on the
    /// edge.
    pub fn hex_id_at_position(&self, point: Point2) -> HexId {
        let mut closest_id = 0;
        let mut closest_distance = f64::INFINITY;
        for (id, center) in self.centers.iter().enumerate() {
            let distance = center.distance_to(point);
            if distance < closest_distance {
                closest_distance = distance;
                closest_id = id;
            }
        }
        closest_id as HexId
    }

    /// Pick a random hexagon near the given one. This picks a random point
    /// around the center of `center_id`, at a random angle and a random
    /// distance of up to `radius` (in units of the grid's scale), then returns
    /// the hexagon at that point.
    ///
    /// The distance is uniform, **not** the area, so hexagons closer to the
    /// center are more likely to be picked. Returns an error if the radius is
    /// negative or not finite.
    pub fn random_hex_id<R: Rng + ?Sized>(
        &self,
        center_id: HexId,
        radius: f64,
        rng: &mut R,
    ) -> anyhow::Result<HexId> {
        let center = self.center(center_id)?;
        NumRange::new(0.0, f64::MAX).ensure_contains("radius", radius)?;

        let max_distance = (self.config.scale * radius).min(f64::MAX);
        let distance = rng.gen_range(NumRange::new(0.0, max_distance));
        let angle = rng.gen_range(0.0..(2.0 * PI));
        Ok(self.hex_id_at_position(center + Point2::from_polar(distance, angle)))
    }

    /// Serializes this grid into JSON, including config, bounds, and every
    /// center position.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing grid")
    }

    fn check_id(&self, id: HexId) -> Result<(), HexIdOutOfRange> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(HexIdOutOfRange {
                id,
                max_hex_id: self.max_hex_id,
            })
        }
    }
}

/// An axis-aligned box around a set of points
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub x: NumRange<f64>,
    pub y: NumRange<f64>,
}

impl Bounds {
    /// The smallest box that holds every point. An empty list gives a single
    /// point box at the origin.
    pub fn around(points: &[Point2]) -> Self {
        fn range(values: impl Iterator<Item = f64>) -> NumRange<f64> {
            NumRange::covering(values).unwrap_or_else(|| NumRange::new(0.0, 0.0))
        }
        Self {
            x: range(points.iter().map(|point| point.x)),
            y: range(points.iter().map(|point| point.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.x.span()
    }

    pub fn height(&self) -> f64 {
        self.y.span()
    }

    /// Is the point inside this box? Edges count as inside.
    pub fn contains(&self, point: Point2) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }
}
