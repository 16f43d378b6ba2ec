//! Rectangular tile grid and the edges between neighbouring tiles.
//!
//! This module contains:
//! - `GridCoord`: integer (x, y) tile coordinates
//! - `Tile`: a grid cell that may hold one building
//! - `Edge`: the connection between two orthogonally adjacent tiles, where bridges go
//! - `Grid`: owner of every tile and edge, with O(1) lookups
//!
//! Edges are stored in two flat tables: horizontal edges join (x, y) and (x + 1, y),
//! vertical edges join (x, y) and (x, y + 1). An edge exists only when both of its
//! tiles are inside the grid.

use crate::building::BuildingKind;
use serde::{Deserialize, Serialize};

/// Player identifier (the three seats use ids 1-3 by default)
pub type PlayerId = u8;

/// Integer tile coordinate. Coordinates outside the grid are representable so that
/// neighbour arithmetic never has to special-case the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    /// Create a new coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours: right, left, up, down
    pub fn neighbors(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x + 1, self.y),
            GridCoord::new(self.x - 1, self.y),
            GridCoord::new(self.x, self.y + 1),
            GridCoord::new(self.x, self.y - 1),
        ]
    }

    /// Offset of exactly 1 along exactly one axis
    pub fn is_orthogonally_adjacent(&self, other: &GridCoord) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Direction an edge runs in, derived from the coordinate delta of its tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Joins (x, y) and (x + 1, y)
    Horizontal,
    /// Joins (x, y) and (x, y + 1)
    Vertical,
}

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub coord: GridCoord,
    /// Building on this tile, if any
    pub building: Option<BuildingKind>,
}

impl Tile {
    fn new(coord: GridCoord) -> Self {
        Self {
            coord,
            building: None,
        }
    }

    /// Whether a building occupies this tile
    pub fn is_occupied(&self) -> bool {
        self.building.is_some()
    }
}

/// What's built on an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EdgeBuilding {
    /// Nothing built
    #[default]
    Empty,
    /// Bridge owned by a player
    Bridge(PlayerId),
}

/// Connection between two orthogonally adjacent tiles.
///
/// `low` is always the endpoint with the smaller coordinate, so the same edge is
/// reached whichever order the endpoints are given in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    low: GridCoord,
    high: GridCoord,
    orientation: Orientation,
    building: EdgeBuilding,
}

impl Edge {
    fn new(low: GridCoord, orientation: Orientation) -> Self {
        let high = match orientation {
            Orientation::Horizontal => GridCoord::new(low.x + 1, low.y),
            Orientation::Vertical => GridCoord::new(low.x, low.y + 1),
        };
        Self {
            low,
            high,
            orientation,
            building: EdgeBuilding::Empty,
        }
    }

    /// Both endpoints, lower coordinate first
    pub fn endpoints(&self) -> [GridCoord; 2] {
        [self.low, self.high]
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    pub fn building(&self) -> EdgeBuilding {
        self.building
    }

    pub fn has_bridge(&self) -> bool {
        matches!(self.building, EdgeBuilding::Bridge(_))
    }

    /// Owner of the bridge on this edge; `None` exactly when there is no bridge
    pub fn owner(&self) -> Option<PlayerId> {
        match self.building {
            EdgeBuilding::Empty => None,
            EdgeBuilding::Bridge(p) => Some(p),
        }
    }

    /// Whether this edge joins `a` and `b`, in either order
    pub fn connects(&self, a: GridCoord, b: GridCoord) -> bool {
        (self.low == a && self.high == b) || (self.low == b && self.high == a)
    }

    /// The endpoint that isn't `from`, if `from` is one of the endpoints
    pub fn other_end(&self, from: GridCoord) -> Option<GridCoord> {
        if from == self.low {
            Some(self.high)
        } else if from == self.high {
            Some(self.low)
        } else {
            None
        }
    }

    fn place_bridge(&mut self, owner: PlayerId) {
        self.building = EdgeBuilding::Bridge(owner);
    }

    fn remove_bridge(&mut self) {
        self.building = EdgeBuilding::Empty;
    }
}

/// The complete tile grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Tiles in column-major order: index = x * height + y
    tiles: Vec<Tile>,
    /// (width - 1) * height edges, index = x * height + y for the edge (x,y)-(x+1,y)
    horizontal: Vec<Edge>,
    /// width * (height - 1) edges, index = x * (height - 1) + y for the edge (x,y)-(x,y+1)
    vertical: Vec<Edge>,
}

impl Grid {
    /// Build a `width` x `height` grid with one edge per adjacent tile pair
    pub fn new(width: u32, height: u32) -> Self {
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                tiles.push(Tile::new(GridCoord::new(x, y)));
            }
        }

        let mut horizontal = Vec::with_capacity((width.saturating_sub(1) * height) as usize);
        for x in 0..width.saturating_sub(1) as i32 {
            for y in 0..height as i32 {
                horizontal.push(Edge::new(GridCoord::new(x, y), Orientation::Horizontal));
            }
        }

        let mut vertical = Vec::with_capacity((width * height.saturating_sub(1)) as usize);
        for x in 0..width as i32 {
            for y in 0..height.saturating_sub(1) as i32 {
                vertical.push(Edge::new(GridCoord::new(x, y), Orientation::Vertical));
            }
        }

        Self {
            width,
            height,
            tiles,
            horizontal,
            vertical,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // ==================== Query Methods ====================

    /// Whether the coordinate lies inside the grid
    pub fn is_valid_position(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < self.width && (coord.y as u32) < self.height
    }

    fn tile_index(&self, coord: GridCoord) -> Option<usize> {
        self.is_valid_position(coord)
            .then(|| coord.x as usize * self.height as usize + coord.y as usize)
    }

    /// Get a tile, or `None` when out of bounds
    pub fn get_tile(&self, coord: GridCoord) -> Option<&Tile> {
        self.tile_index(coord).map(|i| &self.tiles[i])
    }

    /// All tiles, column by column
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    fn horizontal_index(&self, low: GridCoord) -> Option<usize> {
        let in_range = low.x >= 0
            && low.y >= 0
            && (low.x as u32) < self.width.saturating_sub(1)
            && (low.y as u32) < self.height;
        in_range.then(|| low.x as usize * self.height as usize + low.y as usize)
    }

    fn vertical_index(&self, low: GridCoord) -> Option<usize> {
        let rows = self.height.saturating_sub(1);
        let in_range =
            low.x >= 0 && low.y >= 0 && (low.x as u32) < self.width && (low.y as u32) < rows;
        in_range.then(|| low.x as usize * rows as usize + low.y as usize)
    }

    /// Locate the edge table slot for a pair of tiles, in either order
    fn edge_slot(&self, a: GridCoord, b: GridCoord) -> Option<(Orientation, usize)> {
        if a.y == b.y && (a.x - b.x).abs() == 1 {
            let low = GridCoord::new(a.x.min(b.x), a.y);
            self.horizontal_index(low).map(|i| (Orientation::Horizontal, i))
        } else if a.x == b.x && (a.y - b.y).abs() == 1 {
            let low = GridCoord::new(a.x, a.y.min(b.y));
            self.vertical_index(low).map(|i| (Orientation::Vertical, i))
        } else {
            None
        }
    }

    /// The edge between two tiles, or `None` if they aren't adjacent or in bounds
    pub fn get_edge(&self, a: GridCoord, b: GridCoord) -> Option<&Edge> {
        match self.edge_slot(a, b)? {
            (Orientation::Horizontal, i) => self.horizontal.get(i),
            (Orientation::Vertical, i) => self.vertical.get(i),
        }
    }

    fn get_edge_mut(&mut self, a: GridCoord, b: GridCoord) -> Option<&mut Edge> {
        match self.edge_slot(a, b)? {
            (Orientation::Horizontal, i) => self.horizontal.get_mut(i),
            (Orientation::Vertical, i) => self.vertical.get_mut(i),
        }
    }

    /// All edges: horizontal ones first, then vertical
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.horizontal.iter().chain(self.vertical.iter())
    }

    /// Edges carrying a bridge
    pub fn bridged_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges().filter(|e| e.has_bridge())
    }

    /// The 0 to 4 edges touching a tile (left, right, below, above)
    pub fn edges_for_tile(&self, coord: GridCoord) -> Vec<&Edge> {
        if !self.is_valid_position(coord) {
            return Vec::new();
        }
        let GridCoord { x, y } = coord;
        [
            GridCoord::new(x - 1, y),
            GridCoord::new(x + 1, y),
            GridCoord::new(x, y - 1),
            GridCoord::new(x, y + 1),
        ]
        .into_iter()
        .filter_map(|other| self.get_edge(coord, other))
        .collect()
    }

    /// For every bridged edge touching `coord`, the endpoint on the other side
    pub fn tiles_adjacent_via_bridge(&self, coord: GridCoord) -> Vec<GridCoord> {
        self.edges_for_tile(coord)
            .into_iter()
            .filter(|e| e.has_bridge())
            .filter_map(|e| e.other_end(coord))
            .collect()
    }

    /// Whether any edge touching the tile carries a bridge
    pub fn has_bridge_at(&self, coord: GridCoord) -> bool {
        self.edges_for_tile(coord).iter().any(|e| e.has_bridge())
    }

    /// Number of tiles holding a building of this kind
    pub fn building_count(&self, kind: BuildingKind) -> usize {
        self.tiles.iter().filter(|t| t.building == Some(kind)).count()
    }

    /// Number of occupied tiles. Bridges live on edges and aren't counted.
    pub fn total_building_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_occupied()).count()
    }

    pub fn house_count(&self) -> usize {
        self.building_count(BuildingKind::House)
    }

    pub fn bridge_count(&self) -> usize {
        self.bridged_edges().count()
    }

    // ==================== Mutation Methods ====================

    /// Put a bridge on the edge between `a` and `b` (assumes validation already done).
    /// Returns false if there is no such edge.
    pub fn place_bridge_raw(&mut self, a: GridCoord, b: GridCoord, owner: PlayerId) -> bool {
        match self.get_edge_mut(a, b) {
            Some(edge) => {
                edge.place_bridge(owner);
                true
            }
            None => false,
        }
    }

    /// Clear the bridge between `a` and `b`. Returns false if there is no such edge.
    pub fn remove_bridge_raw(&mut self, a: GridCoord, b: GridCoord) -> bool {
        match self.get_edge_mut(a, b) {
            Some(edge) => {
                edge.remove_bridge();
                true
            }
            None => false,
        }
    }

    /// Put a building on a tile (assumes validation already done)
    pub(crate) fn set_building(&mut self, coord: GridCoord, kind: BuildingKind) -> bool {
        match self.tile_index(coord) {
            Some(i) => {
                self.tiles[i].building = Some(kind);
                true
            }
            None => false,
        }
    }
}
