//! Bridge connectivity rules.
//!
//! A player's network starts at their HQ tile. The four tiles around the HQ are its
//! influence zone: a bridge may start there, and any tile that reaches one of them by
//! walking across bridges is connected. Bridges never touch the HQ tile itself.
//!
//! Buildings go on the tiles flanking a bridge, never on the bridge's own endpoints:
//! a horizontal bridge (1,6)-(2,6) opens (1,5), (1,7), (2,5) and (2,7).
//!
//! Everything here is a pure function of the grid's current bridges.

use crate::grid::{Grid, GridCoord, Orientation, PlayerId, Tile};
use crate::player::Player;
use std::collections::{HashSet, VecDeque};

/// Whether `tile` is connected to the HQ at `hq`, either by being the HQ, touching it,
/// or reaching a tile that touches it across bridges
pub fn is_connected_to_hq(grid: &Grid, tile: GridCoord, hq: GridCoord) -> bool {
    if tile == hq || tile.is_orthogonally_adjacent(&hq) {
        return true;
    }

    let mut visited = HashSet::from([tile]);
    let mut queue = VecDeque::from([tile]);

    while let Some(current) = queue.pop_front() {
        if current.is_orthogonally_adjacent(&hq) {
            return true;
        }
        for next in grid.tiles_adjacent_via_bridge(current) {
            if next.is_orthogonally_adjacent(&hq) {
                return true;
            }
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    false
}

/// Whether a bridge between `a` and `b` would join the network of the HQ at `hq`
pub fn can_place_bridge(grid: &Grid, a: GridCoord, b: GridCoord, hq: GridCoord) -> bool {
    if a == hq || b == hq {
        return false;
    }
    if a.is_orthogonally_adjacent(&hq) || b.is_orthogonally_adjacent(&hq) {
        return true;
    }
    is_connected_to_hq(grid, a, hq) || is_connected_to_hq(grid, b, hq)
}

/// The four tiles flanking a bridge on edge `low`-`high`
fn flanking_tiles(low: GridCoord, high: GridCoord, orientation: Orientation) -> [GridCoord; 4] {
    match orientation {
        Orientation::Horizontal => [
            GridCoord::new(low.x, low.y - 1),
            GridCoord::new(low.x, low.y + 1),
            GridCoord::new(high.x, high.y - 1),
            GridCoord::new(high.x, high.y + 1),
        ],
        Orientation::Vertical => [
            GridCoord::new(low.x - 1, low.y),
            GridCoord::new(low.x + 1, low.y),
            GridCoord::new(high.x - 1, high.y),
            GridCoord::new(high.x + 1, high.y),
        ],
    }
}

/// Whether `tile` flanks any bridge on the grid
pub fn can_place_building(grid: &Grid, tile: GridCoord) -> bool {
    grid.bridged_edges().any(|edge| {
        let [low, high] = edge.endpoints();
        flanking_tiles(low, high, edge.orientation()).contains(&tile)
    })
}

/// Every tile reachable from the HQ: the HQ itself, each neighbouring tile that has a
/// bridge, and everything reachable from those across bridges
pub fn connected_network(grid: &Grid, hq: GridCoord) -> HashSet<GridCoord> {
    let mut network = HashSet::from([hq]);
    let mut queue = VecDeque::new();

    for start in hq.neighbors() {
        if grid.has_bridge_at(start) && network.insert(start) {
            queue.push_back(start);
        }
    }

    while let Some(current) = queue.pop_front() {
        for next in grid.tiles_adjacent_via_bridge(current) {
            if network.insert(next) {
                queue.push_back(next);
            }
        }
    }

    network
}

/// Tiles in the HQ's network that hold a building
pub fn buildings_in_network(grid: &Grid, hq: GridCoord) -> Vec<&Tile> {
    connected_network(grid, hq)
        .into_iter()
        .filter_map(|coord| grid.get_tile(coord))
        .filter(|tile| tile.is_occupied())
        .collect()
}

/// Whether the networks around two HQs touch: some tile of `hq1`'s network is
/// connected to `hq2`
pub fn are_networks_connected(grid: &Grid, hq1: GridCoord, hq2: GridCoord) -> bool {
    connected_network(grid, hq1)
        .into_iter()
        .any(|tile| is_connected_to_hq(grid, tile, hq2))
}

/// Ids of the players whose HQ `tile` is connected to, in `players` order
pub fn connected_players(grid: &Grid, tile: GridCoord, players: &[Player]) -> Vec<PlayerId> {
    players
        .iter()
        .filter(|p| is_connected_to_hq(grid, tile, p.hq_position))
        .map(|p| p.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::BuildingKind;
    use crate::economy::ResourceKind;
    use pretty_assertions::assert_eq;

    const HQ: GridCoord = GridCoord::new(0, 6);

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    #[test]
    fn test_bridge_touching_hq_rejected() {
        let grid = Grid::new(12, 12);
        assert!(!can_place_bridge(&grid, HQ, c(1, 6), HQ));
        assert!(!can_place_bridge(&grid, c(0, 5), HQ, HQ));
    }

    #[test]
    fn test_bridge_next_to_hq_allowed() {
        let grid = Grid::new(12, 12);
        assert!(can_place_bridge(&grid, c(1, 6), c(2, 6), HQ));
        assert!(can_place_bridge(&grid, c(0, 4), c(0, 5), HQ));
    }

    #[test]
    fn test_bridge_far_from_network_rejected() {
        let grid = Grid::new(12, 12);
        assert!(!can_place_bridge(&grid, c(5, 5), c(5, 6), HQ));
    }

    #[test]
    fn test_bridge_extends_network() {
        let mut grid = Grid::new(12, 12);
        grid.place_bridge_raw(c(1, 6), c(2, 6), 1);
        assert!(can_place_bridge(&grid, c(2, 6), c(3, 6), HQ));
        assert!(can_place_bridge(&grid, c(3, 6), c(2, 6), HQ));
        // One step past the end of the chain is still disconnected
        assert!(!can_place_bridge(&grid, c(3, 6), c(4, 6), HQ));
    }

    #[test]
    fn test_connected_across_multiple_hops() {
        let mut grid = Grid::new(12, 12);
        grid.place_bridge_raw(c(1, 6), c(2, 6), 1);
        grid.place_bridge_raw(c(2, 6), c(3, 6), 1);
        grid.place_bridge_raw(c(3, 6), c(4, 6), 1);
        assert!(is_connected_to_hq(&grid, c(4, 6), HQ));
        assert!(is_connected_to_hq(&grid, c(1, 6), HQ));
        assert!(is_connected_to_hq(&grid, HQ, HQ));
        assert!(!is_connected_to_hq(&grid, c(5, 5), HQ));
    }

    #[test]
    fn test_connected_network_contents() {
        let mut grid = Grid::new(12, 12);
        grid.place_bridge_raw(c(1, 6), c(2, 6), 1);
        grid.place_bridge_raw(c(2, 6), c(3, 6), 1);

        let network = connected_network(&grid, HQ);
        let expected: HashSet<GridCoord> = [HQ, c(1, 6), c(2, 6), c(3, 6)].into();
        assert_eq!(network, expected);
    }

    #[test]
    fn test_network_of_bare_hq() {
        let grid = Grid::new(12, 12);
        let network = connected_network(&grid, HQ);
        assert_eq!(network, HashSet::from([HQ]));
    }

    #[test]
    fn test_buildings_flank_horizontal_bridge() {
        let mut grid = Grid::new(12, 12);
        grid.place_bridge_raw(c(1, 6), c(2, 6), 1);
        for ok in [c(1, 5), c(1, 7), c(2, 5), c(2, 7)] {
            assert!(can_place_building(&grid, ok), "{:?} should be buildable", ok);
        }
        for bad in [c(1, 6), c(2, 6), c(3, 6), c(0, 6), c(5, 5)] {
            assert!(!can_place_building(&grid, bad), "{:?} should not be buildable", bad);
        }
    }

    #[test]
    fn test_buildings_flank_vertical_bridge() {
        let mut grid = Grid::new(12, 12);
        grid.place_bridge_raw(c(4, 4), c(4, 5), 1);
        for ok in [c(3, 4), c(5, 4), c(3, 5), c(5, 5)] {
            assert!(can_place_building(&grid, ok), "{:?} should be buildable", ok);
        }
        for bad in [c(4, 4), c(4, 5), c(4, 3), c(4, 6)] {
            assert!(!can_place_building(&grid, bad), "{:?} should not be buildable", bad);
        }
    }

    #[test]
    fn test_networks_connected_between_hqs() {
        let mut grid = Grid::new(12, 12);
        let other_hq = c(4, 6);
        assert!(!are_networks_connected(&grid, HQ, other_hq));

        grid.place_bridge_raw(c(1, 6), c(2, 6), 1);
        grid.place_bridge_raw(c(2, 6), c(3, 6), 2);
        assert!(are_networks_connected(&grid, HQ, other_hq));
        assert!(!are_networks_connected(&grid, HQ, c(11, 6)));
    }

    #[test]
    fn test_connected_players_for_tile() {
        let mut grid = Grid::new(12, 12);
        grid.place_bridge_raw(c(1, 6), c(2, 6), 1);
        let players = vec![
            Player::new(1, ResourceKind::Food, HQ),
            Player::new(2, ResourceKind::Electricity, c(6, 0)),
            Player::new(3, ResourceKind::Medicine, c(3, 6)),
        ];
        // (2,6) reaches (1,6), next to player 1's HQ, and touches player 3's HQ
        assert_eq!(connected_players(&grid, c(2, 6), &players), vec![1, 3]);
        assert!(connected_players(&grid, c(9, 9), &players).is_empty());
    }

    #[test]
    fn test_buildings_in_network() {
        let mut grid = Grid::new(12, 12);
        grid.place_bridge_raw(c(1, 6), c(2, 6), 1);
        grid.place_bridge_raw(c(2, 6), c(3, 6), 1);
        grid.set_building(c(3, 6), BuildingKind::Factory);
        grid.set_building(c(1, 5), BuildingKind::House);

        let buildings = buildings_in_network(&grid, HQ);
        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].coord, c(3, 6));
    }
}
