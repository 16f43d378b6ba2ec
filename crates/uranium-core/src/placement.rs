//! Validated placement of bridges and buildings.
//!
//! Every check runs before anything is mutated, so a failed placement leaves the grid
//! and the player's ledger exactly as they were.

use crate::building::BuildingKind;
use crate::grid::{Grid, GridCoord};
use crate::network;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlacementError {
    #[error("not adjacent or invalid")]
    NotAdjacent,

    #[error("already bridged")]
    AlreadyBridged,

    #[error("cannot afford")]
    CannotAfford,

    #[error("must connect to HQ or existing network")]
    NotConnected,

    #[error("use bridge method")]
    UseBridgeMethod,

    #[error("invalid tile")]
    InvalidTile,

    #[error("tile occupied")]
    TileOccupied,

    #[error("must be adjacent to a bridge")]
    NotNextToBridge,

    #[error("no building to upgrade")]
    NoBuilding,

    #[error("already upgraded")]
    AlreadyUpgraded,
}

/// Build a bridge between `a` and `b` for `player`
pub fn try_place_bridge(
    grid: &mut Grid,
    a: GridCoord,
    b: GridCoord,
    player: &mut Player,
) -> Result<(), PlacementError> {
    let edge = grid.get_edge(a, b).ok_or(PlacementError::NotAdjacent)?;
    if edge.has_bridge() {
        return Err(PlacementError::AlreadyBridged);
    }

    let cost = BuildingKind::Bridge.cost();
    if !player.can_afford(&cost) {
        return Err(PlacementError::CannotAfford);
    }
    if !network::can_place_bridge(grid, a, b, player.hq_position) {
        return Err(PlacementError::NotConnected);
    }

    player.deduct_cost(&cost);
    grid.place_bridge_raw(a, b, player.id);
    debug!(player = player.id, ?a, ?b, "bridge placed");
    Ok(())
}

/// Put a building of `kind` on `coord` for `player`
pub fn try_place_building(
    grid: &mut Grid,
    kind: BuildingKind,
    coord: GridCoord,
    player: &mut Player,
) -> Result<(), PlacementError> {
    if kind == BuildingKind::Bridge {
        return Err(PlacementError::UseBridgeMethod);
    }

    let tile = grid.get_tile(coord).ok_or(PlacementError::InvalidTile)?;
    if tile.is_occupied() {
        return Err(PlacementError::TileOccupied);
    }

    let cost = kind.cost();
    if !player.can_afford(&cost) {
        return Err(PlacementError::CannotAfford);
    }
    if !network::can_place_building(grid, coord) {
        return Err(PlacementError::NotNextToBridge);
    }

    player.deduct_cost(&cost);
    grid.set_building(coord, kind);
    debug!(player = player.id, ?kind, ?coord, "building placed");
    Ok(())
}

/// Upgrade the building on `coord`, paying the house-upgrade cost.
///
/// The upgrade is recorded on the player; it changes nothing on the grid.
pub fn try_upgrade_building(
    grid: &Grid,
    coord: GridCoord,
    player: &mut Player,
) -> Result<(), PlacementError> {
    let tile = grid.get_tile(coord).ok_or(PlacementError::InvalidTile)?;
    if !tile.is_occupied() {
        return Err(PlacementError::NoBuilding);
    }
    if player.is_upgraded(coord) {
        return Err(PlacementError::AlreadyUpgraded);
    }

    let cost = BuildingKind::HouseUpgrade.cost();
    if !player.deduct_cost(&cost) {
        return Err(PlacementError::CannotAfford);
    }

    player.mark_upgraded(coord);
    debug!(player = player.id, ?coord, "building upgraded");
    Ok(())
}
