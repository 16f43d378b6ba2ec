//! Player state: headquarters, resources, and upgraded buildings.

use crate::building::BuildingCost;
use crate::economy::{ResourceKind, ResourceLedger};
use crate::grid::{GridCoord, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single player's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID
    pub id: PlayerId,
    /// Resource this player's HQ produces; never the wildcard
    pub hq_kind: ResourceKind,
    /// HQ tile
    pub hq_position: GridCoord,
    /// Current resources
    pub resources: ResourceLedger,
    /// Tiles whose buildings this player has upgraded (immune to earthquakes and tornadoes)
    upgraded: BTreeSet<GridCoord>,
}

impl Player {
    /// Create a new player with an empty ledger
    pub fn new(id: PlayerId, hq_kind: ResourceKind, hq_position: GridCoord) -> Self {
        Self {
            id,
            hq_kind,
            hq_position,
            resources: ResourceLedger::new(),
            upgraded: BTreeSet::new(),
        }
    }

    pub fn add_resource(&mut self, kind: ResourceKind) {
        self.resources.add(kind, 1);
    }

    /// Remove `amount` of a resource; false (and no change) if the player has fewer
    pub fn remove_resource(&mut self, kind: ResourceKind, amount: u32) -> bool {
        self.resources.remove(kind, amount)
    }

    pub fn resource_count(&self, kind: ResourceKind) -> u32 {
        self.resources.get(kind)
    }

    pub fn total_resource_count(&self) -> u32 {
        self.resources.total()
    }

    /// Can this player pay for the given cost?
    pub fn can_afford(&self, cost: &BuildingCost) -> bool {
        self.resources.can_afford(self.hq_kind, cost)
    }

    /// Pay a cost; false (and no change) if unaffordable
    pub fn deduct_cost(&mut self, cost: &BuildingCost) -> bool {
        self.resources.deduct_cost(self.hq_kind, cost)
    }

    pub fn is_upgraded(&self, coord: GridCoord) -> bool {
        self.upgraded.contains(&coord)
    }

    pub fn upgraded_buildings(&self) -> impl Iterator<Item = &GridCoord> {
        self.upgraded.iter()
    }

    pub(crate) fn mark_upgraded(&mut self, coord: GridCoord) {
        self.upgraded.insert(coord);
    }
}
