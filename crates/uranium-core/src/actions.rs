//! Player actions and the events they produce.
//!
//! This module defines everything a player can ask a [`Match`](crate::game::Match) to
//! do, and the events the match reports back.

use crate::building::BuildingKind;
use crate::deck::DisasterKind;
use crate::economy::ResourceKind;
use crate::grid::{GridCoord, PlayerId};
use serde::{Deserialize, Serialize};

/// All possible actions a player can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    // ==================== Building Actions ====================
    /// Build a bridge on the edge between two tiles
    PlaceBridge(GridCoord, GridCoord),
    /// Put a building on a tile next to a bridge
    PlaceBuilding(BuildingKind, GridCoord),
    /// Upgrade an existing building
    UpgradeBuilding(GridCoord),

    // ==================== Turn Management ====================
    /// Draw this turn's cards and pass to the next player
    DrawCards,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bridge was built
    BridgeBuilt {
        player: PlayerId,
        from: GridCoord,
        to: GridCoord,
    },

    /// A building was placed
    BuildingBuilt {
        player: PlayerId,
        kind: BuildingKind,
        location: GridCoord,
    },

    /// A building was upgraded
    BuildingUpgraded {
        player: PlayerId,
        location: GridCoord,
    },

    /// A resource card paid out, bonus included
    ResourcesGained {
        player: PlayerId,
        resource: ResourceKind,
        amount: u32,
    },

    /// A disaster card came up. Its board effects aren't resolved.
    DisasterDrawn {
        player: PlayerId,
        disaster: DisasterKind,
        /// Strength absorbed by the player's defenses
        reduction: u32,
    },

    /// The deck had nothing eligible to deal
    NoCardAvailable { player: PlayerId },

    /// Turn ended
    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// A new round began
    RoundStarted { round: u32, safe: bool },
}
