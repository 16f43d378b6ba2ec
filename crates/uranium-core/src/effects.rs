//! Bonuses a player gets from the buildings in their bridge network.
//!
//! Only buildings on tiles reachable from the player's HQ count. Buildings on flank
//! tiles that aren't themselves on the network contribute nothing.

use crate::building::BuildingKind;
use crate::economy::ResourceKind;
use crate::grid::{Grid, PlayerId};
use crate::network;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Bonus value of each factory on a resource draw
const FACTORY_RESOURCE_BONUS: u32 = 4;

/// Counts of the bonus-granting buildings in a player's network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkBonuses {
    pub factories: u32,
    pub houses: u32,
    pub defenses: u32,
    pub research: u32,
}

impl NetworkBonuses {
    /// Tally the buildings in `player`'s network
    pub fn for_player(grid: &Grid, player: &Player) -> Self {
        let mut bonuses = Self::default();
        for tile in network::buildings_in_network(grid, player.hq_position) {
            match tile.building {
                Some(BuildingKind::Factory) => bonuses.factories += 1,
                Some(BuildingKind::House) => bonuses.houses += 1,
                Some(BuildingKind::Defense) => bonuses.defenses += 1,
                Some(BuildingKind::Research) => bonuses.research += 1,
                _ => {}
            }
        }
        bonuses
    }
}

/// Extra units granted on a resource draw.
///
/// Flat: the drawn kind doesn't change the amount.
pub fn resource_bonus(grid: &Grid, player: &Player, _kind: ResourceKind) -> u32 {
    let bonuses = NetworkBonuses::for_player(grid, player);
    FACTORY_RESOURCE_BONUS * bonuses.factories + bonuses.houses
}

/// Any research building in the network doubles the turn's draws
pub fn has_research_bonus(grid: &Grid, player: &Player) -> bool {
    NetworkBonuses::for_player(grid, player).research > 0
}

/// How much disaster strength the player's defenses absorb
pub fn disaster_reduction(grid: &Grid, player: &Player) -> u32 {
    NetworkBonuses::for_player(grid, player).defenses
}

/// One card plus one per house in the network.
///
/// Not used by the turn loop, which only looks at [`has_research_bonus`].
pub fn card_draw_count(grid: &Grid, player: &Player) -> u32 {
    1 + NetworkBonuses::for_player(grid, player).houses
}

/// Human-readable summary of the player's active bonuses
pub fn bonus_description(grid: &Grid, player: &Player) -> String {
    let bonuses = NetworkBonuses::for_player(grid, player);
    let mut parts = Vec::new();

    if bonuses.factories > 0 {
        parts.push(format!(
            "Factory x{} (+{} resources)",
            bonuses.factories,
            bonuses.factories * FACTORY_RESOURCE_BONUS
        ));
    }
    if bonuses.houses > 0 {
        parts.push(format!(
            "House x{} (+{} resources, +{} draws)",
            bonuses.houses, bonuses.houses, bonuses.houses
        ));
    }
    if bonuses.defenses > 0 {
        parts.push(format!(
            "Defense x{} (-{} disaster strength)",
            bonuses.defenses, bonuses.defenses
        ));
    }
    if bonuses.research > 0 {
        parts.push("Research (draw twice)".to_string());
    }

    if parts.is_empty() {
        "No network bonuses".to_string()
    } else {
        parts.join(", ")
    }
}

/// `player` plus every other player whose HQ network touches theirs
pub fn connected_players(grid: &Grid, player: &Player, players: &[Player]) -> Vec<PlayerId> {
    let mut connected = vec![player.id];
    connected.extend(
        players
            .iter()
            .filter(|other| other.id != player.id)
            .filter(|other| {
                network::are_networks_connected(grid, player.hq_position, other.hq_position)
            })
            .map(|other| other.id),
    );
    connected
}
