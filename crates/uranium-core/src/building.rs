//! Building kinds and their costs.
//!
//! Every cost is split into a primary part, paid in the builder's HQ resource, and a
//! secondary part, paid in any of the other fixed resources. Wildcards can stand in
//! for either part (see [`crate::economy`]).

use serde::{Deserialize, Serialize};

/// Everything a player can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    /// Goes on an edge; opens the four flanking tiles for construction
    Bridge,
    /// Reduces disaster strength by one
    Defense,
    /// +4 resources per draw
    Factory,
    /// Draw twice per turn
    Research,
    /// +1 resource per draw
    House,
    /// Resource transport
    Car,
    /// Has to be repaired before it's useful
    BrokenCar,
    /// Makes a building immune to earthquakes and tornadoes
    HouseUpgrade,
}

impl BuildingKind {
    /// All building kinds
    pub const ALL: [BuildingKind; 8] = [
        BuildingKind::Bridge,
        BuildingKind::Defense,
        BuildingKind::Factory,
        BuildingKind::Research,
        BuildingKind::House,
        BuildingKind::Car,
        BuildingKind::BrokenCar,
        BuildingKind::HouseUpgrade,
    ];

    /// Cost to build this
    pub fn cost(&self) -> BuildingCost {
        match self {
            BuildingKind::Bridge => BuildingCost::new(2, 1),
            BuildingKind::Defense => BuildingCost::new(7, 1),
            BuildingKind::Factory => BuildingCost::new(2, 1),
            BuildingKind::Research => BuildingCost::new(5, 1),
            BuildingKind::House => BuildingCost::new(2, 1),
            BuildingKind::Car => BuildingCost::free(),
            BuildingKind::BrokenCar => BuildingCost::new(3, 1),
            BuildingKind::HouseUpgrade => BuildingCost::new(3, 1),
        }
    }

    /// Name shown to players
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingKind::Bridge => "Bridge",
            BuildingKind::Defense => "Defense",
            BuildingKind::Factory => "Factory",
            BuildingKind::Research => "Research",
            BuildingKind::House => "House",
            BuildingKind::Car => "Car",
            BuildingKind::BrokenCar => "Broken Car",
            BuildingKind::HouseUpgrade => "House Upgrade",
        }
    }

    pub fn is_house(&self) -> bool {
        matches!(self, BuildingKind::House)
    }
}

/// Resource cost of a building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildingCost {
    /// Paid in the builder's HQ resource
    pub primary: u32,
    /// Paid in any other fixed resource
    pub secondary: u32,
}

impl BuildingCost {
    pub const fn new(primary: u32, secondary: u32) -> Self {
        Self { primary, secondary }
    }

    pub const fn free() -> Self {
        Self::new(0, 0)
    }

    pub fn total(&self) -> u32 {
        self.primary + self.secondary
    }
}
