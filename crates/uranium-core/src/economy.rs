//! Resource kinds, the per-player ledger, and cost payment with wildcard substitution.
//!
//! A cost is paid in two parts:
//! 1. Primary: from the HQ resource first, then from wildcards
//! 2. Secondary: from the two non-HQ fixed resources (in `ResourceKind::FIXED` order),
//!    then from whatever wildcards the primary part left over

use crate::building::BuildingCost;
use serde::{Deserialize, Serialize};

/// Resource types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Electricity,
    Food,
    Medicine,
    /// Wildcard, usable as primary or secondary
    PlayerChoice,
}

impl ResourceKind {
    /// All resource kinds, wildcard last
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Electricity,
        ResourceKind::Food,
        ResourceKind::Medicine,
        ResourceKind::PlayerChoice,
    ];

    /// The three kinds an HQ can produce
    pub const FIXED: [ResourceKind; 3] = [
        ResourceKind::Electricity,
        ResourceKind::Food,
        ResourceKind::Medicine,
    ];

    pub fn is_wildcard(&self) -> bool {
        matches!(self, ResourceKind::PlayerChoice)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Electricity => "Electricity",
            ResourceKind::Food => "Food",
            ResourceKind::Medicine => "Medicine",
            ResourceKind::PlayerChoice => "Player Choice",
        }
    }
}

/// Resource counts held by one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    pub electricity: u32,
    pub food: u32,
    pub medicine: u32,
    pub player_choice: u32,
}

impl ResourceLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with specific amounts
    pub fn with_amounts(electricity: u32, food: u32, medicine: u32, player_choice: u32) -> Self {
        Self {
            electricity,
            food,
            medicine,
            player_choice,
        }
    }

    /// Total number of resources
    pub fn total(&self) -> u32 {
        self.electricity + self.food + self.medicine + self.player_choice
    }

    /// Get count of a specific resource
    pub fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Electricity => self.electricity,
            ResourceKind::Food => self.food,
            ResourceKind::Medicine => self.medicine,
            ResourceKind::PlayerChoice => self.player_choice,
        }
    }

    fn slot(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Electricity => &mut self.electricity,
            ResourceKind::Food => &mut self.food,
            ResourceKind::Medicine => &mut self.medicine,
            ResourceKind::PlayerChoice => &mut self.player_choice,
        }
    }

    /// Add resources
    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        *self.slot(kind) += amount;
    }

    /// Remove resources, returning false (and leaving the ledger alone) if there
    /// aren't enough
    pub fn remove(&mut self, kind: ResourceKind, amount: u32) -> bool {
        let slot = self.slot(kind);
        if amount > *slot {
            return false;
        }
        *slot -= amount;
        true
    }

    /// Sum of the two fixed kinds that aren't the HQ kind
    fn secondary_available(&self, hq: ResourceKind) -> u32 {
        ResourceKind::FIXED
            .iter()
            .filter(|k| **k != hq)
            .map(|k| self.get(*k))
            .sum()
    }

    /// Check if a cost can be paid by a player whose HQ produces `hq`
    pub fn can_afford(&self, hq: ResourceKind, cost: &BuildingCost) -> bool {
        if cost.total() == 0 {
            return true;
        }

        let wild_available = self.player_choice;

        let primary_short = cost.primary.saturating_sub(self.get(hq));
        let wild_for_primary = wild_available.min(primary_short);
        if primary_short > wild_for_primary {
            return false;
        }

        let secondary_short = cost.secondary.saturating_sub(self.secondary_available(hq));
        let wild_remaining = wild_available - wild_for_primary;
        let wild_for_secondary = wild_remaining.min(secondary_short);

        secondary_short == wild_for_secondary
    }

    /// Pay a cost. Returns false without touching the ledger when
    /// [`can_afford`](Self::can_afford) would say no.
    pub fn deduct_cost(&mut self, hq: ResourceKind, cost: &BuildingCost) -> bool {
        if !self.can_afford(hq, cost) {
            return false;
        }
        if cost.total() == 0 {
            return true;
        }

        // Primary: HQ resource, then wildcards
        let from_hq = self.get(hq).min(cost.primary);
        *self.slot(hq) -= from_hq;
        let primary_left = cost.primary - from_hq;
        *self.slot(ResourceKind::PlayerChoice) -= primary_left;

        // Secondary: other fixed kinds in enumeration order, then wildcards
        let mut secondary_left = cost.secondary;
        for kind in ResourceKind::FIXED {
            if kind == hq || secondary_left == 0 {
                continue;
            }
            let take = self.get(kind).min(secondary_left);
            *self.slot(kind) -= take;
            secondary_left -= take;
        }
        *self.slot(ResourceKind::PlayerChoice) -= secondary_left;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ledger_add_and_remove() {
        let mut ledger = ResourceLedger::new();
        ledger.add(ResourceKind::Food, 1);
        ledger.add(ResourceKind::Food, 1);
        assert_eq!(ledger.get(ResourceKind::Food), 2);

        assert!(ledger.remove(ResourceKind::Food, 2));
        assert_eq!(ledger.get(ResourceKind::Food), 0);
    }

    #[test]
    fn test_remove_too_many_is_noop() {
        let mut ledger = ResourceLedger::with_amounts(1, 0, 0, 0);
        assert!(!ledger.remove(ResourceKind::Electricity, 2));
        assert_eq!(ledger.get(ResourceKind::Electricity), 1);
    }

    #[test]
    fn test_total() {
        let ledger = ResourceLedger::with_amounts(1, 2, 3, 4);
        assert_eq!(ledger.total(), 10);
    }

    #[test]
    fn test_exact_payment() {
        // Food HQ, 2 food + 1 electricity against 2 primary + 1 secondary
        let mut ledger = ResourceLedger::with_amounts(1, 2, 0, 0);
        let cost = BuildingCost::new(2, 1);
        assert!(ledger.can_afford(ResourceKind::Food, &cost));
        assert!(ledger.deduct_cost(ResourceKind::Food, &cost));
        assert_eq!(ledger, ResourceLedger::new());
    }

    #[test]
    fn test_wildcard_covers_primary() {
        let mut ledger = ResourceLedger::with_amounts(0, 1, 1, 1);
        let cost = BuildingCost::new(2, 1);
        assert!(ledger.can_afford(ResourceKind::Food, &cost));
        assert!(ledger.deduct_cost(ResourceKind::Food, &cost));
        assert_eq!(ledger, ResourceLedger::new());
    }

    #[test]
    fn test_wildcard_covers_secondary() {
        let mut ledger = ResourceLedger::with_amounts(0, 2, 0, 1);
        let cost = BuildingCost::new(2, 1);
        assert!(ledger.deduct_cost(ResourceKind::Food, &cost));
        assert_eq!(ledger, ResourceLedger::new());
    }

    #[test]
    fn test_wildcard_not_counted_twice() {
        // One wildcard can't fill both a primary gap and a secondary gap
        let ledger = ResourceLedger::with_amounts(0, 1, 0, 1);
        assert!(!ledger.can_afford(ResourceKind::Food, &BuildingCost::new(2, 1)));
    }

    #[test]
    fn test_hq_resource_is_not_secondary() {
        // Surplus HQ resource doesn't pay the secondary part
        let ledger = ResourceLedger::with_amounts(0, 5, 0, 0);
        assert!(!ledger.can_afford(ResourceKind::Food, &BuildingCost::new(2, 1)));
    }

    #[test]
    fn test_secondary_in_enumeration_order() {
        // Medicine HQ: secondary comes from Electricity before Food
        let mut ledger = ResourceLedger::with_amounts(1, 3, 2, 0);
        assert!(ledger.deduct_cost(ResourceKind::Medicine, &BuildingCost::new(2, 2)));
        assert_eq!(ledger, ResourceLedger::with_amounts(0, 2, 0, 0));
    }

    #[test]
    fn test_hq_spent_before_wildcard() {
        let mut ledger = ResourceLedger::with_amounts(3, 0, 0, 4);
        assert!(ledger.deduct_cost(ResourceKind::Electricity, &BuildingCost::new(5, 1)));
        // 3 electricity, then 2 wildcards for primary, 1 wildcard for secondary
        assert_eq!(ledger, ResourceLedger::with_amounts(0, 0, 0, 1));
    }

    #[test]
    fn test_free_cost() {
        let mut ledger = ResourceLedger::new();
        assert!(ledger.can_afford(ResourceKind::Food, &BuildingCost::free()));
        assert!(ledger.deduct_cost(ResourceKind::Food, &BuildingCost::free()));
        assert_eq!(ledger, ResourceLedger::new());
    }

    #[test]
    fn test_unaffordable_deduct_is_noop() {
        let mut ledger = ResourceLedger::with_amounts(0, 1, 0, 0);
        assert!(!ledger.deduct_cost(ResourceKind::Food, &BuildingCost::new(7, 1)));
        assert_eq!(ledger, ResourceLedger::with_amounts(0, 1, 0, 0));
    }
}
