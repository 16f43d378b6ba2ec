//! Property-based tests for the grid, economy, deck and turn rules.

use proptest::prelude::*;

use uranium_core::network::{can_place_bridge, connected_network, is_connected_to_hq};
use uranium_core::{BuildingCost, Deck, Grid, GridCoord, ResourceKind, ResourceLedger, TurnClock};

fn fixed_kind() -> impl Strategy<Value = ResourceKind> {
    prop::sample::select(ResourceKind::FIXED.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Edge count matches the closed form for every grid size.
    #[test]
    fn prop_edge_count(width in 2u32..30, height in 2u32..30) {
        let grid = Grid::new(width, height);
        let expected = (width - 1) * height + width * (height - 1);
        prop_assert_eq!(grid.edges().count(), expected as usize);
    }

    /// No bridge may touch the HQ tile, whatever else is built.
    #[test]
    fn prop_bridge_never_touches_hq(
        hx in 1i32..11,
        hy in 1i32..11,
        dir in 0usize..4,
        bridges in prop::collection::vec((0i32..12, 0i32..12, any::<bool>()), 0..20)
    ) {
        let mut grid = Grid::new(12, 12);
        for (x, y, horizontal) in bridges {
            let other = if horizontal { GridCoord::new(x + 1, y) } else { GridCoord::new(x, y + 1) };
            grid.place_bridge_raw(GridCoord::new(x, y), other, 1);
        }
        let hq = GridCoord::new(hx, hy);
        let neighbor = hq.neighbors()[dir];
        prop_assert!(!can_place_bridge(&grid, hq, neighbor, hq));
        prop_assert!(!can_place_bridge(&grid, neighbor, hq, hq));
    }

    /// Every tile of the HQ's network counts as connected to it, and the HQ is always in it.
    #[test]
    fn prop_network_tiles_connected(
        bridges in prop::collection::vec((0i32..12, 0i32..12, any::<bool>()), 0..40)
    ) {
        let mut grid = Grid::new(12, 12);
        for (x, y, horizontal) in bridges {
            let other = if horizontal { GridCoord::new(x + 1, y) } else { GridCoord::new(x, y + 1) };
            grid.place_bridge_raw(GridCoord::new(x, y), other, 1);
        }
        let hq = GridCoord::new(5, 5);
        let network = connected_network(&grid, hq);
        prop_assert!(network.contains(&hq));
        for tile in network {
            prop_assert!(is_connected_to_hq(&grid, tile, hq));
        }
    }

    /// Paying a cost removes exactly its total, or nothing when unaffordable.
    #[test]
    fn prop_deduct_exact_or_noop(
        e in 0u32..8, f in 0u32..8, m in 0u32..8, w in 0u32..8,
        primary in 0u32..8, secondary in 0u32..4,
        hq in fixed_kind()
    ) {
        let mut ledger = ResourceLedger::with_amounts(e, f, m, w);
        let before = ledger.clone();
        let cost = BuildingCost::new(primary, secondary);

        let affordable = ledger.can_afford(hq, &cost);
        prop_assert_eq!(ledger.deduct_cost(hq, &cost), affordable);
        if affordable {
            prop_assert_eq!(ledger.total(), before.total() - cost.total());
        } else {
            prop_assert_eq!(ledger, before);
        }
    }

    /// Drawing never creates or loses cards.
    #[test]
    fn prop_deck_conservation(
        resources in 0usize..60,
        disasters in 0usize..40,
        seed in any::<u64>(),
        rounds in prop::collection::vec(any::<bool>(), 1..150)
    ) {
        let mut deck = Deck::with_seed(seed);
        deck.initialize(resources, disasters);
        prop_assert_eq!(deck.total_cards(), resources + disasters);

        for safe in rounds {
            deck.draw_card(safe);
            prop_assert_eq!(deck.remaining_cards() + deck.discarded_cards(), deck.total_cards());
        }
    }

    /// Safe-round draws are always resources while the deck holds any.
    #[test]
    fn prop_safe_draws_are_resources(
        resources in 1usize..40,
        disasters in 0usize..40,
        seed in any::<u64>(),
        draws in 1usize..100
    ) {
        let mut deck = Deck::with_seed(seed);
        deck.initialize(resources, disasters);
        for _ in 0..draws {
            let card = deck.draw_card(true);
            prop_assert!(card.is_some_and(|c| c.is_resource()));
        }
    }

    /// Three turns always make exactly one round.
    #[test]
    fn prop_three_turns_per_round(turns in 0u32..300) {
        let mut clock = TurnClock::new();
        for _ in 0..turns {
            clock.next_turn();
        }
        prop_assert_eq!(clock.current_round(), 1 + turns / 3);
        prop_assert_eq!(clock.current_player_index(), (turns % 3) as usize);
    }
}
