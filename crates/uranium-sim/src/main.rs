//! Headless Uranium Fever match runner.
//!
//! Plays a fixed number of turns with a naive builder for every seat and logs each
//! event. `SIM_CONFIG` points at an optional JSON match config and `SIM_TURNS` sets
//! the number of turns (default 30).

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uranium_core::{BuildingKind, GameAction, GameEvent, Match, MatchConfig, PlayerId};

/// Buildings the naive builder tries, in order of preference
const BUILD_ORDER: [BuildingKind; 4] = [
    BuildingKind::Research,
    BuildingKind::Factory,
    BuildingKind::Defense,
    BuildingKind::House,
];

fn load_config() -> anyhow::Result<MatchConfig> {
    match std::env::var("SIM_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            MatchConfig::from_json(&json).with_context(|| format!("parsing config {}", path))
        }
        Err(_) => Ok(MatchConfig::default()),
    }
}

/// Build at most one bridge and one building, whichever the player can pay for
fn build_phase(game: &mut Match, player: PlayerId) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(&(a, b)) = game.valid_bridge_spots(player).first() {
        match game.apply_action(player, GameAction::PlaceBridge(a, b)) {
            Ok(e) => events.extend(e),
            Err(err) => debug!(player, %err, "bridge skipped"),
        }
    }

    if let Some(&spot) = game.valid_building_spots(player).first() {
        for kind in BUILD_ORDER {
            if let Ok(e) = game.apply_action(player, GameAction::PlaceBuilding(kind, spot)) {
                events.extend(e);
                break;
            }
        }
    }

    events
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::BuildingBuilt {
            player,
            kind,
            location,
        } => info!(
            player,
            building = kind.display_name(),
            x = location.x,
            y = location.y,
            "built"
        ),
        GameEvent::ResourcesGained {
            player,
            resource,
            amount,
        } => info!(player, resource = resource.display_name(), amount, "gained"),
        other => debug!(event = ?other),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let turns: u32 = std::env::var("SIM_TURNS")
        .unwrap_or_else(|_| "30".into())
        .parse()
        .context("SIM_TURNS must be a number")?;

    let config = load_config()?;
    let mut game = Match::new(config)?;

    info!(
        turns,
        starting_car = game.starting_car_player(),
        "Starting Uranium Fever simulation..."
    );

    for _ in 0..turns {
        let player = game.current_player();
        let mut events = build_phase(&mut game, player);
        events.extend(game.apply_action(player, GameAction::DrawCards)?);

        for event in &events {
            log_event(event);
        }
    }

    for player in game.players() {
        info!(
            player = player.id,
            resources = player.total_resource_count(),
            bonuses = %game.bonus_description(player.id).unwrap_or_default(),
            "final standing"
        );
    }
    info!(
        bridges = game.grid().bridge_count(),
        buildings = game.grid().total_building_count(),
        round = game.clock().current_round(),
        "simulation finished"
    );

    Ok(())
}
