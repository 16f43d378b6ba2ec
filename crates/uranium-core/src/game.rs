//! Match state machine.
//!
//! This module contains the `Match` struct, which owns the grid, the players, the deck
//! and the turn clock, and applies player actions to them one at a time.

use crate::actions::{GameAction, GameEvent};
use crate::config::{ConfigError, MatchConfig};
use crate::deck::{Card, Deck};
use crate::effects;
use crate::grid::{Grid, GridCoord, PlayerId};
use crate::network;
use crate::placement::{self, PlacementError};
use crate::player::Player;
use crate::turn::{TurnClock, PLAYER_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Draws per turn with a research building in the network
const RESEARCH_DRAWS: u32 = 2;

/// Errors that can occur when applying actions
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Not your turn")]
    NotYourTurn,

    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A running match
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    grid: Grid,
    /// Seats in turn order
    players: Vec<Player>,
    deck: Deck,
    clock: TurnClock,
    /// Seat that starts with the car
    starting_car_index: usize,
}

impl Match {
    /// Set up a match: empty grid, players with empty ledgers, shuffled deck
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut deck = Deck::with_seed(rng.gen());
        deck.initialize(config.resource_cards, config.disaster_cards);

        let players = config
            .players
            .iter()
            .map(|setup| Player::new(setup.id, setup.hq_kind, setup.hq_position))
            .collect();

        let starting_car_index = rng.gen_range(0..PLAYER_COUNT);

        info!(
            width = config.grid_width,
            height = config.grid_height,
            cards = deck.total_cards(),
            "match started"
        );

        Ok(Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            players,
            deck,
            clock: TurnClock::new(),
            starting_car_index,
        })
    }

    // ==================== Query Methods ====================

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    /// Players in turn order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by ID
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn player_index(&self, id: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// ID of the player whose turn it is
    pub fn current_player(&self) -> PlayerId {
        self.players[self.clock.current_player_index()].id
    }

    /// ID of the player who was dealt the starting car
    pub fn starting_car_player(&self) -> PlayerId {
        self.players[self.starting_car_index].id
    }

    /// Whether `player_id` could bridge `a`-`b` as far as the network rule goes
    pub fn can_place_bridge(&self, player_id: PlayerId, a: GridCoord, b: GridCoord) -> bool {
        self.player(player_id)
            .is_some_and(|p| network::can_place_bridge(&self.grid, a, b, p.hq_position))
    }

    /// Whether `coord` flanks a bridge
    pub fn can_place_building(&self, coord: GridCoord) -> bool {
        network::can_place_building(&self.grid, coord)
    }

    /// Empty edges the player's network could reach, as endpoint pairs
    pub fn valid_bridge_spots(&self, player_id: PlayerId) -> Vec<(GridCoord, GridCoord)> {
        let Some(player) = self.player(player_id) else {
            return Vec::new();
        };
        self.grid
            .edges()
            .filter(|edge| !edge.has_bridge())
            .map(|edge| {
                let [a, b] = edge.endpoints();
                (a, b)
            })
            .filter(|&(a, b)| network::can_place_bridge(&self.grid, a, b, player.hq_position))
            .collect()
    }

    /// Empty tiles next to a bridge
    pub fn valid_building_spots(&self, player_id: PlayerId) -> Vec<GridCoord> {
        if self.player(player_id).is_none() {
            return Vec::new();
        }
        self.grid
            .tiles()
            .filter(|tile| !tile.is_occupied())
            .map(|tile| tile.coord)
            .filter(|&coord| network::can_place_building(&self.grid, coord))
            .collect()
    }

    /// Summary of a player's network bonuses
    pub fn bonus_description(&self, player_id: PlayerId) -> Option<String> {
        self.player(player_id)
            .map(|p| effects::bonus_description(&self.grid, p))
    }

    /// Serialize the full match state
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    // ==================== Actions ====================

    /// Apply an action to the match
    pub fn apply_action(
        &mut self,
        player_id: PlayerId,
        action: GameAction,
    ) -> Result<Vec<GameEvent>, GameError> {
        let index = self.player_index(player_id)?;
        if index != self.clock.current_player_index() {
            return Err(GameError::NotYourTurn);
        }

        let mut events = Vec::new();

        match action {
            GameAction::PlaceBridge(from, to) => {
                placement::try_place_bridge(&mut self.grid, from, to, &mut self.players[index])?;
                events.push(GameEvent::BridgeBuilt {
                    player: player_id,
                    from,
                    to,
                });
            }

            GameAction::PlaceBuilding(kind, location) => {
                placement::try_place_building(
                    &mut self.grid,
                    kind,
                    location,
                    &mut self.players[index],
                )?;
                events.push(GameEvent::BuildingBuilt {
                    player: player_id,
                    kind,
                    location,
                });
            }

            GameAction::UpgradeBuilding(location) => {
                placement::try_upgrade_building(&self.grid, location, &mut self.players[index])?;
                events.push(GameEvent::BuildingUpgraded {
                    player: player_id,
                    location,
                });
            }

            GameAction::DrawCards => {
                events.extend(self.draw_cards(index));
                events.extend(self.end_turn(player_id));
            }
        }

        Ok(events)
    }

    // ==================== Helper Methods ====================

    /// Deal the turn's cards to the player in seat `index`
    fn draw_cards(&mut self, index: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let player_id = self.players[index].id;

        let draws = if effects::has_research_bonus(&self.grid, &self.players[index]) {
            RESEARCH_DRAWS
        } else {
            1
        };

        for _ in 0..draws {
            match self.deck.draw_card(self.clock.is_safe_round()) {
                Some(Card::Resource { kind, .. }) => {
                    let bonus = effects::resource_bonus(&self.grid, &self.players[index], kind);
                    let amount = 1 + bonus;
                    self.players[index].resources.add(kind, amount);
                    info!(player = player_id, ?kind, amount, "resource card drawn");
                    events.push(GameEvent::ResourcesGained {
                        player: player_id,
                        resource: kind,
                        amount,
                    });
                }
                Some(Card::Disaster(disaster)) => {
                    let reduction = effects::disaster_reduction(&self.grid, &self.players[index]);
                    info!(player = player_id, ?disaster, reduction, "disaster drawn");
                    events.push(GameEvent::DisasterDrawn {
                        player: player_id,
                        disaster,
                        reduction,
                    });
                }
                None => {
                    warn!(player = player_id, "no card available");
                    events.push(GameEvent::NoCardAvailable { player: player_id });
                }
            }
        }

        events
    }

    /// Pass the turn on, reporting a new round if one started
    fn end_turn(&mut self, player_id: PlayerId) -> Vec<GameEvent> {
        let round = self.clock.current_round();
        self.clock.next_turn();

        let mut events = vec![GameEvent::TurnEnded {
            player: player_id,
            next_player: self.current_player(),
        }];

        if self.clock.current_round() != round {
            let safe = self.clock.is_safe_round();
            info!(round = self.clock.current_round(), safe, "round started");
            events.push(GameEvent::RoundStarted {
                round: self.clock.current_round(),
                safe,
            });
        }

        events
    }
}
