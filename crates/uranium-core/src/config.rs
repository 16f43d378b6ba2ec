//! Match setup: grid size, seats, deck composition and RNG seed.

use crate::economy::ResourceKind;
use crate::grid::{GridCoord, PlayerId};
use crate::turn::PLAYER_COUNT;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Why a match configuration was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 2x2, got {width}x{height}")]
    GridTooSmall { width: u32, height: u32 },

    #[error("expected {expected} players, got {got}")]
    WrongPlayerCount { expected: usize, got: usize },

    #[error("duplicate player id {0}")]
    DuplicatePlayerId(PlayerId),

    #[error("player {0} has a wildcard HQ")]
    WildcardHq(PlayerId),

    #[error("player {id} HQ at ({}, {}) is outside the grid", .position.x, .position.y)]
    HqOutOfBounds { id: PlayerId, position: GridCoord },

    #[error("players {0} and {1} share an HQ tile")]
    SharedHq(PlayerId, PlayerId),

    #[error("deck has no cards")]
    EmptyDeck,

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One seat at the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub id: PlayerId,
    pub hq_kind: ResourceKind,
    pub hq_position: GridCoord,
}

impl PlayerSetup {
    pub fn new(id: PlayerId, hq_kind: ResourceKind, hq_position: GridCoord) -> Self {
        Self {
            id,
            hq_kind,
            hq_position,
        }
    }
}

/// Everything needed to start a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    /// Seats in turn order
    pub players: Vec<PlayerSetup>,
    pub resource_cards: usize,
    pub disaster_cards: usize,
    /// Seed for the deck and the starting-car roll; entropy when absent
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            grid_width: 12,
            grid_height: 12,
            players: vec![
                PlayerSetup::new(1, ResourceKind::Food, GridCoord::new(3, 6)),
                PlayerSetup::new(2, ResourceKind::Electricity, GridCoord::new(6, 3)),
                PlayerSetup::new(3, ResourceKind::Medicine, GridCoord::new(8, 6)),
            ],
            resource_cards: 70,
            disaster_cards: 30,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Default setup with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse a JSON config and validate it. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.grid_width
            && (coord.y as u32) < self.grid_height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if self.players.len() != PLAYER_COUNT {
            return Err(ConfigError::WrongPlayerCount {
                expected: PLAYER_COUNT,
                got: self.players.len(),
            });
        }

        let mut ids = HashSet::new();
        for (i, setup) in self.players.iter().enumerate() {
            if !ids.insert(setup.id) {
                return Err(ConfigError::DuplicatePlayerId(setup.id));
            }
            if setup.hq_kind.is_wildcard() {
                return Err(ConfigError::WildcardHq(setup.id));
            }
            if !self.in_bounds(setup.hq_position) {
                return Err(ConfigError::HqOutOfBounds {
                    id: setup.id,
                    position: setup.hq_position,
                });
            }
            if let Some(other) = self.players[..i]
                .iter()
                .find(|p| p.hq_position == setup.hq_position)
            {
                return Err(ConfigError::SharedHq(other.id, setup.id));
            }
        }

        if self.resource_cards + self.disaster_cards == 0 {
            return Err(ConfigError::EmptyDeck);
        }

        Ok(())
    }
}
