//! Uranium Fever - rule engine for a three-player bridge-building economy game
//!
//! This crate provides the core game logic, including:
//! - A rectangular tile grid with bridgeable edges between neighbours
//! - Bridge network reachability from each player's headquarters
//! - Resource ledgers with wildcard-substituting cost payment
//! - An endless card deck with reshuffles and resource-only safe rounds
//! - Turn and round progression, and bonuses from networked buildings
//!
//! # Architecture
//!
//! The engine is platform-agnostic and has no rendering or input code. It can be
//! compiled to:
//! - Native Rust, driven by the `uranium-sim` binary or any other host
//! - WebAssembly (with the `wasm` feature) for a browser front end
//!
//! # Modules
//!
//! - [`grid`]: Tiles, edges and bridges
//! - [`network`]: Connectivity queries over the bridges
//! - [`placement`]: Validated bridge and building placement
//! - [`economy`]: Resource kinds and ledgers
//! - [`deck`]: Resource and disaster cards
//! - [`effects`]: Network building bonuses
//! - [`game`]: The `Match` state machine

pub mod actions;
pub mod building;
pub mod config;
pub mod deck;
pub mod economy;
pub mod effects;
pub mod game;
pub mod grid;
pub mod network;
pub mod placement;
pub mod player;
pub mod turn;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use building::{BuildingCost, BuildingKind};
pub use config::{ConfigError, MatchConfig, PlayerSetup};
pub use deck::{Card, Deck, DisasterKind};
pub use economy::{ResourceKind, ResourceLedger};
pub use effects::NetworkBonuses;
pub use game::{GameError, Match};
pub use grid::{Edge, EdgeBuilding, Grid, GridCoord, Orientation, PlayerId, Tile};
pub use placement::PlacementError;
pub use player::Player;
pub use turn::TurnClock;
