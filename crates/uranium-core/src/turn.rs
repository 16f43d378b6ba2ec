//! Round counter and turn rotation for the three seats.

use serde::{Deserialize, Serialize};

/// Number of seats at the table
pub const PLAYER_COUNT: usize = 3;

/// Rounds 1 through this one only deal resource cards
pub const SAFE_ROUNDS: u32 = 3;

/// Tracks whose turn it is and which round the match is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    current_round: u32,
    current_player_index: usize,
}

impl TurnClock {
    /// Round 1, first seat
    pub fn new() -> Self {
        Self {
            current_round: 1,
            current_player_index: 0,
        }
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Seat index in `0..PLAYER_COUNT`
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn is_safe_round(&self) -> bool {
        self.current_round <= SAFE_ROUNDS
    }

    /// Pass the turn to the next seat, starting a new round after the last one
    pub fn next_turn(&mut self) {
        self.current_player_index += 1;
        if self.current_player_index >= PLAYER_COUNT {
            self.current_player_index = 0;
            self.next_round();
        }
    }

    pub fn next_round(&mut self) {
        self.current_round += 1;
    }
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new()
    }
}
