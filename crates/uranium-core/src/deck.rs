//! The endless card deck.
//!
//! Cards move from the draw pile to the discard pile as they're drawn. When the draw
//! pile runs dry the discard pile is shuffled back in, so the deck never runs out as
//! long as it was initialized with at least one card.
//!
//! During safe rounds only resource cards may come out; the deck then picks a random
//! resource card from anywhere in the draw pile instead of taking the top card.

use crate::economy::ResourceKind;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Disaster types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisasterKind {
    /// Destroys bridges
    Earthquake,
    /// Blocks areas
    Flood,
    /// Destroys buildings
    Tornado,
    /// Steals resources
    Thief,
    /// Destroys buildings chosen by dice
    Donkey,
}

impl DisasterKind {
    /// All disaster types
    pub const ALL: [DisasterKind; 5] = [
        DisasterKind::Earthquake,
        DisasterKind::Flood,
        DisasterKind::Tornado,
        DisasterKind::Thief,
        DisasterKind::Donkey,
    ];
}

/// A card in the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Resource {
        kind: ResourceKind,
        /// Printed value; the draw rules don't read it
        value: u32,
    },
    Disaster(DisasterKind),
}

impl Card {
    /// A resource card with the standard value of 1
    pub fn resource(kind: ResourceKind) -> Self {
        Card::Resource { kind, value: 1 }
    }

    pub fn disaster(kind: DisasterKind) -> Self {
        Card::Disaster(kind)
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, Card::Resource { .. })
    }

    pub fn is_disaster(&self) -> bool {
        matches!(self, Card::Disaster(_))
    }

    pub fn resource_kind(&self) -> Option<ResourceKind> {
        match self {
            Card::Resource { kind, .. } => Some(*kind),
            Card::Disaster(_) => None,
        }
    }

    pub fn disaster_kind(&self) -> Option<DisasterKind> {
        match self {
            Card::Resource { .. } => None,
            Card::Disaster(kind) => Some(*kind),
        }
    }
}

/// Split `count` cards as evenly as possible over `kinds`, the remainder going one
/// extra each to the first kinds in order
fn even_split<T: Copy>(kinds: &[T], count: usize) -> impl Iterator<Item = T> + '_ {
    let base = count / kinds.len();
    let remainder = count % kinds.len();
    kinds.iter().enumerate().flat_map(move |(i, kind)| {
        let n = base + usize::from(i < remainder);
        std::iter::repeat(*kind).take(n)
    })
}

/// Draw pile plus discard pile
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    /// Front is the top of the pile
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
    total_cards: usize,
    #[serde(skip)]
    rng: StdRng,
}

impl Deck {
    /// Create an empty deck with an entropy-seeded RNG
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty deck whose shuffles and picks are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            draw_pile: VecDeque::new(),
            discard_pile: Vec::new(),
            total_cards: 0,
            rng,
        }
    }

    /// Fill the deck with `resource_count` resource cards spread over the four resource
    /// kinds and `disaster_count` disaster cards spread over the five disaster kinds,
    /// then shuffle. Anything already in the deck is discarded.
    pub fn initialize(&mut self, resource_count: usize, disaster_count: usize) {
        self.draw_pile.clear();
        self.discard_pile.clear();

        self.draw_pile
            .extend(even_split(&ResourceKind::ALL, resource_count).map(Card::resource));
        self.draw_pile
            .extend(even_split(&DisasterKind::ALL, disaster_count).map(Card::disaster));

        self.total_cards = self.draw_pile.len();
        self.shuffle();
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn remaining_cards(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discarded_cards(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards in the draw pile, top first
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile.iter()
    }

    /// Draw a card, reshuffling the discard pile in when needed.
    ///
    /// Returns `None` only when there is nothing eligible left in either pile.
    pub fn draw_card(&mut self, is_safe_round: bool) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discard_pile();
        }
        if self.draw_pile.is_empty() {
            return None;
        }

        let card = if is_safe_round {
            let mut candidates = self.resource_positions();
            if candidates.is_empty() {
                self.reshuffle_discard_pile();
                candidates = self.resource_positions();
            }
            if candidates.is_empty() {
                return None;
            }
            let pick = candidates[self.rng.gen_range(0..candidates.len())];
            self.draw_pile.remove(pick)?
        } else {
            self.draw_pile.pop_front()?
        };

        self.discard_pile.push(card);
        Some(card)
    }

    fn resource_positions(&self) -> Vec<usize> {
        self.draw_pile
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_resource())
            .map(|(i, _)| i)
            .collect()
    }

    fn shuffle(&mut self) {
        self.draw_pile.make_contiguous().shuffle(&mut self.rng);
    }

    /// Move every discarded card back into the draw pile and shuffle it
    fn reshuffle_discard_pile(&mut self) {
        if self.discard_pile.is_empty() {
            return;
        }
        debug!(
            returning = self.discard_pile.len(),
            "reshuffling discard pile into draw pile"
        );
        self.draw_pile.extend(self.discard_pile.drain(..));
        self.shuffle();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
