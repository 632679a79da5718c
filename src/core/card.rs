//! Train cards and per-player card counts.
//!
//! There are nine card kinds: eight colors and a wild card. A route is
//! claimed by spending cards of a single color, optionally topped up with
//! one wild card.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A train card.
///
/// Exhausted decks are modelled as `Option<Card>::None`, never as a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Black,
    Blue,
    Green,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
    /// Substitutes for exactly one unit of any color.
    Wild,
}

impl Card {
    /// Number of card kinds.
    pub const COUNT: usize = 9;

    /// Every card kind, wild last.
    pub const ALL: [Card; Card::COUNT] = [
        Card::Black,
        Card::Blue,
        Card::Green,
        Card::Orange,
        Card::Pink,
        Card::Red,
        Card::White,
        Card::Yellow,
        Card::Wild,
    ];

    /// The eight non-wild colors, in scan order for the claim algorithm.
    pub const COLORS: [Card; 8] = [
        Card::Black,
        Card::Blue,
        Card::Green,
        Card::Orange,
        Card::Pink,
        Card::Red,
        Card::White,
        Card::Yellow,
    ];

    /// Dense index into a [`CardCounts`] table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Card::Wild)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Card::Black => "BLACK",
            Card::Blue => "BLUE",
            Card::Green => "GREEN",
            Card::Orange => "ORANGE",
            Card::Pink => "PINK",
            Card::Red => "RED",
            Card::White => "WHITE",
            Card::Yellow => "YELLOW",
            Card::Wild => "WILD",
        };
        f.write_str(name)
    }
}

/// One counter per card kind.
///
/// ```
/// use rail_barons::core::{Card, CardCounts};
///
/// let mut hand = CardCounts::new();
/// hand.add(Card::Red);
/// hand.add(Card::Red);
/// assert_eq!(hand[Card::Red], 2);
/// assert_eq!(hand.total(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCounts {
    counts: [u32; Card::COUNT],
}

impl CardCounts {
    /// An empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; Card::COUNT] }
    }

    /// Build a hand from `(card, count)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Card, u32)>) -> Self {
        let mut hand = Self::new();
        for (card, count) in pairs {
            hand[card] += count;
        }
        hand
    }

    /// Add one card.
    pub fn add(&mut self, card: Card) {
        self[card] += 1;
    }

    /// Total number of cards held.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate over `(card, count)` for every kind, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Card, u32)> + '_ {
        Card::ALL.iter().map(move |&card| (card, self[card]))
    }
}

impl Index<Card> for CardCounts {
    type Output = u32;

    fn index(&self, card: Card) -> &Self::Output {
        &self.counts[card.index()]
    }
}

impl IndexMut<Card> for CardCounts {
    fn index_mut(&mut self, card: Card) -> &mut Self::Output {
        &mut self.counts[card.index()]
    }
}
