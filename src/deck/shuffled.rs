//! Deck contract and the standard shuffled deck.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameRng};

/// Copies of each card kind in a full deck.
pub const CARDS_PER_KIND: usize = 20;

/// Cards in a full deck.
pub const DECK_SIZE: usize = CARDS_PER_KIND * Card::COUNT;

/// Two cards dealt at the start of a turn. Either may be missing once the
/// deck runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPair {
    pub first: Option<Card>,
    pub second: Option<Card>,
}

impl CardPair {
    #[must_use]
    pub const fn new(first: Option<Card>, second: Option<Card>) -> Self {
        Self { first, second }
    }

    /// Both cards missing: the deck was already empty when dealing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// The cards actually dealt.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        self.first.into_iter().chain(self.second)
    }
}

/// A draw pile.
pub trait Deck {
    /// Draw the top card, `None` once exhausted. Never fails.
    fn draw_a_card(&mut self) -> Option<Card>;

    fn number_of_cards_remaining(&self) -> usize;

    /// Restore the full composition and reshuffle.
    fn reset(&mut self);

    /// Draw two cards for a turn.
    fn draw_pair(&mut self) -> CardPair {
        let first = self.draw_a_card();
        let second = self.draw_a_card();
        CardPair::new(first, second)
    }
}

/// 20 of each card kind, uniformly shuffled.
///
/// ```
/// use rail_barons::core::GameRng;
/// use rail_barons::deck::{Deck, ShuffledDeck, DECK_SIZE};
///
/// let mut deck = ShuffledDeck::new(GameRng::new(1));
/// assert_eq!(deck.number_of_cards_remaining(), DECK_SIZE);
/// assert!(deck.draw_a_card().is_some());
/// assert_eq!(deck.number_of_cards_remaining(), DECK_SIZE - 1);
/// ```
#[derive(Clone, Debug)]
pub struct ShuffledDeck {
    /// Top of the deck is the end of the vec.
    cards: Vec<Card>,
    rng: GameRng,
}

impl ShuffledDeck {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.reset();
        deck
    }

    /// Cards still in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Deck for ShuffledDeck {
    fn draw_a_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn number_of_cards_remaining(&self) -> usize {
        self.cards.len()
    }

    fn reset(&mut self) {
        self.cards.clear();
        for card in Card::ALL {
            self.cards.extend(std::iter::repeat(card).take(CARDS_PER_KIND));
        }
        self.rng.shuffle(&mut self.cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardCounts;

    fn composition(cards: &[Card]) -> CardCounts {
        let mut counts = CardCounts::new();
        for &card in cards {
            counts.add(card);
        }
        counts
    }

    #[test]
    fn test_full_composition() {
        let deck = ShuffledDeck::new(GameRng::new(3));
        let counts = composition(deck.cards());
        for card in Card::ALL {
            assert_eq!(counts[card], CARDS_PER_KIND as u32, "{card}");
        }
        assert_eq!(deck.number_of_cards_remaining(), 180);
    }

    #[test]
    fn test_drain_then_none() {
        let mut deck = ShuffledDeck::new(GameRng::new(3));
        let drawn: Vec<_> = std::iter::from_fn(|| deck.draw_a_card()).collect();
        assert_eq!(drawn.len(), DECK_SIZE);
        assert_eq!(deck.draw_a_card(), None);
        assert_eq!(deck.number_of_cards_remaining(), 0);
        assert!(deck.draw_pair().is_empty());
    }

    #[test]
    fn test_reset_restores() {
        let mut deck = ShuffledDeck::new(GameRng::new(3));
        for _ in 0..50 {
            deck.draw_a_card();
        }
        deck.reset();
        assert_eq!(deck.number_of_cards_remaining(), DECK_SIZE);
        assert_eq!(composition(deck.cards()).total(), DECK_SIZE as u32);
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = ShuffledDeck::new(GameRng::new(11));
        let b = ShuffledDeck::new(GameRng::new(11));
        let c = ShuffledDeck::new(GameRng::new(12));
        assert_eq!(a.cards(), b.cards());
        assert_ne!(a.cards(), c.cards());
    }

    #[test]
    fn test_pair_with_one_card_left() {
        let mut deck = ShuffledDeck::new(GameRng::new(3));
        for _ in 0..DECK_SIZE - 1 {
            deck.draw_a_card();
        }
        let pair = deck.draw_pair();
        assert!(pair.first.is_some());
        assert!(pair.second.is_none());
        assert!(!pair.is_empty());
        assert_eq!(pair.cards().count(), 1);
    }
}
