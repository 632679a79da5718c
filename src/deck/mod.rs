//! The draw deck.
//!
//! The engine only relies on the [`Deck`] trait; [`ShuffledDeck`] is the
//! standard 180-card deck.

pub mod shuffled;

pub use shuffled::{CardPair, Deck, ShuffledDeck, CARDS_PER_KIND, DECK_SIZE};
