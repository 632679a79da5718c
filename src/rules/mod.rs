//! Turn engine.
//!
//! `RailroadBarons` owns one game: the map, four seats and the deck. It
//! deals cards, rotates turns, resolves claims by grid coordinate, runs
//! automated seats and decides when the game is over.

pub mod engine;
pub mod seat;

pub use engine::{GameObserver, GameResult, Phase, RailroadBarons};
pub use seat::Seat;
