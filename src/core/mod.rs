//! Core engine types: cards, barons, seats, RNG, configuration, errors.
//!
//! Everything here is independent of map geometry and turn flow.

pub mod baron;
pub mod card;
pub mod config;
pub mod error;
pub mod observer;
pub mod rng;
pub mod seat;

pub use baron::Baron;
pub use card::{Card, CardCounts};
pub use config::{GameConfig, SEAT_COUNT};
pub use error::{ClaimError, GameError, MapError};
pub use observer::{ObserverId, Observers};
pub use rng::{GameRng, GameRngState};
pub use seat::{SeatId, SeatMap};
