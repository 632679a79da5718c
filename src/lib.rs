//! # rail-barons
//!
//! Engine for a four-seat route-claiming board game played on a grid map.
//!
//! Barons spend colored cards and train pieces to claim routes between
//! stations. Routes score by length, and a chain of claimed routes
//! spanning the whole map from west to east or north to south earns a
//! one-time bonus.
//!
//! ## Design Principles
//!
//! 1. **One owner per game**: a `RailroadBarons` instance owns the map,
//!    the seats and the deck. There is no global state.
//!
//! 2. **Seats are interchangeable**: a human seat and an automated seat
//!    share the same `Player` state. Automation is a `SeatPolicy` layered
//!    on top.
//!
//! 3. **Synchronous observers**: map, players and engine notify boxed
//!    observers on the call stack of the change.
//!
//! ## Modules
//!
//! - `core`: cards, barons, seats, RNG, configuration, errors, observers
//! - `graph`: adjacency-set graph with BFS reachability and paths
//! - `map`: stations, routes, the grid map and its text format
//! - `deck`: the deck contract and the shuffled 180-card deck
//! - `player`: hands, claiming, scoring and crossing bonuses
//! - `policy`: automated seat behavior
//! - `rules`: the turn engine

pub mod core;
pub mod deck;
pub mod graph;
pub mod map;
pub mod player;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Baron, Card, CardCounts, ClaimError, GameConfig, GameError, GameRng, GameRngState, MapError,
    ObserverId, SeatId, SeatMap, SEAT_COUNT,
};

pub use crate::deck::{CardPair, Deck, ShuffledDeck};

pub use crate::graph::Graph;

pub use crate::map::{
    read_map, write_map, Boundary, MapBuilder, MapObserver, Orientation, RailroadMap, Route,
    RouteId, Space, Station, StationId, Track,
};

pub use crate::player::{BonusGraphs, BonusNode, Crossing, Player, PlayerObserver};

pub use crate::policy::{GreedyPolicy, SeatPolicy};

pub use crate::rules::{GameObserver, GameResult, Phase, RailroadBarons, Seat};
