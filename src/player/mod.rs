//! Per-baron state: hand, pieces, claims, score and bonus graphs.

pub mod bonus;
pub mod state;

pub use bonus::{BonusGraphs, BonusNode, Crossing};
pub use state::{Payment, Player, PlayerObserver};
