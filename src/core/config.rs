//! Game configuration.
//!
//! `GameConfig` carries the numeric rules of a game. The defaults are the
//! standard rules; tests and variants override them with the builder
//! methods.

use serde::{Deserialize, Serialize};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 4;

/// Complete game configuration.
///
/// ```
/// use rail_barons::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(7).with_starting_pieces(30);
/// assert_eq!(config.starting_pieces, 30);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.opening_hand_size, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Train pieces each player starts with.
    pub starting_pieces: u32,

    /// Cards dealt to every seat before the first turn.
    pub opening_hand_size: usize,

    /// Minimum number of nodes (boundary sentinels included) on a
    /// boundary-to-boundary path before a crossing bonus is awarded.
    pub bonus_min_path_nodes: usize,

    /// Bonus points per grid line spanned by a crossing.
    pub bonus_points_per_line: u32,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_pieces: 45,
            opening_hand_size: 4,
            bonus_min_path_nodes: 5,
            bonus_points_per_line: 5,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_pieces(mut self, pieces: u32) -> Self {
        self.starting_pieces = pieces;
        self
    }

    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_bonus_min_path_nodes(mut self, nodes: usize) -> Self {
        self.bonus_min_path_nodes = nodes;
        self
    }

    #[must_use]
    pub fn with_bonus_points_per_line(mut self, points: u32) -> Self {
        self.bonus_points_per_line = points;
        self
    }

    /// Fix the RNG seed for reproducible deals and starting seats.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
