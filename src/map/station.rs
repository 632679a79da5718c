//! Stations, tracks and grid spaces.

use serde::{Deserialize, Serialize};

use super::route::{Orientation, RouteId};

/// Stable station identifier, as written in map files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationId(pub u32);

impl StationId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

/// A named station at a fixed grid position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub row: usize,
    pub col: usize,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, row: usize, col: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            row,
            col,
            name: name.into(),
        }
    }

    /// Same grid cell as `(row, col)`.
    #[must_use]
    pub fn collocated(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}

/// One grid cell of a route. Ownership is the route's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub row: usize,
    pub col: usize,
    pub route: RouteId,
    pub orientation: Orientation,
}

impl Track {
    #[must_use]
    pub fn collocated(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}

/// What occupies a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    Station(StationId),
    Track(Track),
}

impl Space {
    /// The route this cell belongs to, if it is track.
    #[must_use]
    pub fn route(&self) -> Option<RouteId> {
        match self {
            Space::Track(track) => Some(track.route),
            Space::Station(_) => None,
        }
    }
}
