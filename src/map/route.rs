//! Routes: claimable axis-aligned segments between two stations.

use serde::{Deserialize, Serialize};

use crate::core::{Baron, MapError};

use super::station::{Station, StationId, Track};

/// Route identifier, dense within one map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub u32);

impl RouteId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Route({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Origin is west of destination.
    Horizontal,
    /// Origin is north of destination.
    Vertical,
}

/// Points scored for claiming a route of `length` tracks.
///
/// ```
/// use rail_barons::map::point_value;
///
/// assert_eq!(point_value(3), 4);
/// assert_eq!(point_value(8), 25);
/// ```
#[must_use]
pub const fn point_value(length: u32) -> u32 {
    match length {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 4,
        4 => 7,
        5 => 10,
        6 => 15,
        n => 5 * (n - 3),
    }
}

/// A route between two stations.
///
/// Orientation and tracks are derived from the station pair. Ownership
/// starts as given and can move from unclaimed to a baron exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    id: RouteId,
    origin: StationId,
    destination: StationId,
    orientation: Orientation,
    tracks: Vec<Track>,
    owner: Option<Baron>,
}

impl Route {
    /// Build a route from `origin` to `destination`.
    ///
    /// The origin must be strictly north (same column) or strictly west
    /// (same row) of the destination, with at least one cell between them.
    pub fn new(
        id: RouteId,
        origin: &Station,
        destination: &Station,
        owner: Option<Baron>,
    ) -> Result<Self, MapError> {
        let orientation = if origin.col == destination.col && origin.row < destination.row {
            Orientation::Vertical
        } else if origin.row == destination.row && origin.col < destination.col {
            Orientation::Horizontal
        } else {
            return Err(MapError::Misaligned {
                origin: origin.id,
                destination: destination.id,
            });
        };

        let tracks: Vec<Track> = match orientation {
            Orientation::Horizontal => (origin.col + 1..destination.col)
                .map(|col| Track {
                    row: origin.row,
                    col,
                    route: id,
                    orientation,
                })
                .collect(),
            Orientation::Vertical => (origin.row + 1..destination.row)
                .map(|row| Track {
                    row,
                    col: origin.col,
                    route: id,
                    orientation,
                })
                .collect(),
        };

        if tracks.is_empty() {
            return Err(MapError::ZeroLength {
                origin: origin.id,
                destination: destination.id,
            });
        }

        Ok(Self {
            id,
            origin: origin.id,
            destination: destination.id,
            orientation,
            tracks,
            owner,
        })
    }

    #[must_use]
    pub fn id(&self) -> RouteId {
        self.id
    }

    #[must_use]
    pub fn origin(&self) -> StationId {
        self.origin
    }

    #[must_use]
    pub fn destination(&self) -> StationId {
        self.destination
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of track cells between the two stations.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.tracks.len() as u32
    }

    #[must_use]
    pub fn point_value(&self) -> u32 {
        point_value(self.length())
    }

    /// Current owner, `None` while unclaimed.
    #[must_use]
    pub fn owner(&self) -> Option<Baron> {
        self.owner
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    /// Whether one of this route's tracks sits at `(row, col)`.
    #[must_use]
    pub fn includes_coordinate(&self, row: usize, col: usize) -> bool {
        self.tracks.iter().any(|t| t.row == row && t.col == col)
    }

    /// Claim the route for `claimant`.
    ///
    /// First claim wins: returns false and leaves ownership untouched if
    /// the route already has an owner.
    pub fn claim(&mut self, claimant: Baron) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(claimant);
        true
    }
}
