//! Error types.
//!
//! - `ClaimError`: a player could not claim a route
//! - `GameError`: an engine operation was rejected
//! - `MapError`: a map could not be built, read or written

use thiserror::Error;

use crate::map::{RouteId, StationId};

use super::Baron;

/// Why a route claim failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("{route} is already owned by {owner}")]
    AlreadyOwned { route: RouteId, owner: Baron },

    #[error("{baron} has already claimed a route this turn")]
    AlreadyClaimedThisTurn { baron: Baron },

    #[error("{baron} does not hold enough cards for a route of length {length}")]
    InsufficientCards { baron: Baron, length: u32 },

    #[error("{baron} has {pieces} pieces left, route needs {length}")]
    InsufficientPieces { baron: Baron, length: u32, pieces: u32 },

    /// Ownership changed between the legality check and the claim.
    #[error("{route} was claimed by another baron before {baron} could claim it")]
    ClaimRace { route: RouteId, baron: Baron },

    /// The hand passed the sufficiency test but no spending rule applies.
    #[error("no card combination in {baron}'s hand pays for {route} (length {length})")]
    NoCardCombination { route: RouteId, baron: Baron, length: u32 },
}

/// Engine-level failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no turn is in progress")]
    NoTurnInProgress,

    #[error("the game has already started")]
    AlreadyStarted,

    #[error("no route covers ({row}, {col})")]
    NoRouteAt { row: usize, col: usize },

    #[error(transparent)]
    Claim(#[from] ClaimError),
}

/// Map construction and map-format failures.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("a map needs at least one station")]
    NoStations,

    #[error("station id {0} appears more than once")]
    DuplicateStation(StationId),

    #[error("route refers to unknown station id {0}")]
    UnknownStation(StationId),

    #[error("{origin} must lie directly north or west of {destination}")]
    Misaligned { origin: StationId, destination: StationId },

    #[error("stations {origin} and {destination} are adjacent, the route has no track")]
    ZeroLength { origin: StationId, destination: StationId },

    #[error("a {rows} x {cols} grid is too large")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("map i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MapError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        MapError::Parse {
            line,
            message: message.into(),
        }
    }
}
