//! Baron identities.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's faction.
///
/// Route ownership is `Option<Baron>`: `None` is the unclaimed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Baron {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Baron {
    /// All barons in seat order.
    pub const ALL: [Baron; 4] = [Baron::Red, Baron::Green, Baron::Blue, Baron::Yellow];

    /// Map-file token for an ownership value.
    #[must_use]
    pub fn owner_token(owner: Option<Baron>) -> &'static str {
        match owner {
            None => "UNCLAIMED",
            Some(Baron::Red) => "RED",
            Some(Baron::Green) => "GREEN",
            Some(Baron::Blue) => "BLUE",
            Some(Baron::Yellow) => "YELLOW",
        }
    }

    /// Parse a map-file ownership token.
    ///
    /// ```
    /// use rail_barons::core::Baron;
    ///
    /// assert_eq!(Baron::parse_owner("UNCLAIMED"), Some(None));
    /// assert_eq!(Baron::parse_owner("BLUE"), Some(Some(Baron::Blue)));
    /// assert_eq!(Baron::parse_owner("PURPLE"), None);
    /// ```
    #[must_use]
    pub fn parse_owner(token: &str) -> Option<Option<Baron>> {
        match token {
            "UNCLAIMED" => Some(None),
            other => other.parse().ok().map(Some),
        }
    }
}

impl std::fmt::Display for Baron {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Baron::owner_token(Some(*self)))
    }
}

impl FromStr for Baron {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RED" => Ok(Baron::Red),
            "GREEN" => Ok(Baron::Green),
            "BLUE" => Ok(Baron::Blue),
            "YELLOW" => Ok(Baron::Yellow),
            other => Err(format!("unknown baron {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for baron in Baron::ALL {
            let token = Baron::owner_token(Some(baron));
            assert_eq!(Baron::parse_owner(token), Some(Some(baron)));
        }
        assert_eq!(Baron::parse_owner(Baron::owner_token(None)), Some(None));
    }

    #[test]
    fn test_parse_rejects_lowercase() {
        assert!("red".parse::<Baron>().is_err());
    }
}
