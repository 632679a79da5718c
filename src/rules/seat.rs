//! A seat at the table: shared player state plus optional automation.

use crate::player::Player;
use crate::policy::SeatPolicy;

/// One seat. Human seats have no policy and are driven through the
/// engine's public operations.
pub struct Seat {
    pub(crate) player: Player,
    pub(crate) policy: Option<Box<dyn SeatPolicy>>,
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat")
            .field("player", &self.player)
            .field("automated", &self.is_automated())
            .finish()
    }
}

impl Seat {
    #[must_use]
    pub fn human(player: Player) -> Self {
        Self {
            player,
            policy: None,
        }
    }

    #[must_use]
    pub fn automated(player: Player, policy: Box<dyn SeatPolicy>) -> Self {
        Self {
            player,
            policy: Some(policy),
        }
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.policy.is_some()
    }
}
