//! Turn policies for automated seats.
//!
//! A seat without a policy is driven by its caller (a human at the UI).
//! A seat with a policy acts on its own as soon as its turn starts.

pub mod greedy;

pub use greedy::GreedyPolicy;

use crate::core::ClaimError;
use crate::map::{RailroadMap, RouteId};
use crate::player::Player;

/// Behavior layered on top of a seat's [`Player`].
pub trait SeatPolicy {
    /// Called once after the board is set up.
    fn on_game_start(&mut self, _map: &RailroadMap) {}

    /// Act for `player` after its cards were dealt.
    ///
    /// Returns the route claimed, or `None` when passing. A successful
    /// claim must already be reported to the map.
    fn take_turn(
        &mut self,
        player: &mut Player,
        map: &mut RailroadMap,
    ) -> Result<Option<RouteId>, ClaimError>;
}
