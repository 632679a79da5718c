//! Greedy automated seat: claims the first affordable route it knows about.

use im::OrdSet;
use tracing::debug;

use crate::core::ClaimError;
use crate::map::{RailroadMap, RouteId};
use crate::player::Player;

use super::SeatPolicy;

/// Claims the first affordable route it knows about, otherwise passes.
///
/// The route list is captured at game start. Routes claimed later by
/// anyone stay in the list and are skipped by the legality check.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy {
    known_routes: OrdSet<RouteId>,
}

impl GreedyPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes this policy considers, in scan order.
    #[must_use]
    pub fn known_routes(&self) -> &OrdSet<RouteId> {
        &self.known_routes
    }
}

impl SeatPolicy for GreedyPolicy {
    fn on_game_start(&mut self, map: &RailroadMap) {
        self.known_routes = map.unclaimed_routes().clone();
    }

    fn take_turn(
        &mut self,
        player: &mut Player,
        map: &mut RailroadMap,
    ) -> Result<Option<RouteId>, ClaimError> {
        let choice = self
            .known_routes
            .iter()
            .copied()
            .find(|&id| map.route(id).is_some_and(|route| player.can_claim_route(route)));

        let Some(id) = choice else {
            debug!(baron = %player.baron(), "no affordable route, passing");
            return Ok(None);
        };

        if let Some(route) = map.route_mut(id) {
            player.claim_route(route)?;
            map.route_claimed(id);
        }
        Ok(Some(id))
    }
}
