//! The game engine and its turn state machine.
//!
//! ```text
//! AwaitingStart --start--> TurnActive --end_turn--> TurnActive
//!                                     \--end_turn--> GameOver
//! ```
//!
//! A turn starts by dealing two cards to the current seat. The seat may
//! claim at most one route, then ends its turn. Ending a turn rotates to
//! the next seat and evaluates game over. Automated seats act as soon as
//! their turn starts and have their turn ended for them, so control comes
//! back to the caller only when a human seat is up or the game is over.

use tracing::{debug, info, warn};

use crate::core::{
    Baron, Card, GameConfig, GameError, GameRng, ObserverId, Observers, SeatId, SeatMap, SEAT_COUNT,
};
use crate::deck::{Deck, ShuffledDeck};
use crate::map::{MapObserver, RailroadMap, Route, RouteId};
use crate::player::{Player, PlayerObserver};
use crate::policy::GreedyPolicy;

use super::seat::Seat;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single highest score.
    Winner(SeatId),
    /// Several seats share the highest score, in seat order.
    Winners(Vec<SeatId>),
}

impl GameResult {
    /// Check if a seat won or shared the win.
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        match self {
            GameResult::Winner(s) => *s == seat,
            GameResult::Winners(ss) => ss.contains(&seat),
        }
    }
}

/// Where the engine is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingStart,
    TurnActive,
    GameOver,
}

/// Receives turn and game-over events from the engine.
///
/// All methods default to doing nothing. Callbacks must not try to drive
/// the engine; they only get a shared reference to it.
pub trait GameObserver {
    fn turn_started(&mut self, _game: &RailroadBarons, _seat: SeatId) {}

    fn turn_ended(&mut self, _game: &RailroadBarons, _seat: SeatId) {}

    /// `winner` is the first seat in seat order holding the top score.
    /// See [`RailroadBarons::result`] for ties.
    fn game_over(&mut self, _game: &RailroadBarons, _winner: SeatId) {}
}

/// One game of Railroad Barons.
pub struct RailroadBarons {
    map: RailroadMap,
    seats: SeatMap<Seat>,
    deck: Box<dyn Deck>,
    config: GameConfig,
    current: SeatId,
    phase: Phase,
    result: Option<GameResult>,
    observers: Observers<dyn GameObserver>,
}

impl std::fmt::Debug for RailroadBarons {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RailroadBarons")
            .field("map", &self.map)
            .field("seats", &self.seats)
            .field("cards_remaining", &self.deck.number_of_cards_remaining())
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("result", &self.result)
            .finish()
    }
}

impl RailroadBarons {
    /// Four human seats sharing one screen. The starting seat is random.
    #[must_use]
    pub fn hotseat(map: RailroadMap, config: GameConfig) -> Self {
        let rng = game_rng(&config);
        let first = rng.for_context("seat").gen_range_usize(0..SEAT_COUNT);
        let deck = ShuffledDeck::new(rng.for_context("deck"));
        let seats = SeatMap::new(SEAT_COUNT, |seat| {
            Seat::human(Player::new(Baron::ALL[seat.index()], &config))
        });
        Self::with_deck(map, seats, Box::new(deck), config, SeatId::new(first as u8))
    }

    /// Seat 0 is human and starts. The other three seats play greedily.
    #[must_use]
    pub fn solo(map: RailroadMap, config: GameConfig) -> Self {
        let deck = ShuffledDeck::new(game_rng(&config).for_context("deck"));
        let seats = SeatMap::new(SEAT_COUNT, |seat| {
            let player = Player::new(Baron::ALL[seat.index()], &config);
            if seat.index() == 0 {
                Seat::human(player)
            } else {
                Seat::automated(player, Box::new(GreedyPolicy::new()))
            }
        });
        Self::with_deck(map, seats, Box::new(deck), config, SeatId::new(0))
    }

    /// Assemble a game from explicit parts.
    #[must_use]
    pub fn with_deck(
        map: RailroadMap,
        seats: SeatMap<Seat>,
        deck: Box<dyn Deck>,
        config: GameConfig,
        first: SeatId,
    ) -> Self {
        Self {
            map,
            seats,
            deck,
            config,
            current: first,
            phase: Phase::AwaitingStart,
            result: None,
            observers: Observers::new(),
        }
    }

    // === Observers ===

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn GameObserver>> {
        self.observers.remove(id)
    }

    pub fn add_map_observer(&mut self, observer: Box<dyn MapObserver>) -> ObserverId {
        self.map.add_observer(observer)
    }

    pub fn remove_map_observer(&mut self, id: ObserverId) -> Option<Box<dyn MapObserver>> {
        self.map.remove_observer(id)
    }

    pub fn add_player_observer(
        &mut self,
        seat: SeatId,
        observer: Box<dyn PlayerObserver>,
    ) -> ObserverId {
        self.seats[seat].player.add_observer(observer)
    }

    pub fn remove_player_observer(
        &mut self,
        seat: SeatId,
        id: ObserverId,
    ) -> Option<Box<dyn PlayerObserver>> {
        self.seats[seat].player.remove_observer(id)
    }

    fn notify(&mut self, mut event: impl FnMut(&mut dyn GameObserver, &RailroadBarons)) {
        let mut observers = self.observers.detach();
        observers.for_each(|o| event(o, self));
        self.observers.reattach(observers);
    }

    // === Lifecycle ===

    /// Deal opening hands, put every seat on the board and start the first
    /// turn.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingStart {
            return Err(GameError::AlreadyStarted);
        }

        let hand_size = self.config.opening_hand_size;
        for (_, seat) in self.seats.iter_mut() {
            let dealt: Vec<Card> = (0..hand_size)
                .filter_map(|_| self.deck.draw_a_card())
                .collect();
            seat.player.reset(dealt);
            seat.player.place_on_board(&self.map);
            if let Some(policy) = seat.policy.as_mut() {
                policy.on_game_start(&self.map);
            }
        }

        info!(
            first = %self.current,
            stations = self.map.stations().len(),
            routes = self.map.routes().len(),
            cards_remaining = self.deck.number_of_cards_remaining(),
            "game started"
        );
        self.phase = Phase::TurnActive;
        self.begin_turn();
        self.end_automated_turns();
        Ok(())
    }

    /// End the current turn and move on.
    ///
    /// Automated seats that come up next play their turns before this
    /// returns.
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::TurnActive {
            return Err(GameError::NoTurnInProgress);
        }
        self.finish_turn();
        self.end_automated_turns();
        Ok(())
    }

    /// Deal to the current seat, announce the turn and let an automated
    /// seat act.
    fn begin_turn(&mut self) {
        let seat = self.current;
        let dealt = self.deck.draw_pair();
        self.seats[seat].player.start_turn(dealt);
        debug!(
            %seat,
            first = ?dealt.first,
            second = ?dealt.second,
            cards_remaining = self.deck.number_of_cards_remaining(),
            "turn started"
        );
        self.notify(|o, game| o.turn_started(game, seat));
        self.run_policy();
    }

    fn run_policy(&mut self) {
        let current = self.current;
        let seat = &mut self.seats[current];
        let Some(policy) = seat.policy.as_mut() else {
            return;
        };
        match policy.take_turn(&mut seat.player, &mut self.map) {
            Ok(Some(route)) => debug!(seat = %current, %route, "automated seat claimed"),
            Ok(None) => debug!(seat = %current, "automated seat passed"),
            Err(error) => warn!(seat = %current, %error, "automated seat failed to claim"),
        }
    }

    fn finish_turn(&mut self) {
        let ended = self.current;
        debug!(seat = %ended, "turn ended");
        self.notify(|o, game| o.turn_ended(game, ended));
        self.current = ended.next(self.seats.seat_count());

        if self.check_game_over() {
            self.conclude();
        } else {
            self.begin_turn();
        }
    }

    /// Bounded by the seat count, so an all-automated table advances one
    /// round per call.
    fn end_automated_turns(&mut self) {
        for _ in 0..self.seats.seat_count() {
            if self.phase != Phase::TurnActive || !self.seats[self.current].is_automated() {
                break;
            }
            self.finish_turn();
        }
    }

    fn check_game_over(&self) -> bool {
        if self.map.all_routes_claimed() {
            return true;
        }
        let shortest = self.map.length_of_shortest_unclaimed_route();
        !self
            .seats
            .values()
            .any(|seat| seat.player.can_continue_playing(shortest))
    }

    fn conclude(&mut self) {
        let scores = self.scores();
        let best = scores.values().copied().max().unwrap_or(0);
        let leaders: Vec<SeatId> = scores
            .iter()
            .filter(|&(_, &score)| score == best)
            .map(|(seat, _)| seat)
            .collect();
        let Some(&winner) = leaders.first() else {
            return;
        };

        self.phase = Phase::GameOver;
        self.result = Some(if leaders.len() == 1 {
            GameResult::Winner(winner)
        } else {
            GameResult::Winners(leaders)
        });
        info!(%winner, score = best, result = ?self.result, "game over");
        self.notify(|o, game| o.game_over(game, winner));
    }

    // === Claiming ===

    /// Claim the route covering track cell `(row, col)` for the current
    /// seat.
    pub fn claim_route(&mut self, row: usize, col: usize) -> Result<RouteId, GameError> {
        if self.phase != Phase::TurnActive {
            return Err(GameError::NoTurnInProgress);
        }
        let id = self
            .map
            .route_at(row, col)
            .map(Route::id)
            .ok_or(GameError::NoRouteAt { row, col })?;

        let player = &mut self.seats[self.current].player;
        let route = self
            .map
            .route_mut(id)
            .ok_or(GameError::NoRouteAt { row, col })?;
        player.check_claim(route)?;
        player.claim_route(route)?;

        self.map.route_claimed(id);
        Ok(id)
    }

    /// Whether the current seat could claim the route covering
    /// `(row, col)`. False for cells without a route.
    #[must_use]
    pub fn can_current_player_claim_route(&self, row: usize, col: usize) -> bool {
        self.phase == Phase::TurnActive
            && self
                .map
                .route_at(row, col)
                .is_some_and(|route| self.current_player().can_claim_route(route))
    }

    // === Queries ===

    #[must_use]
    pub fn map(&self) -> &RailroadMap {
        &self.map
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Final standings, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.seats[self.current].player
    }

    #[must_use]
    pub fn seat(&self, seat: SeatId) -> &Seat {
        &self.seats[seat]
    }

    /// All players in seat order.
    pub fn players(&self) -> impl Iterator<Item = (SeatId, &Player)> {
        self.seats.iter().map(|(id, seat)| (id, &seat.player))
    }

    /// Every seat's score, bonuses included.
    #[must_use]
    pub fn scores(&self) -> SeatMap<u32> {
        self.seats.map(|seat| seat.player.score())
    }

    #[must_use]
    pub fn number_of_cards_remaining(&self) -> usize {
        self.deck.number_of_cards_remaining()
    }
}

fn game_rng(config: &GameConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}
