//! Player state and the route-claiming algorithm.
//!
//! ## Claiming
//!
//! A route is paid for with cards of a single color, optionally topped up
//! by one wild card. The color is chosen by three rules tried in order:
//!
//! 1. **Exact**: a color whose count equals the route length.
//! 2. **Overshoot**: the color with the smallest count above the length,
//!    scanning counts up to (excluding) the remaining pieces.
//! 3. **Wild-assisted**: a color one short of the length, plus a wild.
//!
//! ## Scoring
//!
//! Route points accumulate on claim. Crossing bonuses are checked lazily
//! whenever the score is read and latch once awarded.

use std::cell::Cell;

use tracing::{debug, trace};

use crate::core::{Baron, Card, CardCounts, ClaimError, GameConfig, ObserverId, Observers};
use crate::deck::CardPair;
use crate::map::{RailroadMap, Route, RouteId};

use super::bonus::{BonusGraphs, Crossing};

/// Receives change notifications from a [`Player`].
///
/// Fired on reset, on turn start and after a successful claim.
pub trait PlayerObserver {
    fn player_changed(&mut self, player: &Player);
}

/// How a claim is paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payment {
    /// Spend every card of a color holding exactly the route length.
    Exact(Card),
    /// Spend `length` cards of a color holding `held` cards.
    Overshoot { color: Card, held: u32 },
    /// Spend every card of a color one short of the length, plus a wild.
    WildAssisted(Card),
}

/// One baron's hand, pieces, claimed routes, score and bonus graphs.
pub struct Player {
    baron: Baron,
    cards: CardCounts,
    pieces: u32,
    claimed_routes: Vec<RouteId>,
    score: Cell<u32>,
    claimed_this_turn: bool,
    last_pair: CardPair,
    game_started: bool,
    graphs: BonusGraphs,
    west_east_bonus: Cell<bool>,
    north_south_bonus: Cell<bool>,
    starting_pieces: u32,
    bonus_min_path_nodes: usize,
    bonus_points_per_line: u32,
    observers: Observers<dyn PlayerObserver>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("baron", &self.baron)
            .field("cards", &self.cards)
            .field("pieces", &self.pieces)
            .field("claimed_routes", &self.claimed_routes)
            .field("score", &self.score.get())
            .field("claimed_this_turn", &self.claimed_this_turn)
            .finish()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Baron", self.baron)
    }
}

impl Player {
    #[must_use]
    pub fn new(baron: Baron, config: &GameConfig) -> Self {
        Self {
            baron,
            cards: CardCounts::new(),
            pieces: config.starting_pieces,
            claimed_routes: Vec::new(),
            score: Cell::new(0),
            claimed_this_turn: true,
            last_pair: CardPair::default(),
            game_started: false,
            graphs: BonusGraphs::new(),
            west_east_bonus: Cell::new(false),
            north_south_bonus: Cell::new(false),
            starting_pieces: config.starting_pieces,
            bonus_min_path_nodes: config.bonus_min_path_nodes,
            bonus_points_per_line: config.bonus_points_per_line,
            observers: Observers::new(),
        }
    }

    // === Observers ===

    pub fn add_observer(&mut self, observer: Box<dyn PlayerObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn PlayerObserver>> {
        self.observers.remove(id)
    }

    fn notify_changed(&mut self) {
        let mut observers = self.observers.detach();
        observers.for_each(|o| o.player_changed(self));
        self.observers.reattach(observers);
    }

    // === Lifecycle ===

    /// Start a fresh game holding `dealt`.
    ///
    /// Pieces, score, claimed routes and bonus latches return to their
    /// initial values and the bonus graphs hold only the four sentinels.
    /// No claim is possible until the first turn starts.
    pub fn reset(&mut self, dealt: impl IntoIterator<Item = Card>) {
        self.cards = CardCounts::new();
        self.pieces = self.starting_pieces;
        self.claimed_routes.clear();
        self.score.set(0);
        self.claimed_this_turn = true;
        self.last_pair = CardPair::default();
        self.game_started = false;
        self.graphs = BonusGraphs::new();
        self.west_east_bonus.set(false);
        self.north_south_bonus.set(false);

        for card in dealt {
            self.add_card(card);
        }
        self.notify_changed();
    }

    /// Learn the board: stations, boundary links and extents.
    pub fn place_on_board(&mut self, map: &RailroadMap) {
        self.graphs.add_board(map);
    }

    /// Begin a turn with a freshly dealt pair.
    pub fn start_turn(&mut self, dealt: CardPair) {
        self.game_started = true;
        self.claimed_this_turn = false;
        self.last_pair = dealt;
        for card in dealt.cards() {
            self.add_card(card);
        }
        self.notify_changed();
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.add(card);
    }

    // === Queries ===

    #[must_use]
    pub fn baron(&self) -> Baron {
        self.baron
    }

    #[must_use]
    pub fn hand(&self) -> &CardCounts {
        &self.cards
    }

    #[must_use]
    pub fn count_cards_in_hand(&self, card: Card) -> u32 {
        self.cards[card]
    }

    #[must_use]
    pub fn last_two_cards(&self) -> CardPair {
        self.last_pair
    }

    #[must_use]
    pub fn number_of_pieces(&self) -> u32 {
        self.pieces
    }

    #[must_use]
    pub fn claimed_routes(&self) -> &[RouteId] {
        &self.claimed_routes
    }

    #[must_use]
    pub fn has_claimed_this_turn(&self) -> bool {
        self.claimed_this_turn
    }

    #[must_use]
    pub fn bonus_graphs(&self) -> &BonusGraphs {
        &self.graphs
    }

    #[must_use]
    pub fn has_west_east_bonus(&self) -> bool {
        self.west_east_bonus.get()
    }

    #[must_use]
    pub fn has_north_south_bonus(&self) -> bool {
        self.north_south_bonus.get()
    }

    // === Claiming ===

    /// Whether a color held (plus at most one wild) covers `length`.
    #[must_use]
    pub fn sufficient_cards(&self, length: u32) -> bool {
        let wild = u32::from(self.cards[Card::Wild] > 0);
        Card::COLORS.iter().any(|&color| {
            let held = self.cards[color];
            held > 0 && held + wild >= length
        })
    }

    /// The reason `route` cannot be claimed right now, if any.
    pub fn check_claim(&self, route: &Route) -> Result<(), ClaimError> {
        let length = route.length();
        if let Some(owner) = route.owner() {
            return Err(ClaimError::AlreadyOwned {
                route: route.id(),
                owner,
            });
        }
        if self.claimed_this_turn {
            return Err(ClaimError::AlreadyClaimedThisTurn { baron: self.baron });
        }
        if !self.sufficient_cards(length) {
            return Err(ClaimError::InsufficientCards {
                baron: self.baron,
                length,
            });
        }
        if self.pieces < length {
            return Err(ClaimError::InsufficientPieces {
                baron: self.baron,
                length,
                pieces: self.pieces,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn can_claim_route(&self, route: &Route) -> bool {
        self.check_claim(route).is_ok()
    }

    /// Pick the cards that pay for a route of `length`.
    #[must_use]
    pub fn choose_payment(&self, length: u32) -> Option<Payment> {
        let held = |color: Card| self.cards[color];

        if let Some(&color) = Card::COLORS.iter().find(|&&c| held(c) == length) {
            return Some(Payment::Exact(color));
        }

        for surplus in length..self.pieces {
            if let Some(&color) = Card::COLORS.iter().find(|&&c| held(c) == surplus) {
                return Some(Payment::Overshoot { color, held: surplus });
            }
        }

        if self.cards[Card::Wild] > 0 {
            if let Some(&color) = Card::COLORS
                .iter()
                .find(|&&c| held(c) > 0 && held(c) + 1 == length)
            {
                return Some(Payment::WildAssisted(color));
            }
        }

        None
    }

    /// Claim `route`, spending cards and pieces.
    ///
    /// Callers check [`can_claim_route`](Self::can_claim_route) first.
    /// Ownership is verified again at the moment of claiming; losing that
    /// race is reported as [`ClaimError::ClaimRace`].
    pub fn claim_route(&mut self, route: &mut Route) -> Result<(), ClaimError> {
        let length = route.length();
        let payment = self.choose_payment(length).ok_or(ClaimError::NoCardCombination {
            route: route.id(),
            baron: self.baron,
            length,
        })?;

        if !route.claim(self.baron) {
            return Err(ClaimError::ClaimRace {
                route: route.id(),
                baron: self.baron,
            });
        }

        trace!(baron = %self.baron, route = %route.id(), ?payment, "paying for route");
        match payment {
            Payment::Exact(color) => self.cards[color] = 0,
            Payment::Overshoot { color, held } => self.cards[color] = held - length,
            Payment::WildAssisted(color) => {
                self.cards[color] = 0;
                self.cards[Card::Wild] -= 1;
            }
        }

        self.claimed_this_turn = true;
        self.claimed_routes.push(route.id());
        self.pieces -= length;
        self.graphs.connect_stations(route.origin(), route.destination());
        self.score.set(self.score.get() + route.point_value());
        debug!(
            baron = %self.baron,
            route = %route.id(),
            length,
            pieces = self.pieces,
            "route claimed"
        );

        self.notify_changed();
        Ok(())
    }

    // === Scoring ===

    /// Current score, awarding any newly earned crossing bonus.
    ///
    /// Bonuses are only considered once the first turn has started and
    /// each is awarded at most once per game.
    #[must_use]
    pub fn score(&self) -> u32 {
        if self.game_started {
            self.award_crossing(Crossing::WestEast, &self.west_east_bonus);
            self.award_crossing(Crossing::NorthSouth, &self.north_south_bonus);
        }
        self.score.get()
    }

    fn award_crossing(&self, crossing: Crossing, latch: &Cell<bool>) {
        if latch.get() {
            return;
        }
        let Some(nodes) = self.graphs.crossing_path_nodes(crossing) else {
            return;
        };
        if nodes >= self.bonus_min_path_nodes {
            let bonus = self.graphs.span(crossing) as u32 * self.bonus_points_per_line;
            self.score.set(self.score.get() + bonus);
            latch.set(true);
            debug!(baron = %self.baron, ?crossing, bonus, "crossing bonus awarded");
        }
    }

    /// Whether this player could still act on a map whose shortest
    /// unclaimed route has `shortest_unclaimed` tracks.
    ///
    /// A player short of cards stays in the game while the last deal
    /// still produced a card.
    #[must_use]
    pub fn can_continue_playing(&self, shortest_unclaimed: u32) -> bool {
        let deck_empty = self.last_pair.is_empty();
        self.pieces >= shortest_unclaimed && (self.sufficient_cards(shortest_unclaimed) || !deck_empty)
    }
}
