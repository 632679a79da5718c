//! The railroad map: stations, routes, grid lookups and the claimed split.
//!
//! ## Structure
//!
//! The station and route sets are fixed at construction. The only state
//! that changes during a game is each route's owner and which of the two
//! persistent sets (`claimed`, `unclaimed`) a route belongs to.
//!
//! ## Usage
//!
//! ```
//! use rail_barons::map::{Boundary, MapBuilder};
//!
//! let mut builder = MapBuilder::new();
//! let west = builder.station(0, 0, 0, "West End").unwrap();
//! let east = builder.station(1, 0, 4, "East End").unwrap();
//! let route = builder.route(west, east, None).unwrap();
//! let map = builder.build().unwrap();
//!
//! assert_eq!((map.rows(), map.cols()), (1, 5));
//! assert_eq!(map.route_at(0, 2).map(|r| r.id()), Some(route));
//! assert_eq!(map.boundary_stations(Boundary::East), &[east]);
//! assert_eq!(map.length_of_shortest_unclaimed_route(), 3);
//! ```

use im::OrdSet;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{Baron, MapError, ObserverId, Observers};

use super::route::{Route, RouteId};
use super::station::{Space, Station, StationId};

/// Receives claimed-route notifications from a [`RailroadMap`].
pub trait MapObserver {
    fn route_claimed(&mut self, map: &RailroadMap, route: &Route);
}

/// One of the four map edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    North,
    South,
    East,
    West,
}

impl Boundary {
    pub const ALL: [Boundary; 4] = [Boundary::North, Boundary::South, Boundary::East, Boundary::West];
}

/// Upper bound on `rows * cols` for a map grid.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Cell count of a `rows` x `cols` grid, or `GridTooLarge` past the limit.
fn grid_cells(rows: usize, cols: usize) -> Result<usize, MapError> {
    rows.checked_mul(cols)
        .filter(|&cells| cells <= MAX_GRID_CELLS)
        .ok_or(MapError::GridTooLarge { rows, cols })
}

/// Collects stations and routes, then builds a [`RailroadMap`].
#[derive(Debug, Default)]
pub struct MapBuilder {
    stations: Vec<Station>,
    station_index: FxHashMap<StationId, usize>,
    routes: Vec<Route>,
}

impl MapBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station. Ids must be unique, and the station must fit inside a
    /// grid of at most [`MAX_GRID_CELLS`] cells.
    pub fn station(
        &mut self,
        id: u32,
        row: usize,
        col: usize,
        name: impl Into<String>,
    ) -> Result<StationId, MapError> {
        grid_cells(row.saturating_add(1), col.saturating_add(1))?;
        let id = StationId::new(id);
        if self.station_index.contains_key(&id) {
            return Err(MapError::DuplicateStation(id));
        }
        self.station_index.insert(id, self.stations.len());
        self.stations.push(Station::new(id, row, col, name));
        Ok(id)
    }

    /// Add a route between two added stations.
    pub fn route(
        &mut self,
        origin: StationId,
        destination: StationId,
        owner: Option<Baron>,
    ) -> Result<RouteId, MapError> {
        let origin = self.lookup(origin)?;
        let destination = self.lookup(destination)?;
        let id = RouteId::new(self.routes.len() as u32);
        let route = Route::new(id, origin, destination, owner)?;
        self.routes.push(route);
        Ok(id)
    }

    fn lookup(&self, id: StationId) -> Result<&Station, MapError> {
        self.station_index
            .get(&id)
            .map(|&i| &self.stations[i])
            .ok_or(MapError::UnknownStation(id))
    }

    /// Build the map. Extents come from the station coordinates.
    pub fn build(self) -> Result<RailroadMap, MapError> {
        RailroadMap::new(self.stations, self.station_index, self.routes)
    }
}

/// A game map.
pub struct RailroadMap {
    stations: Vec<Station>,
    station_index: FxHashMap<StationId, usize>,
    routes: Vec<Route>,
    rows: usize,
    cols: usize,
    /// Row-major, `rows * cols` cells.
    spaces: Vec<Option<Space>>,
    /// Row-major route lookup for track cells.
    route_grid: Vec<Option<RouteId>>,
    north: Vec<StationId>,
    south: Vec<StationId>,
    east: Vec<StationId>,
    west: Vec<StationId>,
    claimed: OrdSet<RouteId>,
    unclaimed: OrdSet<RouteId>,
    observers: Observers<dyn MapObserver>,
}

impl std::fmt::Debug for RailroadMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RailroadMap")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("stations", &self.stations.len())
            .field("routes", &self.routes.len())
            .field("claimed", &self.claimed.len())
            .finish()
    }
}

impl RailroadMap {
    fn new(
        stations: Vec<Station>,
        station_index: FxHashMap<StationId, usize>,
        routes: Vec<Route>,
    ) -> Result<Self, MapError> {
        let rows = stations.iter().map(|s| s.row).max().ok_or(MapError::NoStations)? + 1;
        let cols = stations.iter().map(|s| s.col).max().ok_or(MapError::NoStations)? + 1;
        let min_row = stations.iter().map(|s| s.row).min().unwrap_or(0);
        let min_col = stations.iter().map(|s| s.col).min().unwrap_or(0);

        let cells = grid_cells(rows, cols)?;
        let mut spaces = vec![None; cells];
        let mut route_grid = vec![None; cells];
        let mut claimed = OrdSet::new();
        let mut unclaimed = OrdSet::new();

        for route in &routes {
            if route.is_claimed() {
                claimed.insert(route.id());
            } else {
                unclaimed.insert(route.id());
            }
            for track in route.tracks() {
                let cell = track.row * cols + track.col;
                spaces[cell] = Some(Space::Track(*track));
                route_grid[cell] = Some(route.id());
            }
        }

        let (mut north, mut south, mut east, mut west) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
        for station in &stations {
            spaces[station.row * cols + station.col] = Some(Space::Station(station.id));
            if station.row == min_row {
                north.push(station.id);
            }
            if station.row == rows - 1 {
                south.push(station.id);
            }
            if station.col == min_col {
                west.push(station.id);
            }
            if station.col == cols - 1 {
                east.push(station.id);
            }
        }

        Ok(Self {
            stations,
            station_index,
            routes,
            rows,
            cols,
            spaces,
            route_grid,
            north,
            south,
            east,
            west,
            claimed,
            unclaimed,
            observers: Observers::new(),
        })
    }

    // === Observers ===

    pub fn add_observer(&mut self, observer: Box<dyn MapObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn MapObserver>> {
        self.observers.remove(id)
    }

    // === Extents and lookups ===

    /// One past the largest station row.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// One past the largest station column.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn cell(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// The route whose track covers `(row, col)`.
    #[must_use]
    pub fn route_at(&self, row: usize, col: usize) -> Option<&Route> {
        let id = self.cell(row, col).and_then(|cell| self.route_grid[cell])?;
        self.route(id)
    }

    /// The station or track at `(row, col)`; `None` for empty cells.
    #[must_use]
    pub fn space_at(&self, row: usize, col: usize) -> Option<Space> {
        self.cell(row, col).and_then(|cell| self.spaces[cell])
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[must_use]
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.station_index.get(&id).map(|&i| &self.stations[i])
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    /// Mutable access for claiming. Pair a successful claim with
    /// [`route_claimed`](Self::route_claimed).
    pub fn route_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.routes.get_mut(id.index())
    }

    /// Stations lying on one edge of the map.
    #[must_use]
    pub fn boundary_stations(&self, boundary: Boundary) -> &[StationId] {
        match boundary {
            Boundary::North => &self.north,
            Boundary::South => &self.south,
            Boundary::East => &self.east,
            Boundary::West => &self.west,
        }
    }

    // === Claimed split ===

    #[must_use]
    pub fn claimed_routes(&self) -> &OrdSet<RouteId> {
        &self.claimed
    }

    /// Unclaimed route ids. Cloning the set is O(1).
    #[must_use]
    pub fn unclaimed_routes(&self) -> &OrdSet<RouteId> {
        &self.unclaimed
    }

    /// Record a claim that has already been made on the route itself and
    /// notify observers.
    ///
    /// Ownership rules are not checked here. Moving an already claimed
    /// route again leaves the sets unchanged.
    pub fn route_claimed(&mut self, id: RouteId) {
        let Some(route) = self.routes.get(id.index()) else {
            return;
        };
        self.unclaimed.remove(&id);
        self.claimed.insert(id);
        debug!(route = %id, owner = ?route.owner(), "route claimed on map");

        let mut observers = self.observers.detach();
        observers.for_each(|o| o.route_claimed(self, &self.routes[id.index()]));
        self.observers.reattach(observers);
    }

    /// Shortest unclaimed route length, or 0 when every route is claimed.
    #[must_use]
    pub fn length_of_shortest_unclaimed_route(&self) -> u32 {
        self.unclaimed
            .iter()
            .filter_map(|&id| self.route(id))
            .map(Route::length)
            .min()
            .unwrap_or(0)
    }

    /// True once the unclaimed set is empty.
    #[must_use]
    pub fn all_routes_claimed(&self) -> bool {
        self.unclaimed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// 3x3 stations on a 7x7 grid, routes of length 2 or 1 between them.
    fn grid_map() -> RailroadMap {
        let mut builder = MapBuilder::new();
        let positions = [(0, 0), (0, 3), (0, 6), (3, 0), (3, 3), (3, 6), (6, 0), (6, 3), (6, 6)];
        let ids: Vec<_> = positions
            .iter()
            .enumerate()
            .map(|(i, &(r, c))| builder.station(i as u32, r, c, format!("S{i}")).unwrap())
            .collect();
        builder.route(ids[0], ids[1], None).unwrap();
        builder.route(ids[1], ids[2], None).unwrap();
        builder.route(ids[0], ids[3], None).unwrap();
        builder.route(ids[3], ids[6], None).unwrap();
        builder.route(ids[4], ids[5], Some(Baron::Green)).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_extents() {
        let map = grid_map();
        assert_eq!(map.rows(), 7);
        assert_eq!(map.cols(), 7);
    }

    #[test]
    fn test_boundaries() {
        let map = grid_map();
        let ids = |v: &[u32]| v.iter().map(|&i| StationId::new(i)).collect::<Vec<_>>();

        assert_eq!(map.boundary_stations(Boundary::North), ids(&[0, 1, 2]).as_slice());
        assert_eq!(map.boundary_stations(Boundary::South), ids(&[6, 7, 8]).as_slice());
        assert_eq!(map.boundary_stations(Boundary::West), ids(&[0, 3, 6]).as_slice());
        assert_eq!(map.boundary_stations(Boundary::East), ids(&[2, 5, 8]).as_slice());
    }

    #[test]
    fn test_grid_lookups() {
        let map = grid_map();

        assert_eq!(map.route_at(0, 1).map(Route::id), Some(RouteId::new(0)));
        assert_eq!(map.route_at(1, 0).map(Route::id), Some(RouteId::new(2)));
        assert!(map.route_at(0, 0).is_none());
        assert!(map.route_at(1, 1).is_none());
        assert!(map.route_at(50, 50).is_none());

        assert_eq!(map.space_at(0, 0), Some(Space::Station(StationId::new(0))));
        assert_eq!(map.space_at(0, 4).and_then(|s| s.route()), Some(RouteId::new(1)));
        assert_eq!(map.space_at(1, 1), None);
    }

    #[test]
    fn test_preclaimed_routes_start_claimed() {
        let map = grid_map();
        assert_eq!(map.claimed_routes().len(), 1);
        assert!(map.claimed_routes().contains(&RouteId::new(4)));
        assert_eq!(map.unclaimed_routes().len(), 4);
    }

    #[test]
    fn test_route_claimed_moves_sets() {
        let mut map = grid_map();
        let id = RouteId::new(0);
        assert!(map.route_mut(id).unwrap().claim(Baron::Red));
        map.route_claimed(id);

        assert!(map.claimed_routes().contains(&id));
        assert!(!map.unclaimed_routes().contains(&id));

        // Idempotent for the sets
        map.route_claimed(id);
        assert_eq!(map.claimed_routes().len(), 2);
    }

    #[test]
    fn test_shortest_unclaimed() {
        let mut map = grid_map();
        assert_eq!(map.length_of_shortest_unclaimed_route(), 2);

        for id in map.unclaimed_routes().clone() {
            map.route_mut(id).unwrap().claim(Baron::Blue);
            map.route_claimed(id);
        }
        assert!(map.all_routes_claimed());
        assert_eq!(map.length_of_shortest_unclaimed_route(), 0);
    }

    #[test]
    fn test_observers_notified() {
        struct Recorder(Rc<RefCell<Vec<(RouteId, Option<Baron>)>>>);

        impl MapObserver for Recorder {
            fn route_claimed(&mut self, map: &RailroadMap, route: &Route) {
                assert!(map.claimed_routes().contains(&route.id()));
                self.0.borrow_mut().push((route.id(), route.owner()));
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut map = grid_map();
        let handle = map.add_observer(Box::new(Recorder(seen.clone())));

        map.route_mut(RouteId::new(1)).unwrap().claim(Baron::Yellow);
        map.route_claimed(RouteId::new(1));
        assert_eq!(*seen.borrow(), vec![(RouteId::new(1), Some(Baron::Yellow))]);

        assert!(map.remove_observer(handle).is_some());
        map.route_claimed(RouteId::new(2));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_builder_errors() {
        let mut builder = MapBuilder::new();
        builder.station(0, 0, 0, "A").unwrap();
        assert!(matches!(builder.station(0, 1, 1, "B"), Err(MapError::DuplicateStation(_))));
        assert!(matches!(
            builder.route(StationId::new(0), StationId::new(9), None),
            Err(MapError::UnknownStation(_))
        ));

        assert!(matches!(MapBuilder::new().build(), Err(MapError::NoStations)));
    }

    #[test]
    fn test_oversized_grids_rejected() {
        let mut builder = MapBuilder::new();
        assert!(matches!(
            builder.station(0, 4_000_000_000, 4_000_000_000, "Far"),
            Err(MapError::GridTooLarge { .. })
        ));
        assert!(matches!(
            builder.station(1, usize::MAX, 0, "Edge"),
            Err(MapError::GridTooLarge { .. })
        ));

        // Each station fits on its own, the two together do not
        builder.station(2, 2000, 0, "South").unwrap();
        builder.station(3, 0, 2000, "East").unwrap();
        assert!(matches!(
            builder.build(),
            Err(MapError::GridTooLarge { rows: 2001, cols: 2001 })
        ));
    }
}
