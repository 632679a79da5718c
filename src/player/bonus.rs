//! Connectivity graphs for the crossing bonuses.
//!
//! Each player keeps two graphs over the map's stations. Boundary sentinel
//! nodes stand for "off the edge of the map" and are linked to every
//! station on that edge, so a map-spanning chain of claimed routes shows
//! up as a sentinel-to-sentinel path.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::map::{Boundary, RailroadMap, StationId};

/// A node in a bonus graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusNode {
    Station(StationId),
    North,
    South,
    East,
    West,
}

impl From<Boundary> for BonusNode {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::North => BonusNode::North,
            Boundary::South => BonusNode::South,
            Boundary::East => BonusNode::East,
            Boundary::West => BonusNode::West,
        }
    }
}

/// A map-spanning connection that earns a bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crossing {
    WestEast,
    NorthSouth,
}

impl Crossing {
    /// The sentinel pair this crossing connects.
    #[must_use]
    pub const fn endpoints(self) -> (BonusNode, BonusNode) {
        match self {
            Crossing::WestEast => (BonusNode::West, BonusNode::East),
            Crossing::NorthSouth => (BonusNode::North, BonusNode::South),
        }
    }
}

/// The north-south and east-west graphs of one player.
#[derive(Clone, Debug)]
pub struct BonusGraphs {
    north_south: Graph<BonusNode>,
    east_west: Graph<BonusNode>,
    rows: usize,
    cols: usize,
}

impl Default for BonusGraphs {
    fn default() -> Self {
        Self::new()
    }
}

impl BonusGraphs {
    /// Graphs holding only the four sentinels.
    #[must_use]
    pub fn new() -> Self {
        let mut north_south = Graph::new();
        north_south.add_vertex(BonusNode::North);
        north_south.add_vertex(BonusNode::South);

        let mut east_west = Graph::new();
        east_west.add_vertex(BonusNode::East);
        east_west.add_vertex(BonusNode::West);

        Self {
            north_south,
            east_west,
            rows: 0,
            cols: 0,
        }
    }

    /// Add every station of `map` and link the boundary stations to their
    /// sentinel.
    pub fn add_board(&mut self, map: &RailroadMap) {
        self.rows = map.rows();
        self.cols = map.cols();

        for station in map.stations() {
            self.north_south.add_vertex(BonusNode::Station(station.id));
            self.east_west.add_vertex(BonusNode::Station(station.id));
        }

        for boundary in Boundary::ALL {
            let graph = match boundary {
                Boundary::North | Boundary::South => &mut self.north_south,
                Boundary::East | Boundary::West => &mut self.east_west,
            };
            for &station in map.boundary_stations(boundary) {
                graph.connect(BonusNode::Station(station), boundary.into());
            }
        }
    }

    /// Link two stations in both graphs.
    pub fn connect_stations(&mut self, origin: StationId, destination: StationId) {
        let (a, b) = (BonusNode::Station(origin), BonusNode::Station(destination));
        self.north_south.connect(a, b);
        self.east_west.connect(a, b);
    }

    #[must_use]
    pub fn north_south(&self) -> &Graph<BonusNode> {
        &self.north_south
    }

    #[must_use]
    pub fn east_west(&self) -> &Graph<BonusNode> {
        &self.east_west
    }

    /// Map rows and columns learned from [`add_board`](Self::add_board).
    #[must_use]
    pub fn extents(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Grid lines spanned by a crossing: columns for west-east, rows for
    /// north-south.
    #[must_use]
    pub fn span(&self, crossing: Crossing) -> usize {
        match crossing {
            Crossing::WestEast => self.cols,
            Crossing::NorthSouth => self.rows,
        }
    }

    /// Node count of a shortest sentinel-to-sentinel path, sentinels
    /// included, or `None` if the crossing is not connected.
    #[must_use]
    pub fn crossing_path_nodes(&self, crossing: Crossing) -> Option<usize> {
        let graph = match crossing {
            Crossing::WestEast => &self.east_west,
            Crossing::NorthSouth => &self.north_south,
        };
        let (start, end) = crossing.endpoints();
        if !graph.breadth_first_search(start, end) {
            return None;
        }
        graph.build_path_bfs(start, end).map(|path| path.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapBuilder;

    /// Three stations in a row at columns 0, 3, 6 plus one station below.
    fn row_map() -> RailroadMap {
        let mut builder = MapBuilder::new();
        let a = builder.station(0, 0, 0, "A").unwrap();
        let b = builder.station(1, 0, 3, "B").unwrap();
        let c = builder.station(2, 0, 6, "C").unwrap();
        builder.station(3, 4, 3, "D").unwrap();
        builder.route(a, b, None).unwrap();
        builder.route(b, c, None).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_new_has_only_sentinels() {
        let graphs = BonusGraphs::new();
        assert_eq!(graphs.north_south().vertex_count(), 2);
        assert_eq!(graphs.east_west().vertex_count(), 2);
        assert!(graphs.north_south().contains(BonusNode::North));
        assert!(graphs.east_west().contains(BonusNode::West));
    }

    #[test]
    fn test_add_board_links_boundaries() {
        let mut graphs = BonusGraphs::new();
        graphs.add_board(&row_map());

        assert_eq!(graphs.extents(), (5, 7));
        assert_eq!(graphs.east_west().vertex_count(), 6);
        let west = graphs.east_west().vertex(BonusNode::West).unwrap();
        assert_eq!(west.neighbors(), &[BonusNode::Station(StationId::new(0))]);

        // A, B, C all sit on the north edge
        let north = graphs.north_south().vertex(BonusNode::North).unwrap();
        assert_eq!(north.neighbors().len(), 3);
    }

    #[test]
    fn test_crossing_path() {
        let mut graphs = BonusGraphs::new();
        graphs.add_board(&row_map());
        assert_eq!(graphs.crossing_path_nodes(Crossing::WestEast), None);

        graphs.connect_stations(StationId::new(0), StationId::new(1));
        assert_eq!(graphs.crossing_path_nodes(Crossing::WestEast), None);

        graphs.connect_stations(StationId::new(1), StationId::new(2));
        // West, A, B, C, East
        assert_eq!(graphs.crossing_path_nodes(Crossing::WestEast), Some(5));
    }
}
