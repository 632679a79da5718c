//! Map model: stations, routes, tracks and the grid they sit on.
//!
//! - `station`: stations, tracks and grid spaces
//! - `route`: routes, orientation and the point table
//! - `railroad_map`: the map itself, its builder and observers
//! - `format`: the text map reader/writer

pub mod format;
pub mod railroad_map;
pub mod route;
pub mod station;

pub use format::{read_map, write_map, ROUTES_SENTINEL};
pub use railroad_map::{Boundary, MapBuilder, MapObserver, RailroadMap, MAX_GRID_CELLS};
pub use route::{point_value, Orientation, Route, RouteId};
pub use station::{Space, Station, StationId, Track};
