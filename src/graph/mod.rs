//! Generic undirected graph with BFS reachability and shortest paths.
//!
//! Players keep two of these over station identities to detect
//! boundary-to-boundary connections for bonus scoring.

pub mod adjacency;

pub use adjacency::{Graph, Vertex};
