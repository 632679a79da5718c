//! Undirected, unweighted graph keyed by node identity.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::hash::Hash;

/// A node record: the set of neighbor identities.
///
/// Grid stations rarely have more than four neighbors, so the set lives
/// inline until it grows past that.
#[derive(Clone, Debug, Default)]
pub struct Vertex<N> {
    neighbors: SmallVec<[N; 4]>,
}

impl<N: Copy + Eq> Vertex<N> {
    /// Neighbor identities, in connection order.
    #[must_use]
    pub fn neighbors(&self) -> &[N] {
        &self.neighbors
    }

    fn connect(&mut self, other: N) {
        if !self.neighbors.contains(&other) {
            self.neighbors.push(other);
        }
    }
}

/// Undirected graph. Every edge is stored on both endpoints.
///
/// ```
/// use rail_barons::graph::Graph;
///
/// let mut graph = Graph::new();
/// for node in ['a', 'b', 'c'] {
///     graph.add_vertex(node);
/// }
/// graph.connect('a', 'b');
/// graph.connect('b', 'c');
///
/// assert!(graph.breadth_first_search('a', 'c'));
/// assert_eq!(graph.build_path_bfs('a', 'c'), Some(vec!['a', 'b', 'c']));
/// ```
#[derive(Clone, Debug)]
pub struct Graph<N> {
    vertices: FxHashMap<N, Vertex<N>>,
}

impl<N: Copy + Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self {
            vertices: FxHashMap::default(),
        }
    }
}

impl<N: Copy + Eq + Hash> Graph<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node with no neighbors. An existing node is left untouched.
    pub fn add_vertex(&mut self, node: N) {
        self.vertices.entry(node).or_insert_with(|| Vertex {
            neighbors: SmallVec::new(),
        });
    }

    #[must_use]
    pub fn contains(&self, node: N) -> bool {
        self.vertices.contains_key(&node)
    }

    #[must_use]
    pub fn vertex(&self, node: N) -> Option<&Vertex<N>> {
        self.vertices.get(&node)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over node identities in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.vertices.keys().copied()
    }

    /// Add a mutual edge between two existing nodes.
    ///
    /// Returns false, without changing the graph, if either node is missing.
    pub fn connect(&mut self, a: N, b: N) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        if let Some(vertex) = self.vertices.get_mut(&a) {
            vertex.connect(b);
        }
        if let Some(vertex) = self.vertices.get_mut(&b) {
            vertex.connect(a);
        }
        true
    }

    /// True iff `end` is reachable from `start`, including `start == end`.
    #[must_use]
    pub fn breadth_first_search(&self, start: N, end: N) -> bool {
        if !self.contains(start) {
            return false;
        }

        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            if node == end {
                return true;
            }
            for &neighbor in self.vertices[&node].neighbors() {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        false
    }

    /// A shortest path from `start` to `end`, both inclusive.
    ///
    /// `None` when `end` is unreachable. Among equal-length paths, which
    /// one is returned is unspecified.
    #[must_use]
    pub fn build_path_bfs(&self, start: N, end: N) -> Option<Vec<N>> {
        if !self.contains(start) {
            return None;
        }

        // A node has a predecessor entry iff it has been discovered.
        let mut predecessor: FxHashMap<N, Option<N>> = FxHashMap::default();
        predecessor.insert(start, None);
        let mut queue = VecDeque::from([start]);

        let mut found = false;
        while let Some(node) = queue.pop_front() {
            if node == end {
                found = true;
                break;
            }
            for &neighbor in self.vertices[&node].neighbors() {
                if !predecessor.contains_key(&neighbor) {
                    predecessor.insert(neighbor, Some(node));
                    queue.push_back(neighbor);
                }
            }
        }

        if !found {
            return None;
        }

        let mut path = vec![end];
        let mut current = predecessor.get(&end).copied().flatten();
        while let Some(node) = current {
            path.push(node);
            current = predecessor.get(&node).copied().flatten();
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: u32) -> Graph<u32> {
        let mut graph = Graph::new();
        for i in 0..n {
            graph.add_vertex(i);
        }
        for i in 1..n {
            graph.connect(i - 1, i);
        }
        graph
    }

    #[test]
    fn test_connect_is_mutual() {
        let graph = line(2);
        assert_eq!(graph.vertex(0).unwrap().neighbors(), &[1]);
        assert_eq!(graph.vertex(1).unwrap().neighbors(), &[0]);
    }

    #[test]
    fn test_connect_requires_both_vertices() {
        let mut graph = line(1);
        assert!(!graph.connect(0, 9));
        assert!(graph.vertex(0).unwrap().neighbors().is_empty());
        assert!(!graph.contains(9));
    }

    #[test]
    fn test_connect_twice_keeps_set_semantics() {
        let mut graph = line(2);
        graph.connect(0, 1);
        graph.connect(1, 0);
        assert_eq!(graph.vertex(0).unwrap().neighbors().len(), 1);
    }

    #[test]
    fn test_re_adding_vertex_keeps_edges() {
        let mut graph = line(2);
        graph.add_vertex(0);
        assert_eq!(graph.vertex(0).unwrap().neighbors(), &[1]);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_bfs_trivial_and_unreachable() {
        let mut graph = line(3);
        graph.add_vertex(7);

        assert!(graph.breadth_first_search(1, 1));
        assert!(graph.breadth_first_search(0, 2));
        assert!(!graph.breadth_first_search(0, 7));
        assert!(!graph.breadth_first_search(42, 0));
    }

    #[test]
    fn test_path_on_line() {
        let graph = line(5);
        assert_eq!(graph.build_path_bfs(0, 4), Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(graph.build_path_bfs(4, 0), Some(vec![4, 3, 2, 1, 0]));
        assert_eq!(graph.build_path_bfs(2, 2), Some(vec![2]));
    }

    #[test]
    fn test_path_prefers_shortcut() {
        let mut graph = line(6);
        graph.connect(0, 4);
        let path = graph.build_path_bfs(0, 5).unwrap();
        assert_eq!(path, vec![0, 4, 5]);
    }

    #[test]
    fn test_path_none_when_disconnected() {
        let mut graph = line(2);
        graph.add_vertex(3);
        assert_eq!(graph.build_path_bfs(0, 3), None);
    }
}
