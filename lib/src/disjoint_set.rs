// lib/src/disjoint_set.rs

//! Union-find over the vertex indices of one graph, with iterative path
//! compression and union by rank.

use models::errors::{GraphError, GraphResult};
use models::{Graph, VertexIndex};

#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    // None marks an index that was never passed to `make_set`.
    parent: Vec<Option<VertexIndex>>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }

    /// One singleton set per vertex of `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        let mut set = Self::with_capacity(graph.vertex_count());
        for vertex in 0..graph.vertex_count() {
            set.make_set(vertex);
        }
        set
    }

    /// Registers `vertex` as its own singleton set with rank 0.
    pub fn make_set(&mut self, vertex: VertexIndex) {
        if vertex >= self.parent.len() {
            self.parent.resize(vertex + 1, None);
            self.rank.resize(vertex + 1, 0);
        }
        self.parent[vertex] = Some(vertex);
        self.rank[vertex] = 0;
    }

    pub fn contains(&self, vertex: VertexIndex) -> bool {
        matches!(self.parent.get(vertex), Some(Some(_)))
    }

    /// Direct parent pointer of `vertex`, without compressing anything.
    pub fn parent_of(&self, vertex: VertexIndex) -> GraphResult<VertexIndex> {
        self.parent
            .get(vertex)
            .copied()
            .flatten()
            .ok_or(GraphError::UnregisteredVertex(vertex))
    }

    pub fn rank_of(&self, vertex: VertexIndex) -> GraphResult<u32> {
        self.parent_of(vertex)?;
        Ok(self.rank[vertex])
    }

    /// Representative of the set holding `vertex`.
    ///
    /// Every vertex on the walk is re-pointed straight at the root before
    /// returning. Two loops instead of recursion keep the stack flat on
    /// long chains.
    ///
    /// # Errors
    /// Returns `GraphError::UnregisteredVertex` if `make_set` was never
    /// called for `vertex`.
    pub fn find(&mut self, vertex: VertexIndex) -> GraphResult<VertexIndex> {
        let mut root = vertex;
        loop {
            let parent = self.parent_of(root)?;
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut node = vertex;
        while node != root {
            let parent = self.parent_of(node)?;
            self.parent[node] = Some(root);
            node = parent;
        }

        Ok(root)
    }

    /// Merges the sets holding `first` and `second`. The root with the smaller
    /// rank goes under the other one; on a tie `first`'s root becomes the
    /// parent and gains one rank.
    ///
    /// Returns `false` when both were already in the same set.
    pub fn union(&mut self, first: VertexIndex, second: VertexIndex) -> GraphResult<bool> {
        let first_root = self.find(first)?;
        let second_root = self.find(second)?;

        if first_root == second_root {
            return Ok(false);
        }

        let first_rank = self.rank[first_root];
        let second_rank = self.rank[second_root];
        if first_rank < second_rank {
            self.parent[first_root] = Some(second_root);
        } else if first_rank > second_rank {
            self.parent[second_root] = Some(first_root);
        } else {
            self.parent[second_root] = Some(first_root);
            self.rank[first_root] = first_rank + 1;
        }

        Ok(true)
    }

    /// Number of disjoint sets among registered vertices.
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|(vertex, parent)| **parent == Some(*vertex))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_sets_on_union() {
        let mut set = DisjointSet::new();
        for vertex in 0..4 {
            set.make_set(vertex);
        }
        assert!(set.union(0, 1).unwrap());
        assert_eq!(set.find(0).unwrap(), set.find(1).unwrap());
        assert_ne!(set.find(0).unwrap(), set.find(2).unwrap());
        assert!(!set.union(1, 0).unwrap());
        assert_eq!(set.set_count(), 3);
    }

    #[test]
    fn should_fail_on_unregistered_vertex() {
        let mut set = DisjointSet::new();
        set.make_set(0);
        set.make_set(2);
        assert_eq!(set.find(1), Err(GraphError::UnregisteredVertex(1)));
        assert_eq!(set.find(7), Err(GraphError::UnregisteredVertex(7)));
        assert_eq!(set.union(0, 1), Err(GraphError::UnregisteredVertex(1)));
        assert!(!set.contains(1));
        assert!(set.contains(2));
    }

    #[test]
    fn should_prefer_first_root_on_rank_tie() {
        let mut set = DisjointSet::new();
        set.make_set(0);
        set.make_set(1);
        set.union(0, 1).unwrap();
        assert_eq!(set.parent_of(1).unwrap(), 0);
        assert_eq!(set.rank_of(0).unwrap(), 1);
        assert_eq!(set.rank_of(1).unwrap(), 0);
    }

    #[test]
    fn should_attach_lower_rank_under_higher_rank() {
        let mut set = DisjointSet::new();
        for vertex in 0..3 {
            set.make_set(vertex);
        }
        set.union(1, 2).unwrap();
        // 0 has rank 0, 1 has rank 1: 0 goes under 1 even as first argument.
        set.union(0, 1).unwrap();
        assert_eq!(set.parent_of(0).unwrap(), 1);
        assert_eq!(set.rank_of(1).unwrap(), 1);
    }

    #[test]
    fn should_compress_paths_on_find() {
        let mut set = DisjointSet::new();
        for vertex in 0..5 {
            set.make_set(vertex);
        }
        // Build 4 -> 3 -> 2 -> 1 -> 0 by hand; union by rank never yields a chain.
        for vertex in 1..5 {
            set.parent[vertex] = Some(vertex - 1);
        }

        assert_eq!(set.find(4).unwrap(), 0);
        for vertex in 1..5 {
            assert_eq!(set.parent_of(vertex).unwrap(), 0);
        }
    }

    #[test]
    fn should_handle_long_chains_without_recursion() {
        let length = 200_000;
        let mut set = DisjointSet::with_capacity(length);
        for vertex in 0..length {
            set.make_set(vertex);
        }
        for vertex in 1..length {
            set.parent[vertex] = Some(vertex - 1);
        }
        assert_eq!(set.find(length - 1).unwrap(), 0);
        assert_eq!(set.parent_of(length / 2).unwrap(), 0);
    }

    #[test]
    fn should_bound_rank_by_log_of_set_size() {
        let size = 1024;
        let mut set = DisjointSet::new();
        for vertex in 0..size {
            set.make_set(vertex);
        }
        for vertex in 1..size {
            set.union(vertex - 1, vertex).unwrap();
        }
        let root = set.find(0).unwrap();
        for vertex in 0..size {
            assert_eq!(set.find(vertex).unwrap(), root);
        }
        let bound = (size as f64).log2().ceil() as u32;
        assert!(set.rank_of(root).unwrap() <= bound);
        assert_eq!(set.set_count(), 1);
    }

    #[test]
    fn should_register_every_graph_vertex() {
        let mut graph = Graph::undirected();
        for id in ["A", "B", "C"] {
            graph.add_vertex(id).unwrap();
        }
        let mut set = DisjointSet::for_graph(&graph);
        assert_eq!(set.set_count(), 3);
        assert_eq!(set.find(2).unwrap(), 2);
    }
}
