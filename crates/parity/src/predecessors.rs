use crate::ParityGame;
use crate::VertexIndex;

/// A precomputed reverse adjacency structure for a [`ParityGame`], so the
/// Zielonka solver's attractor computation can walk predecessors in
/// amortised O(1) per edge.
pub struct Predecessors {
    vertices: Vec<usize>,
    edges_from: Vec<VertexIndex>,
}

impl Predecessors {
    /// Builds the predecessor structure for `game` in a single pass over its
    /// edges, counting in-degrees first and then placing edges.
    pub fn new(game: &ParityGame) -> Self {
        let n = game.num_of_vertices();
        let mut in_degree = vec![0usize; n];

        for v in game.iter_vertices() {
            for target in game.outgoing_edges(v) {
                in_degree[*target] += 1;
            }
        }

        let mut vertices = vec![0usize; n + 1];
        for v in 0..n {
            vertices[v + 1] = vertices[v] + in_degree[v];
        }

        let mut edges_from = vec![VertexIndex::new(0); vertices[n]];
        let mut cursor = vertices.clone();
        for v in game.iter_vertices() {
            for target in game.outgoing_edges(v) {
                let position = cursor[*target];
                edges_from[position] = v;
                cursor[*target] += 1;
            }
        }

        Self { vertices, edges_from }
    }

    /// Returns an iterator over the predecessors of `v`.
    pub fn predecessors(&self, v: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        let start = self.vertices[*v];
        let end = self.vertices[*v + 1];
        self.edges_from[start..end].iter().copied()
    }
}
