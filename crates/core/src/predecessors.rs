use crate::Game;
use crate::VertexIndex;

/// A precomputed reverse adjacency structure, so the solver's worklist loop
/// can walk predecessors in amortised O(1) per edge instead of scanning the
/// whole game on every lift.
pub struct Predecessors {
    vertices: Vec<usize>,
    edges_from: Vec<VertexIndex>,
}

impl Predecessors {
    /// Builds the predecessor structure for `game` in a single pass over its
    /// edges, counting in-degrees first and then placing edges.
    pub fn new(game: &Game) -> Self {
        let n = game.num_of_vertices();
        let mut in_degree = vec![0usize; n];

        for v in game.iter_vertices() {
            for (target, _) in game.outgoing_edges(v) {
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
            for (target, _) in game.outgoing_edges(v) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn predecessors_match_the_reverse_of_outgoing_edges() {
        // 0 -> 1, 2 -> 1, 1 -> 2
        let game = Game::from_edges(
            vec![Player::Zero, Player::Zero, Player::Zero],
            vec![None, None, None],
            || {
                vec![
                    (VertexIndex::new(0), VertexIndex::new(1), 0),
                    (VertexIndex::new(2), VertexIndex::new(1), 0),
                    (VertexIndex::new(1), VertexIndex::new(2), 0),
                ]
                .into_iter()
            },
        );

        let preds = Predecessors::new(&game);
        let mut of_one: Vec<_> = preds.predecessors(VertexIndex::new(1)).collect();
        of_one.sort();
        assert_eq!(of_one, vec![VertexIndex::new(0), VertexIndex::new(2)]);

        let of_zero: Vec<_> = preds.predecessors(VertexIndex::new(0)).collect();
        assert!(of_zero.is_empty());
    }
}
