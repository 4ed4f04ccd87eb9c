use core::fmt;

use egame_util::TagIndex;

/// A unique type for vertex indices, so they cannot be confused with a
/// priority or any other index in a different domain.
pub struct VertexTag;

/// The index of a vertex in a [`Game`].
pub type VertexIndex = TagIndex<usize, VertexTag>;

/// The owner of a vertex: the player who chooses the next edge to follow.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    /// Player 0, the protagonist, minimises the energy credit required.
    Zero,
    /// Player 1, the antagonist, maximises it.
    One,
}

impl Player {
    /// Constructs a player from its index (0 or 1).
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Player::Zero,
            1 => Player::One,
            _ => panic!("invalid player index {index}"),
        }
    }

    /// Returns the index of the player.
    pub fn to_index(&self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }

    /// Returns the opponent of this player.
    pub fn opponent(&self) -> Self {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Zero => write!(f, "0"),
            Player::One => write!(f, "1"),
        }
    }
}

/// An explicit energy game: a directed graph with a per-vertex owner and a
/// per-edge integer effect, stored in compressed sparse row form.
pub struct Game {
    owner: Vec<Player>,
    label: Vec<Option<String>>,

    /// Offsets into `edges_to`/`effect` for every vertex, with a sentinel
    /// entry at the end (`vertices.len() == num_of_vertices() + 1`).
    vertices: Vec<usize>,
    edges_to: Vec<VertexIndex>,
    effect: Vec<i64>,
}

impl Game {
    /// Constructs a game from pre-built compressed sparse row arrays.
    pub fn new(
        owner: Vec<Player>,
        label: Vec<Option<String>>,
        vertices: Vec<usize>,
        edges_to: Vec<VertexIndex>,
        effect: Vec<i64>,
    ) -> Self {
        debug_assert_eq!(owner.len(), label.len(), "there should be a label slot for every vertex");
        debug_assert_eq!(
            vertices.len(),
            owner.len() + 1,
            "there should be an offset for every vertex, and the sentinel"
        );
        debug_assert_eq!(edges_to.len(), effect.len(), "there should be an effect for every edge");

        Self {
            owner,
            label,
            vertices,
            edges_to,
            effect,
        }
    }

    /// Constructs a game from an edge list producer, counting out-degrees in
    /// one pass and placing edges in a second. `edges` is called twice, so it
    /// must be able to produce the same sequence both times.
    pub fn from_edges<I>(owner: Vec<Player>, label: Vec<Option<String>>, edges: impl Fn() -> I) -> Self
    where
        I: Iterator<Item = (VertexIndex, VertexIndex, i64)>,
    {
        let n = owner.len();

        let mut out_degree = vec![0usize; n];
        for (source, _, _) in edges() {
            out_degree[*source] += 1;
        }

        let mut vertices = vec![0usize; n + 1];
        for v in 0..n {
            vertices[v + 1] = vertices[v] + out_degree[v];
        }

        let num_edges = vertices[n];
        let mut edges_to = vec![VertexIndex::new(0); num_edges];
        let mut effect = vec![0i64; num_edges];

        let mut cursor = vertices.clone();
        for (source, target, eff) in edges() {
            let position = cursor[*source];
            edges_to[position] = target;
            effect[position] = eff;
            cursor[*source] += 1;
        }

        Self::new(owner, label, vertices, edges_to, effect)
    }

    /// Returns the number of vertices in the game.
    pub fn num_of_vertices(&self) -> usize {
        self.owner.len()
    }

    /// Returns the number of edges in the game.
    pub fn num_of_edges(&self) -> usize {
        self.edges_to.len()
    }

    /// Returns an iterator over all vertex indices, in ascending order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        (0..self.num_of_vertices()).map(VertexIndex::new)
    }

    /// Returns an iterator over the outgoing `(target, effect)` edges of `v`.
    pub fn outgoing_edges(&self, v: VertexIndex) -> impl Iterator<Item = (VertexIndex, i64)> + '_ {
        let start = self.vertices[*v];
        let end = self.vertices[*v + 1];
        (start..end).map(move |i| (self.edges_to[i], self.effect[i]))
    }

    /// Returns the owner of `v`.
    pub fn owner(&self, v: VertexIndex) -> Player {
        self.owner[*v]
    }

    /// Returns the vertices owned by the given player.
    pub fn player_vertices(&self, player: Player) -> impl Iterator<Item = VertexIndex> + '_ {
        self.iter_vertices().filter(move |&v| self.owner(v) == player)
    }

    /// Returns the opaque label attached to `v`, if any.
    pub fn label(&self, v: VertexIndex) -> Option<&str> {
        self.label[*v].as_deref()
    }

    /// Returns true iff `v` has no outgoing edges.
    pub fn is_sink(&self, v: VertexIndex) -> bool {
        self.vertices[*v] == self.vertices[*v + 1]
    }

    /// `max(0, -min effect over the outgoing edges of v)`; `0` for a sink.
    pub fn max_drop(&self, v: VertexIndex) -> u64 {
        self.outgoing_edges(v)
            .map(|(_, effect)| (-effect).max(0) as u64)
            .max()
            .unwrap_or(0)
    }

    /// The sum of [`Game::max_drop`] over all vertices, the basis of `CUTOFF`.
    pub fn max_drop_total(&self) -> u64 {
        self.iter_vertices().map(|v| self.max_drop(v)).sum()
    }

    /// The largest edge effect in the game (may be negative if no edge has a
    /// positive effect); used, clamped to 0, to derive `TOP`.
    pub fn max_effect(&self) -> i64 {
        self.effect.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Game {
        // 0 -(+5)-> 1 -(-3)-> 2 -(0)-> 0
        Game::from_edges(
            vec![Player::Zero, Player::One, Player::Zero],
            vec![None, None, None],
            || {
                vec![
                    (VertexIndex::new(0), VertexIndex::new(1), 5),
                    (VertexIndex::new(1), VertexIndex::new(2), -3),
                    (VertexIndex::new(2), VertexIndex::new(0), 0),
                ]
                .into_iter()
            },
        )
    }

    #[test]
    fn from_edges_builds_correct_adjacency() {
        let game = triangle();
        assert_eq!(game.num_of_vertices(), 3);
        assert_eq!(game.num_of_edges(), 3);

        let succ: Vec<_> = game.outgoing_edges(VertexIndex::new(0)).collect();
        assert_eq!(succ, vec![(VertexIndex::new(1), 5)]);
    }

    #[test]
    fn sink_has_no_outgoing_edges_and_zero_max_drop() {
        let game = Game::from_edges(vec![Player::Zero], vec![None], || std::iter::empty());
        let v = VertexIndex::new(0);
        assert!(game.is_sink(v));
        assert_eq!(game.max_drop(v), 0);
    }

    #[test]
    fn max_drop_ignores_non_negative_effects() {
        let game = triangle();
        assert_eq!(game.max_drop(VertexIndex::new(0)), 0); // effect +5
        assert_eq!(game.max_drop(VertexIndex::new(1)), 3); // effect -3
        assert_eq!(game.max_drop(VertexIndex::new(2)), 0); // effect 0
        assert_eq!(game.max_drop_total(), 3);
    }
}
