use core::fmt;

use egame_util::TagIndex;

/// The two players in a parity game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    Even,
    Odd,
}

impl Player {
    /// Constructs a player from its index.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Player::Even,
            1 => Player::Odd,
            _ => panic!("invalid player index {index}"),
        }
    }

    /// Constructs a player from a priority: even priorities are owned by
    /// [`Player::Even`], odd priorities by [`Player::Odd`].
    pub fn from_priority(priority: &Priority) -> Self {
        if priority.value() % 2 == 0 {
            Player::Even
        } else {
            Player::Odd
        }
    }

    /// Returns the index of the player.
    pub fn to_index(&self) -> usize {
        match self {
            Player::Even => 0,
            Player::Odd => 1,
        }
    }

    /// Returns the opponent of the current player.
    pub fn opponent(&self) -> Self {
        match self {
            Player::Even => Player::Odd,
            Player::Odd => Player::Even,
        }
    }

    /// Returns the string representation of the solution for this player.
    pub fn solution(&self) -> &'static str {
        match self {
            Player::Even => "true",
            Player::Odd => "false",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Even => write!(f, "even"),
            Player::Odd => write!(f, "odd"),
        }
    }
}

/// A unique type for the vertices.
pub struct VertexTag;

/// A unique type for the priorities.
pub struct PriorityTag;

/// The index for a vertex.
pub type VertexIndex = TagIndex<usize, VertexTag>;

/// The strong type for a priority.
pub type Priority = TagIndex<usize, PriorityTag>;

/// Represents an explicit parity game.
pub struct ParityGame {
    /// Stores the owner of every vertex.
    owner: Vec<Player>,

    /// Stores the priority of every vertex.
    priority: Vec<Priority>,

    /// Optional label, used to identify which energy-game vertex and
    /// credit level a parity-game vertex was produced from.
    label: Vec<Option<String>>,

    /// Offsets into the transition array for every vertex.
    vertices: Vec<usize>,
    edges_to: Vec<VertexIndex>,

    initial_vertex: VertexIndex,
}

impl ParityGame {
    /// Construct a new parity game from pre-built compressed sparse row data.
    pub fn new(
        initial_vertex: VertexIndex,
        owner: Vec<Player>,
        priority: Vec<Priority>,
        label: Vec<Option<String>>,
        vertices: Vec<usize>,
        edges_to: Vec<VertexIndex>,
    ) -> Self {
        debug_assert_eq!(
            owner.len(),
            priority.len(),
            "there should be an owner and priority for every vertex"
        );
        debug_assert_eq!(owner.len(), label.len(), "there should be a label slot for every vertex");
        debug_assert_eq!(
            vertices.len(),
            owner.len() + 1,
            "there should be an offset for every vertex, and the sentinel state"
        );

        Self {
            owner,
            priority,
            label,
            vertices,
            edges_to,
            initial_vertex,
        }
    }

    /// Constructs a parity game from an edge list producer, counting
    /// out-degrees in one pass and placing edges in a second.
    pub fn from_edges<I>(
        initial_vertex: VertexIndex,
        owner: Vec<Player>,
        priority: Vec<Priority>,
        label: Vec<Option<String>>,
        edges: impl Fn() -> I,
    ) -> Self
    where
        I: Iterator<Item = (VertexIndex, VertexIndex)>,
    {
        let n = owner.len();
        let mut out_degree = vec![0usize; n];
        for (source, _) in edges() {
            out_degree[*source] += 1;
        }

        let mut vertices = vec![0usize; n + 1];
        for v in 0..n {
            vertices[v + 1] = vertices[v] + out_degree[v];
        }

        let mut edges_to = vec![VertexIndex::new(0); vertices[n]];
        let mut cursor = vertices.clone();
        for (source, target) in edges() {
            let position = cursor[*source];
            edges_to[position] = target;
            cursor[*source] += 1;
        }

        Self::new(initial_vertex, owner, priority, label, vertices, edges_to)
    }

    /// Returns the initial vertex of the parity game.
    pub fn initial_vertex(&self) -> VertexIndex {
        self.initial_vertex
    }

    /// Returns the number of vertices in the parity game.
    pub fn num_of_vertices(&self) -> usize {
        self.owner.len()
    }

    pub fn num_of_edges(&self) -> usize {
        self.edges_to.len()
    }

    /// Returns an iterator over all vertices in the parity game.
    pub fn iter_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        (0..self.num_of_vertices()).map(VertexIndex::new)
    }

    /// Returns an iterator over the outgoing edges for the given vertex.
    pub fn outgoing_edges(&self, state_index: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        let start = self.vertices[*state_index];
        let end = self.vertices[*state_index + 1];

        (start..end).map(move |i| self.edges_to[i])
    }

    /// Returns the owner of the given vertex.
    pub fn owner(&self, vertex: VertexIndex) -> Player {
        self.owner[*vertex]
    }

    /// Returns the priority of the given vertex.
    pub fn priority(&self, vertex: VertexIndex) -> Priority {
        self.priority[*vertex]
    }

    /// Returns the label attached to the given vertex, if any.
    pub fn label(&self, vertex: VertexIndex) -> Option<&str> {
        self.label[*vertex].as_deref()
    }
}
