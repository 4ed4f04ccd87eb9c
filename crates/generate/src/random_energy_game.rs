use egame_core::Game;
use egame_core::Player;
use egame_core::VertexIndex;
use rand::Rng;

/// Parameters for [`random_energy_game`], mirroring the original generator's
/// knobs: vertex count, edge density, player-0 ownership probability, edge
/// weight bounds, and whether sinks are allowed to remain sinks.
pub struct GenerateOptions {
    pub num_vertices: usize,

    /// Probability of an edge existing between any ordered pair of distinct
    /// vertices, and (independently) of a self-loop at each vertex.
    pub edge_probability: f64,

    /// Probability that a given vertex is owned by Player 0.
    pub owner_zero_probability: f64,

    /// Maximum positive edge effect.
    pub max_weight: i64,

    /// Maximum-magnitude negative edge effect; defaults to `-max_weight`.
    pub min_weight: Option<i64>,

    /// When a vertex would otherwise end up without any self-loop and with
    /// no other outgoing edges, pin a losing self-loop of effect -1 instead
    /// of leaving it as a sink.
    pub no_sinks: bool,
}

/// Generates a random energy game.
///
/// Edges between distinct vertices are generated independently with
/// probability `edge_probability`; self-loops are generated separately
/// (mirroring the underlying graph generator's own avoidance of self-loops),
/// each with the same probability, falling back to a losing self-loop when
/// `no_sinks` is set and none was drawn.
pub fn random_energy_game(rng: &mut impl Rng, options: &GenerateOptions) -> Game {
    let n = options.num_vertices;
    let min_weight = options.min_weight.unwrap_or(-options.max_weight);
    assert!(
        min_weight <= options.max_weight,
        "min_weight must not exceed max_weight"
    );

    let owner: Vec<Player> = (0..n)
        .map(|_| {
            if rng.random::<f64>() < options.owner_zero_probability {
                Player::Zero
            } else {
                Player::One
            }
        })
        .collect();

    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if rng.random::<f64>() < options.edge_probability {
                let weight = rng.random_range(min_weight..=options.max_weight);
                edges.push((i, j, weight));
            }
        }
    }

    for v in 0..n {
        if rng.random::<f64>() <= options.edge_probability {
            let weight = rng.random_range(min_weight..=options.max_weight);
            edges.push((v, v, weight));
        } else if options.no_sinks {
            edges.push((v, v, -1));
        }
    }

    Game::from_edges(owner, vec![None; n], || {
        edges
            .iter()
            .map(|&(s, t, w)| (VertexIndex::new(s), VertexIndex::new(t), w))
            .collect::<Vec<_>>()
            .into_iter()
    })
}

#[cfg(test)]
mod tests {
    use egame_util::random_test;

    use super::*;

    #[test]
    fn respects_the_requested_vertex_count() {
        random_test(50, |rng| {
            let options = GenerateOptions {
                num_vertices: 8,
                edge_probability: 0.3,
                owner_zero_probability: 0.5,
                max_weight: 4,
                min_weight: None,
                no_sinks: false,
            };
            let game = random_energy_game(rng, &options);
            assert_eq!(game.num_of_vertices(), 8);
        });
    }

    #[test]
    fn no_sinks_guarantees_every_vertex_has_a_successor() {
        random_test(50, |rng| {
            let options = GenerateOptions {
                num_vertices: 6,
                edge_probability: 0.0,
                owner_zero_probability: 0.5,
                max_weight: 4,
                min_weight: None,
                no_sinks: true,
            };
            let game = random_energy_game(rng, &options);
            for v in game.iter_vertices() {
                assert!(!game.is_sink(v));
            }
        });
    }
}
