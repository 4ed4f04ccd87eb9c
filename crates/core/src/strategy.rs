use std::collections::HashMap;

use egame_util::EgameError;
use egame_util::EgameResult;

use crate::Game;
use crate::Player;
use crate::SolveResult;
use crate::VertexIndex;

/// The optimal positional strategy: for every winning Player-0 vertex, a
/// successor minimising the post-move credit requirement.
pub type Strategy = HashMap<VertexIndex, VertexIndex>;

/// Extracts the optimal strategy from an already-computed [`SolveResult`].
///
/// For every `v` owned by Player 0 with `win(v) >= 0`, picks
/// `argmin_{w in succ(v), win(w) >= 0} (win(w) - effect(v, w))`, breaking
/// ties by the smallest vertex index for determinism.
///
/// Returns [`EgameError::InvariantViolation`] if some qualifying `v` has no
/// winning successor: `solve` guarantees this cannot happen, so surfacing it
/// here indicates a bug in the measure rather than a malformed input.
pub fn extract_strategy(game: &Game, result: &SolveResult) -> EgameResult<Strategy> {
    let mut strategy = Strategy::new();

    for v in game.player_vertices(Player::Zero) {
        if result.win(v) < 0 {
            continue;
        }

        let mut best: Option<(VertexIndex, i64)> = None;
        for (w, effect) in game.outgoing_edges(v) {
            let win_w = result.win(w);
            if win_w < 0 {
                continue;
            }

            let score = win_w - effect;
            let replace = match best {
                None => true,
                Some((best_w, best_score)) => score < best_score || (score == best_score && w < best_w),
            };
            if replace {
                best = Some((w, score));
            }
        }

        match best {
            Some((w, _)) => {
                strategy.insert(v, w);
            }
            None => {
                return Err(EgameError::invariant(format!(
                    "vertex {v} is won by player 0 but has no winning successor"
                )));
            }
        }
    }

    Ok(strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve;

    fn game_from(owner: Vec<Player>, edges: Vec<(usize, usize, i64)>) -> Game {
        let labels = vec![None; owner.len()];
        Game::from_edges(owner, labels, move || {
            edges
                .iter()
                .map(|&(s, t, e)| (VertexIndex::new(s), VertexIndex::new(t), e))
                .collect::<Vec<_>>()
                .into_iter()
        })
    }

    #[test]
    fn strategy_matches_the_expected_witness_for_the_winning_branch() {
        let game = game_from(
            vec![Player::Zero, Player::Zero, Player::Zero],
            vec![(0, 1, 5), (0, 2, -3), (1, 1, 1), (2, 2, -1)],
        );
        let result = solve(&game);
        let strategy = extract_strategy(&game, &result).unwrap();

        assert_eq!(strategy.get(&VertexIndex::new(0)), Some(&VertexIndex::new(1)));
        assert_eq!(strategy.get(&VertexIndex::new(1)), Some(&VertexIndex::new(1)));
        assert_eq!(strategy.get(&VertexIndex::new(2)), None);
    }

    #[test]
    fn every_chosen_edge_exists_and_lands_on_a_winning_vertex() {
        let game = game_from(
            vec![Player::Zero, Player::One, Player::Zero],
            vec![(0, 1, -1), (1, 0, 2), (1, 2, 0), (2, 2, 1)],
        );
        let result = solve(&game);
        let strategy = extract_strategy(&game, &result).unwrap();

        for (&v, &w) in strategy.iter() {
            assert!(game.outgoing_edges(v).any(|(succ, _)| succ == w));
            assert!(result.win(w) >= 0);
        }
    }
}
