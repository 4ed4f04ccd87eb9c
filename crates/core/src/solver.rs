use std::collections::BTreeSet;

use log::debug;
use log::trace;

use crate::Game;
use crate::Measure;
use crate::Player;
use crate::Predecessors;
use crate::VertexIndex;

/// The outcome of [`solve`]: the least progress measure, the derived winning
/// region, and the `CUTOFF`/`TOP` bounds it was computed against.
pub struct SolveResult {
    /// The progress measure of every vertex.
    pub pm: Vec<Measure>,

    /// `win(v) = pm(v)` if finite, `-1` if `pm(v) = Top`.
    pub win: Vec<i64>,

    /// `1 + sum of max_drop(v)`: any feasible credit is strictly below this.
    pub cutoff: u64,

    /// `cutoff + max(0, max edge effect)`: the sentinel level for "losing".
    pub top: u64,
}

impl SolveResult {
    /// Returns the computed measure of `v`.
    pub fn measure(&self, v: VertexIndex) -> Measure {
        self.pm[*v]
    }

    /// Returns `win(v)`.
    pub fn win(&self, v: VertexIndex) -> i64 {
        self.win[*v]
    }
}

/// `CUTOFF = 1 + sum_v max_drop(v)`.
pub fn cutoff(game: &Game) -> u64 {
    1 + game.max_drop_total()
}

/// `TOP = CUTOFF + max(0, max_e effect(e))`.
///
/// Using `max(0, ...)` rather than the raw maximum effect keeps `TOP >=
/// CUTOFF` even when every edge effect in the game is negative, where the
/// raw maximum would otherwise push `TOP` below `CUTOFF` and make every
/// vertex's ⊤ test vacuous.
pub fn top(game: &Game, cutoff: u64) -> u64 {
    cutoff + game.max_effect().max(0) as u64
}

/// Computes the least progress measure of `game` via worklist lifting, and
/// derives the winning region from it.
///
/// Vertices are picked from the dirty set in strictly ascending index order
/// for a reproducible, deterministic traversal; any order yields the same
/// fixed point.
pub fn solve(game: &Game) -> SolveResult {
    let cutoff = cutoff(game);
    let top_value = top(game, cutoff);
    let n = game.num_of_vertices();

    let mut pm = vec![Measure::zero(); n];
    let mut dirty: BTreeSet<VertexIndex> = BTreeSet::new();

    for v in game.iter_vertices() {
        if game.is_sink(v) {
            pm[*v] = Measure::Top;
        } else {
            dirty.insert(v);
        }
    }

    let predecessors = Predecessors::new(game);
    let mut lifts = 0u64;

    while let Some(v) = dirty.pop_first() {
        let new_value = lift(game, &pm, v, cutoff);
        lifts += 1;

        if new_value > pm[*v] {
            trace!("lift({v}): {} -> {new_value}", pm[*v]);
            pm[*v] = new_value;

            for u in predecessors.predecessors(v) {
                if !game.is_sink(u) && pm[*u] != Measure::Top {
                    dirty.insert(u);
                }
            }
        }
    }

    debug!("solve: {lifts} lifts over {n} vertices, cutoff = {cutoff}, top = {top_value}");

    let win = pm.iter().map(|measure| measure.to_win()).collect();

    SolveResult {
        pm,
        win,
        cutoff,
        top: top_value,
    }
}

/// Computes the lifted value of `v`: the min (owner 0) or max (owner 1) over
/// its outgoing edges' per-edge lifted values.
fn lift(game: &Game, pm: &[Measure], v: VertexIndex, cutoff: u64) -> Measure {
    let mut edges = game.outgoing_edges(v).map(|(w, effect)| pm[*w].lift_edge(effect, cutoff));

    match game.owner(v) {
        Player::Zero => edges.min().expect("v is not a sink"),
        Player::One => edges.max().expect("v is not a sink"),
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::Player;

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

    // A single positive self-loop accrues credit without bound.
    #[test]
    fn single_positive_self_loop_wins() {
        let game = game_from(vec![Player::Zero], vec![(0, 0, 1)]);
        let result = solve(&game);
        assert_eq!(result.win, vec![0]);
    }

    // A single negative self-loop drains credit without bound.
    #[test]
    fn single_negative_self_loop_loses() {
        let game = game_from(vec![Player::Zero], vec![(0, 0, -1)]);
        let result = solve(&game);
        assert_eq!(result.win, vec![-1]);
    }

    // A sink with no outgoing edges is losing for both players.
    #[test]
    fn sink_loses_for_both_players() {
        let game = game_from(vec![Player::Zero, Player::Zero], vec![(0, 1, 0)]);
        let result = solve(&game);
        assert_eq!(result.win, vec![-1, -1]);
    }

    // A deterministic two-vertex cycle with net cost -1 is still winnable from enough credit.
    #[test]
    fn deterministic_cycle_of_net_negative_cost_is_winnable() {
        let game = game_from(vec![Player::Zero, Player::Zero], vec![(0, 1, -1), (1, 0, 2)]);
        let result = solve(&game);
        assert_eq!(result.win, vec![1, 0]);
    }

    // Player One routes vertex 0 into a losing branch whenever it can choose.
    #[test]
    fn opponent_routes_into_the_losing_branch() {
        let game = game_from(
            vec![Player::One, Player::Zero, Player::Zero],
            vec![(0, 1, 5), (0, 2, -3), (1, 1, 1), (2, 2, -1)],
        );
        let result = solve(&game);
        assert_eq!(result.win, vec![-1, 0, -1]);
    }

    // Player Zero instead routes vertex 0 into the winning branch.
    #[test]
    fn owner_routes_into_the_winning_branch() {
        let game = game_from(
            vec![Player::Zero, Player::Zero, Player::Zero],
            vec![(0, 1, 5), (0, 2, -3), (1, 1, 1), (2, 2, -1)],
        );
        let result = solve(&game);
        assert_eq!(result.win, vec![0, 0, -1]);
    }

    #[test]
    fn solved_measure_is_a_fixed_point() {
        let game = game_from(
            vec![Player::One, Player::Zero, Player::Zero],
            vec![(0, 1, 5), (0, 2, -3), (1, 1, 1), (2, 2, -1)],
        );
        let result = solve(&game);

        for v in game.iter_vertices() {
            if game.is_sink(v) {
                continue;
            }
            assert_eq!(lift(&game, &result.pm, v, result.cutoff), result.pm[*v]);
        }
    }

    #[test]
    fn top_is_absorbing_once_reached() {
        // Player 0 owns v, whose only successor w is a losing sink.
        let game = game_from(vec![Player::Zero, Player::Zero], vec![(0, 1, 0)]);
        let result = solve(&game);
        assert!(result.measure(VertexIndex::new(0)).is_top());
        assert!(result.measure(VertexIndex::new(1)).is_top());
    }

    #[test]
    fn solve_is_deterministic_across_runs() {
        let game = game_from(
            vec![Player::One, Player::Zero, Player::Zero],
            vec![(0, 1, 5), (0, 2, -3), (1, 1, 1), (2, 2, -1)],
        );
        let a = solve(&game);
        let b = solve(&game);
        assert_eq!(a.win, b.win);
    }
}
