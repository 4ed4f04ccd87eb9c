use std::fmt::Write;

use egame_parity::ParityGame;

/// Renders a parity game in the classical pgsolver textual format:
/// a `parity N;` header followed by one `id priority owner
/// succ1,succ2,...` line per vertex, with an optional quoted label.
pub fn to_pgsolver(game: &ParityGame) -> String {
    let mut out = String::new();

    writeln!(out, "parity {};", game.num_of_vertices().saturating_sub(1)).unwrap();

    for v in game.iter_vertices() {
        let successors: Vec<String> = game.outgoing_edges(v).map(|w| w.to_string()).collect();

        write!(
            out,
            "{v} {} {} {}",
            game.priority(v),
            game.owner(v).to_index(),
            successors.join(",")
        )
        .unwrap();

        if let Some(label) = game.label(v) {
            write!(out, " \"{label}\"").unwrap();
        }

        writeln!(out, ";").unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use egame_parity::Player;
    use egame_parity::Priority;
    use egame_parity::VertexIndex;

    use super::*;

    #[test]
    fn writes_a_header_and_one_line_per_vertex() {
        let game = ParityGame::from_edges(
            VertexIndex::new(0),
            vec![Player::Even, Player::Odd],
            vec![Priority::new(0), Priority::new(1)],
            vec![Some("a".to_string()), None],
            || {
                vec![(VertexIndex::new(0), VertexIndex::new(1)), (VertexIndex::new(1), VertexIndex::new(0))].into_iter()
            },
        );

        let text = to_pgsolver(&game);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("parity 1;"));
        assert_eq!(lines.next(), Some("0 0 0 1 \"a\";"));
        assert_eq!(lines.next(), Some("1 1 1 0;"));
    }
}
