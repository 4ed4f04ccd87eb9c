use std::fmt::Write;

use egame_core::Player;
use egame_core::SolveResult;
use egame_core::Strategy;
use egame_core::VertexIndex;
use egame_parity::ParityGame;

use crate::ParsedGame;

/// Renders an energy game as a Graphviz digraph named `G`.
///
/// Vertices are identified and labelled by their original "eg" node id
/// (via [`ParsedGame::node_id`]), not by the dense `VertexIndex`, so the
/// output stays consistent with `report`/`json` for an input whose ids are
/// not contiguous from 0.
///
/// Shapes follow the owner (box for Player 1, diamond for Player 0).
/// When `result` is given, winning vertices are coloured green and losing
/// ones red, and winning vertices are labelled `"id (credit)"`. When
/// `strategy` is also given, the edges it selects are drawn in green.
pub fn energy_game_to_dot(parsed: &ParsedGame, result: Option<&SolveResult>, strategy: Option<&Strategy>) -> String {
    let game = &parsed.game;
    let mut out = String::new();
    write_header(&mut out);

    for v in game.iter_vertices() {
        write_vertex(&mut out, v, parsed, result);
    }

    for v in game.iter_vertices() {
        for (target, effect) in game.outgoing_edges(v) {
            let selected = strategy.is_some_and(|s| s.get(&v) == Some(&target));
            write_edge(&mut out, parsed.node_id(v), parsed.node_id(target), &format!("{effect}"), selected);
        }
    }

    write_footer(&mut out);
    out
}

fn write_header(out: &mut String) {
    writeln!(out, "digraph G {{").unwrap();
    writeln!(out, "  rankdir=LR;").unwrap();
}

fn write_footer(out: &mut String) {
    writeln!(out, "}}").unwrap();
}

fn write_vertex(out: &mut String, v: VertexIndex, parsed: &ParsedGame, result: Option<&SolveResult>) {
    let game = &parsed.game;
    let id = parsed.node_id(v);

    let shape = match game.owner(v) {
        Player::Zero => "diamond",
        Player::One => "box",
    };

    let label = match (game.label(v), result.map(|r| r.win(v))) {
        (Some(label), Some(win)) if win >= 0 => format!("{label} ({win})"),
        (Some(label), _) => label.to_string(),
        (None, Some(win)) if win >= 0 => format!("{id} ({win})"),
        (None, _) => format!("{id}"),
    };

    let color = match result.map(|r| r.win(v)) {
        Some(win) if win >= 0 => " style=filled fillcolor=green",
        Some(_) => " style=filled fillcolor=red",
        None => "",
    };

    writeln!(out, "  {id} [shape={shape} label=\"{label}\"{color}];").unwrap();
}

fn write_edge(out: &mut String, from: i64, to: i64, label: &str, selected: bool) {
    let color = if selected { " color=green penwidth=2" } else { "" };
    writeln!(out, "  {from} -> {to} [label=\"{label}\"{color}];").unwrap();
}

/// Renders a parity game (typically the output of the energy-to-parity
/// reduction) as a Graphviz digraph named `G`.
pub fn parity_game_to_dot(game: &ParityGame) -> String {
    let mut out = String::new();
    write_header(&mut out);

    for v in game.iter_vertices() {
        let shape = match game.owner(v) {
            egame_parity::Player::Even => "diamond",
            egame_parity::Player::Odd => "box",
        };
        let label = game.label(v).map(str::to_string).unwrap_or_else(|| format!("{v}"));
        writeln!(
            out,
            "  {v} [shape={shape} label=\"{label} : {}\"];",
            game.priority(v)
        )
        .unwrap();
    }

    for v in game.iter_vertices() {
        for target in game.outgoing_edges(v) {
            writeln!(out, "  {v} -> {target};").unwrap();
        }
    }

    write_footer(&mut out);
    out
}
