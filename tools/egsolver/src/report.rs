use std::fmt::Write as _;

use egame_codec::ParsedGame;
use egame_core::SolveResult;
use egame_core::Strategy;
use egame_util::Timing;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

/// Renders a human-readable solve report: vertex/edge counts, the winning
/// region, the optimal strategy, and elapsed time.
pub fn render_report(parsed: &ParsedGame, result: &SolveResult, strategy: &Strategy, timing: &Timing) -> String {
    let mut out = String::new();

    writeln!(out, "vertices: {}", parsed.game.num_of_vertices()).unwrap();
    writeln!(out, "edges: {}", parsed.game.num_of_edges()).unwrap();

    writeln!(out, "winning region:").unwrap();
    for v in parsed.game.iter_vertices() {
        writeln!(out, "  {} -> {}", parsed.node_id(v), result.win(v)).unwrap();
    }

    writeln!(out, "optimal strategy:").unwrap();
    for v in parsed.game.iter_vertices() {
        if let Some(&w) = strategy.get(&v) {
            writeln!(out, "  {} -> {}", parsed.node_id(v), parsed.node_id(w)).unwrap();
        }
    }

    writeln!(out, "elapsed: {:.3}s", timing.total_seconds()).unwrap();
    out
}

/// Renders `{"win": {...}, "opt": {...}, "time": seconds}`, keyed by the
/// original "eg" node ids.
pub fn render_json(parsed: &ParsedGame, result: &SolveResult, strategy: &Strategy, timing: &Timing) -> String {
    let win: Map<String, Value> = parsed
        .game
        .iter_vertices()
        .map(|v| (parsed.node_id(v).to_string(), Value::from(result.win(v))))
        .collect();

    let opt: Map<String, Value> = strategy
        .iter()
        .map(|(&v, &w)| (parsed.node_id(v).to_string(), Value::from(parsed.node_id(w))))
        .collect();

    let document = json!({
        "win": win,
        "opt": opt,
        "time": timing.total_seconds(),
    });

    serde_json::to_string_pretty(&document).expect("result document always serialises")
}
