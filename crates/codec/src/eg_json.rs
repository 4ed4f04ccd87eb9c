use egame_core::Game;
use egame_core::Player;
use egame_core::VertexIndex;
use egame_util::EgameError;
use egame_util::EgameResult;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// The top-level shape of an "eg" document: `{"objective": "energy", "nodes":
/// [...], "edges": [...]}`.
#[derive(Deserialize, Serialize)]
struct EgDocument {
    objective: String,
    nodes: Vec<(i64, Map<String, Value>)>,
    edges: Vec<(i64, i64, Map<String, Value>)>,
}

/// A game parsed from "eg" JSON, retaining enough of the original document
/// to round-trip unknown attributes and the original node ids.
pub struct ParsedGame {
    pub game: Game,
    node_ids: Vec<i64>,
    node_extra: Vec<Map<String, Value>>,
    edge_extra: Vec<Map<String, Value>>,
}

impl ParsedGame {
    /// The original "eg" node id for a vertex, as it appeared in the input
    /// (or the dense index itself, for a game that was not parsed from JSON).
    pub fn node_id(&self, v: VertexIndex) -> i64 {
        self.node_ids[*v]
    }
}

/// Parses an "eg" JSON document into a [`ParsedGame`].
pub fn parse_eg(text: &str) -> EgameResult<ParsedGame> {
    let document: EgDocument = serde_json::from_str(text).map_err(|e| EgameError::parse(e.to_string()))?;

    if document.objective != "energy" {
        return Err(EgameError::parse(format!(
            "expected objective \"energy\", found \"{}\"",
            document.objective
        )));
    }

    let mut node_ids = Vec::with_capacity(document.nodes.len());
    let mut owner = Vec::with_capacity(document.nodes.len());
    let mut label = Vec::with_capacity(document.nodes.len());
    let mut node_extra = Vec::with_capacity(document.nodes.len());
    let mut index_of_id = std::collections::HashMap::new();

    for (id, mut attrs) in document.nodes {
        if index_of_id.insert(id, node_ids.len()).is_some() {
            return Err(EgameError::parse(format!("duplicate node id {id}")));
        }

        let owner_value = attrs
            .remove("owner")
            .ok_or_else(|| EgameError::parse(format!("node {id} is missing an \"owner\" attribute")))?;
        let owner_index = owner_value
            .as_u64()
            .filter(|&o| o == 0 || o == 1)
            .ok_or_else(|| EgameError::parse(format!("node {id} has an invalid owner {owner_value}")))?;

        let label_value = attrs.remove("label").and_then(|v| v.as_str().map(str::to_owned));

        node_ids.push(id);
        owner.push(Player::from_index(owner_index as u8));
        label.push(label_value);
        node_extra.push(attrs);
    }

    let mut edges = Vec::with_capacity(document.edges.len());
    let mut edge_extra = Vec::with_capacity(document.edges.len());

    for (src, trg, mut attrs) in document.edges {
        let src_index = *index_of_id
            .get(&src)
            .ok_or_else(|| EgameError::parse(format!("edge references unknown node {src}")))?;
        let trg_index = *index_of_id
            .get(&trg)
            .ok_or_else(|| EgameError::parse(format!("edge references unknown node {trg}")))?;

        let effect_value = attrs
            .remove("effect")
            .ok_or_else(|| EgameError::parse(format!("edge ({src}, {trg}) is missing an \"effect\" attribute")))?;
        let effect = effect_value
            .as_i64()
            .ok_or_else(|| EgameError::parse(format!("edge ({src}, {trg}) has a non-integer effect {effect_value}")))?;

        edges.push((VertexIndex::new(src_index), VertexIndex::new(trg_index), effect));
        edge_extra.push(attrs);
    }

    let game = Game::from_edges(owner, label, || edges.iter().cloned());

    Ok(ParsedGame {
        game,
        node_ids,
        node_extra,
        edge_extra,
    })
}

/// Emits a [`ParsedGame`] back to "eg" JSON, restoring the original node ids
/// and any unknown attributes that were preserved during parsing.
pub fn emit_eg(parsed: &ParsedGame) -> String {
    let mut nodes = Vec::with_capacity(parsed.game.num_of_vertices());
    for v in parsed.game.iter_vertices() {
        let mut attrs = parsed.node_extra[*v].clone();
        attrs.insert("owner".to_string(), Value::from(parsed.game.owner(v).to_index()));
        if let Some(label) = parsed.game.label(v) {
            attrs.insert("label".to_string(), Value::from(label));
        }
        nodes.push((parsed.node_id(v), attrs));
    }

    let mut edges = Vec::with_capacity(parsed.game.num_of_edges());
    let mut edge_cursor = 0;
    for v in parsed.game.iter_vertices() {
        for (target, effect) in parsed.game.outgoing_edges(v) {
            let mut attrs = parsed.edge_extra[edge_cursor].clone();
            attrs.insert("effect".to_string(), Value::from(effect));
            edges.push((parsed.node_id(v), parsed.node_id(target), attrs));
            edge_cursor += 1;
        }
    }

    let document = EgDocument {
        objective: "energy".to_string(),
        nodes,
        edges,
    };

    serde_json::to_string_pretty(&document).expect("an EgDocument always serialises")
}

/// Builds a fresh [`ParsedGame`] directly from a [`Game`], using dense
/// vertex indices as node ids and no extra attributes. Used when emitting a
/// game that was generated or reduced rather than parsed from "eg" JSON.
pub fn to_parsed_game(game: Game) -> ParsedGame {
    let node_ids = (0..game.num_of_vertices() as i64).collect();
    let node_extra = vec![Map::new(); game.num_of_vertices()];
    let edge_extra = vec![Map::new(); game.num_of_edges()];

    ParsedGame {
        game,
        node_ids,
        node_extra,
        edge_extra,
    }
}
