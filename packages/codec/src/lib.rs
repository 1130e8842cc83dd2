//! # Blueprint Codec
//!
//! Persistence for blueprint documents.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ load: JSON text → Graph (tolerant)          │
//! │  - empty/garbled input → default scaffold   │
//! │  - missing fields → defaults                │
//! │  - allocator re-derived when stale          │
//! └─────────────────────────────────────────────┘
//!                     ↕
//! ┌─────────────────────────────────────────────┐
//! │ save: Graph → canonical JSON document       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Recovery policy
//!
//! [`load`] has no failure mode visible to its caller: any input (blank,
//! truncated, hand-mangled) yields a usable [`Graph`]. The editor must
//! never fail to open a document, so a parse error is recovered locally by
//! substituting [`default_graph`] rather than propagated.

mod wire;

use tracing::debug;

use blueprint_graph::{default_graph, Graph};

use crate::wire::{WireDocument, WireGraph};

/// Deserialize a document, falling back to the default scaffold on any
/// parse failure. Never fails.
///
/// Accepts both the canonical `{"Type", "Name", "Graph": {...}}` wrapper and
/// a bare graph body at the top level (older producers).
pub fn load(text: &str) -> Graph {
    if text.trim().is_empty() {
        debug!("empty document, substituting default graph");
        return default_graph();
    }
    match parse_graph(text) {
        Ok(graph) => graph,
        Err(err) => {
            debug!(%err, "unreadable document, substituting default graph");
            default_graph()
        }
    }
}

fn parse_graph(text: &str) -> Result<Graph, serde_json::Error> {
    let root: serde_json::Value = serde_json::from_str(text)?;
    let body = match root.get("Graph") {
        Some(graph) => graph.clone(),
        None => root,
    };
    let wire: WireGraph = serde_json::from_value(body)?;
    Ok(wire.into_graph())
}

/// Serialize a graph into the canonical document shape, pretty-printed.
///
/// `name` is the document's display name (by convention the file stem).
/// No validation happens here; keeping the graph consistent is the job of
/// the model operations that mutated it.
pub fn save(graph: &Graph, name: &str) -> String {
    let doc = WireDocument {
        ty: "Blueprint",
        name: name.to_string(),
        graph: WireGraph::from_graph(graph),
    };
    serde_json::to_string_pretty(&doc).expect("document serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_graph::{Link, Node, Pin, Vec2};

    fn is_scaffold(g: &Graph) -> bool {
        g.nodes.len() == 3 && g.links.is_empty() && g.next_id == 9
    }

    #[test]
    fn test_empty_input_yields_default_graph() {
        assert!(is_scaffold(&load("")));
        assert!(is_scaffold(&load("   \n\t")));
    }

    #[test]
    fn test_garbage_input_yields_default_graph() {
        assert!(is_scaffold(&load("not json")));
        assert!(is_scaffold(&load("{\"Graph\": [1, 2, 3]}")));
    }

    #[test]
    fn test_type_mismatch_yields_default_graph() {
        // Present-but-wrong-type fields poison the whole document.
        let text = r#"{"Graph":{"nextId":1,"nodes":[{"id":"oops"}]}}"#;
        assert!(is_scaffold(&load(text)));
    }

    #[test]
    fn test_explicit_document() {
        let text = r#"{"Type":"Blueprint","Name":"T","Graph":{"nextId":5,
            "nodes":[{"id":1,"title":"A","pos":{"x":10,"y":20},"inputs":[],"outputs":[{"id":2,"name":"Out"}]},
                     {"id":3,"title":"B","pos":{"x":100,"y":20},"inputs":[{"id":4,"name":"In"}],"outputs":[]}],
            "links":[{"id":5,"fromNode":1,"fromPin":2,"toNode":3,"toPin":4}]}}"#;

        let g = load(text);

        assert_eq!(g.nodes.len(), 2);
        assert_eq!(g.links.len(), 1);

        let l = g.links[0];
        assert_eq!(
            (l.from_node, l.from_pin, l.to_node, l.to_pin),
            (1, 2, 3, 4)
        );

        // The declared allocator value (5) is stale: id 5 is already taken
        // by the link itself.
        assert!(g.next_id >= 6);
    }

    #[test]
    fn test_bare_graph_body_accepted() {
        let text = r#"{"nextId":3,"nodes":[{"id":1,"title":"A","pos":{"x":0,"y":0},
            "inputs":[],"outputs":[{"id":2,"name":"Out"}]}],"links":[]}"#;

        let g = load(text);

        assert_eq!(g.nodes.len(), 1);
        assert_eq!(g.next_id, 3);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let text = r#"{"Graph":{"nodes":[{"inputs":[{}],"outputs":[{"id":7}]}]}}"#;

        let g = load(text);

        let n = &g.nodes[0];
        assert_eq!(n.id, 0);
        assert_eq!(n.title, "Node");
        assert_eq!(n.pos, Vec2::ZERO);
        assert_eq!(n.inputs[0].name, "In");
        assert_eq!(n.outputs[0].name, "Out");
        // No declared allocator: recomputed from the highest id present.
        assert_eq!(g.next_id, 8);
    }

    #[test]
    fn test_next_id_recovered_when_nonpositive() {
        let text = r#"{"Graph":{"nextId":0,"nodes":[{"id":4,"title":"A","pos":{"x":0,"y":0},
            "inputs":[],"outputs":[]}],"links":[]}}"#;
        assert_eq!(load(text).next_id, 5);

        let empty = r#"{"Graph":{"nextId":-2,"nodes":[],"links":[]}}"#;
        assert_eq!(load(empty).next_id, 1);
    }

    #[test]
    fn test_save_canonical_shape() {
        let mut g = Graph::default();
        let mut n = Node::new(g.new_id(), "Only", Vec2::new(1.5, -2.0));
        n.outputs.push(Pin::output(g.new_id(), "Value"));
        g.add_node(n);

        let text = save(&g, "my_asset");
        let root: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(root["Type"], "Blueprint");
        assert_eq!(root["Name"], "my_asset");
        assert_eq!(root["Graph"]["nextId"], 3);

        let node = &root["Graph"]["nodes"][0];
        assert_eq!(node["title"], "Only");
        assert_eq!(node["pos"]["x"], 1.5);

        // Pins are reduced to {id, name}; kind and value type are implied.
        let pin = &node["outputs"][0];
        assert_eq!(pin.as_object().unwrap().len(), 2);
        assert_eq!(pin["id"], 2);
        assert_eq!(pin["name"], "Value");
    }

    #[test]
    fn test_round_trip_reproduces_graph() {
        let mut g = Graph::default();

        let mut a = Node::new(g.new_id(), "Emit", Vec2::new(42.0, 7.5));
        let out = g.new_id();
        a.outputs.push(Pin::output(out, "Signal"));
        let a_id = a.id;
        g.add_node(a);

        let mut b = Node::new(g.new_id(), "Collect", Vec2::new(300.0, 12.0));
        let first = g.new_id();
        let second = g.new_id();
        b.inputs.push(Pin::input(first, "First"));
        b.inputs.push(Pin::input(second, "Second"));
        let b_id = b.id;
        g.add_node(b);

        let id = g.new_id();
        g.add_link(Link {
            id,
            from_node: a_id,
            from_pin: out,
            to_node: b_id,
            to_pin: second,
        });

        let reloaded = load(&save(&g, "round"));

        assert_eq!(reloaded.nodes, g.nodes);
        assert_eq!(reloaded.links, g.links);
        assert!(reloaded.next_id >= g.next_id);
    }
}
