//! Wire shape of `.blueprint` documents.
//!
//! One set of structs serves both directions. Saving emits the canonical
//! shape field-for-field; loading tolerates missing fields through
//! field-level defaults, so a document written by an older or sloppier
//! producer still deserializes.

use serde::{Deserialize, Serialize};

use blueprint_graph::{Graph, Link, Node, Pin, Vec2};

#[derive(Serialize)]
pub(crate) struct WireDocument {
    #[serde(rename = "Type")]
    pub ty: &'static str,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Graph")]
    pub graph: WireGraph,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct WireGraph {
    #[serde(rename = "nextId", default)]
    pub next_id: i64,
    #[serde(default)]
    pub nodes: Vec<WireNode>,
    #[serde(default)]
    pub links: Vec<WireLink>,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct WireNode {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub pos: WirePos,
    #[serde(default)]
    pub inputs: Vec<WirePin>,
    #[serde(default)]
    pub outputs: Vec<WirePin>,
}

#[derive(Serialize, Deserialize, Default)]
pub(crate) struct WirePos {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

/// Pins persist only id and name; kind and value type are implied by which
/// list the pin sits in (the format currently supports a single pin type).
#[derive(Serialize, Deserialize)]
pub(crate) struct WirePin {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct WireLink {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "fromNode", default)]
    pub from_node: i64,
    #[serde(rename = "fromPin", default)]
    pub from_pin: i64,
    #[serde(rename = "toNode", default)]
    pub to_node: i64,
    #[serde(rename = "toPin", default)]
    pub to_pin: i64,
}

fn default_title() -> String {
    "Node".to_string()
}

impl WireGraph {
    pub fn from_graph(g: &Graph) -> Self {
        Self {
            next_id: g.next_id,
            nodes: g
                .nodes
                .iter()
                .map(|n| WireNode {
                    id: n.id,
                    title: n.title.clone(),
                    pos: WirePos { x: n.pos.x, y: n.pos.y },
                    inputs: n.inputs.iter().map(WirePin::from_pin).collect(),
                    outputs: n.outputs.iter().map(WirePin::from_pin).collect(),
                })
                .collect(),
            links: g
                .links
                .iter()
                .map(|l| WireLink {
                    id: l.id,
                    from_node: l.from_node,
                    from_pin: l.from_pin,
                    to_node: l.to_node,
                    to_pin: l.to_pin,
                })
                .collect(),
        }
    }

    pub fn into_graph(self) -> Graph {
        let mut g = Graph {
            next_id: self.next_id,
            ..Graph::default()
        };

        for wn in self.nodes {
            let mut node = Node::new(wn.id, wn.title, Vec2::new(wn.pos.x, wn.pos.y));
            for wp in wn.inputs {
                node.inputs
                    .push(Pin::input(wp.id, wp.name.unwrap_or_else(|| "In".to_string())));
            }
            for wp in wn.outputs {
                node.outputs
                    .push(Pin::output(wp.id, wp.name.unwrap_or_else(|| "Out".to_string())));
            }
            g.add_node(node);
        }

        for wl in self.links {
            g.add_link(Link {
                id: wl.id,
                from_node: wl.from_node,
                from_pin: wl.from_pin,
                to_node: wl.to_node,
                to_pin: wl.to_pin,
            });
        }

        // Fix the allocator against both a non-positive declared value and a
        // declared value already used by an id in the document.
        let max_id = g
            .nodes
            .iter()
            .flat_map(|n| {
                std::iter::once(n.id)
                    .chain(n.inputs.iter().map(|p| p.id))
                    .chain(n.outputs.iter().map(|p| p.id))
            })
            .chain(g.links.iter().map(|l| l.id))
            .max()
            .unwrap_or(0);
        g.next_id = g.next_id.max(max_id + 1).max(1);

        g
    }
}

impl WirePin {
    fn from_pin(p: &Pin) -> Self {
        Self {
            id: p.id,
            name: Some(p.name.clone()),
        }
    }
}
