//! # Graph Model
//!
//! Entities for one blueprint document and the operations that keep them
//! consistent.
//!
//! ## Invariants
//!
//! - `next_id` is strictly greater than every id present in the graph
//! - Removing a node also removes every link touching it, in the same
//!   operation; a dangling link is never exposed as a transient state
//! - No two links share the same `(from_node, from_pin, to_node, to_pin)`
//!   quadruple (enforced at creation time by callers via [`Graph::has_link`])

use serde::{Deserialize, Serialize};

use crate::viewport::Vec2;

/// Identifier for nodes, pins, and links. All three are drawn from the same
/// per-graph counter.
pub type Id = i64;

/// Which side of a node a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinKind {
    Input,
    Output,
}

/// Closed set of pin value types. Single member today, designed to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Float,
}

/// A typed connection point on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: Id,
    pub name: String,
    pub kind: PinKind,
    pub ty: ValueType,
}

impl Pin {
    pub fn input(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: PinKind::Input,
            ty: ValueType::Float,
        }
    }

    pub fn output(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: PinKind::Output,
            ty: ValueType::Float,
        }
    }
}

/// A titled, positioned entity owning a fixed set of input/output pins.
///
/// Identity is the `id`; the title is display-only and not unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: Id,
    pub title: String,
    /// Position in canvas (logical) units, not screen pixels.
    pub pos: Vec2,
    pub inputs: Vec<Pin>,
    pub outputs: Vec<Pin>,
}

impl Node {
    pub fn new(id: Id, title: impl Into<String>, pos: Vec2) -> Self {
        Self {
            id,
            title: title.into(),
            pos,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

/// A directed edge from an output pin to an input pin.
///
/// Endpoints are stored as raw ids and may fail to resolve after external
/// edits; resolution failures are a validity error, not a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: Id,
    pub from_node: Id,
    pub from_pin: Id,
    pub to_node: Id,
    pub to_pin: Id,
}

/// The complete node/link document for one open blueprint asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub next_id: Id,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            next_id: 1,
        }
    }
}

impl Graph {
    /// Issue a fresh id and advance the allocator. The only way any id is
    /// produced.
    pub fn new_id(&mut self) -> Id {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn find_node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_node_mut(&mut self, id: Id) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Resolve a pin by node id, searching inputs then outputs.
    pub fn find_pin(&self, node_id: Id, pin_id: Id) -> Option<&Pin> {
        let node = self.find_node(node_id)?;
        node.inputs
            .iter()
            .chain(node.outputs.iter())
            .find(|p| p.id == pin_id)
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Remove a node and every link whose endpoint references it.
    ///
    /// The cascade is part of the operation itself: callers never observe a
    /// link pointing at a removed node. Returns `false` if the node did not
    /// exist (nothing is touched).
    pub fn remove_node(&mut self, id: Id) -> bool {
        if self.find_node(id).is_none() {
            return false;
        }
        self.links.retain(|l| l.from_node != id && l.to_node != id);
        self.nodes.retain(|n| n.id != id);
        true
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Whether a link with this exact endpoint quadruple already exists.
    pub fn has_link(&self, from_node: Id, from_pin: Id, to_node: Id, to_pin: Id) -> bool {
        self.links.iter().any(|l| {
            l.from_node == from_node
                && l.from_pin == from_pin
                && l.to_node == to_node
                && l.to_pin == to_pin
        })
    }

    /// Ids of links whose endpoints do not both resolve to a live pin.
    ///
    /// Detection only: broken links are reported, never repaired, and do not
    /// block saving.
    pub fn broken_links(&self) -> Vec<Id> {
        self.links
            .iter()
            .filter(|l| {
                self.find_pin(l.from_node, l.from_pin).is_none()
                    || self.find_pin(l.to_node, l.to_pin).is_none()
            })
            .map(|l| l.id)
            .collect()
    }
}
