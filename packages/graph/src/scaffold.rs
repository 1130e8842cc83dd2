//! Starter graph for new or unreadable documents.
//!
//! A blank document should be immediately legible on the canvas, so the
//! scaffold places two constant sources feeding a float adder at fixed
//! positions. Plain data construction through the ordinary allocator; the
//! scaffold has no special-cased ids.

use crate::model::{Graph, Node, Pin};
use crate::viewport::Vec2;

/// Populate `g` with the starter graph if it has no nodes. A graph that
/// already holds nodes is left untouched.
pub fn ensure_default(g: &mut Graph) {
    if !g.nodes.is_empty() {
        return;
    }

    let mut lhs = Node::new(g.new_id(), "Const 2", Vec2::new(80.0, 80.0));
    lhs.outputs.push(Pin::output(g.new_id(), "Value"));

    let mut rhs = Node::new(g.new_id(), "Const 3", Vec2::new(80.0, 200.0));
    rhs.outputs.push(Pin::output(g.new_id(), "Value"));

    let mut add = Node::new(g.new_id(), "Add (Float)", Vec2::new(340.0, 140.0));
    add.inputs.push(Pin::input(g.new_id(), "A"));
    add.inputs.push(Pin::input(g.new_id(), "B"));
    add.outputs.push(Pin::output(g.new_id(), "Result"));

    g.add_node(lhs);
    g.add_node(rhs);
    g.add_node(add);
}

/// A fresh graph holding only the starter nodes.
pub fn default_graph() -> Graph {
    let mut g = Graph::default();
    ensure_default(&mut g);
    g
}
