//! # Link-Creation Protocol
//!
//! The interactive gesture for drawing a link between two pins, spread over
//! two separate pin activations.
//!
//! ## Protocol
//!
//! A single event drives the machine: a pin was pressed. From `Idle`, the
//! pressed pin becomes the anchor and the machine goes `Pending`. From
//! `Pending`:
//!
//! - pressing a pin on the *opposite* side commits a link, normalized so the
//!   output pin is always the `from` end, and returns to `Idle`
//! - pressing a pin on the *same* side restarts the gesture from that pin
//! - an explicit cancel (secondary pointer action, Escape) returns to `Idle`
//!
//! A candidate whose endpoint quadruple already exists in the graph is
//! discarded silently; that is the defined behavior, not an error. There is
//! no timeout: a gesture stays `Pending` across frames until one of the
//! transitions fires.

use tracing::debug;

use blueprint_graph::{Graph, Id, Link, PinKind, Vec2};

/// Linking-gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkState {
    /// No link in progress.
    Idle,
    /// Anchored at one pin, waiting for the second activation.
    Pending {
        node: Id,
        pin: Id,
        from_output: bool,
        /// Screen position of the anchor, for drawing the in-progress
        /// connector.
        at: Vec2,
    },
}

/// What a pin press did to the machine, so the host can update its dirty
/// flag and redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkOutcome {
    /// The pressed pin did not resolve; the event was dropped.
    Ignored,
    /// Gesture started; the pressed pin is now the anchor.
    Started,
    /// Same-side press; the anchor moved to the pressed pin.
    Restarted,
    /// Opposite-side press; a link was created with this id.
    Committed(Id),
    /// Opposite-side press, but the link already exists. Nothing changed.
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linker {
    state: LinkState,
}

impl Default for Linker {
    fn default() -> Self {
        Self {
            state: LinkState::Idle,
        }
    }
}

impl Linker {
    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LinkState::Pending { .. })
    }

    /// Drive the machine with a pin press at screen position `at`.
    ///
    /// The pressed pin's side is resolved through the graph; a pin that does
    /// not resolve is ignored rather than treated as fatal.
    pub fn pin_pressed(&mut self, graph: &mut Graph, node_id: Id, pin_id: Id, at: Vec2) -> LinkOutcome {
        let pressed_is_output = match graph.find_pin(node_id, pin_id) {
            Some(pin) => pin.kind == PinKind::Output,
            None => return LinkOutcome::Ignored,
        };

        match self.state {
            LinkState::Idle => {
                self.state = LinkState::Pending {
                    node: node_id,
                    pin: pin_id,
                    from_output: pressed_is_output,
                    at,
                };
                LinkOutcome::Started
            }
            LinkState::Pending {
                node,
                pin,
                from_output,
                ..
            } => {
                if from_output == pressed_is_output {
                    // Same side: restart the gesture from the new pin.
                    self.state = LinkState::Pending {
                        node: node_id,
                        pin: pin_id,
                        from_output: pressed_is_output,
                        at,
                    };
                    return LinkOutcome::Restarted;
                }

                // Opposite side: commit, output end first.
                let (from_node, from_pin, to_node, to_pin) = if from_output {
                    (node, pin, node_id, pin_id)
                } else {
                    (node_id, pin_id, node, pin)
                };
                self.state = LinkState::Idle;

                if graph.has_link(from_node, from_pin, to_node, to_pin) {
                    return LinkOutcome::Duplicate;
                }

                let id = graph.new_id();
                graph.add_link(Link {
                    id,
                    from_node,
                    from_pin,
                    to_node,
                    to_pin,
                });
                debug!(link = id, from_node, from_pin, to_node, to_pin, "link committed");
                LinkOutcome::Committed(id)
            }
        }
    }

    /// Abandon a pending gesture. No-op when idle.
    pub fn cancel(&mut self) {
        self.state = LinkState::Idle;
    }

    /// Cancel the gesture if its anchor sits on `node_id`. Returns whether a
    /// pending gesture was dropped. Called when a node is removed so the
    /// anchor can never dangle.
    pub fn cancel_if_anchored(&mut self, node_id: Id) -> bool {
        if let LinkState::Pending { node, .. } = self.state {
            if node == node_id {
                self.state = LinkState::Idle;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_graph::{Node, Pin, Vec2};

    /// Source node with two output pins, sink node with two input pins.
    fn rig() -> (Graph, Id, [Id; 2], Id, [Id; 2]) {
        let mut g = Graph::default();

        let mut src = Node::new(g.new_id(), "Source", Vec2::ZERO);
        let p1 = g.new_id();
        let p2 = g.new_id();
        src.outputs.push(Pin::output(p1, "P1"));
        src.outputs.push(Pin::output(p2, "P2"));
        let src_id = src.id;
        g.add_node(src);

        let mut dst = Node::new(g.new_id(), "Sink", Vec2::new(200.0, 0.0));
        let q1 = g.new_id();
        let q2 = g.new_id();
        dst.inputs.push(Pin::input(q1, "Q1"));
        dst.inputs.push(Pin::input(q2, "Q2"));
        let dst_id = dst.id;
        g.add_node(dst);

        (g, src_id, [p1, p2], dst_id, [q1, q2])
    }

    #[test]
    fn test_commit_from_output_to_input() {
        let (mut g, src, [p1, _], dst, [q1, _]) = rig();
        let mut linker = Linker::default();

        assert_eq!(linker.pin_pressed(&mut g, src, p1, Vec2::ZERO), LinkOutcome::Started);
        assert!(linker.is_pending());

        let outcome = linker.pin_pressed(&mut g, dst, q1, Vec2::ZERO);
        assert!(matches!(outcome, LinkOutcome::Committed(_)));
        assert!(!linker.is_pending());

        let l = g.links[0];
        assert_eq!((l.from_node, l.from_pin, l.to_node, l.to_pin), (src, p1, dst, q1));
    }

    #[test]
    fn test_commit_from_input_to_output_normalizes_direction() {
        let (mut g, src, [p1, _], dst, [q1, _]) = rig();
        let mut linker = Linker::default();

        // Anchor on the input side; the committed link must still run
        // output → input.
        linker.pin_pressed(&mut g, dst, q1, Vec2::ZERO);
        let outcome = linker.pin_pressed(&mut g, src, p1, Vec2::ZERO);
        assert!(matches!(outcome, LinkOutcome::Committed(_)));

        let l = g.links[0];
        assert_eq!((l.from_node, l.from_pin, l.to_node, l.to_pin), (src, p1, dst, q1));
    }

    #[test]
    fn test_same_side_press_restarts_gesture() {
        let (mut g, src, [p1, p2], dst, [q1, _]) = rig();
        let mut linker = Linker::default();

        linker.pin_pressed(&mut g, src, p1, Vec2::ZERO);
        assert_eq!(
            linker.pin_pressed(&mut g, src, p2, Vec2::new(5.0, 5.0)),
            LinkOutcome::Restarted
        );
        assert!(matches!(
            linker.pin_pressed(&mut g, dst, q1, Vec2::ZERO),
            LinkOutcome::Committed(_)
        ));

        // Exactly one link, from the restarted anchor, not the first pin.
        assert_eq!(g.links.len(), 1);
        assert_eq!(g.links[0].from_pin, p2);
    }

    #[test]
    fn test_duplicate_commit_is_suppressed() {
        let (mut g, src, [p1, _], dst, [q1, _]) = rig();
        let mut linker = Linker::default();

        linker.pin_pressed(&mut g, src, p1, Vec2::ZERO);
        linker.pin_pressed(&mut g, dst, q1, Vec2::ZERO);
        let allocator_after_first = g.next_id;

        linker.pin_pressed(&mut g, src, p1, Vec2::ZERO);
        assert_eq!(linker.pin_pressed(&mut g, dst, q1, Vec2::ZERO), LinkOutcome::Duplicate);

        assert_eq!(g.links.len(), 1);
        // A suppressed duplicate consumes no id.
        assert_eq!(g.next_id, allocator_after_first);
        assert!(!linker.is_pending());
    }

    #[test]
    fn test_cancel_drops_pending_gesture() {
        let (mut g, src, [p1, _], dst, [q1, _]) = rig();
        let mut linker = Linker::default();

        linker.pin_pressed(&mut g, src, p1, Vec2::ZERO);
        linker.cancel();
        assert!(!linker.is_pending());

        // The next press starts a new gesture instead of committing.
        assert_eq!(linker.pin_pressed(&mut g, dst, q1, Vec2::ZERO), LinkOutcome::Started);
        assert!(g.links.is_empty());
    }

    #[test]
    fn test_unresolvable_pin_is_ignored() {
        let (mut g, src, [p1, _], _, _) = rig();
        let mut linker = Linker::default();

        assert_eq!(linker.pin_pressed(&mut g, src, 999, Vec2::ZERO), LinkOutcome::Ignored);
        assert!(!linker.is_pending());

        linker.pin_pressed(&mut g, src, p1, Vec2::ZERO);
        assert_eq!(linker.pin_pressed(&mut g, 999, 999, Vec2::ZERO), LinkOutcome::Ignored);
        assert!(linker.is_pending());
    }

    #[test]
    fn test_cancel_if_anchored_only_matches_anchor_node() {
        let (mut g, src, [p1, _], dst, _) = rig();
        let mut linker = Linker::default();

        linker.pin_pressed(&mut g, src, p1, Vec2::ZERO);
        assert!(!linker.cancel_if_anchored(dst));
        assert!(linker.is_pending());
        assert!(linker.cancel_if_anchored(src));
        assert!(!linker.is_pending());
    }
}
