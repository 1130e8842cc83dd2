//! Per-document canvas view state.

use blueprint_graph::{Id, Vec2};

/// View parameters for one open document's canvas.
///
/// `pan` accumulates pointer-drag deltas and feeds the projection in
/// `blueprint_graph::viewport`. `zoom` is reserved for a future rendering
/// core and is not consumed by any coordinate math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub pan: Vec2,
    pub zoom: f32,
    /// Id of the selected node, or 0 for no selection.
    pub selected_node: Id,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            selected_node: 0,
        }
    }
}
