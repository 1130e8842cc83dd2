//! # Blueprint Graph
//!
//! Core data model for blueprint documents: a directed graph of titled,
//! positioned nodes connected by typed links.
//!
//! ## Core Principles
//!
//! 1. **Graph is source of truth**: every entity (node, pin, link) lives in
//!    exactly one [`Graph`]; there is no cross-graph sharing
//! 2. **One allocator**: every id comes from [`Graph::new_id`], a shared
//!    monotonic counter, so ids are never reused within a document
//! 3. **Absence is not an error**: lookups return `Option`; partially
//!    invalid data (e.g. from a hand-edited document) must never crash
//!    the editor

pub mod model;
pub mod scaffold;
pub mod viewport;

pub use model::{Graph, Id, Link, Node, Pin, PinKind, ValueType};
pub use scaffold::{default_graph, ensure_default};
pub use viewport::{canvas_from_screen, screen_from_canvas, Vec2};
