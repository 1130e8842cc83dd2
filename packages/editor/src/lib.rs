//! # Blueprint Editor
//!
//! Document editing engine for blueprint node graphs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ codec: document text ↔ Graph                │
//! └─────────────────────────────────────────────┘
//!                     ↕
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + interaction    │
//! │  - Open/save/revert documents               │
//! │  - Link-creation gesture state machine      │
//! │  - Dirty tracking, compile check            │
//! │  - Per-document canvas view state           │
//! └─────────────────────────────────────────────┘
//!                     ↕
//! ┌─────────────────────────────────────────────┐
//! │ graph: nodes, pins, links, allocator        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Opening never fails**: unreadable documents become the default
//!    starter graph, not an error dialog
//! 2. **Mutations go through the model**: the cascade on node removal and
//!    the duplicate-link check live in one place
//! 3. **Broken is reported, not repaired**: the compile check surfaces
//!    dangling link endpoints and nothing else touches them
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blueprint_editor::{Document, LinkOutcome};
//!
//! let mut doc = Document::open("adder.blueprint".into());
//!
//! // Two pin presses draw a link.
//! doc.press_pin(source_node, out_pin, cursor);
//! doc.press_pin(sink_node, in_pin, cursor);
//!
//! if doc.check().ok() {
//!     doc.save()?;
//! }
//! ```

mod document;
mod errors;
mod linking;
mod view;

pub use document::{CheckReport, Document, DocumentStorage};
pub use errors::EditorError;
pub use linking::{LinkOutcome, LinkState, Linker};
pub use view::ViewState;

// Re-export the model types the editor API surfaces.
pub use blueprint_graph::{Graph, Id, Link, Node, Pin, PinKind, ValueType, Vec2};
