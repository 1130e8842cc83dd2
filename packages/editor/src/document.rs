//! # Document Handle
//!
//! One open blueprint asset and its editing state.
//!
//! Documents can be:
//! - **Memory-backed**: temporary, for testing or scratch graphs
//! - **File-backed**: disk persistence with an unsaved-changes flag
//!
//! ## Lifecycle
//!
//! ```text
//! Open → Edit → Check → Save
//!   ↓      ↓      ↓       ↓
//! File  Graph  report   File
//! ```
//!
//! Opening never fails: an absent or unreadable file becomes the default
//! starter graph. Saving is all-or-nothing: either the full canonical
//! document reaches disk or the previous file is left untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use blueprint_graph::{Graph, Id, Vec2};

use crate::errors::EditorError;
use crate::linking::{LinkOutcome, Linker};
use crate::view::ViewState;

/// Editable blueprint document.
#[derive(Debug)]
pub struct Document {
    /// Path to the source file (display-only for memory-backed documents).
    pub path: PathBuf,

    /// Canvas view parameters for this document.
    pub view: ViewState,

    /// Link-creation gesture state for this document.
    pub linker: Linker,

    /// Backing storage strategy.
    storage: DocumentStorage,
}

/// Storage backend for a document.
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp docs).
    Memory { graph: Graph },

    /// File-backed with unsaved-change tracking.
    File { graph: Graph, dirty: bool },
}

impl DocumentStorage {
    fn graph(&self) -> &Graph {
        match self {
            DocumentStorage::Memory { graph } => graph,
            DocumentStorage::File { graph, .. } => graph,
        }
    }

    fn graph_mut(&mut self) -> &mut Graph {
        match self {
            DocumentStorage::Memory { graph } => graph,
            DocumentStorage::File { graph, .. } => graph,
        }
    }
}

/// Result of the compile check: link endpoints that failed to resolve.
///
/// Reporting only: a broken graph is neither repaired nor blocked from
/// being saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub broken_links: Vec<Id>,
}

impl CheckReport {
    pub fn ok(&self) -> bool {
        self.broken_links.is_empty()
    }
}

impl Document {
    /// Open a document from disk (file-backed). Never fails: a missing or
    /// unreadable file yields the default starter graph.
    pub fn open(path: PathBuf) -> Self {
        let text = read_or_empty(&path);
        let graph = blueprint_codec::load(&text);
        debug!(
            path = %path.display(),
            nodes = graph.nodes.len(),
            links = graph.links.len(),
            "opened document"
        );

        Self {
            path,
            view: ViewState::default(),
            linker: Linker::default(),
            storage: DocumentStorage::File { graph, dirty: false },
        }
    }

    /// Wrap an existing graph in a memory-backed document.
    pub fn from_graph(path: PathBuf, graph: Graph) -> Self {
        Self {
            path,
            view: ViewState::default(),
            linker: Linker::default(),
            storage: DocumentStorage::Memory { graph },
        }
    }

    /// Display name; also the `Name` written into the saved document.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn graph(&self) -> &Graph {
        self.storage.graph()
    }

    /// Mutable graph access. Marks file-backed documents dirty, since the
    /// caller is about to change something.
    pub fn graph_mut(&mut self) -> &mut Graph {
        self.mark_dirty();
        self.storage.graph_mut()
    }

    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            DocumentStorage::Memory { .. } => false,
        }
    }

    /// Drive the linking gesture with a pin press. Marks the document dirty
    /// when a link is actually committed.
    pub fn press_pin(&mut self, node_id: Id, pin_id: Id, at: Vec2) -> LinkOutcome {
        let outcome = self
            .linker
            .pin_pressed(self.storage.graph_mut(), node_id, pin_id, at);
        if matches!(outcome, LinkOutcome::Committed(_)) {
            self.mark_dirty();
        }
        outcome
    }

    /// Abandon an in-progress linking gesture.
    pub fn cancel_link(&mut self) {
        self.linker.cancel();
    }

    /// Translate a node by a canvas-space delta (pointer drag).
    pub fn move_node(&mut self, id: Id, delta: Vec2) -> bool {
        let moved = match self.storage.graph_mut().find_node_mut(id) {
            Some(node) => {
                node.pos += delta;
                true
            }
            None => false,
        };
        if moved {
            self.mark_dirty();
        }
        moved
    }

    /// Remove a node and every link touching it, as one step. Also drops a
    /// pending linking gesture anchored on the node and clears the selection
    /// if it pointed at it.
    pub fn remove_node(&mut self, id: Id) -> bool {
        let removed = self.storage.graph_mut().remove_node(id);
        if removed {
            self.linker.cancel_if_anchored(id);
            if self.view.selected_node == id {
                self.view.selected_node = 0;
            }
            self.mark_dirty();
        }
        removed
    }

    /// Compile check: verify every link endpoint resolves to a live pin.
    pub fn check(&self) -> CheckReport {
        CheckReport {
            broken_links: self.storage.graph().broken_links(),
        }
    }

    /// Serialize and write the document. I/O failure propagates and leaves
    /// both the in-memory graph and the previous on-disk file intact.
    pub fn save(&mut self) -> Result<(), EditorError> {
        let name = self.name();
        match &mut self.storage {
            DocumentStorage::File { graph, dirty } => {
                let text = blueprint_codec::save(graph, &name);
                write_all_or_nothing(&self.path, &text)?;
                *dirty = false;
                debug!(path = %self.path.display(), "saved document");
                Ok(())
            }
            DocumentStorage::Memory { .. } => Err(EditorError::NotFileBacked),
        }
    }

    /// Discard unsaved changes and reload from disk (tolerantly). Resets the
    /// linking gesture and selection along with the graph.
    pub fn revert(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File { graph, dirty } => {
                let text = read_or_empty(&self.path);
                *graph = blueprint_codec::load(&text);
                *dirty = false;
            }
            DocumentStorage::Memory { .. } => return Err(EditorError::NotFileBacked),
        }
        self.linker.cancel();
        self.view.selected_node = 0;
        Ok(())
    }

    fn mark_dirty(&mut self) {
        if let DocumentStorage::File { dirty, .. } = &mut self.storage {
            *dirty = true;
        }
    }
}

fn read_or_empty(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), %err, "could not read document, treating as empty");
            String::new()
        }
    }
}

/// Write via a sibling temp file and rename, so a failed write never leaves
/// a partial document behind.
fn write_all_or_nothing(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, text)?;
    if let Err(err) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}
