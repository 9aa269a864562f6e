// Chunk: docs/chunks/tabbed_editor - Tab container and per-tab file association
//!
//! Tab container for the editor window.
//!
//! A [`Workspace`] holds the ordered tabs shown in the window and tracks which
//! one is active. Each [`Tab`] owns its text, its modified flag and the file it
//! was last loaded from or saved to. Because the file association lives on the
//! tab and tabs carry a stable [`TabId`], reordering or closing tabs can never
//! attribute a path to the wrong document.
//!
//! The container is never empty: removing the last tab immediately creates a
//! fresh "Untitled" one.

use std::path::{Path, PathBuf};

use crate::text_document::TextDocument;

// =============================================================================
// ID Types
// =============================================================================

/// Unique identifier for a tab. Never reused within a workspace.
pub type TabId = u64;

/// Label given to tabs with no backing file.
pub const UNTITLED_LABEL: &str = "Untitled";

/// Returns the label a tab shows for `path`: the final path component.
///
/// No extension normalization is applied. Paths without a final component
/// (e.g. `/`) fall back to the full path.
pub fn label_for_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// TabContent
// =============================================================================

/// The content a tab holds.
///
/// The variant is chosen when the tab is created; callers match on it rather
/// than probing the widget type at each call site.
#[derive(Debug, Clone)]
pub enum TabContent {
    /// An editable plain-text document
    PlainText(TextDocument),
}

// =============================================================================
// Tab
// =============================================================================

/// One open document in the window.
#[derive(Debug, Clone)]
pub struct Tab {
    /// Unique identifier for this tab
    pub id: TabId,
    /// Display label ("Untitled" or the file's base name)
    pub label: String,
    content: TabContent,
    /// Whether the tab has unsaved changes
    pub dirty: bool,
    /// The file this tab was last loaded from or saved to
    pub associated_file: Option<PathBuf>,
}

impl Tab {
    /// Creates a plain-text tab.
    pub fn new_text(id: TabId, label: String, text: TextDocument, path: Option<PathBuf>) -> Self {
        Self {
            id,
            label,
            content: TabContent::PlainText(text),
            dirty: false,
            associated_file: path,
        }
    }

    /// Creates an empty, unsaved plain-text tab.
    pub fn untitled(id: TabId) -> Self {
        Self::new_text(id, UNTITLED_LABEL.to_string(), TextDocument::new(), None)
    }

    /// Creates a plain-text tab for text loaded from `path`.
    ///
    /// The label is the path's base name and the tab starts clean.
    pub fn loaded(id: TabId, path: PathBuf, text: String) -> Self {
        let label = label_for_path(&path);
        Self::new_text(id, label, TextDocument::with_text(text), Some(path))
    }

    /// Returns the full text of the tab.
    pub fn text(&self) -> &str {
        match &self.content {
            TabContent::PlainText(doc) => doc.text(),
        }
    }

    /// Replaces the tab's text, marking it dirty if anything changed.
    ///
    /// Returns `true` if the text changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        let changed = match &mut self.content {
            TabContent::PlainText(doc) => doc.set_text(text),
        };
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Associates the tab with `path` and relabels it with the base name.
    pub fn associate_file(&mut self, path: PathBuf) {
        self.label = label_for_path(&path);
        self.associated_file = Some(path);
    }

    /// Clears the modified flag after the text was persisted.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

// =============================================================================
// Workspace
// =============================================================================

/// The ordered tabs of the editor window.
#[derive(Debug)]
pub struct Workspace {
    tabs: Vec<Tab>,
    active_tab: usize,
    next_tab_id: TabId,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Creates a workspace holding a single empty "Untitled" tab.
    pub fn new() -> Self {
        let mut workspace = Self {
            tabs: Vec::new(),
            active_tab: 0,
            next_tab_id: 0,
        };
        workspace.new_tab();
        workspace
    }

    /// Generates a new unique tab ID.
    pub fn gen_tab_id(&mut self) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        id
    }

    /// Appends an empty "Untitled" tab, activates it, and returns its ID.
    pub fn new_tab(&mut self) -> TabId {
        let id = self.gen_tab_id();
        self.add_tab(Tab::untitled(id));
        id
    }

    /// Appends `tab` and makes it the active tab.
    pub fn add_tab(&mut self, tab: Tab) {
        self.tabs.push(tab);
        self.active_tab = self.tabs.len() - 1;
    }

    /// Removes the tab at `index`, returning it.
    ///
    /// Returns `None` if the index is out of bounds. The active index is
    /// adjusted to stay valid, and an empty "Untitled" tab is created if the
    /// removal left no tabs.
    pub fn remove_tab(&mut self, index: usize) -> Option<Tab> {
        if index >= self.tabs.len() {
            return None;
        }

        let removed = self.tabs.remove(index);

        if self.tabs.is_empty() {
            self.active_tab = 0;
            self.new_tab();
        } else if self.active_tab >= self.tabs.len() {
            self.active_tab = self.tabs.len() - 1;
        } else if self.active_tab > index {
            self.active_tab -= 1;
        }

        Some(removed)
    }

    /// Moves the tab at `from` to position `to`, keeping it active if it was.
    ///
    /// Returns `false` (and changes nothing) if either index is out of bounds.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() || to >= self.tabs.len() {
            return false;
        }
        if from == to {
            return true;
        }

        let active_id = self.tabs[self.active_tab].id;
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        if let Some(index) = self.index_of(active_id) {
            self.active_tab = index;
        }
        true
    }

    /// Switches to the tab at `index`. Out-of-range indices are ignored.
    pub fn switch_tab(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active_tab = index;
        }
    }

    /// Index of the active tab.
    pub fn active_index(&self) -> usize {
        self.active_tab
    }

    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active_tab]
    }

    pub fn active_tab_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active_tab]
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn tab_by_id(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn tab_by_id_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    /// Current display position of the tab with `id`.
    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    /// All tabs in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Returns true if any tab has unsaved changes.
    pub fn has_unsaved_changes(&self) -> bool {
        self.tabs.iter().any(|tab| tab.dirty)
    }
}

// =============================================================================
// Tests
// =============================================================================
