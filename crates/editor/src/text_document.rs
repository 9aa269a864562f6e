// Chunk: docs/chunks/tabbed_editor - Plain-text document backing a tab
//!
//! The text held by a plain-text tab.
//!
//! Editing itself happens in the platform text widget; this type is the
//! authoritative copy the core saves from and compares against. Content is
//! always valid UTF-8 and is stored exactly as given: line endings are never
//! normalized.

/// An owned plain-text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the full text.
    ///
    /// Returns `true` if the text actually changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text.clear();
        self.text.push_str(text);
        true
    }
}
