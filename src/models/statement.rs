use serde::{Deserialize, Serialize};

use crate::prompts::segment_label;

/// An immutable narrator statement
///
/// The raw text is supplied once per session and never mutated by the
/// pipeline; segments are copies of its content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    /// Unique identifier for this statement (UUID)
    pub statement_id: String,
    /// The full statement text as given
    pub text: String,
    /// Number of characters in the raw text
    pub char_count: usize,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            statement_id: uuid::Uuid::new_v4().to_string(),
            char_count: text.chars().count(),
            text,
        }
    }

    /// Whether the statement trims to nothing
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One segment of the statement, open for narrator editing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDraft {
    /// 1-based position of this segment within the statement
    pub index: usize,
    /// Display label, e.g. 段落1
    pub label: String,
    /// Text as produced by the segmenter
    pub original: String,
    /// Narrator-edited replacement, if any
    pub edited: Option<String>,
}

impl SegmentDraft {
    pub fn new(index: usize, original: impl Into<String>) -> Self {
        Self {
            index,
            label: segment_label(index),
            original: original.into(),
            edited: None,
        }
    }

    /// Text shown for this segment: the narrator's edit when present
    pub fn shown_text(&self) -> &str {
        self.edited.as_deref().unwrap_or(&self.original)
    }

    pub fn was_edited(&self) -> bool {
        self.edited.is_some()
    }
}
