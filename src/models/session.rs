use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{SegmentDraft, Statement};
use crate::prompts::NO_ANSWER;
use crate::segmenter::SegmentMode;

/// Contract violations surfaced by the stage layer
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("max_segments must be at least 1, got {0}")]
    InvalidMaxSegments(usize),
    #[error("statement is blank")]
    BlankStatement,
    #[error("answer sheet refers to unknown segment {0}")]
    UnknownSegment(usize),
}

/// Narrator input collected outside the pipeline, keyed by segment index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSheet {
    /// Per-segment edits, probe answers, and narrator-defined questions
    #[serde(default)]
    pub segments: Vec<SegmentAnswer>,
    /// Answer to the pre-event probe
    #[serde(default)]
    pub before_event: Option<String>,
    /// Answer to the post-event probe
    #[serde(default)]
    pub after_event: Option<String>,
    /// Answer to the credibility probe
    #[serde(default)]
    pub credibility: Option<String>,
}

impl AnswerSheet {
    /// Entry for the segment with the given 1-based index, if any
    pub fn segment_answer(&self, index: usize) -> Option<&SegmentAnswer> {
        self.segments.iter().find(|entry| entry.index == index)
    }
}

/// Narrator input attached to a single segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentAnswer {
    /// 1-based index of the segment this entry refers to
    pub index: usize,
    /// Replacement text for the segment
    #[serde(default)]
    pub edited_text: Option<String>,
    /// Answer to the per-segment elaboration probe
    #[serde(default)]
    pub answer: Option<String>,
    /// Narrator-defined follow-up questions for this segment
    #[serde(default)]
    pub custom_questions: Vec<CustomQuestion>,
}

/// A question the narrator added themselves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomQuestion {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
}

/// A compiled (title, shown text, answer) triple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub title: String,
    pub context: String,
    pub answer: Option<String>,
}

impl ResponseEntry {
    /// Answer text as rendered in reports; blank answers show 無
    pub fn answer_text(&self) -> &str {
        self.answer
            .as_deref()
            .filter(|answer| !answer.trim().is_empty())
            .unwrap_or(NO_ANSWER)
    }

    pub fn is_answered(&self) -> bool {
        self.answer
            .as_deref()
            .is_some_and(|answer| !answer.trim().is_empty())
    }
}

/// State of one interview run: the statement, its segmentation, and the
/// compiled follow-up responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    /// Unique identifier for this session (UUID)
    pub session_id: String,
    /// The narrator's statement
    pub statement: Statement,
    /// Segmentation strategy that produced the drafts
    pub mode: SegmentMode,
    /// Segment cap the session was configured with
    pub max_segments: usize,
    /// Whether the equal-partition fallback produced the drafts
    pub used_fallback: bool,
    /// Segments in statement order
    pub segments: Vec<SegmentDraft>,
    /// Compiled responses, empty until the compile stage runs
    pub responses: Vec<ResponseEntry>,
    /// Session creation time (RFC 3339, UTC)
    pub created_at: String,
}

impl InterviewSession {
    pub fn new(
        statement: Statement,
        mode: SegmentMode,
        max_segments: usize,
        used_fallback: bool,
        segments: Vec<SegmentDraft>,
    ) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            statement,
            mode,
            max_segments,
            used_fallback,
            segments,
            responses: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of compiled responses carrying a non-blank answer
    pub fn answered_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_answered()).count()
    }

    /// Draft for the segment with the given 1-based index
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut SegmentDraft> {
        self.segments.iter_mut().find(|d| d.index == index)
    }
}
