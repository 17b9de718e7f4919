use tracing::info;

use crate::models::{InterviewSession, SegmentDraft, SessionError, Statement};
use crate::segmenter::{segment_statement, SegmenterConfig};

/// Execute the segmentation stage
///
/// Validates the configuration, runs the configured segmenter (with the
/// equal-partition fallback), and opens a session holding one editable
/// draft per segment.
pub fn execute_segment(
    statement: Statement,
    config: &SegmenterConfig,
) -> Result<InterviewSession, SessionError> {
    if config.max_segments < 1 {
        return Err(SessionError::InvalidMaxSegments(config.max_segments));
    }
    if statement.is_blank() {
        return Err(SessionError::BlankStatement);
    }

    let result = segment_statement(&statement.text, config);
    info!(
        "Segmented {} chars into {} segments (mode {:?}, fallback: {})",
        statement.char_count,
        result.segments.len(),
        config.mode,
        result.used_fallback
    );

    let drafts: Vec<SegmentDraft> = result
        .segments
        .into_iter()
        .enumerate()
        .map(|(i, segment)| SegmentDraft::new(i + 1, segment))
        .collect();

    Ok(InterviewSession::new(
        statement,
        config.mode,
        config.max_segments,
        result.used_fallback,
        drafts,
    ))
}
