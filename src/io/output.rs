use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::InterviewSession;
use crate::segmenter::SegmentMode;

/// Machine-readable report format
#[derive(Debug, Clone, Serialize)]
pub struct MachineReport {
    /// Metadata about the session and its segmentation
    pub metadata: ReportMetadata,
    /// Segments with original and shown text
    pub segments: Vec<MachineSegment>,
    /// Compiled (title, context, answer) triples in interview order
    pub responses: Vec<MachineResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub session_id: String,
    pub created_at: String,
    pub mode: SegmentMode,
    pub max_segments: usize,
    pub used_fallback: bool,
    pub statement_chars: usize,
    pub segment_count: usize,
    pub answered_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineSegment {
    pub index: usize,
    pub label: String,
    pub original: String,
    pub shown: String,
    pub was_edited: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineResponse {
    pub title: String,
    pub context: String,
    pub answer: Option<String>,
}

impl MachineReport {
    /// Create from a compiled session
    pub fn from_session(session: &InterviewSession) -> Self {
        let segments: Vec<MachineSegment> = session
            .segments
            .iter()
            .map(|draft| MachineSegment {
                index: draft.index,
                label: draft.label.clone(),
                original: draft.original.clone(),
                shown: draft.shown_text().to_string(),
                was_edited: draft.was_edited(),
            })
            .collect();

        let responses: Vec<MachineResponse> = session
            .responses
            .iter()
            .map(|entry| MachineResponse {
                title: entry.title.clone(),
                context: entry.context.clone(),
                answer: entry.answer.clone(),
            })
            .collect();

        Self {
            metadata: ReportMetadata {
                session_id: session.session_id.clone(),
                created_at: session.created_at.clone(),
                mode: session.mode,
                max_segments: session.max_segments,
                used_fallback: session.used_fallback,
                statement_chars: session.statement.char_count,
                segment_count: session.segment_count(),
                answered_count: session.answered_count(),
            },
            segments,
            responses,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable report in the interview hand-out format
pub struct HumanReport<'a> {
    session: &'a InterviewSession,
}

impl<'a> HumanReport<'a> {
    pub fn new(session: &'a InterviewSession) -> Self {
        Self { session }
    }

    /// Format the full statement followed by every compiled response
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str("【完整陳述內容】\n");
        output.push_str(&self.session.statement.text);
        output.push_str("\n\n");

        for entry in &self.session.responses {
            output.push_str(&format!(
                "【{}】\n> {}\n✏ 回答：{}\n\n",
                entry.title,
                entry.context,
                entry.answer_text()
            ));
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResponseEntry, SegmentDraft, Statement};

    fn compiled_session() -> InterviewSession {
        let mut session = InterviewSession::new(
            Statement::new("早上出門。晚上回家。"),
            SegmentMode::TimeCue,
            3,
            false,
            vec![SegmentDraft::new(1, "早上出門。"), SegmentDraft::new(2, "晚上回家。")],
        );
        session.responses = vec![
            ResponseEntry {
                title: "段落1".to_string(),
                context: "早上出門。".to_string(),
                answer: Some("大約七點".to_string()),
            },
            ResponseEntry {
                title: "段落2".to_string(),
                context: "晚上回家。".to_string(),
                answer: None,
            },
        ];
        session
    }

    #[test]
    fn test_human_report_format() {
        let session = compiled_session();
        let report = HumanReport::new(&session).format();

        assert!(report.starts_with("【完整陳述內容】\n早上出門。晚上回家。\n\n"));
        assert!(report.contains("【段落1】\n> 早上出門。\n✏ 回答：大約七點\n\n"));
        assert!(report.contains("【段落2】\n> 晚上回家。\n✏ 回答：（無）\n\n"));
    }

    #[test]
    fn test_machine_report_from_session() {
        let session = compiled_session();
        let report = MachineReport::from_session(&session);

        assert_eq!(report.metadata.segment_count, 2);
        assert_eq!(report.metadata.answered_count, 1);
        assert_eq!(report.metadata.statement_chars, 10);
        assert!(!report.metadata.used_fallback);
        assert_eq!(report.segments[0].shown, "早上出門。");
        assert!(!report.segments[0].was_edited);
        assert_eq!(report.responses.len(), 2);
    }

    #[test]
    fn test_machine_report_mode_serializes_snake_case() {
        let session = compiled_session();
        let report = MachineReport::from_session(&session);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"time_cue\""));
    }
}
