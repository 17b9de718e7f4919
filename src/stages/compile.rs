use tracing::info;

use crate::models::{AnswerSheet, InterviewSession, ResponseEntry, SessionError};
use crate::prompts::{
    custom_question_title, AFTER_EVENT_PROBE, AFTER_EVENT_TITLE, BEFORE_EVENT_PROBE,
    BEFORE_EVENT_TITLE, CREDIBILITY_PROBE, CREDIBILITY_TITLE,
};

/// Result of the compile stage
#[derive(Debug, Clone)]
pub struct CompileResult {
    /// Number of response entries compiled
    pub entries_compiled: usize,
    /// Number of segment edits applied from the answer sheet
    pub edits_applied: usize,
}

/// Execute the compile stage
///
/// Applies narrator edits from the answer sheet to the segment drafts,
/// then assembles the ordered response list: one entry per segment (plus
/// any narrator-defined questions attached to it), followed by the three
/// fixed follow-up probes.
pub fn execute_compile(
    session: &mut InterviewSession,
    sheet: &AnswerSheet,
) -> Result<CompileResult, SessionError> {
    let mut edits_applied = 0;
    for entry in &sheet.segments {
        let Some(draft) = session.segment_mut(entry.index) else {
            return Err(SessionError::UnknownSegment(entry.index));
        };
        if let Some(text) = &entry.edited_text {
            draft.edited = Some(text.clone());
            edits_applied += 1;
        }
    }

    let mut responses = Vec::new();
    for draft in &session.segments {
        let segment_answer = sheet.segment_answer(draft.index);
        responses.push(ResponseEntry {
            title: draft.label.clone(),
            context: draft.shown_text().to_string(),
            answer: segment_answer.and_then(|a| a.answer.clone()),
        });

        if let Some(segment_answer) = segment_answer {
            for custom in &segment_answer.custom_questions {
                responses.push(ResponseEntry {
                    title: custom_question_title(&draft.label),
                    context: custom.question.clone(),
                    answer: custom.answer.clone(),
                });
            }
        }
    }

    responses.push(ResponseEntry {
        title: BEFORE_EVENT_TITLE.to_string(),
        context: BEFORE_EVENT_PROBE.to_string(),
        answer: sheet.before_event.clone(),
    });
    responses.push(ResponseEntry {
        title: AFTER_EVENT_TITLE.to_string(),
        context: AFTER_EVENT_PROBE.to_string(),
        answer: sheet.after_event.clone(),
    });
    responses.push(ResponseEntry {
        title: CREDIBILITY_TITLE.to_string(),
        context: CREDIBILITY_PROBE.to_string(),
        answer: sheet.credibility.clone(),
    });

    let entries_compiled = responses.len();
    session.responses = responses;

    info!(
        "Compiled {} response entries ({} edits applied)",
        entries_compiled, edits_applied
    );

    Ok(CompileResult {
        entries_compiled,
        edits_applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomQuestion, SegmentAnswer, SegmentDraft, Statement};
    use crate::segmenter::SegmentMode;

    fn session_with_two_segments() -> InterviewSession {
        InterviewSession::new(
            Statement::new("早上出門。晚上回家。"),
            SegmentMode::TimeCue,
            3,
            false,
            vec![SegmentDraft::new(1, "早上出門。"), SegmentDraft::new(2, "晚上回家。")],
        )
    }

    #[test]
    fn test_compile_order_segments_then_fixed_probes() {
        let mut session = session_with_two_segments();
        let result = execute_compile(&mut session, &AnswerSheet::default()).unwrap();

        // Two segment entries plus the three fixed probes
        assert_eq!(result.entries_compiled, 5);
        let titles: Vec<&str> = session.responses.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "段落1",
                "段落2",
                "補問1 - 該事件前的事",
                "補問2 - 該事件後的事",
                "補問3 - 鼓勵誠實補充",
            ]
        );
    }

    #[test]
    fn test_custom_questions_follow_their_segment() {
        let mut session = session_with_two_segments();
        let sheet = AnswerSheet {
            segments: vec![SegmentAnswer {
                index: 1,
                edited_text: None,
                answer: Some("有補充".to_string()),
                custom_questions: vec![CustomQuestion {
                    question: "那時還有誰在場？".to_string(),
                    answer: Some("只有我".to_string()),
                }],
            }],
            ..Default::default()
        };

        execute_compile(&mut session, &sheet).unwrap();

        assert_eq!(session.responses[0].title, "段落1");
        assert_eq!(session.responses[1].title, "自訂問題 - 段落1");
        assert_eq!(session.responses[1].context, "那時還有誰在場？");
        assert_eq!(session.responses[2].title, "段落2");
    }

    #[test]
    fn test_edit_applied_before_compilation() {
        let mut session = session_with_two_segments();
        let sheet = AnswerSheet {
            segments: vec![SegmentAnswer {
                index: 2,
                edited_text: Some("晚上十點回家。".to_string()),
                answer: None,
                custom_questions: vec![],
            }],
            ..Default::default()
        };

        let result = execute_compile(&mut session, &sheet).unwrap();

        assert_eq!(result.edits_applied, 1);
        assert_eq!(session.responses[1].context, "晚上十點回家。");
        // The segmenter's original text is retained alongside the edit
        assert_eq!(session.segments[1].original, "晚上回家。");
    }

    #[test]
    fn test_unknown_segment_index_rejected() {
        let mut session = session_with_two_segments();
        let sheet = AnswerSheet {
            segments: vec![SegmentAnswer {
                index: 7,
                edited_text: None,
                answer: None,
                custom_questions: vec![],
            }],
            ..Default::default()
        };

        let err = execute_compile(&mut session, &sheet);
        assert!(matches!(err, Err(SessionError::UnknownSegment(7))));
    }

    #[test]
    fn test_fixed_probe_answers_carried_through() {
        let mut session = session_with_two_segments();
        let sheet = AnswerSheet {
            before_event: Some("前一天我們吵過架".to_string()),
            ..Default::default()
        };

        execute_compile(&mut session, &sheet).unwrap();

        let before = &session.responses[2];
        assert_eq!(before.title, "補問1 - 該事件前的事");
        assert_eq!(before.answer.as_deref(), Some("前一天我們吵過架"));
        assert_eq!(session.answered_count(), 1);
    }
}
