use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{AnswerSheet, Statement};

/// Read a narrator statement from a plain-text file
pub fn read_statement_file(path: &Path) -> Result<Statement> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    Ok(Statement::new(content))
}

/// Parse an answer sheet from a JSON file
pub fn parse_answer_sheet_file(path: &Path) -> Result<AnswerSheet> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_answer_sheet_json(&content)
}

/// Parse an answer sheet from a JSON string
pub fn parse_answer_sheet_json(json: &str) -> Result<AnswerSheet> {
    serde_json::from_str(json).context("Failed to parse answer sheet JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_statement_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "早上出門。晚上回家。").unwrap();

        let statement = read_statement_file(file.path()).unwrap();

        assert_eq!(statement.text, "早上出門。晚上回家。");
        assert_eq!(statement.char_count, 10);
    }

    #[test]
    fn test_parse_answer_sheet_json() {
        let json = r#"{
            "segments": [
                {
                    "index": 1,
                    "edited_text": "早上七點出門。",
                    "answer": "搭公車",
                    "custom_questions": [
                        {"question": "有人同行嗎？", "answer": "沒有"}
                    ]
                },
                {"index": 2}
            ],
            "before_event": "前一天很晚睡"
        }"#;

        let sheet = parse_answer_sheet_json(json).unwrap();

        assert_eq!(sheet.segments.len(), 2);
        assert_eq!(sheet.segments[0].index, 1);
        assert_eq!(sheet.segments[0].edited_text.as_deref(), Some("早上七點出門。"));
        assert_eq!(sheet.segments[0].custom_questions.len(), 1);
        assert!(sheet.segments[1].answer.is_none());
        assert_eq!(sheet.before_event.as_deref(), Some("前一天很晚睡"));
        assert!(sheet.credibility.is_none());
    }

    #[test]
    fn test_parse_empty_answer_sheet() {
        let sheet = parse_answer_sheet_json("{}").unwrap();

        assert!(sheet.segments.is_empty());
        assert!(sheet.before_event.is_none());
    }

    #[test]
    fn test_malformed_answer_sheet_is_an_error() {
        assert!(parse_answer_sheet_json("not json").is_err());
    }
}
