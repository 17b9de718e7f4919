pub mod discourse;
pub mod partition;
pub mod time_cues;

pub use discourse::*;
pub use partition::*;
pub use time_cues::*;

use serde::{Deserialize, Serialize};

/// Which segmentation strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentMode {
    /// Split at temporal markers (clock times and time-of-day adverbs)
    TimeCue,
    /// Split at discourse markers, regrouped to a maximum segment count
    Discourse,
}

/// Configuration for a single segmentation pass
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Strategy applied to the statement
    pub mode: SegmentMode,
    /// Segment cap for the discourse and fallback paths (the time-cue
    /// path does not enforce it)
    pub max_segments: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            mode: SegmentMode::TimeCue,
            max_segments: 3,
        }
    }
}

/// Result of segmenting one statement
#[derive(Debug, Clone)]
pub struct SegmentationResult {
    /// Ordered segments as produced by the chosen path
    pub segments: Vec<String>,
    /// Whether the equal-partition fallback replaced the primary output
    pub used_fallback: bool,
}

/// Run the configured segmenter over a statement
///
/// Whenever the primary segmenter yields fewer than two segments, its
/// output is discarded and the statement is equal-partitioned instead.
pub fn segment_statement(text: &str, config: &SegmenterConfig) -> SegmentationResult {
    let primary = match config.mode {
        SegmentMode::TimeCue => segment_by_cue(text),
        SegmentMode::Discourse => segment_by_discourse(text, config.max_segments),
    };

    if primary.len() >= 2 {
        return SegmentationResult {
            segments: primary,
            used_fallback: false,
        };
    }

    SegmentationResult {
        segments: partition_equal(text, config.max_segments),
        used_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_fires_below_two_segments() {
        // No time cue anywhere, so the primary path yields one segment
        let text = "這份陳述完全沒有任何線索";
        let config = SegmenterConfig::default();
        let result = segment_statement(text, &config);

        assert!(result.used_fallback);
        assert_eq!(result.segments, vec!["這份陳述", "完全沒有", "任何線索"]);
    }

    #[test]
    fn test_primary_output_kept_with_two_or_more_segments() {
        let result = segment_statement("早上出門。晚上回家。", &SegmenterConfig::default());

        assert!(!result.used_fallback);
        assert_eq!(result.segments.len(), 2);
    }

    #[test]
    fn test_discourse_mode_dispatch() {
        let config = SegmenterConfig {
            mode: SegmentMode::Discourse,
            max_segments: 5,
        };
        let result = segment_statement("我先報警。後來他跑了。", &config);

        assert!(!result.used_fallback);
        assert_eq!(result.segments, vec!["我先報警。", "後來他跑了。"]);
    }

    #[test]
    fn test_default_config() {
        let config = SegmenterConfig::default();

        assert_eq!(config.mode, SegmentMode::TimeCue);
        assert_eq!(config.max_segments, 3);
    }
}
