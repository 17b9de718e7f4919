pub mod io;
pub mod models;
pub mod prompts;
pub mod segmenter;
pub mod stages;

pub use io::{
    parse_answer_sheet_file, parse_answer_sheet_json, read_statement_file, HumanReport,
    MachineReport, ReportMetadata,
};
pub use models::{
    AnswerSheet, CustomQuestion, InterviewSession, ResponseEntry, SegmentAnswer, SegmentDraft,
    SessionError, Statement,
};
pub use segmenter::{
    find_time_cues, partition_equal, segment_by_cue, segment_by_discourse, segment_statement,
    CueMatch, SegmentMode, SegmentationResult, SegmenterConfig,
};
pub use stages::{
    execute_compile, execute_render, execute_segment, CompileResult, RenderConfig, RenderResult,
};
