//! Fixed interview prompts and labels
//!
//! Process-wide constant data, like the cue vocabularies. The wording is
//! what the narrator and interviewer actually see, so it stays verbatim.

/// Instruction shown to the narrator before free recall
pub const OPENING_INSTRUCTION: &str = "請你把件事情從頭到尾仔細地跟我說一遍，\
不管重要或不重要的細節都跟我說，你可以自己決定從什麼時候開始說，\
也可以自己決定說到什麼時候結束：";

/// Pre-event elaboration probe
pub const BEFORE_EVENT_PROBE: &str = "在這些事情發生之前，有沒有什麼你覺得相關的事？\
例如事情的起因、當時的背景、前一天發生什麼...";

/// Post-event elaboration probe
pub const AFTER_EVENT_PROBE: &str = "在這些事情發生之後，你做了什麼？或別人做了什麼？\
例如你有沒有講出去、處理後果、跟誰討論...";

/// Credibility-building probe
pub const CREDIBILITY_PROBE: &str = "為了讓所有調查這個案件的人可以更加相信你說的是實話，\
你還可以想到什麼事情可以跟我說的嗎？任何事情都可以？";

/// Report titles for the three fixed probes
pub const BEFORE_EVENT_TITLE: &str = "補問1 - 該事件前的事";
pub const AFTER_EVENT_TITLE: &str = "補問2 - 該事件後的事";
pub const CREDIBILITY_TITLE: &str = "補問3 - 鼓勵誠實補充";

/// Placeholder rendered for an unanswered probe
pub const NO_ANSWER: &str = "（無）";

/// Display label for the segment at the given 1-based index
pub fn segment_label(index: usize) -> String {
    format!("段落{index}")
}

/// Per-segment elaboration probe
pub fn segment_probe(label: &str) -> String {
    format!("關於{label}，你可以講得更仔細一點嗎？")
}

/// Title for a narrator-defined question attached to a segment
pub fn custom_question_title(label: &str) -> String {
    format!("自訂問題 - {label}")
}
