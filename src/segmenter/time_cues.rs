/// Temporal adverbs recognized as segment boundaries, tried in this order
/// at each scan position. 前一天 precedes 一天 so the longer cue wins.
pub const TIME_ADVERBS: [&str; 18] = [
    "早上", "中午", "下午", "傍晚", "晚上", "清晨", "凌晨", "當時", "後來",
    "接著", "那時候", "之後", "突然", "隔天", "前一天", "一天", "某天", "同時",
];

/// A single time-cue occurrence within a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueMatch {
    /// Character offset of the first character of the cue
    pub start: usize,
    /// Character offset one past the last character of the cue
    pub end: usize,
    /// The matched cue text
    pub text: String,
}

/// Split a statement at every time-cue occurrence
///
/// Each cue start becomes a boundary; segment k runs from the k-th cue to
/// the (k+1)-th cue (or end of text). Text before the first cue is dropped.
/// Segments are trimmed and empty ones discarded. With no cue at all the
/// whole text is returned as a single segment.
pub fn segment_by_cue(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let matches = scan_cues(&chars);

    if matches.is_empty() {
        return vec![text.to_string()];
    }

    let mut boundaries: Vec<usize> = matches.iter().map(|m| m.start).collect();
    boundaries.push(chars.len());

    let mut segments = Vec::new();
    for pair in boundaries.windows(2) {
        let slice: String = chars[pair[0]..pair[1]].iter().collect();
        let trimmed = slice.trim();
        if !trimmed.is_empty() {
            segments.push(trimmed.to_string());
        }
    }

    segments
}

/// Locate every time-cue occurrence in left-to-right order
pub fn find_time_cues(text: &str) -> Vec<CueMatch> {
    let chars: Vec<char> = text.chars().collect();
    scan_cues(&chars)
}

/// Non-overlapping scan: on a match, resume after its last character
fn scan_cues(chars: &[char]) -> Vec<CueMatch> {
    let mut matches = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match cue_end_at(chars, i) {
            Some(end) => {
                matches.push(CueMatch {
                    start: i,
                    end,
                    text: chars[i..end].iter().collect(),
                });
                i = end;
            }
            None => i += 1,
        }
    }

    matches
}

/// Try to match any vocabulary cue starting at `start`
///
/// A cue must not touch a digit on either side, which excludes clock-time
/// shapes embedded in longer numerals (the "3點" inside "13點30").
fn cue_end_at(chars: &[char], start: usize) -> Option<usize> {
    if start > 0 && chars[start - 1].is_ascii_digit() {
        return None;
    }

    let end = match_clock_time(chars, start)
        .or_else(|| TIME_ADVERBS.iter().find_map(|cue| match_literal(chars, start, cue)))?;

    match chars.get(end) {
        Some(c) if c.is_ascii_digit() => None,
        _ => Some(end),
    }
}

/// Match the clock-time shape `H點` / `H點MM分` (1-2 digit hour, optional
/// 1-2 digit minutes). Returns the offset one past the match.
fn match_clock_time(chars: &[char], start: usize) -> Option<usize> {
    let hour_digits = digit_run(chars, start, 2);
    if hour_digits == 0 {
        return None;
    }

    let mut pos = start + hour_digits;
    if chars.get(pos) != Some(&'點') {
        return None;
    }
    pos += 1;

    let minute_digits = digit_run(chars, pos, 2);
    if minute_digits > 0 && chars.get(pos + minute_digits) == Some(&'分') {
        pos += minute_digits + 1;
    }

    Some(pos)
}

/// Length of the ASCII digit run at `start`, capped at `max_len`
fn digit_run(chars: &[char], start: usize, max_len: usize) -> usize {
    chars
        .iter()
        .skip(start)
        .take(max_len)
        .take_while(|c| c.is_ascii_digit())
        .count()
}

/// Match a literal cue string at `start`, returning the offset past it
pub(crate) fn match_literal(chars: &[char], start: usize, literal: &str) -> Option<usize> {
    let mut pos = start;
    for ch in literal.chars() {
        if chars.get(pos) != Some(&ch) {
            return None;
        }
        pos += 1;
    }
    Some(pos)
}
