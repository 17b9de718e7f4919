use super::time_cues::match_literal;

/// Discourse markers recognized as clause openers, tried in this order
pub const DISCOURSE_MARKERS: [&str; 8] = [
    "後來", "接著", "結果", "然後", "當時", "突然", "隨後", "最後",
];

/// Punctuation that may precede a discourse-marker split
fn is_clause_punctuation(ch: char) -> bool {
    matches!(ch, '。' | '，' | '.' | ',' | '\n')
}

/// Split a statement at discourse markers, regrouped to at most
/// `max_segments` output segments
///
/// Splits happen where a vocabulary marker directly follows clause
/// punctuation; the punctuation stays with the preceding piece and the
/// marker is fused onto the clause it introduces. When the fused count
/// exceeds `max_segments`, contiguous runs are concatenated so that
/// exactly `max_segments` segments come back, the last run absorbing the
/// remainder.
pub fn segment_by_discourse(text: &str, max_segments: usize) -> Vec<String> {
    assert!(max_segments >= 1, "max_segments must be at least 1");

    if text.trim().is_empty() {
        return Vec::new();
    }

    let pieces = split_at_markers(text);
    let fused = fuse_markers(pieces);
    regroup(fused, max_segments)
}

/// Cut the text into alternating body and marker pieces
///
/// A marker is cut out as its own piece only when the character before it
/// is clause punctuation; mid-clause marker occurrences are left alone.
fn split_at_markers(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    let mut i = 1;

    while i < chars.len() {
        if is_clause_punctuation(chars[i - 1]) {
            if let Some(len) = marker_at(&chars, i) {
                pieces.push(chars[piece_start..i].iter().collect());
                pieces.push(chars[i..i + len].iter().collect());
                piece_start = i + len;
                i = piece_start + 1;
                continue;
            }
        }
        i += 1;
    }

    pieces.push(chars[piece_start..].iter().collect());
    pieces
}

fn marker_at(chars: &[char], start: usize) -> Option<usize> {
    DISCOURSE_MARKERS
        .iter()
        .find_map(|marker| match_literal(chars, start, marker))
        .map(|end| end - start)
}

/// Fuse bare marker pieces onto the clause that follows them
///
/// Pieces that trim to empty are dropped. A marker left at the very end
/// with no following clause is emitted on its own so no content is lost.
fn fuse_markers(pieces: Vec<String>) -> Vec<String> {
    let mut fused = Vec::new();
    let mut pending: Option<String> = None;

    for piece in pieces {
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }

        if DISCOURSE_MARKERS.iter().any(|marker| trimmed == *marker) {
            pending = Some(match pending.take() {
                Some(held) => held + trimmed,
                None => trimmed.to_string(),
            });
            continue;
        }

        fused.push(match pending.take() {
            Some(held) => held + trimmed,
            None => trimmed.to_string(),
        });
    }

    if let Some(held) = pending {
        fused.push(held);
    }

    fused
}

/// Concatenate fused segments into exactly `max_segments` contiguous runs
///
/// Run size is `count / max_segments`; the final run takes the remainder.
/// At or under the cap the list passes through untouched.
fn regroup(segments: Vec<String>, max_segments: usize) -> Vec<String> {
    if segments.len() <= max_segments {
        return segments;
    }

    let run_size = segments.len() / max_segments;
    let mut grouped = Vec::with_capacity(max_segments);

    for run in 0..max_segments {
        let start = run * run_size;
        let end = if run + 1 == max_segments {
            segments.len()
        } else {
            start + run_size
        };
        grouped.push(segments[start..end].concat());
    }

    grouped
}
