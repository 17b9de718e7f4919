/// Slice a statement into fixed-size character windows
///
/// The window is `char_count / max_segments`, clamped to at least one
/// character so an oversized cap degrades to per-character slices instead
/// of stalling the scan. The final window may be shorter. Slices are raw:
/// no trimming, and they may cut mid-word or mid-cue.
pub fn partition_equal(text: &str, max_segments: usize) -> Vec<String> {
    assert!(max_segments >= 1, "max_segments must be at least 1");

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let window = (chars.len() / max_segments).max(1);
    chars
        .chunks(window)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
