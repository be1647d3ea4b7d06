//! Normalizes free-form generator output into fixed-shape results.
//!
//! Nothing here can fail. Short, noisy or oversized model output is padded or
//! truncated into shape rather than rejected.

/// Number of caption variants every successful generation returns.
pub const CAPTION_COUNT: usize = 5;

/// Used when the model output contains no usable caption line at all.
pub const FALLBACK_CAPTION: &str = "Fresh post coming soon! 🔥";

/// Lines at or under this many characters (after stripping) are treated as noise.
const MIN_CAPTION_CHARS: usize = 10;

const ENUMERATORS: [&str; 15] = [
    "1.", "2.", "3.", "4.", "5.", "1)", "2)", "3)", "4)", "5)", "1-", "2-", "3-", "4-", "5-",
];

/// Extracts exactly five captions from a numbered list.
///
/// Each trimmed line loses at most one leading enumerator (`1.`, `2)`, `3-`, ...).
/// Lines of 10 characters or fewer are dropped. Missing slots repeat the last
/// kept caption, or `FALLBACK_CAPTION` if nothing was kept.
pub fn parse_numbered_captions(raw: &str) -> [String; CAPTION_COUNT] {
    let captions: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_enumerator)
        .filter(|line| line.chars().count() > MIN_CAPTION_CHARS)
        .take(CAPTION_COUNT)
        .collect();

    let last = captions.last().copied().unwrap_or(FALLBACK_CAPTION);
    std::array::from_fn(|i| captions.get(i).copied().unwrap_or(last).to_string())
}

fn strip_enumerator(line: &str) -> &str {
    ENUMERATORS
        .iter()
        .find_map(|prefix| line.strip_prefix(*prefix))
        .map(str::trim)
        .unwrap_or(line)
}

/// Keeps only `#`-prefixed tokens, in order, joined by single spaces.
/// An empty result is valid.
pub fn filter_hashtags(raw: &str) -> String {
    raw.split_whitespace()
        .filter(|token| token.starts_with('#'))
        .collect::<Vec<_>>()
        .join(" ")
}
