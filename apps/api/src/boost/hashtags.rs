//! Keyword-driven hashtag selection with random backfill.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Number of hashtags the boost path attaches to a post.
pub const DEFAULT_HASHTAG_COUNT: usize = 4;

/// Each matched keyword contributes at most this many of its mapped hashtags.
const TAGS_PER_KEYWORD: usize = 2;

/// Tokens of this length or shorter are never treated as keywords.
const MIN_KEYWORD_LEN: usize = 2;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "my", "your", "his", "her", "its", "our",
    "their", "this", "that", "these", "those",
];

const KEYWORD_HASHTAGS: &[(&str, &[&str])] = &[
    ("product", &["#ProductLaunch", "#NewProduct", "#Innovation"]),
    ("business", &["#Business", "#Entrepreneurship", "#Success"]),
    ("new", &["#NewRelease", "#Launch", "#Fresh"]),
    ("awesome", &["#Awesome", "#Amazing", "#Great"]),
    ("team", &["#TeamWork", "#Collaboration", "#Together"]),
    ("growth", &["#Growth", "#Progress", "#Development"]),
    ("tech", &["#Technology", "#TechLife", "#Innovation"]),
    ("marketing", &["#Marketing", "#DigitalMarketing", "#Strategy"]),
    ("social", &["#SocialMedia", "#Community", "#Engagement"]),
    ("media", &["#SocialMedia", "#Content", "#Digital"]),
];

/// Backfill pool. Holds at least `DEFAULT_HASHTAG_COUNT` entries, so the
/// default count always succeeds.
pub const GENERIC_HASHTAGS: &[&str] = &[
    "#Success",
    "#Motivation",
    "#Inspiration",
    "#Goals",
    "#Achievement",
    "#Excellence",
];

const _: () = assert!(GENERIC_HASHTAGS.len() >= DEFAULT_HASHTAG_COUNT);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashtagError {
    #[error("requested {requested} hashtags but only {available} distinct ones are available")]
    PoolTooSmall { requested: usize, available: usize },
}

/// Lowercases, strips punctuation, and drops stop words and short tokens.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

fn mapped_hashtags(keyword: &str) -> Option<&'static [&'static str]> {
    KEYWORD_HASHTAGS
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, tags)| *tags)
}

/// Returns exactly `count` distinct hashtags for `text`.
///
/// Keyword matches come first, in order of appearance. Remaining slots are
/// filled by uniform draws from the unused `GENERIC_HASHTAGS` entries. Fails
/// only when keyword tags and unused generic tags together fall short of `count`.
pub fn generate_hashtags<R: Rng + ?Sized>(
    text: &str,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, HashtagError> {
    let mut hashtags: Vec<&'static str> = Vec::new();
    for keyword in extract_keywords(text) {
        if let Some(tags) = mapped_hashtags(&keyword) {
            for tag in tags.iter().take(TAGS_PER_KEYWORD) {
                if !hashtags.contains(tag) {
                    hashtags.push(*tag);
                }
            }
        }
    }

    if hashtags.len() < count {
        let candidates: Vec<&'static str> = GENERIC_HASHTAGS
            .iter()
            .copied()
            .filter(|tag| !hashtags.contains(tag))
            .collect();
        let available = hashtags.len() + candidates.len();
        if available < count {
            return Err(HashtagError::PoolTooSmall {
                requested: count,
                available,
            });
        }
        let needed = count - hashtags.len();
        hashtags.extend(candidates.choose_multiple(rng, needed).copied());
    }

    hashtags.truncate(count);
    Ok(hashtags.into_iter().map(str::to_string).collect())
}
