//! Boost: the model-free post enhancement pipeline.
//!
//! Flow: tone wrap → emoji pizzazz → keyword hashtags on the ORIGINAL text →
//!       final_post. Mood detection is separate and never folded into final_post.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boost::hashtags::{generate_hashtags, DEFAULT_HASHTAG_COUNT};
use crate::boost::tone::{add_pizzazz, adjust_tone};
use crate::errors::AppError;

/// Every intermediate stage of a boost, plus the assembled post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostResult {
    pub original: String,
    pub tone: String,
    pub tone_adjusted: String,
    pub with_pizzazz: String,
    pub hashtags: Vec<String>,
    pub final_post: String,
}

/// Boosts `text` with the given tone. All randomness comes from `rng`.
///
/// The tone is passed through as given: an unknown tone skips the wrapping
/// step and decorates with the friendly emoji pool.
pub fn boost_post<R: Rng + ?Sized>(
    text: &str,
    tone: &str,
    rng: &mut R,
) -> Result<BoostResult, AppError> {
    let tone_adjusted = adjust_tone(text, tone, rng);
    let with_pizzazz = add_pizzazz(&tone_adjusted, tone, rng);
    let hashtags = generate_hashtags(text, DEFAULT_HASHTAG_COUNT, rng)
        .map_err(|e| AppError::Internal(e.into()))?;

    let final_post = format!("{with_pizzazz} {}", hashtags.join(" "));
    debug!(
        "Boosted post: tone={tone}, hashtags={}, chars={}",
        hashtags.len(),
        final_post.chars().count()
    );

    Ok(BoostResult {
        original: text.to_string(),
        tone: tone.to_string(),
        tone_adjusted,
        with_pizzazz,
        hashtags,
        final_post,
    })
}
