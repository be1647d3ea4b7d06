//! Axum route handlers for the boost and vibe API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::boost::booster::{boost_post, BoostResult};
use crate::boost::vibe::detect_vibe;
use crate::errors::AppError;
use crate::models::profile::Tone;

/// Longest post the boost endpoint accepts, in characters.
pub const MAX_POST_CHARS: usize = 300;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

fn default_tone() -> String {
    Tone::Friendly.as_str().to_string()
}

#[derive(Debug, Deserialize)]
pub struct BoostRequest {
    pub post: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

#[derive(Debug, Serialize)]
pub struct BoostResponse {
    #[serde(flatten)]
    pub result: BoostResult,
    pub vibe: String,
}

#[derive(Debug, Deserialize)]
pub struct VibeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct VibeResponse {
    pub vibe: String,
}

impl BoostRequest {
    /// Returns the trimmed post and the normalized tone key.
    fn validate(&self) -> Result<(&str, Tone), AppError> {
        let post = self.post.trim();
        if post.is_empty() {
            return Err(AppError::Validation("post is required".to_string()));
        }
        let chars = post.chars().count();
        if chars > MAX_POST_CHARS {
            return Err(AppError::Validation(format!(
                "post is {chars} characters; the limit is {MAX_POST_CHARS}"
            )));
        }
        let tone = self
            .tone
            .trim()
            .to_lowercase()
            .parse::<Tone>()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok((post, tone))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/boost
///
/// Tone wrap, emojis and keyword hashtags, with the detected vibe alongside.
pub async fn handle_boost(Json(request): Json<BoostRequest>) -> Result<Json<BoostResponse>, AppError> {
    let (post, tone) = request.validate()?;

    let mut rng = rand::thread_rng();
    let result = boost_post(post, tone.as_str(), &mut rng)?;
    let vibe = detect_vibe(post, &mut rng);

    Ok(Json(BoostResponse { result, vibe }))
}

/// POST /api/vibe
pub async fn handle_vibe(Json(request): Json<VibeRequest>) -> Json<VibeResponse> {
    let vibe = detect_vibe(&request.text, &mut rand::thread_rng());
    Json(VibeResponse { vibe })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(post: &str, tone: &str) -> BoostRequest {
        BoostRequest {
            post: post.to_string(),
            tone: tone.to_string(),
        }
    }

    #[test]
    fn test_validate_trims_and_parses_tone() {
        let req = request("  New fade slots at 4pm  ", "Professional");
        let (post, tone) = req.validate().unwrap();
        assert_eq!(post, "New fade slots at 4pm");
        assert_eq!(tone, Tone::Professional);
    }

    #[test]
    fn test_validate_rejects_empty_post() {
        let err = request("   ", "friendly").validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: post is required");
    }

    #[test]
    fn test_validate_rejects_long_post() {
        let long = "a".repeat(MAX_POST_CHARS + 1);
        assert!(request(&long, "friendly").validate().is_err());
        let limit = "a".repeat(MAX_POST_CHARS);
        assert!(request(&limit, "friendly").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_tone() {
        let err = request("Hello", "sarcastic").validate().unwrap_err();
        assert!(err.to_string().contains("expected one of: friendly, professional"));
    }

    #[test]
    fn test_tone_defaults_to_friendly() {
        let req: BoostRequest = serde_json::from_str(r#"{"post": "hi"}"#).unwrap();
        assert_eq!(req.tone, "friendly");
    }
}
