//! Caption Generation: orchestrates one request/response cycle.
//!
//! Flow: build prompts → generate captions → parse → generate hashtags →
//!       filter → assemble result → append log record.
//!
//! Upstream failures are converted into the uniform failure result exactly once,
//! in `generate_captions`. The failure detail goes to the tracing log only.

use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::errors::{AppError, GENERIC_FAILURE_MESSAGE};
use crate::generation::generation_log::{GenerationLog, LogRecord};
use crate::generation::parser::{filter_hashtags, parse_numbered_captions, CAPTION_COUNT};
use crate::generation::prompts::{build_caption_prompt, build_hashtag_prompt};
use crate::llm_client::TextGenerator;
use crate::models::profile::{BusinessProfile, Vibe};

pub const CAPTION_TEMPERATURE: f32 = 0.9;
pub const CAPTION_MAX_TOKENS: u32 = 300;
pub const HASHTAG_TEMPERATURE: f32 = 0.7;
pub const HASHTAG_MAX_TOKENS: u32 = 200;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

fn default_vibe() -> String {
    Vibe::Smooth.as_str().to_string()
}

/// Request body for caption generation.
///
/// Keys are kept as the caller sent them and echoed back; prompt lookup
/// resolves unknown profiles and vibes to their defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub business_type: String,
    pub post_description: String,
    #[serde(default = "default_vibe")]
    pub vibe: String,
}

impl GenerationRequest {
    pub fn new(business_type: &str, post_description: &str, vibe: &str) -> Self {
        Self {
            business_type: business_type.to_string(),
            post_description: post_description.to_string(),
            vibe: vibe.to_string(),
        }
    }

    /// Strict check used at the HTTP boundary: enumerations must be known values.
    pub fn validate(&self) -> Result<(), AppError> {
        self.business_type
            .parse::<BusinessProfile>()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.vibe
            .parse::<Vibe>()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_description(&self.post_description)
    }
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.trim().is_empty() {
        return Err(AppError::Validation(
            "post_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Successful generation: always exactly five captions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionSet {
    pub success: bool,
    pub captions: [String; CAPTION_COUNT],
    /// Space-joined `#` tokens. May be empty.
    pub hashtags: String,
    pub generation_time: f64,
    pub timestamp: String,
    pub business_type: String,
    pub vibe: String,
}

/// Failed generation: a generic message only, never the cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationFailure {
    pub success: bool,
    pub error: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Success(CaptionSet),
    Failure(GenerationFailure),
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    fn failure(timestamp: String) -> Self {
        GenerationResult::Failure(GenerationFailure {
            success: false,
            error: GENERIC_FAILURE_MESSAGE.to_string(),
            timestamp,
        })
    }
}

/// ISO-8601 UTC with a trailing `Z`, e.g. `2025-01-15T10:30:00.123456Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn round_secs(elapsed: f64) -> f64 {
    (elapsed * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one caption generation cycle and appends one log record.
///
/// Returns `Err` only for an empty description, before anything is called or
/// logged. Every other outcome, including generator failures, is an `Ok`
/// carrying either the success or the uniform failure result.
pub async fn generate_captions(
    generator: &dyn TextGenerator,
    log: &GenerationLog,
    request: &GenerationRequest,
) -> Result<GenerationResult, AppError> {
    validate_description(&request.post_description)?;

    let start = Instant::now();
    info!(
        "Generating captions: business_type={}, vibe={}",
        request.business_type, request.vibe
    );

    let outcome = run_pipeline(generator, request).await;
    let generation_time = round_secs(start.elapsed().as_secs_f64());
    let timestamp = utc_timestamp();

    let result = match outcome {
        Ok((captions, hashtags)) => GenerationResult::Success(CaptionSet {
            success: true,
            captions,
            hashtags,
            generation_time,
            timestamp: timestamp.clone(),
            business_type: request.business_type.clone(),
            vibe: request.vibe.clone(),
        }),
        Err(AppError::Upstream { detail }) => {
            error!(
                "Caption generation failed (business_type={:?}, vibe={:?}): {detail}",
                request.business_type, request.vibe
            );
            GenerationResult::failure(timestamp.clone())
        }
        Err(e) => {
            error!("Caption generation failed: {e:?}");
            GenerationResult::failure(timestamp.clone())
        }
    };

    let record = LogRecord::new(
        timestamp,
        &request.business_type,
        &request.vibe,
        &request.post_description,
        generation_time,
        result.is_success(),
    );
    if let Err(e) = log.append(&record).await {
        warn!("Failed to append generation log record: {e:#}");
    }

    info!(
        "Caption generation finished in {generation_time}s (success={})",
        result.is_success()
    );

    Ok(result)
}

async fn run_pipeline(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<([String; CAPTION_COUNT], String), AppError> {
    let profile = BusinessProfile::resolve(&request.business_type);
    let vibe = Vibe::resolve(&request.vibe);

    let caption_prompt = build_caption_prompt(profile, &request.post_description, vibe);
    let hashtag_prompt = build_hashtag_prompt(profile, &request.post_description);

    let raw_captions = generator
        .generate(
            &caption_prompt.system,
            &caption_prompt.user,
            CAPTION_TEMPERATURE,
            CAPTION_MAX_TOKENS,
        )
        .await?;
    let captions = parse_numbered_captions(&raw_captions);

    let raw_hashtags = generator
        .generate(
            &hashtag_prompt.system,
            &hashtag_prompt.user,
            HASHTAG_TEMPERATURE,
            HASHTAG_MAX_TOKENS,
        )
        .await?;
    let hashtags = filter_hashtags(&raw_hashtags);

    Ok((captions, hashtags))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    pub(crate) const CANNED_CAPTIONS: &str = "1. Fresh fade, fresh start. Who's next in the chair? 💈\n\
        2. Clean lines and a sharp taper for our regular today ✂️\n\
        3. Ten years in and he still trusts us with the lineup 🔥\n\
        4. Book your slot before the weekend rush fills the chair\n\
        5. The sharpest fade on the block, no debate 💯";

    pub(crate) const CANNED_HASHTAGS: &str = "#barberlife #fade #barbershop #mensstyle #taper";

    /// Deterministic generator: answers caption prompts and hashtag prompts
    /// with fixed text, and records every call.
    #[derive(Default)]
    pub(crate) struct StubGenerator {
        pub calls: Mutex<Vec<(String, f32, u32)>>,
        pub fail: bool,
    }

    impl StubGenerator {
        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(
            &self,
            _system: &str,
            user: &str,
            temperature: f32,
            max_tokens: u32,
        ) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((user.to_string(), temperature, max_tokens));
            if self.fail {
                return Err(LlmError::Api {
                    status: 401,
                    message: "invalid api key sk-live-secret".to_string(),
                });
            }
            if user.starts_with("Generate 25 hashtags") {
                Ok(format!("Here are your tags: {CANNED_HASHTAGS}"))
            } else {
                Ok(CANNED_CAPTIONS.to_string())
            }
        }
    }

    fn is_hashtag_line(s: &str) -> bool {
        s.split(' ')
            .filter(|t| !t.is_empty())
            .all(|t| t.starts_with('#') && t.len() > 1)
    }

    #[tokio::test]
    async fn test_end_to_end_success_with_stub() {
        let dir = tempfile::tempdir().unwrap();
        let log = GenerationLog::new(dir.path().join("generations.jsonl"));
        let stub = StubGenerator::default();

        let request = GenerationRequest::new("barber", "Fresh fade on a regular client", "smooth");
        let result = generate_captions(&stub, &log, &request).await.unwrap();

        let GenerationResult::Success(set) = result else {
            panic!("expected success");
        };
        assert!(set.success);
        assert_eq!(set.captions.len(), 5);
        assert_eq!(set.captions[0], "Fresh fade, fresh start. Who's next in the chair? 💈");
        assert_eq!(set.hashtags, CANNED_HASHTAGS);
        assert!(is_hashtag_line(&set.hashtags));
        assert_eq!(set.business_type, "barber");
        assert_eq!(set.vibe, "smooth");
        assert!(set.timestamp.ends_with('Z'));
        assert!(set.generation_time >= 0.0);
    }

    #[tokio::test]
    async fn test_sampling_parameters_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let log = GenerationLog::new(dir.path().join("generations.jsonl"));
        let stub = StubGenerator::default();

        let request = GenerationRequest::new("gym", "New spin class at 6am", "hype");
        generate_captions(&stub, &log, &request).await.unwrap();

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!((calls[0].1, calls[0].2), (CAPTION_TEMPERATURE, CAPTION_MAX_TOKENS));
        assert!(calls[0].0.contains("Build anticipation"));
        assert_eq!((calls[1].1, calls[1].2), (HASHTAG_TEMPERATURE, HASHTAG_MAX_TOKENS));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_generic_and_logged() {
        let dir = tempfile::tempdir().unwrap();
        let log = GenerationLog::new(dir.path().join("generations.jsonl"));
        let stub = StubGenerator::failing();

        let request = GenerationRequest::new("salon", "Balayage reveal", "professional");
        let result = generate_captions(&stub, &log, &request).await.unwrap();

        assert!(!result.is_success());
        let body = serde_json::to_string(&result).unwrap();
        assert!(body.contains(GENERIC_FAILURE_MESSAGE));
        assert!(!body.contains("sk-live-secret"));
        assert!(!body.contains("captions"));

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let record: LogRecord = serde_json::from_str(contents.trim()).unwrap();
        assert!(!record.success);
        assert_eq!(record.business_type, "salon");
    }

    #[tokio::test]
    async fn test_empty_description_rejected_before_any_call() {
        let dir = tempfile::tempdir().unwrap();
        let log = GenerationLog::new(dir.path().join("generations.jsonl"));
        let stub = StubGenerator::default();

        let request = GenerationRequest::new("barber", "   ", "smooth");
        let result = generate_captions(&stub, &log, &request).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(stub.calls.lock().unwrap().is_empty());
        assert!(!log.path().exists());
    }

    #[tokio::test]
    async fn test_unknown_keys_fall_back_and_are_echoed() {
        let dir = tempfile::tempdir().unwrap();
        let log = GenerationLog::new(dir.path().join("generations.jsonl"));
        let stub = StubGenerator::default();

        let request = GenerationRequest::new("florist", "Spring bouquets are in", "dreamy");
        let result = generate_captions(&stub, &log, &request).await.unwrap();

        let GenerationResult::Success(set) = result else {
            panic!("expected success");
        };
        assert_eq!(set.business_type, "florist");
        assert_eq!(set.vibe, "dreamy");
        let calls = stub.calls.lock().unwrap();
        assert!(calls[0].0.contains("Less is more."), "smooth modifier used");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_generations_each_log_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let log = GenerationLog::new(dir.path().join("generations.jsonl"));
        let stub = StubGenerator::default();

        let first = GenerationRequest::new("barber", "Fresh fade on a regular client", "smooth");
        let second = GenerationRequest::new("gym", "Deadlift PR day for the crew", "hype");
        let (a, b) = tokio::join!(
            generate_captions(&stub, &log, &first),
            generate_captions(&stub, &log, &second)
        );
        assert!(a.unwrap().is_success());
        assert!(b.unwrap().is_success());

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let records: Vec<LogRecord> = contents
            .lines()
            .map(|l| serde_json::from_str(l).expect("well-formed line"))
            .collect();
        assert_eq!(records.len(), 2);
        let mut types: Vec<&str> = records.iter().map(|r| r.business_type.as_str()).collect();
        types.sort_unstable();
        assert_eq!(types, ["barber", "gym"]);
    }

    async fn mock_chat_reply(server: &wiremock::MockServer, max_tokens: u32, content: &str) {
        use wiremock::matchers::{body_partial_json, method, path};
        use wiremock::{Mock, ResponseTemplate};

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({ "max_tokens": max_tokens })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    fn mock_client(server: &wiremock::MockServer) -> crate::llm_client::LlmClient {
        crate::llm_client::LlmClient::new("test-key".to_string(), server.uri(), "gpt-4".to_string())
            .expect("client builds")
    }

    #[tokio::test]
    async fn test_empty_hashtag_reply_is_success_with_empty_hashtags() {
        let server = wiremock::MockServer::start().await;
        mock_chat_reply(
            &server,
            CAPTION_MAX_TOKENS,
            "1. Fresh fade, fresh start for the weekend\n2. Sharp taper on a Tuesday regular",
        )
        .await;
        mock_chat_reply(&server, HASHTAG_MAX_TOKENS, "").await;

        let dir = tempfile::tempdir().unwrap();
        let log = GenerationLog::new(dir.path().join("generations.jsonl"));
        let request = GenerationRequest::new("barber", "Fresh fade on a regular client", "smooth");
        let result = generate_captions(&mock_client(&server), &log, &request)
            .await
            .unwrap();

        let GenerationResult::Success(set) = result else {
            panic!("expected success");
        };
        assert_eq!(set.hashtags, "");
        assert_eq!(set.captions[0], "Fresh fade, fresh start for the weekend");
        assert!(set.captions[1..].iter().all(|c| c == "Sharp taper on a Tuesday regular"));

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let record: LogRecord = serde_json::from_str(contents.trim()).unwrap();
        assert!(record.success);
    }

    #[tokio::test]
    async fn test_empty_caption_reply_pads_with_fallback() {
        let server = wiremock::MockServer::start().await;
        mock_chat_reply(&server, CAPTION_MAX_TOKENS, "").await;
        mock_chat_reply(&server, HASHTAG_MAX_TOKENS, CANNED_HASHTAGS).await;

        let dir = tempfile::tempdir().unwrap();
        let log = GenerationLog::new(dir.path().join("generations.jsonl"));
        let request = GenerationRequest::new("gym", "Deadlift PR day for the crew", "hype");
        let result = generate_captions(&mock_client(&server), &log, &request)
            .await
            .unwrap();

        let GenerationResult::Success(set) = result else {
            panic!("expected success");
        };
        assert!(set
            .captions
            .iter()
            .all(|c| c == crate::generation::parser::FALLBACK_CAPTION));
        assert_eq!(set.hashtags, CANNED_HASHTAGS);
    }

    #[test]
    fn test_request_validation_is_strict() {
        assert!(GenerationRequest::new("barber", "Fresh fade", "hype").validate().is_ok());
        let err = GenerationRequest::new("florist", "Fresh fade", "hype")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("business_type"));
        let err = GenerationRequest::new("gym", "Leg day", "chill")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("vibe"));
        assert!(GenerationRequest::new("gym", "", "hype").validate().is_err());
    }

    #[test]
    fn test_request_vibe_defaults_to_smooth() {
        let request: GenerationRequest = serde_json::from_value(serde_json::json!({
            "business_type": "salon",
            "post_description": "Silk press Saturday"
        }))
        .unwrap();
        assert_eq!(request.vibe, "smooth");
    }

    #[test]
    fn test_round_secs_two_decimals() {
        assert_eq!(round_secs(2.3456), 2.35);
        assert_eq!(round_secs(0.0), 0.0);
    }
}
