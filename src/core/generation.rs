use crate::domain::ports::TextGenerator;
use crate::utils::error::{CatalystError, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

/// Either the parsed payload or the error to show in its place.
pub type GenerationResult<T> = Result<T>;

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence pattern is valid"))
}

/// Strips one surrounding code fence (with optional language tag).
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match fence_regex().captures(trimmed).and_then(|caps| caps.get(2)) {
        Some(body) if !body.as_str().is_empty() => body.as_str().trim(),
        _ => trimmed,
    }
}

/// Parses a raw model reply into `T`. The error keeps the raw reply.
pub fn parse_reply<T: DeserializeOwned>(raw: &str) -> GenerationResult<T> {
    let json = strip_code_fence(raw);
    serde_json::from_str(json).map_err(|e| {
        tracing::error!("❌ Failed to parse JSON response: {}", e);
        tracing::debug!("Raw response text: {}", raw);
        CatalystError::ResponseParseError {
            raw: raw.to_string(),
        }
    })
}

/// One request to the generator, then fence stripping and JSON parsing.
///
/// Transport and service failures come back as `Err`; nothing here retries.
pub async fn generate<T, G>(generator: &G, prompt: &str) -> GenerationResult<T>
where
    T: DeserializeOwned,
    G: TextGenerator + ?Sized,
{
    let raw = generator.generate_text(prompt).await.map_err(|e| {
        tracing::error!("❌ Error calling generation service: {}", e);
        e
    })?;
    parse_reply(&raw)
}
