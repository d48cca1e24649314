use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use super::voice::{SynthesisRequest, VOICE_ID};
use crate::error::AppError;

pub const API_KEY_HEADER: &str = "xi-api-key";

/// Thin async client for the ElevenLabs text-to-speech endpoint.
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ElevenLabsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn synthesis_url(&self) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, VOICE_ID)
    }

    /// Synthesizes `text` with the fixed voice and returns the buffered audio.
    pub async fn synthesize(&self, api_key: &str, text: &str) -> Result<Bytes, AppError> {
        let url = self.synthesis_url();
        tracing::debug!("Requesting synthesis of {} chars from {}", text.chars().count(), url);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&SynthesisRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // A non-JSON error body surfaces as AppError::Json, i.e. a generic 500.
            let details: serde_json::Value = serde_json::from_slice(&response.bytes().await?)?;
            return Err(AppError::ProviderFailed {
                status: status.as_u16(),
                details,
            });
        }

        let audio = response.bytes().await?;
        tracing::info!("Received {} bytes of audio from provider", audio.len());
        Ok(audio)
    }
}
