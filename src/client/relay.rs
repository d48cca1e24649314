use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use thiserror::Error;

use super::form::SelectedFile;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid file: {0}")]
    InvalidFile(String),
}

/// The two form fields sent to the relay.
#[derive(Debug, Clone)]
pub struct ClonePayload {
    pub audio: SelectedFile,
    pub text: String,
}

/// Status and full body of a relay reply.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(&self, payload: &ClonePayload) -> Result<RelayResponse, ClientError>;
}

/// Posts the form as multipart data to `{base_url}/api/clone`.
pub struct HttpRelay {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRelay {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/api/clone", base_url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayTransport for HttpRelay {
    async fn send(&self, payload: &ClonePayload) -> Result<RelayResponse, ClientError> {
        let audio = Part::bytes(payload.audio.data.to_vec())
            .file_name(payload.audio.name.clone())
            .mime_str(&payload.audio.content_type)
            .map_err(|e| ClientError::InvalidFile(e.to_string()))?;

        let form = Form::new()
            .part("audio", audio)
            .text("text", payload.text.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Ok(RelayResponse { status, body })
    }
}
