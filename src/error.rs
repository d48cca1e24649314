use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const MISSING_INPUT_MESSAGE: &str = "Missing text or API Key";
pub const PROVIDER_FAILED_MESSAGE: &str = "TTS Failed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Missing text or API Key")]
    MissingInput,

    #[error("Provider returned {status}: {details}")]
    ProviderFailed {
        status: u16,
        details: serde_json::Value,
    },

    #[error("Unexpected failure: {0}")]
    Internal(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Provider request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON envelope returned for every failed relay call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingInput => {
                tracing::warn!("Rejected relay request: {}", MISSING_INPUT_MESSAGE);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: MISSING_INPUT_MESSAGE.to_string(),
                        details: None,
                    },
                )
            }
            AppError::ProviderFailed { status, details } => {
                tracing::error!("TTS provider failed with {}: {}", status, details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: PROVIDER_FAILED_MESSAGE.to_string(),
                        details: Some(details),
                    },
                )
            }
            other => {
                tracing::error!("Server error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: INTERNAL_ERROR_MESSAGE.to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
