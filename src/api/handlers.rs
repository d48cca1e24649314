use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{CloneForm, HealthResponse};
use crate::api::routes::AppState;
use crate::error::AppError;

pub async fn clone_voice(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    // An unreadable form is an unexpected failure, not a validation error
    let mut multipart = multipart.map_err(|e| AppError::Internal(e.body_text()))?;
    let form = CloneForm::read(&mut multipart).await?;

    if let Some(audio) = &form.audio {
        tracing::debug!(
            "Reference sample {:?} ({:?}, {} bytes) accepted and ignored",
            audio.file_name,
            audio.content_type,
            audio.size
        );
    }

    let (Some(text), Some(api_key)) = (form.text(), state.config.api_key.as_deref()) else {
        return Err(AppError::MissingInput);
    };

    let audio = state.tts.synthesize(api_key, text).await?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
