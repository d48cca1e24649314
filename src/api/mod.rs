pub mod handlers;
pub mod routes;

use axum::extract::Multipart;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Metadata of the uploaded reference sample. The bytes themselves are dropped.
#[derive(Debug, Clone, Default)]
pub struct AudioUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

/// Fields of the `POST /api/clone` multipart body.
#[derive(Debug, Default)]
pub struct CloneForm {
    pub text: Option<String>,
    pub audio: Option<AudioUpload>,
}

impl CloneForm {
    pub async fn read(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = CloneForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "text" if form.text.is_none() => {
                    form.text = Some(field.text().await?);
                }
                "audio" if form.audio.is_none() => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let size = field.bytes().await?.len();
                    form.audio = Some(AudioUpload {
                        file_name,
                        content_type,
                        size,
                    });
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// The text to synthesize, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
