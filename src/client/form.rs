use bytes::Bytes;
use std::path::Path;

pub const RESULT_FILE_NAME: &str = "cloned-voice.mp3";

/// A reference sample picked by the user.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Reads a file from disk, declaring its type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "audio".to_string());
        let content_type = content_type_for(path);
        Ok(Self::new(name, content_type, data))
    }

    pub fn is_audio(&self) -> bool {
        self.content_type.starts_with("audio/")
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Size in megabytes with two decimals, e.g. "1.50 MB".
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size() as f64 / 1024.0 / 1024.0)
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "webm" => "audio/webm",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Audio returned by a successful generation. Replacing it drops the old bytes.
#[derive(Debug, Clone)]
pub struct ResultAudio {
    pub data: Bytes,
}

impl ResultAudio {
    pub fn content_type(&self) -> &'static str {
        "audio/mpeg"
    }

    pub fn download_name(&self) -> &'static str {
        RESULT_FILE_NAME
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, &self.data)
    }
}
