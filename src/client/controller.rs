use super::form::{ResultAudio, SelectedFile};
use super::relay::{ClientError, ClonePayload, RelayResponse, RelayTransport};

pub const NOT_AUDIO_ALERT: &str = "Please choose an audio file (MP3, WAV, etc.)";
pub const GENERIC_FAILURE_ALERT: &str = "Something went wrong!";
const FALLBACK_ERROR: &str = "Generation failed";

/// User-facing blocking alert.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Reports alerts through the log, for the command line.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("No audio file selected")]
    NoFile,

    #[error("Text cannot be empty")]
    EmptyText,

    #[error("A generation is already in progress")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Audio is available through [`FormController::result`].
    Generated { bytes: usize },
    /// The relay answered with an error; the alert shown carried `message`.
    Rejected { message: String },
    /// Transport or decoding failure.
    Failed,
}

/// Message carried by a relay error body. A missing or falsy `error` falls
/// back to a fixed message; a `null` body is unreadable.
fn relay_error_message(body: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    if body.is_null() {
        return None;
    }

    let message = match body.get("error") {
        Some(Value::String(error)) if !error.is_empty() => error.clone(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
        _ => FALLBACK_ERROR.to_string(),
    };
    Some(message)
}

/// Clears the in-flight flag however the relay call ends, including when the
/// submit future is dropped.
struct GeneratingGuard<'a>(&'a mut bool);

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

pub struct FormController<T, N> {
    transport: T,
    notifier: N,
    selected_file: Option<SelectedFile>,
    text: String,
    generating: bool,
    result: Option<ResultAudio>,
}

impl<T: RelayTransport, N: Notifier> FormController<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport,
            notifier,
            selected_file: None,
            text: String::new(),
            generating: false,
            result: None,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn result(&self) -> Option<&ResultAudio> {
        self.result.as_ref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Accepts `file` if it declares an `audio/*` type. Returns whether it was taken.
    pub fn select_file(&mut self, file: SelectedFile) -> bool {
        if self.generating {
            return false;
        }
        if !file.is_audio() {
            self.notifier.alert(NOT_AUDIO_ALERT);
            return false;
        }

        tracing::debug!("Selected {} ({})", file.name, file.size_label());
        self.selected_file = Some(file);
        self.result = None;
        true
    }

    pub fn remove_file(&mut self) {
        if self.generating {
            return;
        }
        self.selected_file = None;
        self.result = None;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if !self.generating {
            self.text = text.into();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.check_ready().is_ok()
    }

    fn check_ready(&self) -> Result<(), FormError> {
        if self.generating {
            return Err(FormError::Busy);
        }
        if self.selected_file.is_none() {
            return Err(FormError::NoFile);
        }
        if self.text.is_empty() {
            return Err(FormError::EmptyText);
        }
        Ok(())
    }

    /// First half of a submission: marks the form as generating, drops the
    /// previous result and packages the payload.
    pub fn begin_submit(&mut self) -> Result<ClonePayload, FormError> {
        self.check_ready()?;
        let audio = self.selected_file.clone().ok_or(FormError::NoFile)?;

        self.generating = true;
        self.result = None;

        Ok(ClonePayload {
            audio,
            text: self.text.clone(),
        })
    }

    /// Second half of a submission: applies the relay outcome and always
    /// leaves the form idle.
    pub fn finish_submit(
        &mut self,
        outcome: Result<RelayResponse, ClientError>,
    ) -> SubmitOutcome {
        self.generating = false;

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Relay request failed: {}", e);
                self.notifier.alert(GENERIC_FAILURE_ALERT);
                return SubmitOutcome::Failed;
            }
        };

        if !response.is_success() {
            let message = serde_json::from_slice::<serde_json::Value>(&response.body)
                .ok()
                .and_then(|body| relay_error_message(&body));
            let Some(message) = message else {
                tracing::error!("Unreadable relay error body ({})", response.status);
                self.notifier.alert(GENERIC_FAILURE_ALERT);
                return SubmitOutcome::Failed;
            };

            self.notifier.alert(&format!("Error: {}", message));
            return SubmitOutcome::Rejected { message };
        }

        let bytes = response.body.len();
        self.result = Some(ResultAudio {
            data: response.body,
        });
        SubmitOutcome::Generated { bytes }
    }

    /// Sends the form to the relay. Errors only when the form is not ready;
    /// relay failures are reported through the notifier and the outcome.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let payload = self.begin_submit()?;

        let outcome = {
            let _guard = GeneratingGuard(&mut self.generating);
            self.transport.send(&payload).await
        };

        Ok(self.finish_submit(outcome))
    }
}
