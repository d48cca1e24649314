//! Rust model of the upload form: file selection, text entry, one relay call
//! at a time, and the resulting audio.

pub mod controller;
pub mod form;
pub mod relay;

pub use controller::{FormController, FormError, LogNotifier, Notifier, SubmitOutcome};
pub use form::{ResultAudio, SelectedFile};
pub use relay::{ClientError, ClonePayload, HttpRelay, RelayResponse, RelayTransport};
