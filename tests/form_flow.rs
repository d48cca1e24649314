//! Drives the form controller against a live relay, with the provider mocked.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use voice_relay::client::{FormController, HttpRelay, Notifier, SelectedFile, SubmitOutcome};
use voice_relay::{create_router, AppState, RelayConfig};

#[derive(Clone, Default)]
struct Alerts(Arc<Mutex<Vec<String>>>);

impl Notifier for Alerts {
    fn alert(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

impl Alerts {
    fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

async fn start_relay(config: RelayConfig) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(Arc::new(AppState::new(config)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn sample() -> SelectedFile {
    SelectedFile::new("sample.wav", "audio/wav", b"RIFF\0\0\0\0WAVEfmt ".to_vec())
}

#[tokio::test]
async fn test_generates_playable_result() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"ID3mpeg".to_vec(), "audio/mpeg"))
        .expect(1)
        .mount(&provider)
        .await;

    let addr = start_relay(RelayConfig {
        api_key: Some("test-key".to_string()),
        provider_url: provider.uri(),
        ..RelayConfig::default()
    })
    .await;

    let alerts = Alerts::default();
    let mut form = FormController::new(HttpRelay::new(&format!("http://{addr}")), alerts.clone());
    assert!(form.select_file(sample()));
    form.set_text("Hello world");

    let outcome = form.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Generated { bytes: 7 });
    assert!(!form.is_generating());
    assert_eq!(&form.result().unwrap().data[..], b"ID3mpeg");
    assert!(alerts.all().is_empty());
}

#[tokio::test]
async fn test_missing_key_alerts_relay_message() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    let addr = start_relay(RelayConfig {
        api_key: None,
        provider_url: provider.uri(),
        ..RelayConfig::default()
    })
    .await;

    let alerts = Alerts::default();
    let mut form = FormController::new(HttpRelay::new(&format!("http://{addr}")), alerts.clone());
    form.select_file(sample());
    form.set_text("Hello world");

    let outcome = form.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            message: "Missing text or API Key".to_string()
        }
    );
    assert!(!form.is_generating());
    assert!(form.result().is_none());
    assert_eq!(alerts.all(), vec!["Error: Missing text or API Key".to_string()]);
}

#[tokio::test]
async fn test_provider_failure_alerts_tts_failed() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "detail": "too_many_requests" })),
        )
        .mount(&provider)
        .await;

    let addr = start_relay(RelayConfig {
        api_key: Some("test-key".to_string()),
        provider_url: provider.uri(),
        ..RelayConfig::default()
    })
    .await;

    let alerts = Alerts::default();
    let mut form = FormController::new(HttpRelay::new(&format!("http://{addr}")), alerts.clone());
    form.select_file(sample());
    form.set_text("Hello world");

    form.submit().await.unwrap();

    assert!(!form.is_generating());
    assert_eq!(alerts.all(), vec!["Error: TTS Failed".to_string()]);
}

#[tokio::test]
async fn test_unreachable_relay_alerts_generic_failure() {
    let alerts = Alerts::default();
    let mut form = FormController::new(HttpRelay::new("http://127.0.0.1:1"), alerts.clone());
    form.select_file(sample());
    form.set_text("Hello world");

    assert_eq!(form.submit().await.unwrap(), SubmitOutcome::Failed);
    assert!(!form.is_generating());
    assert_eq!(alerts.all(), vec!["Something went wrong!".to_string()]);
}
