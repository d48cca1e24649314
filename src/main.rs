use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use voice_relay::client::{FormController, HttpRelay, LogNotifier, SelectedFile, SubmitOutcome};
use voice_relay::{create_router, AppState, RelayConfig};

#[derive(Parser)]
#[command(name = "voice-relay-server", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the relay server and the upload form (default)
    Serve,

    /// Submit a sample and text to a running relay and save the audio
    Generate {
        /// Reference audio sample
        #[arg(short, long)]
        audio: PathBuf,

        /// Text to speak
        #[arg(short, long)]
        text: String,

        /// Relay base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        server: String,

        /// Where to write the generated audio
        #[arg(short, long, default_value = "cloned-voice.mp3")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Generate {
            audio,
            text,
            server,
            out,
        } => generate(audio, text, &server, out).await,
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = RelayConfig::from_env()?;
    let addr = config.address()?;

    tracing::info!("Voice Relay Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Static directory: {}", config.static_dir.display());
    if config.api_key.is_none() {
        tracing::warn!("ELEVENLABS_API_KEY is not set; /api/clone will answer 400");
    }

    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn generate(audio: PathBuf, text: String, server: &str, out: PathBuf) -> anyhow::Result<()> {
    let file = SelectedFile::from_path(&audio)
        .with_context(|| format!("Failed to read {}", audio.display()))?;

    let relay = HttpRelay::new(server);
    tracing::info!("Submitting {} to {}", audio.display(), relay.endpoint());

    let mut form = FormController::new(relay, LogNotifier);
    if !form.select_file(file) {
        bail!("{} is not an audio file", audio.display());
    }
    form.set_text(text);

    match form.submit().await? {
        SubmitOutcome::Generated { bytes } => {
            if let Some(result) = form.result() {
                result.save(&out)?;
                tracing::info!(
                    "Wrote {} bytes of {} to {}",
                    bytes,
                    result.content_type(),
                    out.display()
                );
            }
            Ok(())
        }
        SubmitOutcome::Rejected { message } => bail!("Relay rejected the request: {}", message),
        SubmitOutcome::Failed => bail!("Generation failed"),
    }
}
