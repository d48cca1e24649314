pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod tts;

pub use api::routes::{create_router, AppState};
pub use config::RelayConfig;
pub use error::AppError;
