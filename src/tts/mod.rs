pub mod elevenlabs;
pub mod voice;

pub use elevenlabs::ElevenLabsClient;
pub use voice::{SynthesisRequest, VoiceSettings, MODEL_ID, VOICE_ID};
