use serde::{Deserialize, Serialize};

/// Stock "Rachel" voice. Every request is synthesized with it; the uploaded
/// reference sample never reaches the provider.
pub const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const MODEL_ID: &str = "eleven_multilingual_v2";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: MODEL_ID.to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }
}
