//! Gemini gateway: one authenticated `generateContent` call per pipeline step.
//!
//! Thin by design. No retries, no timeout beyond the transport's 60s, no
//! response repair: a failed or malformed call is surfaced once to the caller,
//! which decides whether the user may re-trigger it.
//!
//! API key: `GEMINI_API_KEY` in `.env`. Text model defaults to
//! `gemini-2.5-flash`; speech to `gemini-2.5-flash-preview-tts` with the
//! "Puck" voice. All three are env-overridable.

use crate::error::{CoreError, CoreResult};
use crate::schema::Schema;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_VOICE: &str = "Puck";

// Gemini generateContent request/response wire shapes.
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(
        default,
        rename = "inlineData",
        skip_serializing_if = "Option::is_none"
    )]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize)]
struct InlineData {
    #[serde(default, rename = "mimeType", skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<Schema>,
    #[serde(rename = "responseModalities", skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(rename = "speechConfig", skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

#[derive(Serialize)]
struct SpeechConfig {
    #[serde(rename = "voiceConfig")]
    voice_config: VoiceConfig,
}

#[derive(Serialize)]
struct VoiceConfig {
    #[serde(rename = "prebuiltVoiceConfig")]
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Serialize)]
struct PrebuiltVoiceConfig {
    #[serde(rename = "voiceName")]
    voice_name: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateResponse {
    fn into_first_parts(self) -> Vec<Part> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
    }
}

/// Authenticated Gemini client shared by the three pipelines.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    text_model: String,
    tts_model: String,
    voice: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Build from environment. Fails fast with [`CoreError::MissingApiKey`]
    /// when `GEMINI_API_KEY` is unset or blank; no network call is made here.
    pub fn from_env() -> CoreResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(CoreError::MissingApiKey)?;
        let mut me = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_TEXT_MODEL") {
            me.text_model = model;
        }
        if let Ok(model) = std::env::var("GEMINI_TTS_MODEL") {
            me.tts_model = model;
        }
        if let Ok(voice) = std::env::var("GEMINI_TTS_VOICE") {
            me.voice = voice;
        }
        Ok(me)
    }

    /// Build with an explicit API key and default models.
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            client,
        }
    }

    /// Point at a different API base (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// One text-generation call. Returns the first candidate's first part text;
    /// an empty string when the service produced no candidates (callers decide
    /// whether empty is fatal).
    pub async fn generate(&self, prompt: &str, schema: Option<Schema>) -> CoreResult<String> {
        let generation_config = schema.map(|s| GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(s),
            response_modalities: None,
            speech_config: None,
        });
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config,
        };
        let response = self.post(&self.text_model, &body).await?;
        let text = response
            .into_first_parts()
            .into_iter()
            .find_map(|p| p.text)
            .unwrap_or_default();
        debug!(model = %self.text_model, chars = text.len(), "generation complete");
        Ok(text)
    }

    /// One speech-synthesis call. Returns the decoded raw audio bytes
    /// (mono 16-bit little-endian PCM at 24 kHz as produced by the service).
    /// A success response without an inline audio payload is
    /// [`CoreError::NoAudioData`].
    pub async fn generate_speech(&self, text: &str) -> CoreResult<Vec<u8>> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: None,
                response_schema: None,
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: self.voice.clone(),
                        },
                    },
                }),
            }),
        };
        let response = self.post(&self.tts_model, &body).await?;
        let payload = response
            .into_first_parts()
            .into_iter()
            .find_map(|p| p.inline_data)
            .ok_or(CoreError::NoAudioData)?;
        let bytes = BASE64.decode(payload.data.as_bytes())?;
        debug!(model = %self.tts_model, bytes = bytes.len(), "speech synthesis complete");
        Ok(bytes)
    }

    async fn post(&self, model: &str, body: &GenerateRequest) -> CoreResult<GenerateResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(CoreError::Api { status, body });
        }
        Ok(res.json().await?)
    }
}
