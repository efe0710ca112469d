//! Error types for the conjugation-practice core.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors surfaced by the Gemini gateway and the sentence pipelines.
///
/// There are no retries anywhere in this crate: every failure is surfaced once
/// to the immediate caller, which owns user-facing messaging and manual retry.
#[derive(Error, Debug)]
pub enum CoreError {
    /// `GEMINI_API_KEY` is absent or blank. Raised before any network call.
    #[error("GEMINI_API_KEY is missing; set it in the environment or .env")]
    MissingApiKey,

    #[error("Gemini request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the Gemini API, with the body passed through.
    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The service returned no body where one is required (challenge, speech).
    /// The table pipeline treats an empty body as a valid empty result instead.
    #[error("generation returned no data")]
    EmptyResponse,

    /// Response body did not parse as the schema-constrained JSON shape.
    /// Never repaired, however close to valid it looks.
    #[error("generation response did not match the expected shape: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Speech request succeeded but carried no inline audio payload.
    #[error("no audio data received")]
    NoAudioData,

    #[error("audio payload is not valid base64: {0}")]
    AudioDecode(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
