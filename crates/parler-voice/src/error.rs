//! Error types for speech playback.

use thiserror::Error;

/// Result type alias for voice operations.
pub type VoiceResult<T> = Result<T, VoiceError>;

/// Errors that can occur while synthesizing or playing speech.
#[derive(Error, Debug)]
pub enum VoiceError {
    /// Synthesis request failed (missing key, transport, API, missing audio).
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] parler_core::CoreError),

    #[error("audio playback error: {0}")]
    Playback(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
