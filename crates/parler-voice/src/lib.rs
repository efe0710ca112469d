//! parler-voice: speech playback for generated sentences.
//!
//! Synthesis goes through the `parler-core` Gemini gateway; this crate owns
//! the decode (base64 payload -> LE i16 PCM -> f32 amplitudes) and the audio
//! output device. A [`Speaker`] is created once and holds the output stream
//! for its whole lifetime; callers keep at most one playback in flight.

pub mod error;
pub mod pcm;
pub mod speaker;

pub use error::{VoiceError, VoiceResult};
pub use pcm::{pcm16le_to_f32, SAMPLE_RATE};
pub use speaker::Speaker;
