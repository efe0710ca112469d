//! Speech playback through an owned output device.
//!
//! The output stream is opened once in [`Speaker::new`] and lives as long as
//! the `Speaker`; opening a stream per utterance exhausts the host audio
//! subsystem. One playback at a time is a caller convention, enforced at the
//! UI/CLI layer, not here.

use crate::error::{VoiceError, VoiceResult};
use crate::pcm::{pcm16le_to_f32, SAMPLE_RATE};
use parler_core::GeminiClient;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::sync::Arc;
use tracing::info;

/// Owns the audio output for speech playback.
pub struct Speaker {
    _stream: OutputStream,
    _stream_handle: OutputStreamHandle,
    sink: Arc<Sink>,
}

impl Speaker {
    /// Open the default output device. Create one `Speaker` per process and
    /// reuse it for every utterance.
    pub fn new() -> VoiceResult<Self> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| VoiceError::Playback(e.to_string()))?;
        let sink = Sink::try_new(&stream_handle).map_err(|e| VoiceError::Playback(e.to_string()))?;
        info!("speaker ready (mono, {} Hz)", SAMPLE_RATE);
        Ok(Self {
            _stream: stream,
            _stream_handle: stream_handle,
            sink: Arc::new(sink),
        })
    }

    /// Synthesize `text` through the gateway and play it to completion.
    /// Resolves when playback naturally ends; the output device stays open.
    pub async fn speak(&self, client: &GeminiClient, text: &str) -> VoiceResult<()> {
        let bytes = client.generate_speech(text).await?;
        let samples = pcm16le_to_f32(&bytes);
        info!(chars = text.len(), samples = samples.len(), "playing utterance");
        self.play_samples(samples).await
    }

    /// Play pre-decoded amplitude samples to completion.
    pub async fn play_samples(&self, samples: Vec<f32>) -> VoiceResult<()> {
        if samples.is_empty() {
            return Ok(());
        }
        let source = SamplesBuffer::new(1, SAMPLE_RATE, samples);
        self.sink.append(source);
        // sleep_until_end blocks, so park it off the async thread.
        let sink = Arc::clone(&self.sink);
        tokio::task::spawn_blocking(move || sink.sleep_until_end())
            .await
            .map_err(|e| VoiceError::Playback(e.to_string()))?;
        Ok(())
    }

    /// Whether the sink currently has queued samples.
    pub fn is_playing(&self) -> bool {
        !self.sink.empty()
    }

    /// Stop playback immediately and clear the queue.
    pub fn stop(&self) {
        self.sink.stop();
    }
}
