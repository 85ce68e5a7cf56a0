//! The provider seam: whatever actually generates text and audio.

use serde::{Deserialize, Serialize};

use crate::error::NarrativeError;

/// A text generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRequest {
    pub model: String,
    pub prompt: String,
    pub thinking_budget: u32,
}

/// A speech synthesis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: String,
    /// Full text to read, style preamble included.
    pub text: String,
    pub sample_rate_hz: u32,
    pub channels: u16,
}

/// Raw 16-bit little-endian PCM returned by a speech provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechClip {
    pub pcm: Vec<u8>,
    pub sample_rate_hz: u32,
    pub channels: u16,
}

impl SpeechClip {
    /// Frames per channel.
    pub fn frame_count(&self) -> usize {
        self.pcm.len() / 2 / usize::from(self.channels.max(1))
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate_hz == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / f64::from(self.sample_rate_hz)
    }
}

/// Generates narrative text and speech. Implementations wrap a remote
/// service; tests use scripted fakes.
pub trait NarrativeProvider {
    fn generate_text(&self, request: &TextRequest) -> Result<String, NarrativeError>;

    fn synthesize_speech(&self, request: &SpeechRequest) -> Result<SpeechClip, NarrativeError>;
}

impl<P: NarrativeProvider + ?Sized> NarrativeProvider for &P {
    fn generate_text(&self, request: &TextRequest) -> Result<String, NarrativeError> {
        (**self).generate_text(request)
    }

    fn synthesize_speech(&self, request: &SpeechRequest) -> Result<SpeechClip, NarrativeError> {
        (**self).synthesize_speech(request)
    }
}
