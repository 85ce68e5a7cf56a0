//! Builds provider requests from the config and applies fallbacks.

use codex_profile::UserProfile;
use tracing::{debug, warn};

use crate::config::NarrativeConfig;
use crate::error::NarrativeError;
use crate::prompt::{NarrativeKind, fallback_text, render_prompt};
use crate::provider::{NarrativeProvider, SpeechClip, SpeechRequest, TextRequest};

/// Narrative front end over a [`NarrativeProvider`].
#[derive(Debug, Clone)]
pub struct Narrator<P> {
    provider: P,
    config: NarrativeConfig,
}

impl<P: NarrativeProvider> Narrator<P> {
    pub fn new(provider: P, config: NarrativeConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// The text request that [`narrate`](Self::narrate) would send.
    pub fn text_request(&self, kind: NarrativeKind, profile: &UserProfile) -> TextRequest {
        TextRequest {
            model: self.config.text_model.clone(),
            prompt: render_prompt(kind, profile, &self.config),
            thinking_budget: self.config.thinking_budget,
        }
    }

    /// Generate narrative text for `kind`.
    ///
    /// A failed or empty response is replaced by the kind's fallback text;
    /// only [`NarrativeKind::MentorAdvice`], which has none, returns the error.
    pub fn narrate(&self, kind: NarrativeKind, profile: &UserProfile) -> Result<String, NarrativeError> {
        let request = self.text_request(kind, profile);
        let result = self.provider.generate_text(&request).and_then(|text| {
            if text.trim().is_empty() {
                Err(NarrativeError::EmptyResponse)
            } else {
                Ok(text)
            }
        });
        match result {
            Ok(text) => {
                debug!(kind = kind.name(), chars = text.len(), "narrative generated");
                Ok(text)
            }
            Err(e) => match fallback_text(kind, profile) {
                Some(fallback) => {
                    warn!(kind = kind.name(), error = %e, "narrative generation failed, using fallback");
                    Ok(fallback)
                }
                None => Err(e),
            },
        }
    }

    /// The speech request that [`speak`](Self::speak) would send.
    pub fn speech_request(&self, text: &str) -> SpeechRequest {
        let speech = &self.config.speech;
        SpeechRequest {
            model: speech.model.clone(),
            voice: speech.voice.clone(),
            text: format!("{}{}", speech.style_preamble, text),
            sample_rate_hz: speech.sample_rate_hz,
            channels: speech.channels,
        }
    }

    /// Synthesize `text` as speech. An empty clip counts as [`NarrativeError::NoAudio`].
    pub fn speak(&self, text: &str) -> Result<SpeechClip, NarrativeError> {
        let clip = self
            .provider
            .synthesize_speech(&self.speech_request(text))
            .inspect_err(|e| warn!(error = %e, "speech synthesis failed"))?;
        if clip.pcm.is_empty() {
            warn!("speech synthesis returned no audio");
            return Err(NarrativeError::NoAudio);
        }
        Ok(clip)
    }
}
