//! Error types for narrative configuration and provider calls.

use thiserror::Error;

/// Errors from a narrative or speech provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NarrativeError {
    /// The provider reported a failure.
    #[error("provider error: {0}")]
    Provider(String),
    /// The provider returned no text.
    #[error("provider returned an empty response")]
    EmptyResponse,
    /// The speech response carried no audio payload.
    #[error("speech response contained no audio")]
    NoAudio,
}

/// Errors from loading a [`NarrativeConfig`](crate::NarrativeConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
