//! Narrative and speech collaborator interface.
//!
//! The derivation core never talks to a generative service. This crate is
//! the seam: it turns a [`UserProfile`](codex_profile::UserProfile) into
//! prompts according to an explicit [`NarrativeConfig`], hands them to a
//! caller-supplied [`NarrativeProvider`], substitutes fallback text when the
//! provider fails, and tracks the mentor panel's playback state so stale
//! responses are dropped.

pub mod config;
pub mod error;
pub mod narrator;
pub mod panel;
pub mod prompt;
pub mod provider;

pub use config::{NarrativeConfig, PromptTemplates, SpeechConfig};
pub use error::{ConfigError, NarrativeError};
pub use narrator::Narrator;
pub use panel::{MentorPanel, PlaybackState, RequestTicket};
pub use prompt::{ALL_KINDS, NarrativeKind, PromptVars, fallback_text, render_prompt, render_template};
pub use provider::{NarrativeProvider, SpeechClip, SpeechRequest, TextRequest};
