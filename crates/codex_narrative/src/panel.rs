//! Mentor panel playback state machine.
//!
//! ```text
//!            request            audio_started
//!   Idle ------------> Loading ---------------> Playing <--+
//!    ^                  |  |                     |  ^      | toggle_pause
//!    |   failed /       |  |                     v  |      |
//!    +- audio_unavail. -+  |                    Paused ----+
//!    |                     |                     |
//!    +---- stop / playback_ended ----------------+
//! ```
//!
//! Each request gets a fresh [`RequestTicket`]. Async completions carry the
//! ticket back; a completion whose ticket is no longer current (a newer
//! request started, the panel was stopped, or the profile changed) is
//! ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prompt::NarrativeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
}

/// Handle for one in-flight narrative request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    id: u64,
    kind: NarrativeKind,
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> NarrativeKind {
        self.kind
    }
}

#[derive(Debug, Clone, Default)]
pub struct MentorPanel {
    state: PlaybackState,
    active: Option<NarrativeKind>,
    current: Option<u64>,
    issued: u64,
    content: Option<String>,
}

impl MentorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn active_kind(&self) -> Option<NarrativeKind> {
        self.active
    }

    /// Last narrative text received.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Audio controls (stop, pause) are shown.
    pub fn is_audio_active(&self) -> bool {
        matches!(self.state, PlaybackState::Playing | PlaybackState::Paused)
    }

    /// Action buttons are disabled.
    pub fn is_busy(&self) -> bool {
        self.state == PlaybackState::Loading
    }

    /// Start a request for `kind`, superseding whatever is running.
    ///
    /// Returns `None` when the same kind is already loading or playing.
    pub fn request(&mut self, kind: NarrativeKind) -> Option<RequestTicket> {
        if self.state != PlaybackState::Idle && self.active == Some(kind) {
            debug!(kind = kind.name(), "request already active");
            return None;
        }
        self.stop();
        self.issued += 1;
        self.current = Some(self.issued);
        self.state = PlaybackState::Loading;
        self.active = Some(kind);
        Some(RequestTicket {
            id: self.issued,
            kind,
        })
    }

    fn accept(&self, ticket: RequestTicket, expected: &[PlaybackState]) -> bool {
        let ok = self.current == Some(ticket.id) && expected.contains(&self.state);
        if !ok {
            debug!(ticket = ticket.id, state = ?self.state, "ignoring stale completion");
        }
        ok
    }

    /// Narrative text arrived. The panel stays `Loading` until audio starts.
    pub fn text_ready(&mut self, ticket: RequestTicket, text: String) -> bool {
        if !self.accept(ticket, &[PlaybackState::Loading]) {
            return false;
        }
        self.content = Some(text);
        true
    }

    /// Audio playback began.
    pub fn audio_started(&mut self, ticket: RequestTicket) -> bool {
        if !self.accept(ticket, &[PlaybackState::Loading]) {
            return false;
        }
        self.state = PlaybackState::Playing;
        true
    }

    /// Speech could not be produced; the text (if any) stays visible.
    pub fn audio_unavailable(&mut self, ticket: RequestTicket) -> bool {
        if !self.accept(ticket, &[PlaybackState::Loading]) {
            return false;
        }
        self.finish();
        true
    }

    /// The request failed outright.
    pub fn failed(&mut self, ticket: RequestTicket) -> bool {
        if !self.accept(ticket, &[PlaybackState::Loading]) {
            return false;
        }
        self.finish();
        true
    }

    /// Audio reached its end.
    pub fn playback_ended(&mut self, ticket: RequestTicket) -> bool {
        if !self.accept(ticket, &[PlaybackState::Playing, PlaybackState::Paused]) {
            return false;
        }
        self.finish();
        true
    }

    /// Flip between playing and paused. Other states are unchanged.
    pub fn toggle_pause(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
            other => other,
        };
        self.state
    }

    /// Stop playback and invalidate the outstanding ticket.
    pub fn stop(&mut self) {
        self.finish();
    }

    /// The profile changed: drop everything, including shown text.
    pub fn reset(&mut self) {
        self.finish();
        self.content = None;
    }

    fn finish(&mut self) {
        self.state = PlaybackState::Idle;
        self.active = None;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut p = MentorPanel::new();
        let t = p.request(NarrativeKind::ProfileNarrative).unwrap();
        assert_eq!(p.state(), PlaybackState::Loading);
        assert!(p.is_busy());
        assert!(p.text_ready(t, "hello".into()));
        assert_eq!(p.content(), Some("hello"));
        assert!(p.audio_started(t));
        assert_eq!(p.state(), PlaybackState::Playing);
        assert!(p.is_audio_active());
        assert_eq!(p.toggle_pause(), PlaybackState::Paused);
        assert_eq!(p.toggle_pause(), PlaybackState::Playing);
        assert!(p.playback_ended(t));
        assert_eq!(p.state(), PlaybackState::Idle);
        assert_eq!(p.active_kind(), None);
        assert_eq!(p.content(), Some("hello"));
    }

    #[test]
    fn same_kind_while_active_is_noop() {
        let mut p = MentorPanel::new();
        let t = p.request(NarrativeKind::MentorAdvice).unwrap();
        assert!(p.request(NarrativeKind::MentorAdvice).is_none());
        // original ticket still live
        assert!(p.text_ready(t, "go".into()));
    }

    #[test]
    fn newer_request_supersedes() {
        let mut p = MentorPanel::new();
        let old = p.request(NarrativeKind::InitialCalibration).unwrap();
        let new = p.request(NarrativeKind::MentorAdvice).unwrap();
        assert_ne!(old.id(), new.id());
        assert!(!p.text_ready(old, "stale".into()));
        assert!(!p.audio_started(old));
        assert_eq!(p.content(), None);
        assert!(p.text_ready(new, "fresh".into()));
        assert_eq!(p.content(), Some("fresh"));
        assert_eq!(p.active_kind(), Some(NarrativeKind::MentorAdvice));
    }

    #[test]
    fn reset_drops_in_flight() {
        let mut p = MentorPanel::new();
        let t = p.request(NarrativeKind::ProfileNarrative).unwrap();
        assert!(p.text_ready(t, "old profile".into()));
        p.reset();
        assert_eq!(p.content(), None);
        assert!(!p.audio_started(t));
        assert_eq!(p.state(), PlaybackState::Idle);
    }

    #[test]
    fn audio_unavailable_returns_to_idle() {
        let mut p = MentorPanel::new();
        let t = p.request(NarrativeKind::ProfileNarrative).unwrap();
        assert!(p.text_ready(t, "text only".into()));
        assert!(p.audio_unavailable(t));
        assert_eq!(p.state(), PlaybackState::Idle);
        assert_eq!(p.content(), Some("text only"));
        // same kind may be requested again once idle
        assert!(p.request(NarrativeKind::ProfileNarrative).is_some());
    }

    #[test]
    fn stop_invalidates_ticket() {
        let mut p = MentorPanel::new();
        let t = p.request(NarrativeKind::ProfileNarrative).unwrap();
        assert!(p.audio_started(t));
        p.stop();
        assert!(!p.playback_ended(t));
        assert_eq!(p.state(), PlaybackState::Idle);
    }

    #[test]
    fn failure_path() {
        let mut p = MentorPanel::new();
        let t = p.request(NarrativeKind::MentorAdvice).unwrap();
        assert!(p.failed(t));
        assert!(!p.failed(t));
        assert_eq!(p.state(), PlaybackState::Idle);
    }

    #[test]
    fn toggle_ignored_when_idle_or_loading() {
        let mut p = MentorPanel::new();
        assert_eq!(p.toggle_pause(), PlaybackState::Idle);
        p.request(NarrativeKind::MentorAdvice).unwrap();
        assert_eq!(p.toggle_pause(), PlaybackState::Loading);
    }
}
