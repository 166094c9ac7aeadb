//! The session state container: current form values, brand registry, the
//! single output slot, and the generation lifecycle.
//!
//! Transitions are explicit methods so the container is independent of any
//! particular front end. Submissions are mutually exclusive and tagged with
//! a monotonically increasing request id; a completion carrying a stale id
//! is discarded, so a late response can never clobber a newer one.

use crate::brand::{BrandProfile, BrandRegistry};
use crate::catalog::{Framework, OutputLanguage, Pillar, Tone};
use crate::config::constants::ui;
use crate::config::loader::RequestDefaults;
use crate::generator::{GenerateError, GeneratedResponse};
use crate::prompt::ContentRequest;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How long the transient "copied" indicator stays visible.
pub const COPY_INDICATOR_TTL: Duration = Duration::from_millis(ui::COPY_INDICATOR_MILLIS);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("a generation request is already in flight")]
    RequestInFlight,
    #[error("nothing to copy: no generated content")]
    NothingToCopy,
}

/// Lifecycle phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting { request_id: u64 },
}

pub struct Session {
    request: ContentRequest,
    brands: BrandRegistry,
    output: Option<GeneratedResponse>,
    last_error: Option<String>,
    phase: Phase,
    next_request_id: u64,
    clipboard: Option<String>,
    copied_until: Option<Instant>,
    defaults: RequestDefaults,
}

impl Session {
    pub fn new(defaults: RequestDefaults) -> Self {
        let request = ContentRequest {
            topic: String::new(),
            description: String::new(),
            framework: defaults.framework,
            pillar: defaults.pillar,
            language: defaults.language,
            tone: defaults.tone,
            target_audience: None,
            brand: None,
        };
        Self {
            request,
            brands: BrandRegistry::new(),
            output: None,
            last_error: None,
            phase: Phase::Idle,
            next_request_id: 0,
            clipboard: None,
            copied_until: None,
            defaults,
        }
    }

    pub fn request(&self) -> &ContentRequest {
        &self.request
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn output(&self) -> Option<&GeneratedResponse> {
        self.output.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn brands(&self) -> &BrandRegistry {
        &self.brands
    }

    // -- form edits ---------------------------------------------------------

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.request.topic = topic.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.request.description = description.into();
    }

    pub fn set_framework(&mut self, framework: Framework) {
        self.request.framework = framework;
    }

    pub fn set_pillar(&mut self, pillar: Pillar) {
        self.request.pillar = pillar;
    }

    pub fn set_language(&mut self, language: OutputLanguage) {
        self.request.language = language;
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.request.tone = tone;
    }

    pub fn set_audience(&mut self, audience: Option<String>) {
        self.request.target_audience = audience.filter(|a| !a.is_empty());
    }

    // -- brand registry -----------------------------------------------------

    /// Add a profile to the registry; it becomes the selected brand and its
    /// defaults overwrite tone/audience in the current request.
    pub fn add_brand(&mut self, profile: BrandProfile) {
        self.brands.add(profile);
        self.apply_selected_brand();
    }

    /// Select an existing profile. Returns false when no such id exists.
    pub fn select_brand(&mut self, id: &str) -> bool {
        if self.brands.select(id) {
            self.apply_selected_brand();
            true
        } else {
            false
        }
    }

    pub fn deselect_brand(&mut self) {
        self.brands.deselect();
        self.request.brand = None;
    }

    /// Remove a profile. When the selected brand is deleted, the selection
    /// clears and the brand-derived tone/audience overrides revert.
    pub fn remove_brand(&mut self, id: &str) -> Option<BrandProfile> {
        let was_selected = self
            .request
            .brand
            .as_ref()
            .is_some_and(|brand| brand.id == id);
        let removed = self.brands.remove(id)?;

        if was_selected {
            self.request.brand = None;
            if self.request.tone == removed.default_tone {
                self.request.tone = self.defaults.tone;
            }
            if self.request.target_audience.as_deref() == Some(removed.default_audience.as_str())
            {
                self.request.target_audience = None;
            }
        }
        Some(removed)
    }

    fn apply_selected_brand(&mut self) {
        if let Some(brand) = self.brands.selected().cloned() {
            self.request.tone = brand.default_tone;
            if !brand.default_audience.is_empty() {
                self.request.target_audience = Some(brand.default_audience.clone());
            }
            self.request.brand = Some(brand);
        }
    }

    // -- generation lifecycle -----------------------------------------------

    /// Enter the submitting phase. Clears prior output and returns the id
    /// the eventual completion must carry. Refused while a request is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Result<u64, SessionError> {
        if matches!(self.phase, Phase::Submitting { .. }) {
            return Err(SessionError::RequestInFlight);
        }
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.output = None;
        self.last_error = None;
        self.phase = Phase::Submitting { request_id };
        Ok(request_id)
    }

    /// Record the outcome of a submission. Returns false when the id is
    /// stale and the completion was discarded.
    pub fn complete(
        &mut self,
        request_id: u64,
        result: Result<GeneratedResponse, GenerateError>,
    ) -> bool {
        match self.phase {
            Phase::Submitting { request_id: current } if current == request_id => {
                match result {
                    Ok(response) => self.output = Some(response),
                    Err(err) => {
                        tracing::error!(error = %err, "generation request failed");
                        self.last_error =
                            Some("Failed to generate content. Please try again.".to_string());
                    }
                }
                self.phase = Phase::Idle;
                true
            }
            _ => {
                tracing::debug!(request_id, "discarding stale generation result");
                false
            }
        }
    }

    // -- output actions -----------------------------------------------------

    /// Reset topic and description (and audience, when no brand is active)
    /// without touching the brand registry or selection.
    pub fn clear(&mut self) {
        self.request.topic = String::new();
        self.request.description = String::new();
        if self.request.brand.is_none() {
            self.request.target_audience = None;
        }
    }

    /// Copy the generated content into the session clipboard slot and raise
    /// the transient indicator. Returns the exact content string.
    pub fn copy(&mut self, now: Instant) -> Result<String, SessionError> {
        let content = self
            .output
            .as_ref()
            .map(|response| response.content.clone())
            .ok_or(SessionError::NothingToCopy)?;
        self.clipboard = Some(content.clone());
        self.copied_until = Some(now + COPY_INDICATOR_TTL);
        Ok(content)
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Whether the "copied" indicator is still visible at `now`.
    pub fn copy_indicator_visible(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session() -> Session {
        Session::new(RequestDefaults::default())
    }

    fn response(content: &str) -> GeneratedResponse {
        GeneratedResponse {
            content: content.to_string(),
            framework: Framework::Aida,
            timestamp: Utc::now(),
        }
    }

    fn brand(id: &str, tone: Tone, audience: &str) -> BrandProfile {
        BrandProfile {
            id: id.to_string(),
            name: id.to_string(),
            industry: "Retail".to_string(),
            description: "A brand".to_string(),
            default_tone: tone,
            default_audience: audience.to_string(),
        }
    }

    #[test]
    fn submit_then_complete_returns_to_idle() {
        let mut session = session();
        let id = session.begin_submit().unwrap();
        assert!(matches!(session.phase(), Phase::Submitting { .. }));

        assert!(session.complete(id, Ok(response("copy"))));
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.output().unwrap().content, "copy");
        assert!(session.last_error().is_none());
    }

    #[test]
    fn failure_surfaces_generic_message_and_returns_to_idle() {
        let mut session = session();
        session.set_topic("Earbuds");
        let id = session.begin_submit().unwrap();

        let err = GenerateError::Transport("connection reset".to_string());
        assert!(session.complete(id, Err(err)));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.output().is_none());
        assert!(session.last_error().is_some());
        // Input state is preserved for retry.
        assert_eq!(session.request().topic, "Earbuds");
    }

    #[test]
    fn overlapping_submit_is_refused() {
        let mut session = session();
        let _id = session.begin_submit().unwrap();
        assert_eq!(session.begin_submit(), Err(SessionError::RequestInFlight));
    }

    #[test]
    fn submitting_clears_prior_output() {
        let mut session = session();
        let id = session.begin_submit().unwrap();
        session.complete(id, Ok(response("old")));

        let _id = session.begin_submit().unwrap();
        assert!(session.output().is_none());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut session = session();
        let first = session.begin_submit().unwrap();
        assert!(session.complete(first, Ok(response("first"))));

        let second = session.begin_submit().unwrap();
        // The first request resolves again late; its id is stale.
        assert!(!session.complete(first, Ok(response("late duplicate"))));
        assert!(session.output().is_none());

        assert!(session.complete(second, Ok(response("second"))));
        assert_eq!(session.output().unwrap().content, "second");
    }

    #[test]
    fn clear_resets_topic_description_and_unbranded_audience() {
        let mut session = session();
        session.set_topic("Earbuds");
        session.set_description("Launch post");
        session.set_audience(Some("Runners".to_string()));

        session.clear();
        assert!(session.request().topic.is_empty());
        assert!(session.request().description.is_empty());
        assert!(session.request().target_audience.is_none());
    }

    #[test]
    fn clear_keeps_audience_when_brand_is_active() {
        let mut session = session();
        session.add_brand(brand("b", Tone::Casual, "Commuters"));
        session.set_topic("Earbuds");

        session.clear();
        assert!(session.request().topic.is_empty());
        assert_eq!(session.request().target_audience.as_deref(), Some("Commuters"));
        assert!(session.request().brand.is_some());
    }

    #[test]
    fn selecting_brand_overwrites_tone_and_audience() {
        let mut session = session();
        session.set_tone(Tone::Professional);
        session.add_brand(brand("b", Tone::Witty, "Gamers"));

        assert_eq!(session.request().tone, Tone::Witty);
        assert_eq!(session.request().target_audience.as_deref(), Some("Gamers"));
    }

    #[test]
    fn deleting_selected_brand_clears_selection_and_overrides() {
        let mut session = session();
        session.add_brand(brand("b", Tone::Witty, "Gamers"));
        assert!(session.request().brand.is_some());

        session.remove_brand("b");
        assert!(session.request().brand.is_none());
        assert!(session.brands().selected().is_none());
        assert_eq!(session.request().tone, RequestDefaults::default().tone);
        assert!(session.request().target_audience.is_none());
    }

    #[test]
    fn deleting_selected_brand_keeps_user_edits() {
        let mut session = session();
        session.add_brand(brand("b", Tone::Witty, "Gamers"));
        // The user overrode the brand defaults afterwards.
        session.set_tone(Tone::Authoritative);
        session.set_audience(Some("Streamers".to_string()));

        session.remove_brand("b");
        assert_eq!(session.request().tone, Tone::Authoritative);
        assert_eq!(
            session.request().target_audience.as_deref(),
            Some("Streamers")
        );
    }

    #[test]
    fn copy_places_exact_content_and_indicator_reverts() {
        let mut session = session();
        let id = session.begin_submit().unwrap();
        session.complete(id, Ok(response("exact copy text")));

        let now = Instant::now();
        let copied = session.copy(now).unwrap();
        assert_eq!(copied, "exact copy text");
        assert_eq!(session.clipboard(), Some("exact copy text"));
        assert!(session.copy_indicator_visible(now));
        assert!(session.copy_indicator_visible(now + COPY_INDICATOR_TTL / 2));
        assert!(!session.copy_indicator_visible(now + COPY_INDICATOR_TTL));
    }

    #[test]
    fn copy_without_output_is_an_error() {
        let mut session = session();
        assert_eq!(
            session.copy(Instant::now()),
            Err(SessionError::NothingToCopy)
        );
    }
}
