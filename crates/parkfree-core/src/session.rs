//! Session State
//!
//! Owns the full list, search term, draft, and progress flags for one UI
//! session. Every change to the list or the term re-derives the filtered
//! view on the spot; the filtered view is never edited directly.

use crate::capture::capture_click;
use crate::domain::{AppendError, Draft, DraftField, FetchError, Location, ValidationError};
use crate::filter::filter_locations;
use crate::view::{compose, ComposedView};

/// Progress of the initial load
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Load failed; the list stays empty until reload
    Failed(String),
}

/// Progress of the current submission
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    /// Draft not usable; nothing was sent
    Rejected(ValidationError),
    /// Backend refused the record; draft kept for retry
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    locations: Vec<Location>,
    search_term: String,
    filtered: Vec<Location>,
    draft: Draft,
    load_state: LoadState,
    submit_state: SubmitState,
    /// Draft as it was sent by the in-flight submission
    pending: Option<Draft>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Reads
    // ========================

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn filtered(&self) -> &[Location] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit_state
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    /// List entries and markers for the current filtered view
    pub fn view(&self) -> ComposedView {
        compose(&self.filtered, self.locations.len())
    }

    // ========================
    // Transitions
    // ========================

    /// Mark a (re)load as in progress. The current list is kept until the
    /// result arrives.
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Apply the result of the initial load
    pub fn finish_load(&mut self, result: Result<Vec<Location>, FetchError>) {
        match result {
            Ok(locations) => {
                self.locations = locations;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                self.locations.clear();
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
        self.refresh_view();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh_view();
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// A map click overwrites the draft coordinates
    pub fn capture_click(&mut self, latitude: f64, longitude: f64) {
        capture_click(&mut self.draft, latitude, longitude);
    }

    /// Snapshot the draft for submission and mark the session busy.
    ///
    /// Returns `None` while another submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<Draft> {
        if self.is_submitting() {
            return None;
        }
        self.submit_state = SubmitState::Submitting;
        self.pending = Some(self.draft.clone());
        self.pending.clone()
    }

    /// Apply an append result. Only success clears the draft, and only if
    /// it was not edited while the submission was in flight.
    pub fn finish_submit(&mut self, result: Result<Location, AppendError>) {
        let sent = self.pending.take();
        match result {
            Ok(location) => {
                if sent.as_ref() == Some(&self.draft) {
                    self.draft.reset();
                }
                // A reload during the submit may already have brought the record in
                if !self.locations.iter().any(|loc| loc.id == location.id) {
                    self.locations.push(location);
                }
                self.submit_state = SubmitState::Idle;
                self.refresh_view();
            }
            Err(AppendError::Validation(e)) => {
                self.submit_state = SubmitState::Rejected(e);
            }
            Err(AppendError::Backend(e)) => {
                self.submit_state = SubmitState::Failed(e.to_string());
            }
        }
    }

    /// Clear a rejection or failure notice
    pub fn dismiss_notice(&mut self) {
        if matches!(self.submit_state, SubmitState::Rejected(_) | SubmitState::Failed(_)) {
            self.submit_state = SubmitState::Idle;
        }
    }

    fn refresh_view(&mut self) {
        self.filtered = filter_locations(&self.locations, &self.search_term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BackendError, LocationId};
    use crate::repository::seed_locations;

    fn loaded() -> Session {
        let mut session = Session::new();
        session.finish_load(Ok(seed_locations()));
        session
    }

    fn added(id: i64, name: &str) -> Location {
        Location {
            id: LocationId(id),
            name: name.to_string(),
            lat: 51.5,
            lng: -0.1,
            hours: "Evenings".to_string(),
        }
    }

    #[test]
    fn test_starts_loading_and_empty() {
        let session = Session::new();
        assert_eq!(session.load_state(), &LoadState::Loading);
        assert!(session.locations().is_empty());
        assert!(session.view().is_empty());
    }

    #[test]
    fn test_load_failure_keeps_list_empty() {
        let mut session = Session::new();
        session.finish_load(Err(FetchError::Status { status: 500, body: "boom".to_string() }));
        assert!(session.locations().is_empty());
        assert!(session.filtered().is_empty());
        assert!(matches!(session.load_state(), LoadState::Failed(msg) if msg.contains("500")));
    }

    #[test]
    fn test_retry_after_failed_load() {
        let mut session = Session::new();
        session.finish_load(Err(FetchError::Transport("offline".to_string())));
        session.begin_load();
        assert_eq!(session.load_state(), &LoadState::Loading);

        session.set_search_term("manchester");
        session.finish_load(Ok(seed_locations()));
        assert_eq!(session.load_state(), &LoadState::Ready);
        assert_eq!(session.filtered().len(), 1);
    }

    #[test]
    fn test_search_rederives_view() {
        let mut session = loaded();
        assert_eq!(session.filtered().len(), 2);

        session.set_search_term("BRISTOL");
        assert_eq!(session.filtered().len(), 1);
        assert_eq!(session.view().summary(), "1 of 2 locations");

        session.set_search_term("");
        assert_eq!(session.filtered(), session.locations());
    }

    #[test]
    fn test_successful_submit() {
        let mut session = loaded();
        session.set_field(DraftField::Name, "Castlefield");
        session.set_search_term("castle");
        assert!(session.filtered().is_empty());

        let draft = session.begin_submit().unwrap();
        assert_eq!(draft.name, "Castlefield");
        assert!(session.is_submitting());

        session.finish_submit(Ok(added(99, "Castlefield")));
        assert_eq!(session.locations().len(), 3);
        assert_eq!(session.locations()[2].id, LocationId(99));
        assert_eq!(session.filtered().len(), 1);
        assert!(session.draft().is_empty());
        assert_eq!(session.submit_state(), &SubmitState::Idle);
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut session = loaded();
        assert!(session.begin_submit().is_some());
        assert!(session.begin_submit().is_none());

        session.finish_submit(Err(BackendError::EmptyResponse.into()));
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn test_failed_submit_keeps_draft_and_list() {
        let mut session = loaded();
        session.set_field(DraftField::Name, "Temple Meads");
        session.capture_click(51.449, -2.581);
        let before = session.clone();

        session.begin_submit();
        session.finish_submit(Err(BackendError::Status { status: 409, body: "conflict".to_string() }.into()));

        assert_eq!(session.locations(), before.locations());
        assert_eq!(session.filtered(), before.filtered());
        assert_eq!(session.draft(), before.draft());
        assert!(matches!(session.submit_state(), SubmitState::Failed(msg) if msg.contains("409")));

        session.dismiss_notice();
        assert_eq!(session.submit_state(), &SubmitState::Idle);
    }

    #[test]
    fn test_rejected_submit_reports_field() {
        let mut session = loaded();
        session.begin_submit();
        session.finish_submit(Err(ValidationError::MissingField(DraftField::Name).into()));
        assert_eq!(
            session.submit_state(),
            &SubmitState::Rejected(ValidationError::MissingField(DraftField::Name))
        );
        assert_eq!(session.locations().len(), 2);
    }

    #[test]
    fn test_edits_during_submit_survive_success() {
        let mut session = loaded();
        session.set_field(DraftField::Name, "Castlefield");
        session.begin_submit();

        session.capture_click(51.0, -1.0);
        session.set_field(DraftField::Name, "next spot");
        session.finish_submit(Ok(added(99, "Castlefield")));

        assert_eq!(session.draft().name, "next spot");
        assert_eq!(session.draft().lat, "51.00000");
        assert_eq!(session.draft().lng, "-1.00000");
        assert_eq!(session.locations().len(), 3);
        assert_eq!(session.submit_state(), &SubmitState::Idle);
    }

    #[test]
    fn test_reload_during_submit_does_not_duplicate() {
        let mut session = Session::new();
        session.finish_load(Err(FetchError::Transport("offline".to_string())));
        session.begin_submit();

        session.begin_load();
        session.finish_load(Ok(vec![added(99, "Castlefield")]));
        session.finish_submit(Ok(added(99, "Castlefield")));

        let ids: Vec<_> = session.locations().iter().map(|loc| loc.id).collect();
        assert_eq!(ids, vec![LocationId(99)]);
        assert_eq!(session.view().entries.len(), 1);
    }

    #[test]
    fn test_dismiss_does_not_cancel_in_flight_submit() {
        let mut session = loaded();
        session.begin_submit();
        session.dismiss_notice();
        assert!(session.is_submitting());
    }
}
