//! Planner application facade.
//!
//! # Responsibility
//! - Map each user action onto one store/search/form operation.
//! - Keep sort state, the active matcher and user-facing feedback in one
//!   place so rendering stays a pure function of the current state.
//!
//! # Invariants
//! - Every command leaves the app in a state from which [`view`] can be
//!   recomputed; no incremental patching.
//! - All recoverable failures surface through the status channel or an
//!   inline feedback value, never as a propagated error.
//!
//! [`view`]: PlannerApp::view

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

use chrono::NaiveDate;
use log::info;

use crate::form::{validate_form, FieldError, FormInput};
use crate::model::activity::{Activity, SeedActivity};
use crate::persist::PersistenceAdapter;
use crate::search::debounce::Debouncer;
use crate::search::matcher::{self, Matcher};
use crate::status::{Notice, Severity, StatusChannel};
use crate::store::activity_store::{
    export_file_name, ActivityStore, ImportReport, LoadOutcome, SaveOutcome,
};
use crate::view::projector::{project, Projection, SortKey, SortState};

/// Inline feedback for the search box, distinct from the transient status
/// channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchFeedback {
    /// No active search.
    #[default]
    Idle,
    /// Active matcher with its match count over the full collection.
    Matches(usize),
    /// The last pattern failed to compile; carries the engine diagnostic.
    Invalid(String),
}

/// Why a form submission was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// One message per invalid field; nothing reached the store.
    Invalid(Vec<FieldError>),
    /// Editing a record that no longer exists.
    NotFound,
}

/// Why an import was rejected outright.
#[derive(Debug)]
pub enum ImportError {
    /// The file content did not parse as a JSON array.
    NotAnArray(String),
    /// The array held no record passing the structural shape check.
    NoValidRecords,
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnArray(message) => {
                write!(f, "invalid JSON format, expected an array: {message}")
            }
            Self::NoValidRecords => write!(f, "no valid activities found in file"),
        }
    }
}

impl Error for ImportError {}

/// Downloadable export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub json: String,
}

/// Single-owner application state: store, search, sort and feedback.
pub struct PlannerApp<P: PersistenceAdapter> {
    store: ActivityStore<P>,
    matcher: Option<Matcher>,
    debouncer: Debouncer,
    sort: SortState,
    status: StatusChannel,
    search_feedback: SearchFeedback,
}

impl<P: PersistenceAdapter> PlannerApp<P> {
    pub fn new(adapter: P) -> Self {
        Self {
            store: ActivityStore::new(adapter),
            matcher: None,
            debouncer: Debouncer::new(),
            sort: SortState::default(),
            status: StatusChannel::new(),
            search_feedback: SearchFeedback::default(),
        }
    }

    /// Loads persisted state (or the seed) and announces the result.
    pub fn start(&mut self, seed: &[SeedActivity], now: Instant) -> LoadOutcome {
        let outcome = self.store.load(seed);
        match outcome {
            LoadOutcome::LoadedFromStorage(_) | LoadOutcome::Seeded(_) => {
                self.status.announce(
                    Severity::Info,
                    "Campus Life Planner loaded successfully",
                    now,
                );
            }
            LoadOutcome::ResetAfterCorruption => {
                self.status.announce(
                    Severity::Error,
                    "Error loading data. Starting fresh.",
                    now,
                );
            }
        }
        outcome
    }

    /// Validates form input and creates or updates a record.
    ///
    /// `editing` carries the id of the record being edited, `None` for a
    /// fresh creation.
    pub fn submit_form(
        &mut self,
        input: &FormInput,
        editing: Option<&str>,
        now: Instant,
    ) -> Result<Activity, SubmitError> {
        let candidate = match validate_form(input) {
            Ok(candidate) => candidate,
            Err(errors) => {
                self.status
                    .announce(Severity::Error, "Please fix form errors", now);
                return Err(SubmitError::Invalid(errors));
            }
        };

        let title = candidate.title.clone();
        let (activity, save) = match editing {
            Some(id) => match self.store.update(id, candidate.into()) {
                Some(result) => result,
                None => {
                    self.status
                        .announce(Severity::Error, "Activity not found", now);
                    return Err(SubmitError::NotFound);
                }
            },
            None => self.store.create(candidate),
        };

        let message = if editing.is_some() {
            format!("Activity \"{title}\" updated.")
        } else {
            format!("Activity \"{title}\" added successfully")
        };
        self.announce_saved(save, message, now);
        Ok(activity)
    }

    /// Deletes a record by id. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str, now: Instant) -> bool {
        let title = match self.store.get(id) {
            Some(activity) => activity.title.clone(),
            None => return false,
        };
        match self.store.delete(id) {
            Some(save) => {
                self.announce_saved(
                    save,
                    format!("Activity \"{title}\" deleted successfully."),
                    now,
                );
                true
            }
            None => false,
        }
    }

    /// Records a keystroke in the search box; evaluation is deferred by the
    /// debounce quiet period.
    pub fn search_input(&mut self, text: &str, now: Instant) {
        self.debouncer.submit(text, now);
    }

    /// Advances the timers: runs a pending search once its quiet period has
    /// elapsed. Returns whether the search state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(pattern) => {
                self.apply_search(&pattern);
                true
            }
            None => false,
        }
    }

    /// Compiles and applies a search pattern immediately.
    pub fn apply_search(&mut self, pattern: &str) {
        match matcher::compile(pattern) {
            Ok(Some(compiled)) => {
                let count = matcher::count_matches(&compiled, self.store.activities());
                self.matcher = Some(compiled);
                self.search_feedback = SearchFeedback::Matches(count);
            }
            Ok(None) => {
                self.matcher = None;
                self.search_feedback = SearchFeedback::Idle;
            }
            Err(err) => {
                // Never leave a stale matcher behind a failed compile.
                self.matcher = None;
                self.search_feedback = SearchFeedback::Invalid(err.to_string());
            }
        }
    }

    /// Header click: toggles direction on the active key, resets a new key
    /// to ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Recomputes the full display projection from current state.
    pub fn view(&self) -> Projection {
        project(self.store.activities(), self.sort, self.matcher.as_ref())
    }

    pub fn matcher(&self) -> Option<&Matcher> {
        self.matcher.as_ref()
    }

    pub fn search_feedback(&self) -> &SearchFeedback {
        &self.search_feedback
    }

    /// Imports activities from raw file text.
    ///
    /// The text must parse as a JSON array with at least one structurally
    /// valid record; both failure modes are recoverable and announced.
    pub fn import_text(&mut self, text: &str, now: Instant) -> Result<ImportReport, ImportError> {
        let values: Vec<serde_json::Value> = match serde_json::from_str(text) {
            Ok(values) => values,
            Err(err) => {
                let error = ImportError::NotAnArray(err.to_string());
                self.status
                    .announce(Severity::Error, format!("Import failed: {error}"), now);
                return Err(error);
            }
        };

        let (report, save) = self.store.import_batch(values);
        if report.new == 0 && report.duplicates == 0 {
            let error = ImportError::NoValidRecords;
            self.status
                .announce(Severity::Error, format!("Import failed: {error}"), now);
            return Err(error);
        }

        let mut message = format!("Imported {} new activities", report.new);
        if report.invalid > 0 {
            message.push_str(&format!(". Skipped {} invalid entries.", report.invalid));
        }
        self.announce_saved(save, message, now);
        Ok(report)
    }

    /// Produces the downloadable snapshot named after `today`.
    pub fn export(&mut self, today: NaiveDate, now: Instant) -> Export {
        let export = Export {
            file_name: export_file_name(today),
            json: self.store.export_all(),
        };
        info!("event=store_export status=ok count={}", self.store.len());
        self.status.announce(
            Severity::Success,
            format!("Exported {} activities successfully!", self.store.len()),
            now,
        );
        export
    }

    /// The transient notice to display at `now`, if still showing.
    pub fn status(&self, now: Instant) -> Option<&Notice> {
        self.status.current(now)
    }

    /// Read-only view of the owned collection.
    pub fn activities(&self) -> &[Activity] {
        self.store.activities()
    }

    fn announce_saved(&mut self, save: SaveOutcome, success: String, now: Instant) {
        match save {
            SaveOutcome::Saved => self.status.announce(Severity::Success, success, now),
            SaveOutcome::WriteFailed(_) => {
                self.status
                    .announce(Severity::Error, "Failed to save data.", now);
            }
        }
    }
}
