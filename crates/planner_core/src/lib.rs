//! Core data/view synchronization engine for the campus activity planner.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod chart;
pub mod form;
pub mod logging;
pub mod model;
pub mod persist;
pub mod search;
pub mod status;
pub mod store;
pub mod view;

pub use app::{Export, ImportError, PlannerApp, SearchFeedback, SubmitError};
pub use form::{
    clamp_description, description_counter, validate_field, validate_form, Field, FieldError,
    FormInput, DESCRIPTION_MAX,
};
pub use logging::{default_log_level, init_logging};
pub use model::activity::{
    new_activity_id, Activity, ActivityId, ActivityPatch, CandidateActivity, Category,
    SeedActivity,
};
pub use persist::{FileAdapter, MemoryAdapter, PersistError, PersistenceAdapter, STORAGE_KEY};
pub use search::debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use search::matcher::{
    compile, count_matches, escape_html, highlight_or_escape, MatchOptions, Matcher, SearchError,
};
pub use status::{Notice, Severity, StatusChannel, STATUS_DISMISS};
pub use store::activity_store::{
    export_file_name, ActivityStore, ImportReport, LoadOutcome, SaveOutcome,
};
pub use view::projector::{
    aggregate, project, Aggregates, Projection, SortDirection, SortKey, SortState, TagShare,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
