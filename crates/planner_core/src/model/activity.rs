//! Activity domain model.
//!
//! # Responsibility
//! - Define the canonical planner record shared by store, view and chart.
//! - Provide the boundary shapes for seeds, validated form input and patches.
//!
//! # Invariants
//! - `id` is unique across a collection and never reused.
//! - `created_at` is set once at creation and never changes afterwards.
//! - Serialized field names match the persisted JSON shape (camelCase).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier for an activity.
///
/// Kept as a string alias: imported records carry ids minted elsewhere and
/// the store treats them as opaque tokens.
pub type ActivityId = String;

/// Generates a fresh collision-resistant activity id.
pub fn new_activity_id() -> ActivityId {
    format!("actv_{}", Uuid::new_v4().simple())
}

/// Closed category set recognized by the dashboard and chart.
///
/// `Activity::tag` itself stays an open string; records with a tag outside
/// this set are stored and listed but do not contribute to category shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Study,
    Event,
    Personal,
}

impl Category {
    /// Fixed dashboard/chart ordering.
    pub const ALL: [Self; 3] = [Self::Study, Self::Event, Self::Personal];

    /// Display label, also the exact tag text the aggregates match on.
    pub fn label(self) -> &'static str {
        match self {
            Self::Study => "Study",
            Self::Event => "Event",
            Self::Personal => "Personal",
        }
    }

    /// Parses a tag string into a known category.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Study" => Some(Self::Study),
            "Event" => Some(Self::Event),
            "Personal" => Some(Self::Personal),
            _ => None,
        }
    }
}

/// Canonical planner record.
///
/// Deserialization doubles as the structural validation check: all nine
/// fields must be present with the correct primitive types, otherwise the
/// record is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Opaque unique id, assigned at creation, immutable thereafter.
    pub id: ActivityId,
    /// Display title. Minimum length is enforced at the input boundary.
    pub title: String,
    /// Calendar due date (ISO date string in serialized form).
    pub due_date: NaiveDate,
    /// Positive duration in minutes.
    pub duration: u32,
    /// Open category tag; see [`Category`] for the recognized set.
    pub tag: String,
    /// Free text, soft-capped at the input boundary.
    pub description: String,
    /// Set by the store at creation, never user-editable.
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every update.
    pub updated_at: DateTime<Utc>,
}

/// Seed record lacking timestamps, consumed only on first load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedActivity {
    pub id: ActivityId,
    pub title: String,
    pub due_date: NaiveDate,
    pub duration: u32,
    pub tag: String,
    pub description: String,
}

impl SeedActivity {
    /// Stamps both timestamps and produces a full record.
    pub fn into_activity(self, now: DateTime<Utc>) -> Activity {
        Activity {
            id: self.id,
            title: self.title,
            due_date: self.due_date,
            duration: self.duration,
            tag: self.tag,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validated creation input handed to the store.
///
/// Produced by the form boundary; the store trusts these fields and only
/// adds identity and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateActivity {
    pub title: String,
    pub due_date: NaiveDate,
    pub duration: u32,
    pub tag: String,
    pub description: String,
}

/// Partial overlay for `update`: `None` fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub duration: Option<u32>,
    pub tag: Option<String>,
    pub description: Option<String>,
}

impl From<CandidateActivity> for ActivityPatch {
    fn from(candidate: CandidateActivity) -> Self {
        Self {
            title: Some(candidate.title),
            due_date: Some(candidate.due_date),
            duration: Some(candidate.duration),
            tag: Some(candidate.tag),
            description: Some(candidate.description),
        }
    }
}

impl Activity {
    /// Applies a patch in place. Identity and `created_at` are untouched;
    /// the caller is responsible for refreshing `updated_at`.
    pub fn apply_patch(&mut self, patch: ActivityPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(tag) = patch.tag {
            self.tag = tag;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    /// Human display form of the due date, e.g. `Mar 5, 2026`.
    pub fn due_date_display(&self) -> String {
        format_date(self.due_date)
    }
}

/// Formats a date for dashboard display (`Mon D, YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
