//! In-memory activity store backed by a persistence adapter.
//!
//! # Responsibility
//! - Provide create/update/delete/import/export over the owned collection.
//! - Delegate durability to the injected [`PersistenceAdapter`] after every
//!   mutation.
//!
//! # Invariants
//! - New records are prepended: collection order is newest-created first,
//!   independent of any display sort.
//! - `load` never propagates an error past this boundary; corrupt persisted
//!   state resets to an empty collection.
//! - A failed write leaves the in-memory collection mutated; on-disk state
//!   may lag until the next successful write.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::{info, warn};

use crate::model::activity::{
    new_activity_id, Activity, ActivityId, ActivityPatch, CandidateActivity, SeedActivity,
};
use crate::persist::{PersistenceAdapter, STORAGE_KEY};

/// How the collection came into memory at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A valid persisted blob was found and loaded.
    LoadedFromStorage(usize),
    /// No persisted blob existed; the seed collection was stamped and saved.
    Seeded(usize),
    /// The persisted blob was unreadable or malformed; reset to empty.
    ResetAfterCorruption,
}

/// Result of a persistence write following a mutation.
///
/// Write failures are recoverable data, not exceptions: the mutation has
/// already taken effect in memory either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    WriteFailed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Counts reported back from [`ActivityStore::import_batch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records added ahead of the existing collection.
    pub new: usize,
    /// Valid records skipped because their id already existed.
    pub duplicates: usize,
    /// Records dropped by the structural shape check.
    pub invalid: usize,
}

/// Owner of the activity collection.
///
/// Single-writer by construction: all mutation goes through `&mut self`,
/// so a mutation and its persistence write complete atomically with
/// respect to all other core logic.
pub struct ActivityStore<P: PersistenceAdapter> {
    adapter: P,
    activities: Vec<Activity>,
}

impl<P: PersistenceAdapter> ActivityStore<P> {
    /// Creates an empty store. Call [`load`](Self::load) before first use.
    pub fn new(adapter: P) -> Self {
        Self {
            adapter,
            activities: Vec::new(),
        }
    }

    /// Loads the persisted collection, seeding or resetting as needed.
    ///
    /// Never returns an error: corruption and read failures degrade to an
    /// empty collection which is immediately persisted.
    pub fn load(&mut self, seed: &[SeedActivity]) -> LoadOutcome {
        match self.adapter.get(STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Activity>>(&blob) {
                Ok(parsed) => {
                    info!(
                        "event=store_load status=ok source=storage count={}",
                        parsed.len()
                    );
                    self.activities = parsed;
                    LoadOutcome::LoadedFromStorage(self.activities.len())
                }
                Err(err) => {
                    warn!("event=store_load status=reset reason=malformed_blob error={err}");
                    self.activities.clear();
                    self.persist();
                    LoadOutcome::ResetAfterCorruption
                }
            },
            Ok(None) => {
                let now = Utc::now();
                self.activities = seed
                    .iter()
                    .cloned()
                    .map(|record| record.into_activity(now))
                    .collect();
                info!(
                    "event=store_load status=ok source=seed count={}",
                    self.activities.len()
                );
                self.persist();
                LoadOutcome::Seeded(self.activities.len())
            }
            Err(err) => {
                warn!("event=store_load status=reset reason=read_failure error={err}");
                self.activities.clear();
                self.persist();
                LoadOutcome::ResetAfterCorruption
            }
        }
    }

    /// Read-only view of the full collection in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Looks up one record by id.
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// Creates a record from validated input, prepends it and persists.
    ///
    /// The stored record gets a fresh id and equal `created_at`/`updated_at`
    /// stamps.
    pub fn create(&mut self, candidate: CandidateActivity) -> (Activity, SaveOutcome) {
        let now = Utc::now();
        let activity = Activity {
            id: new_activity_id(),
            title: candidate.title,
            due_date: candidate.due_date,
            duration: candidate.duration,
            tag: candidate.tag,
            description: candidate.description,
            created_at: now,
            updated_at: now,
        };
        self.activities.insert(0, activity.clone());
        let save = self.persist();
        (activity, save)
    }

    /// Merges a patch over the record with `id` and persists.
    ///
    /// Returns `None` when no record has that id. `updated_at` is refreshed
    /// to a stamp strictly later than the previous one; `id` and
    /// `created_at` are preserved.
    pub fn update(&mut self, id: &str, patch: ActivityPatch) -> Option<(Activity, SaveOutcome)> {
        let index = self.activities.iter().position(|a| a.id == id)?;
        let previous_stamp = self.activities[index].updated_at;
        self.activities[index].apply_patch(patch);
        self.activities[index].updated_at = next_timestamp(previous_stamp);
        let updated = self.activities[index].clone();
        let save = self.persist();
        Some((updated, save))
    }

    /// Removes the record with `id` and persists.
    ///
    /// Returns `None` (a no-op, nothing persisted) when the id is absent.
    pub fn delete(&mut self, id: &str) -> Option<SaveOutcome> {
        let index = self.activities.iter().position(|a| a.id == id)?;
        self.activities.remove(index);
        Some(self.persist())
    }

    /// Imports an external array of candidate records.
    ///
    /// Each element must pass the full structural shape check; of the valid
    /// ones, only records whose id is not already in the collection survive.
    /// Survivors are prepended ahead of existing records in file order.
    /// Malformed and duplicate records are dropped silently, with counts
    /// reported back.
    pub fn import_batch(
        &mut self,
        records: Vec<serde_json::Value>,
    ) -> (ImportReport, SaveOutcome) {
        let mut report = ImportReport::default();
        let mut incoming: Vec<Activity> = Vec::new();

        for value in records {
            match serde_json::from_value::<Activity>(value) {
                Ok(activity) => {
                    if self.get(&activity.id).is_some() {
                        report.duplicates += 1;
                    } else {
                        incoming.push(activity);
                    }
                }
                Err(_) => report.invalid += 1,
            }
        }

        report.new = incoming.len();
        incoming.append(&mut self.activities);
        self.activities = incoming;

        info!(
            "event=store_import status=ok new={} duplicates={} invalid={}",
            report.new, report.duplicates, report.invalid
        );
        let save = self.persist();
        (report, save)
    }

    /// Serializes the full collection as pretty-printed JSON for download.
    pub fn export_all(&self) -> String {
        // Vec<Activity> serialization cannot fail; keep the boundary total.
        serde_json::to_string_pretty(&self.activities).unwrap_or_else(|_| "[]".to_string())
    }

    fn persist(&mut self) -> SaveOutcome {
        let blob = match serde_json::to_string(&self.activities) {
            Ok(blob) => blob,
            Err(err) => return SaveOutcome::WriteFailed(err.to_string()),
        };
        match self.adapter.set(STORAGE_KEY, &blob) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                warn!("event=store_persist status=error error={err}");
                SaveOutcome::WriteFailed(err.to_string())
            }
        }
    }
}

/// Suggested download name for an export taken on `today`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("campus-planner-{}.json", today.format("%Y-%m-%d"))
}

/// Returns the current instant, nudged forward when the clock has not
/// visibly advanced past `after`. Keeps `updated_at` strictly increasing
/// even on coarse timers.
fn next_timestamp(after: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > after {
        now
    } else {
        after + Duration::nanoseconds(1)
    }
}
