use std::time::{Duration, Instant};

use chrono::NaiveDate;
use planner_core::persist::PersistResult;
use planner_core::{
    FileAdapter, FormInput, LoadOutcome, MemoryAdapter, PersistError, PersistenceAdapter,
    PlannerApp, SeedActivity, Severity, SortKey, SubmitError, STATUS_DISMISS,
};

fn form(title: &str, duration: &str, tag: &str) -> FormInput {
    FormInput {
        title: title.to_string(),
        duration: duration.to_string(),
        due_date: "2026-10-20".to_string(),
        tag: tag.to_string(),
        description: String::new(),
    }
}

fn seed() -> Vec<SeedActivity> {
    vec![SeedActivity {
        id: "actv_seed".to_string(),
        title: "Welcome session".to_string(),
        due_date: "2026-09-02".parse().unwrap(),
        duration: 60,
        tag: "Event".to_string(),
        description: String::new(),
    }]
}

struct BrokenAdapter;

impl PersistenceAdapter for BrokenAdapter {
    fn get(&self, _key: &str) -> PersistResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _blob: &str) -> PersistResult<()> {
        Err(PersistError::Backend("quota exceeded".to_string()))
    }
}

#[test]
fn start_seeds_and_announces() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    let start = Instant::now();

    assert_eq!(app.start(&seed(), start), LoadOutcome::Seeded(1));
    let notice = app.status(start).unwrap();
    assert_eq!(notice.severity, Severity::Info);
    assert_eq!(notice.message, "Campus Life Planner loaded successfully");
    assert_eq!(app.activities().len(), 1);
}

#[test]
fn submit_creates_then_edits_the_same_record() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    let start = Instant::now();
    app.start(&[], start);

    let created = app
        .submit_form(&form("Read chapter", "30", "Study"), None, start)
        .unwrap();
    let notice = app.status(start).unwrap();
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.message, "Activity \"Read chapter\" added successfully");

    let updated = app
        .submit_form(
            &form("Read chapters 1-2", "50", "Study"),
            Some(&created.id),
            start,
        )
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.duration, 50);
    assert_eq!(app.activities().len(), 1);
    assert_eq!(
        app.status(start).unwrap().message,
        "Activity \"Read chapters 1-2\" updated."
    );
}

#[test]
fn invalid_submission_never_reaches_the_store() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    let start = Instant::now();
    app.start(&[], start);

    let err = app
        .submit_form(&form("ab", "0", "Study"), None, start)
        .unwrap_err();
    match err {
        SubmitError::Invalid(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected invalid, got {other:?}"),
    }
    assert!(app.activities().is_empty());
    assert_eq!(app.status(start).unwrap().severity, Severity::Error);
}

#[test]
fn editing_a_missing_record_reports_not_found() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    let start = Instant::now();
    app.start(&[], start);

    let err = app
        .submit_form(&form("Valid title", "30", "Study"), Some("actv_gone"), start)
        .unwrap_err();
    assert_eq!(err, SubmitError::NotFound);
}

#[test]
fn write_failure_surfaces_on_the_status_channel() {
    let mut app = PlannerApp::new(BrokenAdapter);
    let start = Instant::now();
    app.start(&[], start);

    app.submit_form(&form("Unsavable", "30", "Study"), None, start)
        .unwrap();
    let notice = app.status(start).unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.message, "Failed to save data.");
    // The record still exists in memory.
    assert_eq!(app.activities().len(), 1);
}

#[test]
fn delete_announces_and_reports_missing_ids() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    let start = Instant::now();
    app.start(&[], start);
    let created = app
        .submit_form(&form("Ephemeral", "30", "Personal"), None, start)
        .unwrap();

    assert!(app.delete(&created.id, start));
    assert!(app.status(start).unwrap().message.contains("deleted"));
    assert!(!app.delete(&created.id, start));
}

#[test]
fn status_notices_auto_dismiss() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    let start = Instant::now();
    app.start(&[], start);

    assert!(app.status(start + Duration::from_secs(4)).is_some());
    assert!(app.status(start + STATUS_DISMISS).is_none());
}

#[test]
fn export_names_the_file_after_the_date() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    let start = Instant::now();
    app.start(&seed(), start);

    let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
    let export = app.export(today, start);
    assert_eq!(export.file_name, "campus-planner-2026-08-23.json");
    assert!(export.json.contains("Welcome session"));
    assert!(app.status(start).unwrap().message.contains("Exported 1"));
}

#[test]
fn sort_toggle_flows_through_the_view() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    let start = Instant::now();
    app.start(&[], start);
    app.submit_form(&form("Long task", "90", "Study"), None, start)
        .unwrap();
    app.submit_form(&form("Short task", "10", "Study"), None, start)
        .unwrap();

    app.toggle_sort(SortKey::Duration);
    let durations: Vec<u32> = app.view().rows.iter().map(|a| a.duration).collect();
    assert_eq!(durations, [10, 90]);

    app.toggle_sort(SortKey::Duration);
    let durations: Vec<u32> = app.view().rows.iter().map(|a| a.duration).collect();
    assert_eq!(durations, [90, 10]);
}

#[test]
fn file_adapter_persists_across_app_instances() {
    let dir = tempfile::tempdir().unwrap();
    let start = Instant::now();

    let mut first = PlannerApp::new(FileAdapter::new(dir.path()));
    first.start(&[], start);
    let created = first
        .submit_form(&form("Durable", "30", "Study"), None, start)
        .unwrap();

    let mut second = PlannerApp::new(FileAdapter::new(dir.path()));
    assert_eq!(second.start(&[], start), LoadOutcome::LoadedFromStorage(1));
    assert_eq!(second.activities()[0].id, created.id);
}
