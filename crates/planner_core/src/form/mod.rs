//! Form input collection and validation.
//!
//! # Responsibility
//! - Validate raw user input into a [`CandidateActivity`] for the store.
//! - Provide the same per-field rules for focus-loss checks.
//!
//! # Invariants
//! - Any rule violation blocks submission; invalid input never reaches the
//!   store.
//! - Description text is hard-capped at [`DESCRIPTION_MAX`] characters.

use chrono::NaiveDate;

use crate::model::activity::CandidateActivity;

/// Soft cap on description length, enforced by the live counter.
pub const DESCRIPTION_MAX: usize = 75;

/// Form fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Duration,
    DueDate,
    Tag,
}

/// One validation message for one invalid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Raw text collected from the form controls, pre-validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub title: String,
    pub duration: String,
    pub due_date: String,
    pub tag: String,
    pub description: String,
}

/// Validates a full form submission.
///
/// Returns the candidate record on success, or one message per invalid
/// field. The description is clamped, never rejected.
pub fn validate_form(input: &FormInput) -> Result<CandidateActivity, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = input.title.trim();
    if title.chars().count() < 3 {
        errors.push(FieldError {
            field: Field::Title,
            message: "Title required (min 3 chars)",
        });
    }

    let duration = parse_duration(&input.duration);
    if duration.is_none() {
        errors.push(FieldError {
            field: Field::Duration,
            message: "Valid duration required",
        });
    }

    let due_date = parse_due_date(&input.due_date);
    if due_date.is_none() {
        errors.push(FieldError {
            field: Field::DueDate,
            message: "Due date required",
        });
    }

    let tag = input.tag.trim();
    if tag.is_empty() {
        errors.push(FieldError {
            field: Field::Tag,
            message: "Category required",
        });
    }

    match (duration, due_date) {
        (Some(duration), Some(due_date)) if errors.is_empty() => Ok(CandidateActivity {
            title: title.to_string(),
            due_date,
            duration,
            tag: tag.to_string(),
            description: clamp_description(input.description.trim()),
        }),
        _ => Err(errors),
    }
}

/// Focus-loss check for a single field, using the same rule as full-form
/// validation for that field.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let value = value.trim();
    match field {
        Field::Title if value.chars().count() < 3 => Some("Min 3 characters"),
        Field::Duration if parse_duration(value).is_none() => Some("Must be positive number"),
        Field::DueDate if parse_due_date(value).is_none() => Some("Required"),
        Field::Tag if value.is_empty() => Some("Required"),
        _ => None,
    }
}

/// Truncates description text to the cap, counting characters.
pub fn clamp_description(text: &str) -> String {
    text.chars().take(DESCRIPTION_MAX).collect()
}

/// Live counter label for the description field.
pub fn description_counter(text: &str) -> String {
    let count = text.chars().count().min(DESCRIPTION_MAX);
    format!("Characters: {count}/{DESCRIPTION_MAX}")
}

fn parse_duration(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => None,
    }
}

fn parse_due_date(value: &str) -> Option<NaiveDate> {
    value.trim().parse::<NaiveDate>().ok()
}

#[cfg(test)]
mod tests {
    use super::{clamp_description, description_counter, DESCRIPTION_MAX};

    #[test]
    fn clamp_counts_characters_not_bytes() {
        let long = "ä".repeat(DESCRIPTION_MAX + 10);
        let clamped = clamp_description(&long);
        assert_eq!(clamped.chars().count(), DESCRIPTION_MAX);
    }

    #[test]
    fn counter_label_saturates_at_the_cap() {
        assert_eq!(description_counter("abc"), "Characters: 3/75");
        let long = "x".repeat(200);
        assert_eq!(description_counter(&long), "Characters: 75/75");
    }
}
