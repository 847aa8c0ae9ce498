use planner_core::{validate_field, validate_form, Field, FormInput, DESCRIPTION_MAX};

fn valid_input() -> FormInput {
    FormInput {
        title: "Study algebra".to_string(),
        duration: "45".to_string(),
        due_date: "2026-10-15".to_string(),
        tag: "Study".to_string(),
        description: "chapters 3 and 4".to_string(),
    }
}

#[test]
fn valid_input_produces_a_candidate() {
    let candidate = validate_form(&valid_input()).unwrap();
    assert_eq!(candidate.title, "Study algebra");
    assert_eq!(candidate.duration, 45);
    assert_eq!(candidate.due_date.to_string(), "2026-10-15");
    assert_eq!(candidate.tag, "Study");
}

#[test]
fn short_title_is_rejected() {
    let mut input = valid_input();
    input.title = "ab".to_string();
    let errors = validate_form(&input).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::Title);
    assert_eq!(errors[0].message, "Title required (min 3 chars)");
}

#[test]
fn title_length_counts_characters_not_bytes() {
    // Two multibyte characters are four bytes but still too short.
    let mut input = valid_input();
    input.title = "éé".to_string();
    let errors = validate_form(&input).unwrap_err();
    assert_eq!(errors[0].field, Field::Title);
    assert_eq!(validate_field(Field::Title, "éé"), Some("Min 3 characters"));

    // Three multibyte characters pass.
    input.title = "ééé".to_string();
    assert!(validate_form(&input).is_ok());
    assert_eq!(validate_field(Field::Title, "ééé"), None);
}

#[test]
fn title_whitespace_does_not_count() {
    let mut input = valid_input();
    input.title = "  a    ".to_string();
    assert!(validate_form(&input).is_err());
}

#[test]
fn duration_must_be_a_positive_number() {
    for bad in ["", "0", "-5", "soon", "12.5"] {
        let mut input = valid_input();
        input.duration = bad.to_string();
        let errors = validate_form(&input).unwrap_err();
        assert_eq!(errors[0].field, Field::Duration, "value `{bad}`");
    }
}

#[test]
fn due_date_and_tag_are_required() {
    let mut input = valid_input();
    input.due_date = String::new();
    input.tag = "  ".to_string();
    let errors = validate_form(&input).unwrap_err();

    let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, [Field::DueDate, Field::Tag]);
}

#[test]
fn every_violation_gets_its_own_message() {
    let input = FormInput::default();
    let errors = validate_form(&input).unwrap_err();
    assert_eq!(errors.len(), 4);
}

#[test]
fn description_is_clamped_not_rejected() {
    let mut input = valid_input();
    input.description = "d".repeat(DESCRIPTION_MAX + 40);
    let candidate = validate_form(&input).unwrap();
    assert_eq!(candidate.description.chars().count(), DESCRIPTION_MAX);
}

#[test]
fn focus_loss_checks_use_the_same_rules() {
    assert_eq!(validate_field(Field::Title, "ab"), Some("Min 3 characters"));
    assert_eq!(validate_field(Field::Title, "abc"), None);
    assert_eq!(
        validate_field(Field::Duration, "0"),
        Some("Must be positive number")
    );
    assert_eq!(validate_field(Field::Duration, "30"), None);
    assert_eq!(validate_field(Field::DueDate, ""), Some("Required"));
    assert_eq!(validate_field(Field::DueDate, "2026-10-15"), None);
    assert_eq!(validate_field(Field::Tag, ""), Some("Required"));
    assert_eq!(validate_field(Field::Tag, "Personal"), None);
}
