use crate::formatting::{
    count_label, date_only, format_relative_time, score_label, submission_summary, truncate,
};
use crate::models::{Score, Submission};

#[test]
fn test_truncate_keeps_short_strings() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly ten", 11), "exactly ten");
}

#[test]
fn test_truncate_cuts_with_ellipsis() {
    assert_eq!(truncate("a much longer sentence", 10), "a much ...");
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    // Multi-byte characters must not be split
    let cut = truncate("café résumé éléphant", 10);
    assert!(cut.ends_with("..."));
    assert_eq!(cut.chars().count(), 10);
}

#[test]
fn test_count_label_pluralizes() {
    assert_eq!(count_label("Survey", 1), "1 Survey");
    assert_eq!(count_label("Survey", 3), "3 Surveys");
    assert_eq!(count_label("Submission", 0), "0 Submissions");
}

#[test]
fn test_date_only() {
    assert_eq!(date_only("2024-05-01 10:30:00"), "2024-05-01");
    // Already date-only input passes through
    assert_eq!(date_only("2024-05-01"), "2024-05-01");
}

#[test]
fn test_score_label() {
    assert_eq!(score_label(&Score::NoAnswer), "No Answer");
    assert_eq!(score_label(&Score::Unfilled), "-");
    assert_eq!(score_label(&Score::Value(0)), "0");
    assert_eq!(score_label(&Score::Value(10)), "10");
}

#[test]
fn test_submission_summary() {
    let submission = Submission {
        survey_id: "x7Fq2".to_string(),
        scores: vec![Score::Value(5), Score::NoAnswer, Score::Value(9)],
        insert_date: "2024-05-01 10:30:00".to_string(),
    };
    assert_eq!(submission_summary(&submission), "Answered: 2/3");
}

#[test]
fn test_format_relative_time_with_bad_input() {
    assert_eq!(format_relative_time("garbage"), "unknown");
    assert_eq!(format_relative_time(""), "unknown");
}
