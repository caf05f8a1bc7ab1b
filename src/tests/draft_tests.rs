use crate::draft::{normalize_content, AddOutcome, SurveyDraft};
use crate::models::Question;

#[test]
fn test_normalize_strips_newlines_and_whitespace() {
    assert_eq!(normalize_content("  How was it?  "), "How was it?");
    assert_eq!(normalize_content("line\nbreak"), "linebreak");
    assert_eq!(normalize_content(" \n \n "), "");
}

#[test]
fn test_add_question() {
    let mut draft = SurveyDraft::new();
    assert_eq!(draft.add("First question"), AddOutcome::Added);
    assert_eq!(draft.questions.len(), 1);
    assert_eq!(draft.questions[0].id, 0);
    assert_eq!(draft.questions[0].content, "First question");
    // The editor clears once its text is taken
    assert!(draft.editor.is_empty());
}

#[test]
fn test_add_ignores_empty_input() {
    let mut draft = SurveyDraft::new();
    assert_eq!(draft.add("  \n  "), AddOutcome::EmptyInput);
    assert!(draft.questions.is_empty());
}

#[test]
fn test_add_stops_at_question_limit() {
    let mut draft = SurveyDraft::new();
    for i in 0..10 {
        assert_eq!(draft.add(&format!("Question {}", i)), AddOutcome::Added);
    }
    assert_eq!(draft.add("One too many"), AddOutcome::TooManyQuestions);
    assert_eq!(draft.questions.len(), 10);
}

#[test]
fn test_ids_are_not_reused_after_remove() {
    let mut draft = SurveyDraft::new();
    draft.add("a");
    draft.add("b");
    assert!(draft.remove(0));
    draft.add("c");

    let ids: Vec<u32> = draft.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_edit_updates_content() {
    let mut draft = SurveyDraft::new();
    draft.add("Original");
    assert!(draft.start_edit(0));
    assert!(draft.is_editing());
    assert_eq!(draft.editor, "Original");

    assert!(draft.update("Changed"));
    assert!(!draft.is_editing());
    assert_eq!(draft.question(0).unwrap().content, "Changed");
}

#[test]
fn test_update_with_unchanged_text_keeps_edit_mode() {
    let mut draft = SurveyDraft::new();
    draft.add("Same text");
    draft.start_edit(0);

    assert!(!draft.update("Same text"));
    assert!(draft.is_editing());
    assert_eq!(draft.question(0).unwrap().content, "Same text");
}

#[test]
fn test_update_with_empty_text_keeps_edit_mode() {
    let mut draft = SurveyDraft::new();
    draft.add("Something");
    draft.start_edit(0);

    assert!(!draft.update(" \n "));
    assert!(draft.is_editing());
}

#[test]
fn test_start_edit_with_unknown_id() {
    let mut draft = SurveyDraft::new();
    draft.add("a");
    assert!(!draft.start_edit(42));
    assert!(!draft.is_editing());
}

#[test]
fn test_start_edit_retargets_while_editing() {
    let mut draft = SurveyDraft::new();
    draft.add("First");
    draft.add("Second");
    draft.start_edit(0);
    assert!(draft.start_edit(1));
    assert_eq!(draft.editor, "Second");
    assert_eq!(draft.edited_question_id, Some(1));
}

#[test]
fn test_remove_edited_question_cancels_edit() {
    let mut draft = SurveyDraft::new();
    draft.add("a");
    draft.add("b");
    draft.start_edit(1);

    assert!(draft.remove(1));
    assert!(!draft.is_editing());
    assert!(draft.editor.is_empty());
    assert_eq!(draft.questions.len(), 1);
}

#[test]
fn test_remove_other_question_keeps_edit() {
    let mut draft = SurveyDraft::new();
    draft.add("a");
    draft.add("b");
    draft.start_edit(0);

    assert!(draft.remove(1));
    assert!(draft.is_editing());
    assert_eq!(draft.editor, "a");
}

#[test]
fn test_remove_unknown_id() {
    let mut draft = SurveyDraft::new();
    draft.add("a");
    assert!(!draft.remove(42));
    assert_eq!(draft.questions.len(), 1);
}

#[test]
fn test_cancel_clears_editor_and_edit_mode() {
    let mut draft = SurveyDraft::new();
    draft.add("a");
    draft.start_edit(0);
    draft.editor = "half rewritten".to_string();

    draft.cancel();
    assert!(!draft.is_editing());
    assert!(draft.editor.is_empty());
    // The question keeps its old content
    assert_eq!(draft.question(0).unwrap().content, "a");
}

#[test]
fn test_unsaved_editor_text_is_normalized() {
    let mut draft = SurveyDraft::new();
    draft.editor = "  half typed \n".to_string();
    assert_eq!(draft.unsaved_editor_text(), "half typed");

    draft.editor = " \n ".to_string();
    assert!(draft.unsaved_editor_text().is_empty());
}

#[test]
fn test_from_questions_resumes_id_counter() {
    let questions = vec![
        Question {
            id: 3,
            content: "a".to_string(),
        },
        Question {
            id: 7,
            content: "b".to_string(),
        },
    ];
    let mut draft = SurveyDraft::from_questions("Feedback round", questions);
    assert_eq!(draft.title, "Feedback round");

    draft.add("c");
    assert_eq!(draft.questions.last().unwrap().id, 8);
}

#[test]
fn test_reset_returns_to_fresh_draft() {
    let mut draft = SurveyDraft::new();
    draft.title = "My survey".to_string();
    draft.add("a");
    draft.editor = "leftover".to_string();

    draft.reset();
    assert!(draft.title.is_empty());
    assert!(draft.questions.is_empty());
    assert!(draft.editor.is_empty());
    assert!(!draft.is_editing());
}
