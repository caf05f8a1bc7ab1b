use surveyme_cli::code::{content_checksum, SurveyCode};
use surveyme_cli::draft::{AddOutcome, SurveyDraft};
use surveyme_cli::models::SurveyRecord;
use surveyme_cli::validation::validate_survey_code;

fn record() -> SurveyRecord {
    SurveyRecord {
        owner_id: "user-1".to_string(),
        insert_date: "2024-05-01 10:00:00".to_string(),
        published: true,
    }
}

#[test]
fn test_drafted_survey_produces_a_valid_code() {
    let mut draft = SurveyDraft::new();
    draft.title = "Workshop feedback".to_string();
    assert_eq!(draft.add("How useful was it?"), AddOutcome::Added);
    assert_eq!(draft.add("Would you attend again?"), AddOutcome::Added);

    let checksum = content_checksum(&record(), &draft.title, &draft.questions);
    let code = SurveyCode::new("anna", "x7Fq2", &checksum);
    let text = code.to_string();

    // The generated code passes the same check applied to participant input
    assert!(validate_survey_code(&text).is_ok());
    assert_eq!(SurveyCode::parse(&text).unwrap(), code);
}

#[test]
fn test_edited_survey_gets_a_different_code() {
    let mut draft = SurveyDraft::new();
    draft.title = "Workshop feedback".to_string();
    draft.add("How useful was it?");

    let record = record();
    let before = content_checksum(&record, &draft.title, &draft.questions);

    assert!(draft.start_edit(0));
    assert!(draft.update("How useful was the workshop?"));
    let after = content_checksum(&record, &draft.title, &draft.questions);

    assert_ne!(before, after);
}

#[test]
fn test_code_from_another_survey_does_not_match() {
    let text = "anna:x7Fq2:9c1d03a2";
    let code = SurveyCode::parse(text).unwrap();
    let other = SurveyCode::parse("anna:b2Xw9:9c1d03a2").unwrap();
    assert_ne!(code, other);
    assert_eq!(code.checksum, other.checksum);
}
