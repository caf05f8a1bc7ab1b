use crate::code::{content_checksum, SurveyCode};
use crate::error::SurveyError;
use crate::models::{Question, SurveyRecord};

fn record() -> SurveyRecord {
    SurveyRecord {
        owner_id: "user-1".to_string(),
        insert_date: "2024-05-01 10:00:00".to_string(),
        published: false,
    }
}

fn questions() -> Vec<Question> {
    vec![
        Question {
            id: 0,
            content: "How useful was the workshop?".to_string(),
        },
        Question {
            id: 1,
            content: "Would you attend again?".to_string(),
        },
    ]
}

#[test]
fn test_code_display() {
    let code = SurveyCode::new("anna", "x7Fq2", "9c1d03a2");
    assert_eq!(code.to_string(), "anna:x7Fq2:9c1d03a2");
}

#[test]
fn test_parse_splits_segments() {
    let code = SurveyCode::parse("anna:x7Fq2:9c1d03a2").unwrap();
    assert_eq!(code.username, "anna");
    assert_eq!(code.survey_id, "x7Fq2");
    assert_eq!(code.checksum, "9c1d03a2");
}

#[test]
fn test_parse_rejects_wrong_segment_count() {
    match SurveyCode::parse("anna:x7Fq2") {
        Err(SurveyError::ParseError(msg)) => assert!(msg.contains("anna:x7Fq2")),
        _ => panic!("Expected SurveyError::ParseError"),
    }
    assert!(SurveyCode::parse("a:b:c:d").is_err());
    assert!(SurveyCode::parse("plain").is_err());
}

#[test]
fn test_parse_rejects_empty_segments() {
    assert!(SurveyCode::parse(":x7Fq2:9c1d").is_err());
    assert!(SurveyCode::parse("anna::9c1d").is_err());
    assert!(SurveyCode::parse("anna:x7Fq2:").is_err());
}

#[test]
fn test_checksum_is_deterministic() {
    let record = record();
    let questions = questions();

    let first = content_checksum(&record, "Workshop feedback", &questions);
    let second = content_checksum(&record, "Workshop feedback", &questions);
    assert_eq!(first, second);
    // Lowercase hex, same alphabet the code format expects
    assert!(!first.is_empty());
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_checksum_covers_every_field() {
    let record = record();
    let questions = questions();
    let base = content_checksum(&record, "Workshop feedback", &questions);

    assert_ne!(base, content_checksum(&record, "Other title", &questions));

    let mut fewer = questions.clone();
    fewer.pop();
    assert_ne!(base, content_checksum(&record, "Workshop feedback", &fewer));

    let mut reworded = questions.clone();
    reworded[0].content = "How useful was the talk?".to_string();
    assert_ne!(base, content_checksum(&record, "Workshop feedback", &reworded));

    let mut published = record.clone();
    published.published = true;
    assert_ne!(
        base,
        content_checksum(&published, "Workshop feedback", &questions)
    );

    let mut other_owner = record.clone();
    other_owner.owner_id = "user-2".to_string();
    assert_ne!(
        base,
        content_checksum(&other_owner, "Workshop feedback", &questions)
    );
}
