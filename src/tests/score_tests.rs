use crate::models::{unfilled_positions, Score, Submission};

#[test]
fn test_score_serializes_to_wire_values() {
    assert_eq!(serde_json::to_string(&Score::NoAnswer).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Score::Unfilled).unwrap(), "-1");
    assert_eq!(serde_json::to_string(&Score::Value(0)).unwrap(), "0");
    assert_eq!(serde_json::to_string(&Score::Value(7)).unwrap(), "7");
}

#[test]
fn test_score_deserializes_from_wire_values() {
    assert_eq!(serde_json::from_str::<Score>("null").unwrap(), Score::NoAnswer);
    assert_eq!(serde_json::from_str::<Score>("-1").unwrap(), Score::Unfilled);
    assert_eq!(serde_json::from_str::<Score>("0").unwrap(), Score::Value(0));
    assert_eq!(serde_json::from_str::<Score>("10").unwrap(), Score::Value(10));
}

#[test]
fn test_score_rejects_out_of_range_values() {
    assert!(serde_json::from_str::<Score>("11").is_err());
    assert!(serde_json::from_str::<Score>("-2").is_err());
    assert!(serde_json::from_str::<Score>("100").is_err());
}

#[test]
fn test_no_answer_does_not_count_as_answered() {
    assert!(Score::Value(0).is_answered());
    assert!(Score::Value(10).is_answered());
    assert!(!Score::NoAnswer.is_answered());
    assert!(!Score::Unfilled.is_answered());
}

#[test]
fn test_answered_count() {
    let submission = Submission {
        survey_id: "x7Fq2".to_string(),
        scores: vec![Score::Value(3), Score::NoAnswer, Score::Value(10)],
        insert_date: "2024-05-01 10:00:00".to_string(),
    };
    assert_eq!(submission.answered_count(), 2);
}

#[test]
fn test_unfilled_positions_are_one_based() {
    let scores = vec![
        Score::Unfilled,
        Score::Value(5),
        Score::Unfilled,
        Score::NoAnswer,
    ];
    assert_eq!(unfilled_positions(&scores), vec![1, 3]);
}

#[test]
fn test_unfilled_positions_empty_when_all_filled() {
    let scores = vec![Score::Value(1), Score::NoAnswer];
    assert!(unfilled_positions(&scores).is_empty());
    assert!(unfilled_positions(&[]).is_empty());
}

#[test]
fn test_submission_json_shape() {
    let submission = Submission {
        survey_id: "x7Fq2".to_string(),
        scores: vec![Score::Value(8), Score::NoAnswer],
        insert_date: "2024-05-01 10:00:00".to_string(),
    };

    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(json["surveyId"], "x7Fq2");
    assert_eq!(json["scores"], serde_json::json!([8, null]));
    assert_eq!(json["insertDate"], "2024-05-01 10:00:00");
}

#[test]
fn test_submission_roundtrip_keeps_no_answer() {
    let submission = Submission {
        survey_id: "x7Fq2".to_string(),
        scores: vec![Score::NoAnswer, Score::Value(4)],
        insert_date: "2024-05-01 10:00:00".to_string(),
    };

    let json = serde_json::to_string(&submission).unwrap();
    let back: Submission = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scores, vec![Score::NoAnswer, Score::Value(4)]);
}
