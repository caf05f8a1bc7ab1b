use crate::error::SurveyError;
use crate::validation::{
    validate_email, validate_password, validate_question_content, validate_survey_code,
    validate_survey_title, validate_username,
};

#[test]
fn test_email_validation() {
    assert!(validate_email("anna@example.com").is_ok());
    assert!(validate_email("a.b+c@mail.example.org").is_ok());
    assert!(validate_email("").is_err());
    assert!(validate_email("not-an-email").is_err());
    assert!(validate_email("a b@example.com").is_err());
    assert!(validate_email("anna@nodot").is_err());
}

#[test]
fn test_username_charset() {
    assert!(validate_username("anna42").is_ok());

    // Uppercase and punctuation are rejected, not lowered
    match validate_username("Anna") {
        Err(SurveyError::InvalidInput(msg)) => assert!(msg.contains("lowercase")),
        _ => panic!("Expected SurveyError::InvalidInput"),
    }
    assert!(validate_username("an_na").is_err());
    assert!(validate_username("anna!").is_err());
    assert!(validate_username("an na").is_err());
}

#[test]
fn test_username_length() {
    assert!(validate_username("").is_err());
    assert!(validate_username("ab").is_err());
    assert!(validate_username("abc").is_ok());
    assert!(validate_username(&"a".repeat(15)).is_ok());
    assert!(validate_username(&"a".repeat(16)).is_err());
}

#[test]
fn test_password_length() {
    assert!(validate_password("").is_err());
    assert!(validate_password("12345").is_err());
    assert!(validate_password("123456").is_ok());
    assert!(validate_password(&"x".repeat(30)).is_ok());
    assert!(validate_password(&"x".repeat(31)).is_err());
}

#[test]
fn test_survey_title_length() {
    assert!(validate_survey_title("").is_err());
    assert!(validate_survey_title("abcd").is_err());
    assert!(validate_survey_title("abcde").is_ok());
    assert!(validate_survey_title(&"t".repeat(50)).is_ok());
    assert!(validate_survey_title(&"t".repeat(51)).is_err());
}

#[test]
fn test_question_content_length() {
    // Empty content never reaches the validator; the draft drops it first
    assert!(validate_question_content("").is_ok());
    assert!(validate_question_content(&"q".repeat(250)).is_ok());
    assert!(validate_question_content(&"q".repeat(251)).is_err());
}

#[test]
fn test_survey_code_format() {
    assert!(validate_survey_code("anna:x7Fq2:9c1d03a2b4e5f6a7").is_ok());
    assert!(validate_survey_code("bob7:A_b-3:00ff").is_ok());

    assert!(validate_survey_code("").is_err());
    assert!(validate_survey_code("anna:x7Fq2").is_err());
    assert!(validate_survey_code("anna:x7Fq2:9c1d:extra").is_err());
    // Username is lowercase only, checksum is lowercase hex
    assert!(validate_survey_code("Anna:x7Fq2:9c1d").is_err());
    assert!(validate_survey_code("anna:x7Fq2:9C1D").is_err());
    assert!(validate_survey_code("anna:x7!q2:9c1d").is_err());
    assert!(validate_survey_code("anna:x7Fq2:9c1g").is_err());
}
