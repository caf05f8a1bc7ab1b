use crate::error::{ErrorContext, SurveyError};
use crate::survey_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let survey_result = result.context("Failed to read config file");
    assert!(survey_result.is_err());

    match survey_result {
        Err(SurveyError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected SurveyError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Account token not found");

    assert!(result.is_err());
    match result {
        Err(SurveyError::Unknown(msg)) => {
            assert_eq!(msg, "Account token not found");
        }
        _ => panic!("Expected SurveyError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let survey_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.json"));

    assert!(survey_result.is_err());
    match survey_result {
        Err(SurveyError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected SurveyError::Unknown"),
    }
}

#[test]
fn test_survey_error_macro() {
    let error = survey_error!(ApiError, "Request failed");
    match error {
        SurveyError::ApiError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected SurveyError::ApiError"),
    }

    let error = survey_error!(InvalidInput, "Invalid score: {}", 42);
    match error {
        SurveyError::InvalidInput(msg) => assert_eq!(msg, "Invalid score: 42"),
        _ => panic!("Expected SurveyError::InvalidInput"),
    }
}

#[test]
fn test_error_display_messages() {
    let error = SurveyError::NotSignedIn;
    assert!(error.to_string().contains("surveyme auth signin"));

    let error = survey_error!(DataError, "two published versions");
    assert_eq!(
        error.to_string(),
        "Inconsistent data: two published versions"
    );
}

#[test]
fn test_io_error_conversion() {
    fn read() -> Result<String, SurveyError> {
        let contents = std::fs::read_to_string("/nonexistent/surveyme/path")?;
        Ok(contents)
    }

    match read() {
        Err(SurveyError::IoError(_)) => {}
        _ => panic!("Expected SurveyError::IoError"),
    }
}
