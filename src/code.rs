use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde_json::json;

use crate::error::{SurveyError, SurveyResult};
use crate::models::{Question, SurveyRecord};
use crate::survey_error;

/// A shareable survey code: `username:surveyId:checksum`. It doubles as the
/// id of the published document, so guessing a survey id alone is not
/// enough to read a survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyCode {
    pub username: String,
    pub survey_id: String,
    pub checksum: String,
}

impl SurveyCode {
    pub fn new(username: &str, survey_id: &str, checksum: &str) -> Self {
        SurveyCode {
            username: username.to_string(),
            survey_id: survey_id.to_string(),
            checksum: checksum.to_string(),
        }
    }

    /// Splits a code into its three segments. Format validation beyond the
    /// shape happens at the input boundary.
    pub fn parse(code: &str) -> SurveyResult<SurveyCode> {
        let parts: Vec<&str> = code.split(':').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(survey_error!(ParseError, "Malformed survey code: {}", code));
        }
        Ok(SurveyCode::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for SurveyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.username, self.survey_id, self.checksum)
    }
}

/// Checksum over the full survey content. Canonical form is the JSON
/// serialization with sorted keys, so equal content always hashes equally.
pub fn content_checksum(record: &SurveyRecord, title: &str, questions: &[Question]) -> String {
    let content = json!({
        "title": title,
        "questions": questions,
        "ownerId": record.owner_id,
        "insertDate": record.insert_date,
        "published": record.published,
    });

    let mut hasher = DefaultHasher::new();
    content.to_string().hash(&mut hasher);
    format!("{:x}", hasher.finish())
}
