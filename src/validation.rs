use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{
    EMAIL_FORMAT, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, QUESTION_MAX_LEN, SURVEY_CODE_FORMAT,
    SURVEY_TITLE_MAX_LEN, SURVEY_TITLE_MIN_LEN, USERNAME_FORMAT, USERNAME_MAX_LEN,
    USERNAME_MIN_LEN,
};
use crate::error::{SurveyError, SurveyResult};
use crate::survey_error;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(EMAIL_FORMAT).unwrap();
    static ref USERNAME_RE: Regex = Regex::new(USERNAME_FORMAT).unwrap();
    static ref SURVEY_CODE_RE: Regex = Regex::new(SURVEY_CODE_FORMAT).unwrap();
}

pub fn validate_email(email: &str) -> SurveyResult<()> {
    if email.is_empty() {
        return Err(survey_error!(InvalidInput, "Email is required"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(survey_error!(InvalidInput, "Invalid email format"));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> SurveyResult<()> {
    if username.is_empty() {
        return Err(survey_error!(InvalidInput, "Username is required"));
    }
    let len = username.chars().count();
    if len < USERNAME_MIN_LEN {
        return Err(survey_error!(
            InvalidInput,
            "Usernames have at least {} characters",
            USERNAME_MIN_LEN
        ));
    }
    if len > USERNAME_MAX_LEN {
        return Err(survey_error!(
            InvalidInput,
            "Usernames cannot have more than {} characters",
            USERNAME_MAX_LEN
        ));
    }
    if !USERNAME_RE.is_match(username) {
        return Err(survey_error!(
            InvalidInput,
            "Only numbers and lowercase letters can be used in usernames"
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> SurveyResult<()> {
    if password.is_empty() {
        return Err(survey_error!(InvalidInput, "Password is required"));
    }
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(survey_error!(
            InvalidInput,
            "Passwords have at least {} characters",
            PASSWORD_MIN_LEN
        ));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(survey_error!(
            InvalidInput,
            "Passwords cannot have more than {} characters",
            PASSWORD_MAX_LEN
        ));
    }
    Ok(())
}

pub fn validate_survey_title(title: &str) -> SurveyResult<()> {
    if title.is_empty() {
        return Err(survey_error!(InvalidInput, "Survey title is required"));
    }
    let len = title.chars().count();
    if len < SURVEY_TITLE_MIN_LEN {
        return Err(survey_error!(
            InvalidInput,
            "Survey title must contain at least {} characters",
            SURVEY_TITLE_MIN_LEN
        ));
    }
    if len > SURVEY_TITLE_MAX_LEN {
        return Err(survey_error!(
            InvalidInput,
            "Survey title cannot have more than {} characters",
            SURVEY_TITLE_MAX_LEN
        ));
    }
    Ok(())
}

pub fn validate_question_content(content: &str) -> SurveyResult<()> {
    if content.chars().count() > QUESTION_MAX_LEN {
        return Err(survey_error!(
            InvalidInput,
            "Questions cannot have more than {} characters",
            QUESTION_MAX_LEN
        ));
    }
    Ok(())
}

pub fn validate_survey_code(code: &str) -> SurveyResult<()> {
    if code.is_empty() {
        return Err(survey_error!(InvalidInput, "Survey code is required"));
    }
    if !SURVEY_CODE_RE.is_match(code) {
        return Err(survey_error!(InvalidInput, "Invalid survey code format"));
    }
    Ok(())
}
