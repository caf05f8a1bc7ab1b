#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("Not signed in. Please run 'surveyme auth signin' to sign in.")]
    NotSignedIn,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Inconsistent data: {0}")]
    DataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type SurveyResult<T> = Result<T, SurveyError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> SurveyResult<T>;
    fn with_context<F>(self, f: F) -> SurveyResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> SurveyResult<T> {
        self.map_err(|e| SurveyError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> SurveyResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SurveyError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> SurveyResult<T> {
        self.ok_or_else(|| SurveyError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> SurveyResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| SurveyError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! survey_error {
    ($error_type:ident, $msg:expr) => {
        SurveyError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        SurveyError::$error_type(format!($fmt, $($arg)*))
    };
}
