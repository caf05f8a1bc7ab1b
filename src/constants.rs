pub const DEFAULT_API_URL: &str = "https://api.surveyme.app";
pub const CONFIG_FILE: &str = ".surveyme-config.json";
pub const STORAGE_FILE: &str = ".surveyme-storage.json";

// Local storage keys
pub const EMAIL_KEY: &str = "email";
pub const SURVEY_CODES_KEY: &str = "surveyCodes";

// Validation limits
pub const MAX_QUESTIONS: usize = 10;
pub const QUESTION_MAX_LEN: usize = 250;
pub const SURVEY_TITLE_MIN_LEN: usize = 5;
pub const SURVEY_TITLE_MAX_LEN: usize = 50;
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 15;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 30;
pub const MAX_SCORE: u8 = 10;

// Validation patterns
pub const EMAIL_FORMAT: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const USERNAME_FORMAT: &str = r"^[a-z0-9]+$";
pub const SURVEY_CODE_FORMAT: &str = r"^[a-z0-9]+:[A-Za-z0-9_-]+:[0-9a-f]+$";

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// User-facing messages, shared by the CLI commands and the interactive UI
pub const CONFIRM_ADD_SURVEY: &str = "Are you sure you want to add this survey?";
pub const SURVEY_ADDED: &str = "Survey added successfully.";
pub const UNSAVED_QUESTION_WARNING: &str =
    "There is an unsaved question in the editor. Add the survey without it?";
pub const NO_QUESTIONS: &str = "A survey needs at least one question.";
pub const TOO_MANY_QUESTIONS: &str = "A survey can have at most 10 questions.";
pub const INVALID_CODE: &str = "The survey code is invalid.";
pub const SURVEY_NOT_PUBLISHED: &str = "This survey has not been published yet.";
pub const SURVEY_NOT_FOUND: &str = "There is no survey with this code.";
pub const OWN_SURVEY: &str = "You cannot participate in your own survey.";
pub const ALREADY_PARTICIPATED: &str = "You have already participated in this survey.";
pub const CONFIRM_SUBMISSION: &str = "Are you sure you want to submit your answers?";
pub const SUBMISSION_ADDED: &str = "Your answers were submitted successfully.";
pub const UNFILLED_QUESTIONS_PREFIX: &str = "Please fill the following questions: ";
pub const SCORE_HINT: &str = "Please provide a score for each question or mark as No Answer.";
pub const CONFIRM_PUBLISH: &str = "Are you sure you want to publish this survey?";
pub const SURVEY_PUBLISHED: &str = "Survey published successfully.";
pub const CONFIRM_DELETE: &str =
    "Are you sure you want to delete this survey? All submissions will be lost.";
pub const SURVEY_DELETED: &str = "Survey deleted successfully.";
pub const MISSING_PROFILE: &str = "No user record found for this account.";
pub const NO_PUBLISHED_VERSION: &str = "Survey has no published content.";
pub const MULTIPLE_PUBLISHED_VERSIONS: &str = "Survey has multiple published versions.";
