pub mod api;
pub mod question;
pub mod submission;
pub mod survey;
pub mod user;

// Re-export commonly used types
pub use api::{ApiErrorBody, ApiErrorDetail, Created, Document, DocumentList};
pub use question::Question;
pub use submission::{unfilled_positions, Score, Submission};
pub use survey::{PublishedSurvey, Survey, SurveyRecord, Visibility};
pub use user::{Account, Credential, UserProfile};
