pub mod auth;
pub mod flows;
pub mod http;
pub mod store;
pub mod subscription;

pub use flows::{current_date_time, sort_submissions, ParticipateOutcome};
pub use http::SurveyClient;
pub use subscription::{SubmissionWatch, WATCH_POLL_INTERVAL};
