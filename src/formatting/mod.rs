pub mod submissions;
pub mod surveys;
pub mod utils;

pub use submissions::{print_scores, print_submissions, submission_summary, submitted_on};
pub use surveys::{print_questions, print_single_survey, print_surveys};
pub use utils::{
    count_label, date_only, format_relative_time, format_status, score_label, status_icon,
    truncate,
};
