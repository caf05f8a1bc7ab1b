use colored::*;

use crate::models::{Document, Question, Submission};

use super::utils::*;

pub fn submission_summary(submission: &Submission) -> String {
    format!(
        "Answered: {}/{}",
        submission.answered_count(),
        submission.scores.len()
    )
}

pub fn submitted_on(submission: &Submission) -> String {
    format!("Submitted on {}", date_only(&submission.insert_date))
}

/// Per-question score lines, numbered by display position.
pub fn print_scores(questions: &[Question], submission: &Submission) {
    for (position, (question, score)) in questions
        .iter()
        .zip(submission.scores.iter())
        .enumerate()
    {
        let label = score_label(score);
        println!(
            "{:>3}. {:<50} {}",
            position + 1,
            truncate(&question.content, 50),
            match score {
                crate::models::Score::NoAnswer => label.dimmed(),
                _ => label.bold(),
            }
        );
    }
}

pub fn print_submissions(
    submissions: &[Document<Submission>],
    questions: &[Question],
    full: bool,
) {
    if submissions.is_empty() {
        println!("{}", "No submissions yet.".dimmed());
        return;
    }

    println!("{}", count_label("Submission", submissions.len()).bold());
    println!("{}", "─".repeat(60).dimmed());
    for submission in submissions {
        println!(
            "{} {:<18} {}  {}",
            "✓".green(),
            submission_summary(&submission.data),
            submitted_on(&submission.data).dimmed(),
            submission.id.dimmed()
        );
        if full {
            print_scores(questions, &submission.data);
            println!("{}", "─".repeat(60).dimmed());
        }
    }
}
