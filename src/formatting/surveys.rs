use colored::*;

use crate::models::{Question, Survey};

use super::utils::*;

pub fn print_surveys(surveys: &[Survey], format: &str) {
    if surveys.is_empty() {
        println!("{}", "No surveys found.".dimmed());
        return;
    }

    match format {
        "json" => {
            match serde_json::to_string_pretty(&surveys) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("{} {}", "Error:".red(), e),
            }
        }
        "table" => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<22} {:<42} {:<11} {:<12} {:<12}",
                "ID".bold(),
                "Title".bold(),
                "Status".bold(),
                "Questions".bold(),
                "Created".bold()
            );
            println!("{}", "─".repeat(100).dimmed());

            for survey in surveys {
                println!(
                    "{:<22} {:<42} {:<11} {:<12} {:<12}",
                    survey.id.blue(),
                    truncate(&survey.title, 40),
                    format_status(survey.published),
                    survey.questions.len(),
                    date_only(&survey.insert_date)
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        _ => {
            println!("{}", count_label("Survey", surveys.len()).bold());
            for survey in surveys {
                println!(
                    "{} {:<42} {:<11} {}  {}",
                    status_icon(survey.published),
                    truncate(&survey.title, 40),
                    format_status(survey.published),
                    date_only(&survey.insert_date).dimmed(),
                    survey.id.dimmed()
                );
            }
        }
    }
}

pub fn print_single_survey(survey: &Survey) {
    println!("\n{}", "═".repeat(80).blue());
    println!("{}  {}", survey.title.bold(), format_status(survey.published));
    println!("{}", "─".repeat(80).dimmed());

    println!(
        "{}: {} | {}: {} ({})",
        "ID".dimmed(),
        survey.id.blue(),
        "Created".dimmed(),
        date_only(&survey.insert_date),
        format_relative_time(&survey.insert_date).dimmed()
    );
    println!("{}: {}", "Survey Code".dimmed(), survey.survey_code.cyan());

    println!(
        "\n{}",
        count_label("Question", survey.questions.len()).bold()
    );
    println!("{}", "─".repeat(40).dimmed());
    print_questions(&survey.questions);

    println!("\n{}", "═".repeat(80).blue());
}

pub fn print_questions(questions: &[Question]) {
    for (position, question) in questions.iter().enumerate() {
        println!("{:>3}. {}", position + 1, question.content);
    }
}
