use clap::ArgMatches;
use colored::*;
use dialoguer::{Confirm, Input};

use crate::constants::{CONFIRM_ADD_SURVEY, MAX_QUESTIONS, NO_QUESTIONS, SURVEY_ADDED, TOO_MANY_QUESTIONS};
use crate::context::AppContext;
use crate::draft::{normalize_content, AddOutcome, SurveyDraft};
use crate::error::SurveyError;
use crate::formatting::format_status;
use crate::models::Visibility;
use crate::validation::{validate_question_content, validate_survey_title};

pub async fn handle_create(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = AppContext::load();
    let account = context.require_account().await?;
    let client = context.verified_client()?;

    let title = match matches.get_one::<String>("title") {
        Some(title) => title.clone(),
        None => Input::<String>::new()
            .with_prompt("Survey title")
            .interact_text()?,
    };
    validate_survey_title(&title)?;

    let mut draft = SurveyDraft::new();
    draft.title = title.clone();

    if let Some(question_args) = matches.get_many::<String>("question") {
        for text in question_args {
            let content = normalize_content(text);
            validate_question_content(&content)?;
            match draft.add(text) {
                AddOutcome::Added => {}
                AddOutcome::EmptyInput => {
                    return Err(Box::new(SurveyError::InvalidInput(
                        "Questions cannot be empty".to_string(),
                    )))
                }
                AddOutcome::TooManyQuestions => {
                    return Err(Box::new(SurveyError::InvalidInput(
                        TOO_MANY_QUESTIONS.to_string(),
                    )))
                }
            }
        }
    } else {
        println!(
            "Enter up to {} questions. Leave a question empty to finish.",
            MAX_QUESTIONS
        );
        loop {
            let text: String = Input::new()
                .with_prompt(format!("Question {}", draft.questions.len() + 1))
                .allow_empty(true)
                .interact_text()?;
            if normalize_content(&text).is_empty() {
                break;
            }
            validate_question_content(&normalize_content(&text))?;
            match draft.add(&text) {
                AddOutcome::Added => {}
                AddOutcome::EmptyInput => {}
                AddOutcome::TooManyQuestions => {
                    println!("{}", TOO_MANY_QUESTIONS.yellow());
                    break;
                }
            }
        }
    }

    if draft.questions.is_empty() {
        return Err(Box::new(SurveyError::InvalidInput(NO_QUESTIONS.to_string())));
    }

    let visibility = if matches.get_flag("publish") {
        Visibility::Published
    } else {
        Visibility::Private
    };

    println!();
    println!("{}: {}", "Title".bold(), draft.title);
    println!("{}: {}", "Questions".bold(), draft.questions.len());
    println!("{}: {}", "Status".bold(), format_status(visibility.is_published()));
    println!();

    if !matches.get_flag("yes") {
        let confirmed = Confirm::new()
            .with_prompt(CONFIRM_ADD_SURVEY)
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let survey = client
        .create_survey(&account, &draft.title, draft.questions.clone(), visibility)
        .await?;
    draft.reset();

    println!("{} {}", "✅".green(), SURVEY_ADDED.green().bold());
    println!("{}: {}", "ID".bold(), survey.id);
    println!("{}: {}", "Survey Code".bold(), survey.survey_code.cyan());

    Ok(())
}
