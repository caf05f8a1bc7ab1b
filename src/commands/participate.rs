use clap::ArgMatches;
use colored::*;
use dialoguer::{Confirm, Input};

use crate::client::{current_date_time, ParticipateOutcome};
use crate::code::SurveyCode;
use crate::constants::{
    ALREADY_PARTICIPATED, CONFIRM_SUBMISSION, INVALID_CODE, MAX_SCORE, OWN_SURVEY, SCORE_HINT,
    SUBMISSION_ADDED, SURVEY_NOT_FOUND, SURVEY_NOT_PUBLISHED,
};
use crate::context::AppContext;
use crate::formatting::{count_label, print_scores};
use crate::models::{Score, Submission};
use crate::storage::Storage;
use crate::validation::validate_survey_code;

pub async fn handle_participate(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let code_text = match matches.get_one::<String>("code") {
        Some(code) => code.clone(),
        None => Input::<String>::new()
            .with_prompt("Survey code")
            .interact_text()?,
    };

    if validate_survey_code(&code_text).is_err() {
        println!("{}", INVALID_CODE.red());
        return Ok(());
    }
    let code = match SurveyCode::parse(&code_text) {
        Ok(code) => code,
        Err(_) => {
            println!("{}", INVALID_CODE.red());
            return Ok(());
        }
    };

    let storage = Storage::open();
    if storage.has_consumed(&code_text) {
        println!("{}", ALREADY_PARTICIPATED.yellow());
        return Ok(());
    }

    let mut context = AppContext::load();
    let account = context.restore_session().await?;
    let client = match account {
        Some(_) => context.verified_client()?,
        None => context.anonymous_client(),
    };

    let outcome = client
        .resolve_participation(&code, account.as_ref().map(|a| a.user_id.as_str()))
        .await?;
    let survey = match outcome {
        ParticipateOutcome::Ready(survey) => survey,
        ParticipateOutcome::OwnSurvey => {
            println!("{}", OWN_SURVEY.yellow());
            return Ok(());
        }
        ParticipateOutcome::NoSurvey => {
            println!("{}", SURVEY_NOT_FOUND.yellow());
            return Ok(());
        }
        ParticipateOutcome::InvalidCode => {
            println!("{}", INVALID_CODE.red());
            return Ok(());
        }
        ParticipateOutcome::NotPublished => {
            println!("{}", SURVEY_NOT_PUBLISHED.yellow());
            return Ok(());
        }
    };

    println!();
    println!("{}", survey.title.bold());
    println!("{}", count_label("question", survey.questions.len()).dimmed());
    println!("{}", SCORE_HINT.dimmed());

    let mut scores = Vec::with_capacity(survey.questions.len());
    for (position, question) in survey.questions.iter().enumerate() {
        println!();
        println!("{}. {}", position + 1, question.content);
        let answer: String = Input::new()
            .with_prompt(format!("Score [0-{}, n for No Answer]", MAX_SCORE))
            .validate_with(|input: &String| -> Result<(), String> {
                let text = input.trim();
                if text.eq_ignore_ascii_case("n") {
                    return Ok(());
                }
                match text.parse::<u8>() {
                    Ok(value) if value <= MAX_SCORE => Ok(()),
                    _ => Err(format!(
                        "Enter a score between 0 and {}, or n for No Answer",
                        MAX_SCORE
                    )),
                }
            })
            .interact_text()?;
        let text = answer.trim();
        if text.eq_ignore_ascii_case("n") {
            scores.push(Score::NoAnswer);
        } else {
            scores.push(Score::Value(text.parse::<u8>()?));
        }
    }

    let submission = Submission {
        survey_id: code.survey_id.clone(),
        scores,
        insert_date: current_date_time(),
    };

    println!();
    print_scores(&survey.questions, &submission);
    println!();

    let confirmed = Confirm::new()
        .with_prompt(CONFIRM_SUBMISSION)
        .default(true)
        .interact()?;
    if !confirmed {
        println!("Cancelled.");
        return Ok(());
    }

    client.add_submission(&submission).await?;

    if !storage.add_consumed_code(&code_text) {
        eprintln!(
            "{}",
            "⚠ Could not record your participation locally.".yellow()
        );
    }

    println!("{} {}", "✅".green(), SUBMISSION_ADDED.green().bold());
    Ok(())
}
