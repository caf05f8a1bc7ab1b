use clap::ArgMatches;
use colored::*;

use crate::context::AppContext;
use crate::formatting::{print_single_survey, print_surveys};

pub async fn handle_surveys(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("simple");

    let mut context = AppContext::load();
    let account = context.require_account().await?;
    let client = context.verified_client()?;

    let (surveys, warnings) = client.fetch_surveys(&account.user_id).await?;
    for warning in &warnings {
        eprintln!("{} {}", "⚠".yellow(), warning.yellow());
    }
    print_surveys(&surveys, format);

    Ok(())
}

pub async fn handle_survey(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let survey_id = matches
        .get_one::<String>("id")
        .ok_or("Survey ID is required")?;

    let mut context = AppContext::load();
    context.require_account().await?;
    let client = context.verified_client()?;

    let survey = client.fetch_survey(survey_id).await?;
    print_single_survey(&survey);

    Ok(())
}
