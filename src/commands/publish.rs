use clap::ArgMatches;
use colored::*;
use dialoguer::Confirm;

use crate::constants::{CONFIRM_PUBLISH, SURVEY_PUBLISHED};
use crate::context::AppContext;

pub async fn handle_publish(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let survey_id = matches
        .get_one::<String>("id")
        .ok_or("Survey ID is required")?;

    let mut context = AppContext::load();
    context.require_account().await?;
    let client = context.verified_client()?;

    let survey = client.fetch_survey(survey_id).await?;
    if survey.published {
        println!("'{}' is already published.", survey.title);
        return Ok(());
    }

    if !matches.get_flag("yes") {
        println!("{}: {}", "Title".bold(), survey.title);
        let confirmed = Confirm::new()
            .with_prompt(CONFIRM_PUBLISH)
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.set_survey_published(&survey.id).await?;

    println!("{} {}", "✅".green(), SURVEY_PUBLISHED.green().bold());
    println!("{}: {}", "Survey Code".bold(), survey.survey_code.cyan());

    Ok(())
}
