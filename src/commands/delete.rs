use clap::ArgMatches;
use colored::*;
use dialoguer::Confirm;

use crate::constants::{CONFIRM_DELETE, SURVEY_DELETED};
use crate::context::AppContext;

pub async fn handle_delete(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let survey_id = matches
        .get_one::<String>("id")
        .ok_or("Survey ID is required")?;

    let mut context = AppContext::load();
    context.require_account().await?;
    let client = context.verified_client()?;

    let survey = client.fetch_survey(survey_id).await?;

    if !matches.get_flag("yes") {
        println!("{}: {}", "Title".bold(), survey.title);
        let confirmed = Confirm::new()
            .with_prompt(CONFIRM_DELETE)
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.remove_survey(&survey.id, &survey.survey_code).await?;

    println!("{} {}", "✅".green(), SURVEY_DELETED.green().bold());
    println!("{}: {}", "ID".bold(), survey.id);

    Ok(())
}
