use clap::ArgMatches;
use colored::*;

use crate::client::{current_date_time, sort_submissions, WATCH_POLL_INTERVAL};
use crate::context::AppContext;
use crate::formatting::print_submissions;

pub async fn handle_submissions(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let survey_id = matches
        .get_one::<String>("id")
        .ok_or("Survey ID is required")?;
    let full = matches.get_flag("full");

    let mut context = AppContext::load();
    context.require_account().await?;
    let client = context.verified_client()?;

    // The survey itself supplies the question texts and doubles as the
    // ownership check.
    let survey = client.fetch_survey(survey_id).await?;

    if !matches.get_flag("watch") {
        let mut submissions = client.get_submissions(&survey.id).await?;
        sort_submissions(&mut submissions);
        println!("{}", survey.title.bold());
        println!();
        print_submissions(&submissions, &survey.questions, full);
        return Ok(());
    }

    let mut watch = client.clone().watch_submissions(&survey.id, WATCH_POLL_INTERVAL);
    println!(
        "Watching submissions for '{}'. Press Ctrl-C to stop.",
        survey.title.bold()
    );
    loop {
        tokio::select! {
            snapshot = watch.next() => match snapshot {
                Some(mut submissions) => {
                    sort_submissions(&mut submissions);
                    println!();
                    println!("{}", format!("[{}]", current_date_time()).dimmed());
                    print_submissions(&submissions, &survey.questions, full);
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}
