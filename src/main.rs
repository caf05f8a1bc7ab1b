use std::process;

use clap::{Arg, Command};

use surveyme_cli::commands;
use surveyme_cli::interactive::handlers::run_interactive_mode;
use surveyme_cli::logging::{init_logging, log_panic_info};

#[tokio::main]
async fn main() {
    let _ = init_logging();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    let app = Command::new("surveyme")
        .about("SurveyMe - create surveys, share codes and collect answers from the terminal")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Manage the SurveyMe session")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("signup")
                        .about("Create an account")
                        .arg(
                            Arg::new("email")
                                .long("email")
                                .value_name("EMAIL")
                                .help("Email address")
                                .required(false)
                        )
                        .arg(
                            Arg::new("username")
                                .long("username")
                                .value_name("NAME")
                                .help("Public username, becomes part of your survey codes")
                                .required(false)
                        )
                )
                .subcommand(
                    Command::new("signin")
                        .about("Sign in with email and password")
                        .arg(
                            Arg::new("email")
                                .long("email")
                                .value_name("EMAIL")
                                .help("Email address")
                                .required(false)
                        )
                )
                .subcommand(
                    Command::new("signout")
                        .about("Sign out and forget the saved session")
                )
                .subcommand(
                    Command::new("show")
                        .about("Show the saved session")
                )
        )
        .subcommand(
            Command::new("whoami")
                .about("Show the signed-in account")
        )
        .subcommand(
            Command::new("surveys")
                .about("List your surveys")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                        .default_value("simple")
                )
        )
        .subcommand(
            Command::new("survey")
                .about("Show one survey with its questions and code")
                .arg(
                    Arg::new("id")
                        .value_name("SURVEY_ID")
                        .help("Survey ID")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("create")
                .about("Create a survey")
                .arg(
                    Arg::new("title")
                        .long("title")
                        .short('t')
                        .value_name("TITLE")
                        .help("Survey title")
                )
                .arg(
                    Arg::new("question")
                        .long("question")
                        .short('q')
                        .value_name("TEXT")
                        .help("Question text, repeat for more (up to 10)")
                        .action(clap::ArgAction::Append)
                )
                .arg(
                    Arg::new("publish")
                        .long("publish")
                        .help("Publish immediately instead of keeping the survey private")
                        .action(clap::ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("publish")
                .about("Publish a survey so its code can be used")
                .arg(
                    Arg::new("id")
                        .value_name("SURVEY_ID")
                        .help("Survey ID to publish")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a survey and all of its submissions")
                .arg(
                    Arg::new("id")
                        .value_name("SURVEY_ID")
                        .help("Survey ID to delete")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("participate")
                .about("Fill out a survey using its code")
                .arg(
                    Arg::new("code")
                        .value_name("CODE")
                        .help("Survey code (username:survey:checksum)")
                        .required(false)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("submissions")
                .about("Show submissions for one of your surveys")
                .arg(
                    Arg::new("id")
                        .value_name("SURVEY_ID")
                        .help("Survey ID")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("full")
                        .long("full")
                        .help("Show every answer, not just the summary line")
                        .action(clap::ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .short('w')
                        .help("Keep polling and print new submissions as they arrive")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("interactive")
                .about("Full-screen terminal UI")
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => commands::auth::handle_auth(sub_matches).await,
        Some(("whoami", sub_matches)) => commands::whoami::handle_whoami(sub_matches).await,
        Some(("surveys", sub_matches)) => commands::surveys::handle_surveys(sub_matches).await,
        Some(("survey", sub_matches)) => commands::surveys::handle_survey(sub_matches).await,
        Some(("create", sub_matches)) => commands::create::handle_create(sub_matches).await,
        Some(("publish", sub_matches)) => commands::publish::handle_publish(sub_matches).await,
        Some(("delete", sub_matches)) => commands::delete::handle_delete(sub_matches).await,
        Some(("participate", sub_matches)) => {
            commands::participate::handle_participate(sub_matches).await
        }
        Some(("submissions", sub_matches)) => {
            commands::submissions::handle_submissions(sub_matches).await
        }
        Some(("interactive", _)) => run_interactive_mode().await,
        _ => {
            eprintln!("Unknown command. Use 'surveyme --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
