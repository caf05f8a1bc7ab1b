use clap::ArgMatches;
use colored::*;
use dialoguer::{Input, Password};

use crate::config::{get_session, load_config};
use crate::constants::DEFAULT_API_URL;
use crate::context::AppContext;
use crate::error::SurveyError;
use crate::models::UserProfile;
use crate::storage::Storage;
use crate::validation::{validate_email, validate_password, validate_username};

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("signup", sub)) => handle_signup(sub).await,
        Some(("signin", sub)) => handle_signin(sub).await,
        Some(("signout", _)) => handle_signout().await,
        Some(("show", _)) => handle_show(),
        _ => {
            println!("Usage: surveyme auth <signup|signin|signout|show>");
            Ok(())
        }
    }
}

fn prompt_email(remembered: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let mut input = Input::<String>::new().with_prompt("Email");
    if let Some(email) = remembered {
        input = input.default(email);
    }
    Ok(input.interact_text()?)
}

async fn handle_signup(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Storage::open();

    let email = match matches.get_one::<String>("email") {
        Some(email) => email.clone(),
        None => prompt_email(None)?,
    };
    validate_email(&email)?;

    let username = match matches.get_one::<String>("username") {
        Some(username) => username.clone(),
        None => Input::<String>::new()
            .with_prompt("Username")
            .interact_text()?,
    };
    validate_username(&username)?;

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;
    validate_password(&password)?;

    let mut context = AppContext::load();
    let credential = context
        .anonymous_client()
        .sign_up(&email, &password)
        .await?;

    context.set_session(&credential.token, &credential.user_id)?;
    let client = context.verified_client()?;
    client
        .put_user_profile(
            &credential.user_id,
            &UserProfile {
                username: username.clone(),
                email: email.clone(),
            },
        )
        .await?;

    if !storage.remember_email(&email) {
        eprintln!("{}", "⚠ Could not remember the email locally.".yellow());
    }

    println!("✅ Signed up as {} ({})", username.bold(), email);
    Ok(())
}

async fn handle_signin(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Storage::open();

    let email = match matches.get_one::<String>("email") {
        Some(email) => email.clone(),
        None => prompt_email(storage.remembered_email())?,
    };
    validate_email(&email)?;

    let password = Password::new().with_prompt("Password").interact()?;
    validate_password(&password)?;

    let mut context = AppContext::load();
    let credential = context
        .anonymous_client()
        .sign_in(&email, &password)
        .await?;
    context.set_session(&credential.token, &credential.user_id)?;

    // A credential without its profile document is useless; roll the
    // session back so the next command does not half-work.
    let account = match context.restore_session().await {
        Ok(Some(account)) => account,
        Ok(None) => {
            context.sign_out().await?;
            return Err(Box::new(SurveyError::AuthError(
                "Session was rejected right after sign-in".to_string(),
            )));
        }
        Err(e) => {
            context.sign_out().await?;
            return Err(Box::new(e));
        }
    };

    if !storage.remember_email(&email) {
        eprintln!("{}", "⚠ Could not remember the email locally.".yellow());
    }

    println!("✅ Signed in as {} ({})", account.username.bold(), account.email);
    Ok(())
}

async fn handle_signout() -> Result<(), Box<dyn std::error::Error>> {
    let mut context = AppContext::load();
    if !context.is_signed_in() {
        println!("Not signed in.");
        return Ok(());
    }
    context.sign_out().await?;
    println!("✅ Signed out.");
    Ok(())
}

fn handle_show() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    println!(
        "API URL: {}",
        config.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    );
    match get_session() {
        Some(session) => {
            let token = &session.token;
            let masked = if token.len() > 8 {
                format!("{}...{}", &token[..4], &token[token.len() - 4..])
            } else {
                "****".to_string()
            };
            println!("User ID: {}", session.user_id);
            println!("Token: {}", masked);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
