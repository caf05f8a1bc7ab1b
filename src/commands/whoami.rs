use clap::ArgMatches;

use crate::context::AppContext;

pub async fn handle_whoami(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = AppContext::load();
    match context.restore_session().await? {
        Some(account) => {
            println!("Signed in as: {} ({})", account.username, account.email);
            println!("User ID: {}", account.user_id);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
