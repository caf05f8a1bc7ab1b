use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::constants::{CONFIG_FILE, DEFAULT_API_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "apiUrl")]
    pub api_url: Option<String>,
    pub session: Option<SavedSession>,
}

pub fn load_config() -> Config {
    let home_dir = dirs::home_dir().expect("Could not find home directory");
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).expect("Failed to read config file");
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

pub fn get_token() -> Result<String, Box<dyn std::error::Error>> {
    // First check environment variable
    if let Ok(token) = env::var("SURVEYME_TOKEN") {
        return Ok(token);
    }

    // Then check config file
    let config = load_config();
    if let Some(session) = config.session {
        return Ok(session.token);
    }

    Err("Not signed in. Set SURVEYME_TOKEN environment variable or run 'surveyme auth signin'.".into())
}

pub fn get_api_url() -> String {
    if let Ok(url) = env::var("SURVEYME_API_URL") {
        return url;
    }

    let config = load_config();
    config
        .api_url
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub fn get_session() -> Option<SavedSession> {
    load_config().session
}

pub fn store_session(token: &str, user_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config();
    config.session = Some(SavedSession {
        token: token.to_string(),
        user_id: user_id.to_string(),
    });
    save_config(&config)
}

pub fn clear_session() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config();
    config.session = None;
    save_config(&config)
}
