// Module declarations
pub mod client;
pub mod code;
pub mod commands;
pub mod config;
pub mod constants;
pub mod context;
pub mod draft;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod storage;
pub mod validation;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::SurveyClient;
pub use config::{load_config, save_config, Config};
pub use error::{SurveyError, SurveyResult};
pub use models::*;
