use std::sync::Arc;

use crate::client::SurveyClient;
use crate::config::{clear_session, get_api_url, get_token, store_session};
use crate::constants::MISSING_PROFILE;
use crate::error::{SurveyError, SurveyResult};
use crate::logging::{log_info, log_warn};
use crate::models::Account;
use crate::survey_error;

/// Central context for CLI and interactive operations: the saved session,
/// the API base and cached client instances.
pub struct AppContext {
    api_url: String,
    token: Option<String>,
    client: Option<Arc<SurveyClient>>,
    anonymous: Option<Arc<SurveyClient>>,
    account: Option<Account>,
}

impl AppContext {
    /// Load context from saved configuration and environment.
    pub fn load() -> Self {
        Self {
            api_url: get_api_url(),
            token: get_token().ok(),
            client: None,
            anonymous: None,
            account: None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Get or create a client carrying the session token.
    pub fn verified_client(&mut self) -> SurveyResult<Arc<SurveyClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let token = self.token.clone().ok_or(SurveyError::NotSignedIn)?;
        let client = Arc::new(SurveyClient::new(self.api_url.clone(), Some(token)));
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Get or create a tokenless client. Enough for reading published
    /// surveys and submitting answers.
    pub fn anonymous_client(&mut self) -> Arc<SurveyClient> {
        if let Some(client) = &self.anonymous {
            return client.clone();
        }

        let client = Arc::new(SurveyClient::new(self.api_url.clone(), None));
        self.anonymous = Some(client.clone());
        client
    }

    /// The best client available: authenticated when signed in, anonymous
    /// otherwise.
    pub fn any_client(&mut self) -> Arc<SurveyClient> {
        match self.verified_client() {
            Ok(client) => client,
            Err(_) => self.anonymous_client(),
        }
    }

    /// Resolves the saved token to a signed-in account. An absent or
    /// rejected token is a signed-out state, not an error; a valid token
    /// whose profile document is missing is reported and left signed out.
    pub async fn restore_session(&mut self) -> SurveyResult<Option<Account>> {
        if let Some(account) = &self.account {
            return Ok(Some(account.clone()));
        }
        if self.token.is_none() {
            return Ok(None);
        }

        let client = self.verified_client()?;
        let user_id = match client.session_user().await {
            Ok(id) => id,
            Err(SurveyError::AuthError(message)) => {
                log_info(&format!("Saved session rejected: {}", message));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let profile = match client.get_user_profile(&user_id).await {
            Ok(profile) => profile,
            Err(SurveyError::NotFound(_)) => {
                return Err(survey_error!(AuthError, "{}", MISSING_PROFILE));
            }
            Err(e) => return Err(e),
        };

        let account = Account {
            user_id,
            username: profile.username,
            email: profile.email,
        };
        self.account = Some(account.clone());
        Ok(Some(account))
    }

    /// Like restore_session, but being signed out is an error.
    pub async fn require_account(&mut self) -> SurveyResult<Account> {
        match self.restore_session().await? {
            Some(account) => Ok(account),
            None => Err(SurveyError::NotSignedIn),
        }
    }

    /// Persist a fresh session and rebuild the cached client around it.
    pub fn set_session(&mut self, token: &str, user_id: &str) -> SurveyResult<()> {
        store_session(token, user_id).map_err(|e| SurveyError::ConfigError(e.to_string()))?;
        self.token = Some(token.to_string());
        self.client = Some(Arc::new(SurveyClient::new(
            self.api_url.clone(),
            Some(token.to_string()),
        )));
        self.account = None;
        Ok(())
    }

    /// Sign out remotely (best effort) and forget the local session.
    pub async fn sign_out(&mut self) -> SurveyResult<()> {
        if let Ok(client) = self.verified_client() {
            if let Err(e) = client.sign_out().await {
                log_warn(&format!("Remote sign-out failed: {}", e));
            }
        }
        clear_session().map_err(|e| SurveyError::ConfigError(e.to_string()))?;
        self.token = None;
        self.client = None;
        self.account = None;
        Ok(())
    }
}
