use serde::Deserialize;
use serde_json::json;

use crate::error::SurveyResult;
use crate::models::Credential;

use super::SurveyClient;

impl SurveyClient {
    pub async fn sign_up(&self, email: &str, password: &str) -> SurveyResult<Credential> {
        let body = json!({ "email": email, "password": password });
        self.request(self.post("/auth/sign-up").json(&body)).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> SurveyResult<Credential> {
        let body = json!({ "email": email, "password": password });
        self.request(self.post("/auth/sign-in").json(&body)).await
    }

    pub async fn sign_out(&self) -> SurveyResult<()> {
        self.request_unit(self.post("/auth/sign-out")).await
    }

    /// Resolves the current token to its user id. Fails with an auth error
    /// when the token is missing, expired or revoked; session restore
    /// treats that as signed-out rather than a failure.
    pub async fn session_user(&self) -> SurveyResult<String> {
        #[derive(Debug, Deserialize)]
        struct SessionData {
            #[serde(rename = "userId")]
            user_id: String,
        }

        let data: SessionData = self.request(self.get("/auth/me")).await?;
        Ok(data.user_id)
    }
}
