use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{SurveyError, SurveyResult};
use crate::logging::log_debug;
use crate::models::ApiErrorBody;

/// HTTP client for the SurveyMe service. Carries the bearer token when one
/// is present; published surveys and submissions are readable and writable
/// without one.
pub struct SurveyClient {
    client: reqwest::Client,
    base_url: String,
}

impl SurveyClient {
    pub fn new(api_url: String, token: Option<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .expect("Invalid token format"),
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub(super) fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub(super) fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path))
    }

    pub(super) fn patch(&self, path: &str) -> RequestBuilder {
        self.client.patch(self.url(path))
    }

    pub(super) fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path))
    }

    /// Sends the request and maps error statuses onto error variants. The
    /// 401/403/404 distinction matters: the participate flow branches on
    /// permission-denied versus not-found.
    pub(super) async fn send(&self, request: RequestBuilder) -> SurveyResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => format!("{}: {}", parsed.error.code, parsed.error.message),
            Err(_) => format!("HTTP {}", status),
        };
        log_debug(&format!("Request failed: {}", message));

        match status {
            StatusCode::UNAUTHORIZED => Err(SurveyError::AuthError(message)),
            StatusCode::FORBIDDEN => Err(SurveyError::PermissionDenied(message)),
            StatusCode::NOT_FOUND => Err(SurveyError::NotFound(message)),
            _ => Err(SurveyError::ApiError(message)),
        }
    }

    pub(super) async fn request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> SurveyResult<T> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    pub(super) async fn request_unit(&self, request: RequestBuilder) -> SurveyResult<()> {
        self.send(request).await?;
        Ok(())
    }
}
