// School API client - CSRF-aware JSON helpers over reqwest
use crate::application::snapshot_repository::SnapshotRepository;
use crate::domain::snapshot::DashboardSnapshot;
use crate::infrastructure::config::ApiSettings;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CSRF_META: &str = "csrf-token";
const CSRF_COOKIE: &str = "csrf_token";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Status(StatusCode),
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Resolve the session CSRF token: the page meta tag wins, then the
/// `csrf_token` cookie, then empty.
pub fn resolve_csrf_token(meta_content: Option<&str>, cookie_header: Option<&str>) -> String {
    if let Some(token) = meta_content {
        return token.to_string();
    }

    if let Some(cookies) = cookie_header {
        for cookie in cookies.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=') {
                if name == CSRF_COOKIE {
                    return urlencoding::decode(value)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| value.to_string());
                }
            }
        }
    }

    String::new()
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    dashboard_path: String,
    csrf_token: String,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            dashboard_path: settings.dashboard_path.clone(),
            csrf_token: settings.csrf_token.clone().unwrap_or_default(),
        }
    }

    pub fn with_csrf_token(mut self, token: String) -> Self {
        self.csrf_token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }

    fn post_request<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> reqwest::RequestBuilder {
        self.http
            .post(self.url(path))
            .header(CSRF_HEADER, &self.csrf_token)
            .json(body)
    }

    /// POST a JSON body with the CSRF token attached. State-changing
    /// endpoints reject requests without it.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.post_request(path, body).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }
}

#[async_trait]
impl SnapshotRepository for ApiClient {
    async fn fetch_snapshot(&self) -> anyhow::Result<DashboardSnapshot> {
        let path = self.dashboard_path.clone();
        self.get_json(&path)
            .await
            .context("Failed to fetch dashboard data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ApiSettings;
    use crate::presentation::page::Page;

    fn settings() -> ApiSettings {
        ApiSettings {
            base_url: "http://localhost:5000/".to_string(),
            dashboard_path: "/api/dashboard".to_string(),
            csrf_token: None,
        }
    }

    #[test]
    fn test_url_joining_handles_slashes() {
        let client = ApiClient::new(&settings());
        assert_eq!(client.url("/api/dashboard"), "http://localhost:5000/api/dashboard");
        assert_eq!(client.url("api/dashboard"), "http://localhost:5000/api/dashboard");
    }

    #[test]
    fn test_csrf_meta_tag_wins() {
        let token = resolve_csrf_token(Some("meta-token"), Some("csrf_token=cookie-token"));
        assert_eq!(token, "meta-token");
    }

    #[test]
    fn test_csrf_cookie_fallback() {
        let token = resolve_csrf_token(None, Some("session=abc; csrf_token=tok%3D123; theme=dark"));
        assert_eq!(token, "tok=123");
    }

    #[test]
    fn test_csrf_absent_is_empty() {
        assert_eq!(resolve_csrf_token(None, None), "");
        assert_eq!(resolve_csrf_token(None, Some("session=abc")), "");
    }

    #[test]
    fn test_page_meta_token_reaches_post_header() {
        let page = Page::new().with_meta(CSRF_META, "meta-tok-123");
        let client = ApiClient::new(&settings())
            .with_csrf_token(resolve_csrf_token(page.meta(CSRF_META), None));

        let request = client
            .post_request("/api/students", &serde_json::json!({"name": "Asha"}))
            .build()
            .unwrap();
        assert_eq!(request.headers().get(CSRF_HEADER).unwrap(), "meta-tok-123");
    }
}
