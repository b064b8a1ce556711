//! HTTP plumbing shared by every endpoint group.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use catctl_core::AppConfig;

use crate::error::ClientError;

/// Client for the catalog backend's admin REST API.
///
/// Holds the HTTP client, normalized base URL, and bearer token. Use
/// [`CatalogClient::from_config`] in the binary and [`CatalogClient::new`]
/// with a mock server URL in tests.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
    auth_token: Option<String>,
}

/// Optional pagination passed through to list endpoints verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Page {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl Page {
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            page: None,
            limit: Some(limit),
        }
    }

    pub(crate) fn query(self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

impl CatalogClient {
    /// Creates a client for the given backend origin.
    ///
    /// The base URL is normalized to end with exactly one slash so joined
    /// endpoint paths resolve under it rather than replacing its last
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] for an unparsable origin and
    /// [`ClientError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        auth_token: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            base_url,
            auth_token,
        })
    }

    /// Creates a client from the loaded [`AppConfig`], resolving the bearer
    /// token from the environment or the configured token file.
    ///
    /// # Errors
    ///
    /// Propagates token-file read failures as [`ClientError::Config`], plus
    /// any error from [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        let token = catctl_core::resolve_auth_token(config)?;
        Self::new(
            &config.base_url,
            token,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Whether a bearer token will be attached to requests.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: path.to_string(),
                reason: e.to_string(),
            })
    }

    fn url_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Url, ClientError> {
        let mut url = self.endpoint(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<Value, ClientError> {
        let url = self.url_with_query(path, query)?;
        self.execute(self.http.get(url), context).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(path)?;
        self.execute(self.http.post(url).json(body), context).await
    }

    pub(crate) async fn post_with_query<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
        context: &str,
    ) -> Result<Value, ClientError> {
        let url = self.url_with_query(path, query)?;
        self.execute(self.http.post(url).json(body), context).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(path)?;
        self.execute(self.http.put(url).json(body), context).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(path)?;
        self.execute(self.http.patch(url).json(body), context).await
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<(), ClientError> {
        let url = self.url_with_query(path, query)?;
        self.execute(self.http.delete(url), context).await?;
        Ok(())
    }

    /// Sends the request with the bearer token attached, maps the status,
    /// and parses the body as JSON (`Null` for empty bodies, e.g. 204).
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<Value, ClientError> {
        let request = match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            let fallback = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| extract_message(&body))
                .unwrap_or(fallback);
            tracing::debug!(context, status = status.as_u16(), "catalog API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Pulls the backend's `message` field out of an error body, if the body is
/// JSON and carries one.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
