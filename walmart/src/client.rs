use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::{domain::SearchResponse, AccessToken, Credentials, WalmartAuthError, WalmartURL};

pub const DEFAULT_BASE_URL: &str = "https://marketplace.walmartapis.com";
pub const DEFAULT_SERVICE_NAME: &str = "Walmart Marketplace";

/// Tokens this close to expiry are refreshed before use.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Connection options shared by the token and search calls.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub service_name: String,
    pub channel_type: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            channel_type: None,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn new(token: AccessToken) -> Self {
        let expires_at = token
            .expires_in
            .and_then(|secs| Instant::now().checked_add(Duration::from_secs(secs)));
        Self {
            access_token: token.access_token,
            expires_at,
        }
    }

    /// Tokens without an expiry stay fresh until the API rejects them.
    fn is_fresh(&self) -> bool {
        self.expires_at
            .map_or(true, |at| Instant::now() + EXPIRY_MARGIN < at)
    }
}

/// Authenticated Marketplace client. Cheap to share behind an `Arc`.
///
/// The access token is renewed when it is about to expire, and once more
/// whenever the API answers 401/403.
pub struct WalmartClient {
    http: Client,
    credentials: Credentials,
    options: ClientOptions,
    token: RwLock<Option<CachedToken>>,
}

impl WalmartClient {
    /// Authenticates once and returns a client holding the access token.
    pub async fn connect(
        credentials: Credentials,
        options: ClientOptions,
        correlation_id: &str,
    ) -> Result<Self, WalmartFetchError> {
        let client = Self {
            http: Client::new(),
            credentials,
            options,
            token: RwLock::new(None),
        };
        client.refresh_token(None, correlation_id).await?;

        Ok(client)
    }

    async fn access_token(&self, correlation_id: &str) -> Result<String, WalmartFetchError> {
        {
            let current = self.token.read().await;
            if let Some(token) = current.as_ref().filter(|t| t.is_fresh()) {
                return Ok(token.access_token.clone());
            }
        }
        self.refresh_token(None, correlation_id).await
    }

    /// Fetches a new token unless another caller already replaced `rejected`.
    async fn refresh_token(
        &self,
        rejected: Option<&str>,
        correlation_id: &str,
    ) -> Result<String, WalmartFetchError> {
        let mut current = self.token.write().await;
        if let Some(token) = current.as_ref() {
            if token.is_fresh() && rejected != Some(token.access_token.as_str()) {
                return Ok(token.access_token.clone());
            }
        }

        let token = self
            .credentials
            .authenticate(&self.http, &self.options, correlation_id)
            .await?;

        tracing::debug!(
            client_id = self.credentials.client_id(),
            expires_in = token.expires_in,
            "authenticated against Walmart Marketplace"
        );

        let token = CachedToken::new(token);
        let access_token = token.access_token.clone();
        *current = Some(token);

        Ok(access_token)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        access_token: &str,
        query: &[(&str, &str)],
        correlation_id: &str,
    ) -> Result<T, WalmartFetchError> {
        let mut request = self
            .http
            .get(url.as_ref())
            .query(query)
            .header(ACCEPT, "application/json")
            .header("WM_SEC.ACCESS_TOKEN", access_token)
            .header("WM_SVC.NAME", &self.options.service_name)
            .header("WM_QOS.CORRELATION_ID", correlation_id);
        if let Some(channel_type) = &self.options.channel_type {
            request = request.header("WM_CONSUMER.CHANNEL.TYPE", channel_type);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| WalmartFetchError::ResponseError(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(WalmartFetchError::Unauthorized);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WalmartFetchError::ResponseError(format!(
                "Walmart search failed with status {}: {}",
                status.as_u16(),
                body
            )));
        }

        resp.json::<T>().await.map_err(|e| {
            WalmartFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Runs one item search for `query`.
    pub async fn search(
        &self,
        query: &str,
        correlation_id: &str,
    ) -> Result<SearchResponse, WalmartFetchError> {
        let url = WalmartURL::new(&self.options.base_url).append_path("/v3/items/walmart/search");
        let params = [("query", query)];

        let access_token = self.access_token(correlation_id).await?;
        match self.fetch(&url, &access_token, &params, correlation_id).await {
            Err(WalmartFetchError::Unauthorized) => {
                tracing::debug!("access token rejected, re-authenticating");
                let access_token = self
                    .refresh_token(Some(&access_token), correlation_id)
                    .await?;
                self.fetch(&url, &access_token, &params, correlation_id)
                    .await
            }
            result => result,
        }
    }
}

#[derive(Error, Debug)]
pub enum WalmartFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Auth(#[from] WalmartAuthError),
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}
