use std::fmt;

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::{ClientOptions, WalmartURL};

pub const CLIENT_ID_VAR: &str = "WALMART_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "WALMART_CLIENT_SECRET";

/// Client-credentials pair for the Marketplace API.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing Walmart credentials: {}", .missing.join(", "))]
pub struct MissingCredentialsError {
    pub missing: Vec<&'static str>,
}

#[derive(Error, Debug)]
pub enum WalmartAuthError {
    #[error("Token request failed: {0}")]
    RequestError(String),
    #[error("Token request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

/// Token returned by the client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Credentials {
    /// Builds credentials, naming every value that is absent or blank.
    pub fn new(
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<Credentials, MissingCredentialsError> {
        match (non_blank(client_id), non_blank(client_secret)) {
            (Some(client_id), Some(client_secret)) => Ok(Credentials {
                client_id,
                client_secret,
            }),
            (client_id, client_secret) => {
                let mut missing = Vec::new();
                if client_id.is_none() {
                    missing.push(CLIENT_ID_VAR);
                }
                if client_secret.is_none() {
                    missing.push(CLIENT_SECRET_VAR);
                }
                Err(MissingCredentialsError { missing })
            }
        }
    }

    /// True iff both values are present and non-blank.
    pub fn are_present(client_id: Option<&str>, client_secret: Option<&str>) -> bool {
        non_blank(client_id).is_some() && non_blank(client_secret).is_some()
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Exchanges the credentials for an access token.
    pub async fn authenticate(
        &self,
        http: &Client,
        options: &ClientOptions,
        correlation_id: &str,
    ) -> Result<AccessToken, WalmartAuthError> {
        let url = WalmartURL::new(&options.base_url).append_path("/v3/token");

        let mut request = http
            .post(url.as_ref())
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header(ACCEPT, "application/json")
            .header("WM_SVC.NAME", &options.service_name)
            .header("WM_QOS.CORRELATION_ID", correlation_id)
            .form(&[("grant_type", "client_credentials")]);
        if let Some(channel_type) = &options.channel_type {
            request = request.header("WM_CONSUMER.CHANNEL.TYPE", channel_type);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| WalmartAuthError::RequestError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WalmartAuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<AccessToken>().await.map_err(|e| {
            WalmartAuthError::ParsingError(format!("Failed to parse token response: {}", e))
        })
    }
}
