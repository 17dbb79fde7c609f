use thiserror::Error;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// Errors that can occur while answering a product search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Missing keyword query parameter")]
    MissingKeyword,
    #[error("{0}")]
    MissingCredentials(String),
    #[error("{0}")]
    Provider(String),
    #[error("Unexpected error")]
    Unexpected,
}

impl SearchError {
    /// Wraps an upstream failure message. Blank messages become [`SearchError::Unexpected`].
    pub fn provider(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.trim().is_empty() {
            Self::Unexpected
        } else {
            Self::Provider(msg)
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingKeyword)
    }
}

impl From<walmart::MissingCredentialsError> for SearchError {
    fn from(err: walmart::MissingCredentialsError) -> Self {
        Self::MissingCredentials(err.to_string())
    }
}

impl From<walmart::WalmartFetchError> for SearchError {
    fn from(err: walmart::WalmartFetchError) -> Self {
        Self::provider(err.to_string())
    }
}
