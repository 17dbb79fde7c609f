use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{SearchError, UNEXPECTED_ERROR_MESSAGE};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = if self.message.trim().is_empty() {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        } else {
            self.message
        };
        (self.status, Json(ErrorBody { error })).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        if err.is_client_error() {
            return Self::bad_request(err.to_string());
        }

        tracing::error!("Product search failed: {}", err);
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_keyword_is_bad_request() {
        let (status, body) = body_of(SearchError::MissingKeyword.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Missing keyword query parameter"}));
    }

    #[tokio::test]
    async fn provider_failure_is_internal_with_message() {
        let (status, body) = body_of(SearchError::provider("boom").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "boom");
    }

    #[tokio::test]
    async fn empty_message_uses_fallback() {
        let (status, body) = body_of(ApiError::internal("")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], UNEXPECTED_ERROR_MESSAGE);
    }
}
