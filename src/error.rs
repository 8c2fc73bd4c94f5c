//! Error types for the ledger and their HTTP representation.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::warn;
use serde_json::json;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Client-facing failures. Every variant answers HTTP 400 with
/// `{"error": <message>}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No live customer for the `document` header (or header missing)
    #[error("Customer not found!")]
    CustomerNotFound,

    /// Account creation with a document already in use
    #[error("Customer already exists!")]
    DuplicateCustomer,

    /// Withdrawal larger than the current balance
    #[error("Operation fail, insufficient funds!")]
    InsufficientFunds,

    /// Body or query string could not be read into the expected shape
    #[error("{0}")]
    InvalidRequest(String),
}

impl LedgerError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        warn!("Request rejected: {}", self);
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for LedgerError {
    fn from(rejection: JsonRejection) -> Self {
        LedgerError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for LedgerError {
    fn from(rejection: QueryRejection) -> Self {
        LedgerError::InvalidRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_body_and_status() {
        let response = LedgerError::InsufficientFunds.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body, json!({ "error": "Operation fail, insufficient funds!" }));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LedgerError::CustomerNotFound.to_string(), "Customer not found!");
        assert_eq!(LedgerError::DuplicateCustomer.to_string(), "Customer already exists!");
        assert_eq!(
            LedgerError::InvalidRequest("missing field `name`".to_string()).to_string(),
            "missing field `name`"
        );
    }
}
