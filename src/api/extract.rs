// Request extractors: customer resolution and body/query parsing that
// reject with `LedgerError` instead of axum's default plain-text responses.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;

use crate::api::AppState;
use crate::error::LedgerError;

/// Header carrying the customer's document on every resolved route
pub const DOCUMENT_HEADER: &str = "document";

/// A customer confirmed to exist when the request arrived.
///
/// Handlers receive this instead of looking at headers themselves. The
/// account can still be deleted by a concurrent request before the handler
/// takes the ledger lock; ledger calls then fail with `CustomerNotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCustomer {
    pub document: String,
}

#[async_trait]
impl FromRequestParts<AppState> for ResolvedCustomer {
    type Rejection = LedgerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let document = parts
            .headers
            .get(DOCUMENT_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(LedgerError::CustomerNotFound)?;

        if !state.ledger.lock().await.contains(document) {
            return Err(LedgerError::CustomerNotFound);
        }

        Ok(ResolvedCustomer {
            document: document.to_string(),
        })
    }
}

/// JSON body; malformed input becomes a 400 with an `error` field
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(LedgerError))]
pub struct Payload<T>(pub T);

/// Query string; malformed input becomes a 400 with an `error` field
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(LedgerError))]
pub struct QueryParams<T>(pub T);
