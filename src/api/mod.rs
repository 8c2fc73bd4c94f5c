// Ledger HTTP API - routes, shared state and request logging

pub mod extract;
pub mod handlers;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::ledger::Ledger;

pub use extract::{ResolvedCustomer, DOCUMENT_HEADER};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
        }
    }
}

/// Build the router. Every route except `POST /account` resolves the
/// customer from the `document` header before its handler runs; unmatched
/// paths and methods resolve it too, so an unknown document is reported
/// before a 404/405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/account",
            post(handlers::create_account)
                .put(handlers::update_account)
                .get(handlers::get_account)
                .delete(handlers::delete_account)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/statement",
            get(handlers::get_statement).fallback(handlers::method_not_allowed),
        )
        .route(
            "/statement/date",
            get(handlers::get_statement_by_date).fallback(handlers::method_not_allowed),
        )
        .route(
            "/deposit",
            post(handlers::deposit).fallback(handlers::method_not_allowed),
        )
        .route(
            "/withdraw",
            post(handlers::withdraw).fallback(handlers::method_not_allowed),
        )
        .route(
            "/balance",
            get(handlers::get_balance).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

// ============================================================================
// TESTS
// ============================================================================
