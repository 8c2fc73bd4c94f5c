// ============================================================================
// API Handlers
// ============================================================================

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::api::extract::{Payload, QueryParams, ResolvedCustomer};
use crate::api::AppState;
use crate::entities::{Customer, Operation};
use crate::error::Result;
use crate::statement::parse_statement_date;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub document: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

/// POST /account - Open an account (no customer resolution)
pub async fn create_account(
    State(state): State<AppState>,
    Payload(request): Payload<CreateAccountRequest>,
) -> Result<StatusCode> {
    let mut ledger = state.ledger.lock().await;
    ledger.create_account(request.document, request.name)?;

    Ok(StatusCode::CREATED)
}

/// GET /statement - Full statement, oldest first
pub async fn get_statement(
    State(state): State<AppState>,
    customer: ResolvedCustomer,
) -> Result<Json<Vec<Operation>>> {
    let ledger = state.ledger.lock().await;
    let statement = ledger.statement(&customer.document)?.to_vec();

    Ok(Json(statement))
}

/// POST /deposit - Append a credit
pub async fn deposit(
    State(state): State<AppState>,
    customer: ResolvedCustomer,
    Payload(request): Payload<DepositRequest>,
) -> Result<StatusCode> {
    let mut ledger = state.ledger.lock().await;
    ledger.deposit(&customer.document, request.amount, request.description)?;

    Ok(StatusCode::CREATED)
}

/// POST /withdraw - Append a debit if funds allow
pub async fn withdraw(
    State(state): State<AppState>,
    customer: ResolvedCustomer,
    Payload(request): Payload<WithdrawRequest>,
) -> Result<StatusCode> {
    let mut ledger = state.ledger.lock().await;
    ledger.withdraw(&customer.document, request.amount)?;

    Ok(StatusCode::CREATED)
}

/// GET /statement/date?date=YYYY-MM-DD - Operations from one calendar day
pub async fn get_statement_by_date(
    State(state): State<AppState>,
    customer: ResolvedCustomer,
    QueryParams(query): QueryParams<StatementDateQuery>,
) -> Result<Json<Vec<Operation>>> {
    let day = query.date.as_deref().and_then(parse_statement_date);

    let ledger = state.ledger.lock().await;
    let statement = ledger.statement_on(&customer.document, day)?;

    Ok(Json(statement))
}

/// PUT /account - Rename (answers 201, kept for client compatibility)
pub async fn update_account(
    State(state): State<AppState>,
    customer: ResolvedCustomer,
    Payload(request): Payload<UpdateAccountRequest>,
) -> Result<StatusCode> {
    let mut ledger = state.ledger.lock().await;
    ledger.rename(&customer.document, request.name)?;

    Ok(StatusCode::CREATED)
}

/// GET /account - Full customer record
pub async fn get_account(
    State(state): State<AppState>,
    customer: ResolvedCustomer,
) -> Result<Json<Customer>> {
    let ledger = state.ledger.lock().await;
    let record = ledger.customer(&customer.document)?.clone();

    Ok(Json(record))
}

/// GET /balance - Bare numeric balance
pub async fn get_balance(
    State(state): State<AppState>,
    customer: ResolvedCustomer,
) -> Result<Json<Decimal>> {
    let ledger = state.ledger.lock().await;
    let balance = ledger.balance(&customer.document)?;

    Ok(Json(balance))
}

/// Unmatched path - customer resolution still runs first
pub async fn not_found(_customer: ResolvedCustomer) -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Unsupported method on a known path - customer resolution still runs first
pub async fn method_not_allowed(_customer: ResolvedCustomer) -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// DELETE /account - Close the resolved customer's account
pub async fn delete_account(
    State(state): State<AppState>,
    customer: ResolvedCustomer,
) -> Result<StatusCode> {
    let mut ledger = state.ledger.lock().await;
    ledger.delete_account(&customer.document)?;

    Ok(StatusCode::ACCEPTED)
}
