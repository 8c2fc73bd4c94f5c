// Ledger API - Core Library
// Exposes the ledger and its HTTP router for the server binary and tests

pub mod api;
pub mod config;
pub mod entities;
pub mod error;
pub mod ledger;
pub mod statement;

// Re-export commonly used types
pub use api::{router, AppState, ResolvedCustomer, DOCUMENT_HEADER};
pub use config::Config;
pub use entities::{Customer, CustomerRegistry, Operation, OperationType};
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use statement::{balance, operations_on, parse_statement_date};
