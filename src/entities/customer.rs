// 👤 Customer Entity - account holder identified by an external document
//
// "Customer id is IDENTITY (never changes), name is a VALUE (can change)"
//
// - id: UUID assigned at account creation
// - document: external identifier, the lookup key used by every request
// - statement: append-only list of operations, insertion order preserved

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::Operation;
use crate::statement;

// ============================================================================
// CUSTOMER ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    /// External identifier (e.g. a tax number), unique among live customers
    pub document: String,

    /// Display name, overwritten by account updates
    pub name: String,

    /// Recorded operations, oldest first
    pub statement: Vec<Operation>,
}

impl Customer {
    /// Create new customer with a fresh UUID and an empty statement
    pub fn new(document: String, name: String) -> Self {
        Customer {
            id: uuid::Uuid::new_v4().to_string(),
            document,
            name,
            statement: Vec::new(),
        }
    }

    /// Append an operation to the end of the statement
    pub fn record(&mut self, operation: Operation) {
        self.statement.push(operation);
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Net balance of the statement, `None` if it does not fit a `Decimal`
    pub fn balance(&self) -> Option<Decimal> {
        statement::balance(&self.statement)
    }

    /// Balance the statement would have with `operation` appended
    pub fn balance_after(&self, operation: &Operation) -> Option<Decimal> {
        self.balance()?.checked_add(operation.signed_amount())
    }

    /// Check whether the balance covers `amount`
    pub fn can_withdraw(&self, amount: Decimal) -> bool {
        self.balance().is_some_and(|balance| balance >= amount)
    }
}

// ============================================================================
// CUSTOMER REGISTRY
// ============================================================================

/// Registry of all live customers, keyed by document.
///
/// Uniqueness is enforced by the caller (see `Ledger::create_account`), the
/// registry itself only stores and looks up.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    customers: HashMap<String, Customer>,
}

impl CustomerRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        CustomerRegistry {
            customers: HashMap::new(),
        }
    }

    /// Insert a customer under its document. Replaces nothing: callers check
    /// `contains` first.
    pub fn insert(&mut self, customer: Customer) {
        self.customers.insert(customer.document.clone(), customer);
    }

    pub fn find_by_document(&self, document: &str) -> Option<&Customer> {
        self.customers.get(document)
    }

    pub fn find_by_document_mut(&mut self, document: &str) -> Option<&mut Customer> {
        self.customers.get_mut(document)
    }

    pub fn contains(&self, document: &str) -> bool {
        self.customers.contains_key(document)
    }

    /// Remove the customer registered under `document`
    pub fn remove(&mut self, document: &str) -> Option<Customer> {
        self.customers.remove(document)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
