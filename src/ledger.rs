// 🏦 Ledger - account operations over the customer registry
//
// Every method that reads and then writes (create, withdraw, delete) does so
// through a single `&mut self` borrow, so the caller's lock around the ledger
// covers the whole check-then-act sequence.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::entities::{Customer, CustomerRegistry, Operation};
use crate::error::{LedgerError, Result};
use crate::statement;

/// Message for operations whose balance would leave the `Decimal` range
pub const AMOUNT_OUT_OF_RANGE: &str = "Operation fail, amount out of range!";

#[derive(Debug, Default)]
pub struct Ledger {
    registry: CustomerRegistry,
}

impl Ledger {
    /// Create new empty ledger
    pub fn new() -> Self {
        Ledger {
            registry: CustomerRegistry::new(),
        }
    }

    // ========================================================================
    // ACCOUNTS
    // ========================================================================

    /// Open an account. Fails if the document is already registered.
    pub fn create_account(&mut self, document: String, name: String) -> Result<&Customer> {
        if self.registry.contains(&document) {
            return Err(LedgerError::DuplicateCustomer);
        }

        let customer = Customer::new(document.clone(), name);
        debug!("Account created: {} (document {})", customer.id, customer.document);
        self.registry.insert(customer);

        self.customer(&document)
    }

    pub fn contains(&self, document: &str) -> bool {
        self.registry.contains(document)
    }

    pub fn customer(&self, document: &str) -> Result<&Customer> {
        self.registry
            .find_by_document(document)
            .ok_or(LedgerError::CustomerNotFound)
    }

    fn customer_mut(&mut self, document: &str) -> Result<&mut Customer> {
        self.registry
            .find_by_document_mut(document)
            .ok_or(LedgerError::CustomerNotFound)
    }

    pub fn rename(&mut self, document: &str, name: String) -> Result<()> {
        let customer = self.customer_mut(document)?;
        debug!("Account {} renamed: {} -> {}", customer.id, customer.name, name);
        customer.rename(name);
        Ok(())
    }

    /// Close an account, returning the removed record
    pub fn delete_account(&mut self, document: &str) -> Result<Customer> {
        let removed = self
            .registry
            .remove(document)
            .ok_or(LedgerError::CustomerNotFound)?;
        debug!("Account deleted: {} (document {})", removed.id, removed.document);
        Ok(removed)
    }

    pub fn customer_count(&self) -> usize {
        self.registry.len()
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    pub fn deposit(
        &mut self,
        document: &str,
        amount: Decimal,
        description: Option<String>,
    ) -> Result<&Operation> {
        self.append(document, Operation::credit(amount, description))
    }

    /// Withdraw `amount` if the balance covers it; the statement is left
    /// untouched otherwise.
    pub fn withdraw(&mut self, document: &str, amount: Decimal) -> Result<&Operation> {
        if !self.customer(document)?.can_withdraw(amount) {
            return Err(LedgerError::InsufficientFunds);
        }

        self.append(document, Operation::debit(amount))
    }

    /// Append `operation` unless the resulting balance would not fit a
    /// `Decimal`. Stored statements always sum to a representable balance.
    fn append(&mut self, document: &str, operation: Operation) -> Result<&Operation> {
        let customer = self.customer_mut(document)?;
        if customer.balance_after(&operation).is_none() {
            return Err(out_of_range());
        }

        debug!(
            "{} of {} recorded for account {}",
            operation.operation_type.as_str(),
            operation.amount,
            customer.id
        );
        customer.record(operation);

        customer
            .statement
            .last()
            .ok_or(LedgerError::CustomerNotFound)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn statement(&self, document: &str) -> Result<&[Operation]> {
        Ok(&self.customer(document)?.statement)
    }

    /// Operations recorded on a given local calendar day. `None` (an
    /// unparseable date) matches nothing.
    pub fn statement_on(&self, document: &str, day: Option<NaiveDate>) -> Result<Vec<Operation>> {
        let customer = self.customer(document)?;

        Ok(match day {
            Some(day) => statement::operations_on(&customer.statement, day),
            None => Vec::new(),
        })
    }

    pub fn balance(&self, document: &str) -> Result<Decimal> {
        self.customer(document)?.balance().ok_or_else(out_of_range)
    }
}

fn out_of_range() -> LedgerError {
    LedgerError::InvalidRequest(AMOUNT_OUT_OF_RANGE.to_string())
}

// ============================================================================
// TESTS
// ============================================================================
