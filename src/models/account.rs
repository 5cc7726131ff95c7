//! Account data models and API response types.
//!
//! This module defines:
//! - `Account`: an account and its transactions in insertion order
//! - `AccountSummaryResponse`: one entry of the account listing
//! - `AccountResponse`: full ledger view with running balances

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::format::{format_amount, format_date};
use crate::models::statement::{StatementRow, StatementRowResponse};
use crate::models::transaction::Transaction;

/// An account and the transactions recorded against it.
///
/// Accounts exist only once they have a transaction; the first deposit
/// creates them. The balance is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,

    /// Insertion order, which is also the display order
    pub transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transactions: Vec::new(),
        }
    }

    /// Sum of deposits minus sum of withdrawals.
    ///
    /// Every prefix of the history is a balance the ledger accepted, so the
    /// running sum stays within `0..=Decimal::MAX`.
    pub fn balance(&self) -> Decimal {
        self.transactions
            .iter()
            .fold(Decimal::ZERO, |balance, t| balance + t.signed_amount())
    }

    /// Identifier for the next transaction recorded on `date`.
    pub fn next_transaction_id(&self, date: NaiveDate) -> String {
        format!("{}-{:02}", format_date(date), self.transactions.len() + 1)
    }

    /// All transactions with the balance after each one.
    pub fn ledger_rows(&self) -> Vec<StatementRow> {
        let mut balance = Decimal::ZERO;
        self.transactions
            .iter()
            .map(|transaction| {
                balance += transaction.signed_amount();
                StatementRow::from_transaction(transaction, balance)
            })
            .collect()
    }
}

/// Account listing entry.
///
/// # JSON Example
///
/// ```json
/// { "account": "AC001", "balance": "230.00", "transaction_count": 3 }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountSummaryResponse {
    pub account: String,
    pub balance: String,
    pub transaction_count: usize,
}

impl From<&Account> for AccountSummaryResponse {
    fn from(account: &Account) -> Self {
        Self {
            account: account.id.clone(),
            balance: format_amount(account.balance()),
            transaction_count: account.transactions.len(),
        }
    }
}

/// Full account view.
///
/// # JSON Example
///
/// ```json
/// {
///   "account": "AC001",
///   "balance": "80.00",
///   "transactions": [
///     { "date": "20230505", "id": "20230505-01", "type": "D", "amount": "100.00", "balance": "100.00" },
///     { "date": "20230601", "id": "20230601-02", "type": "W", "amount": "20.00", "balance": "80.00" }
///   ]
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account: String,
    pub balance: String,
    pub transactions: Vec<StatementRowResponse>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            account: account.id.clone(),
            balance: format_amount(account.balance()),
            transactions: account.ledger_rows().iter().map(Into::into).collect(),
        }
    }
}
