//! Ledger: per-account transaction history and balances.
//!
//! Accounts are kept in a `BTreeMap` so listings come out sorted by id.
//! Within an account transactions keep their insertion order, which is the
//! order used for every running-balance display.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{BankError, Result};
use crate::models::account::Account;
use crate::models::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: BTreeMap<String, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deposit or withdrawal.
    ///
    /// # Process
    ///
    /// 1. Reject non-positive amounts
    /// 2. For withdrawals, require an existing account with enough balance
    /// 3. For deposits, require the new balance to be representable
    /// 4. Create the account if this is its first deposit
    /// 5. Append the transaction with the next per-account id
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: amount is zero or negative
    /// - `UnknownAccount`: withdrawal from an account with no history
    /// - `InsufficientFunds`: withdrawal larger than the current balance
    /// - `Overflow`: deposit would push the balance past `Decimal::MAX`
    ///
    /// A failed call leaves the ledger unchanged.
    pub fn add_transaction(
        &mut self,
        account_id: &str,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<Transaction> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidRequest(
                "Amount must be positive".to_string(),
            ));
        }

        match kind {
            TransactionKind::Withdrawal => {
                let available = self.balance_as_of(account_id)?;
                if amount > available {
                    tracing::warn!(
                        account = account_id,
                        %amount,
                        %available,
                        "Withdrawal rejected"
                    );
                    return Err(BankError::InsufficientFunds {
                        requested: amount,
                        available,
                    });
                }
            }
            TransactionKind::Deposit => {
                let current = self
                    .account(account_id)
                    .map_or(Decimal::ZERO, Account::balance);
                if current.checked_add(amount).is_none() {
                    tracing::warn!(account = account_id, %amount, "Deposit rejected");
                    return Err(BankError::Overflow(format!(
                        "Deposit of {amount} would overflow the balance of {account_id}"
                    )));
                }
            }
        }

        let account = self
            .accounts
            .entry(account_id.to_string())
            .or_insert_with(|| {
                tracing::info!(account = account_id, "Account opened");
                Account::new(account_id)
            });

        let transaction = Transaction {
            id: account.next_transaction_id(date),
            date,
            account: account_id.to_string(),
            kind,
            amount,
        };
        account.transactions.push(transaction.clone());

        tracing::info!(
            account = account_id,
            id = %transaction.id,
            kind = %kind,
            %amount,
            "Transaction recorded"
        );

        Ok(transaction)
    }

    /// Current balance: deposits minus withdrawals over all transactions.
    pub fn balance_as_of(&self, account_id: &str) -> Result<Decimal> {
        self.get(account_id).map(Account::balance)
    }

    /// Transactions dated in `year`/`month`, in insertion order.
    ///
    /// The returned iterator is lazy and `Clone`, so callers can walk it more
    /// than once.
    pub fn transactions_in_month<'a>(
        &'a self,
        account_id: &str,
        year: i32,
        month: u32,
    ) -> Result<impl Iterator<Item = &'a Transaction> + Clone + use<'a>> {
        let account = self.get(account_id)?;
        Ok(account
            .transactions
            .iter()
            .filter(move |t| t.date.year() == year && t.date.month() == month))
    }

    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    /// All accounts, sorted by id.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn get(&self, account_id: &str) -> Result<&Account> {
        self.accounts
            .get(account_id)
            .ok_or_else(|| BankError::UnknownAccount(account_id.to_string()))
    }
}
