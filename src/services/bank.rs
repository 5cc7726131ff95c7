//! Bank: one session's ledger and interest rule table.
//!
//! Each server or test owns its own `Bank`; nothing is global. Handlers
//! reach it through `state::BankState`, which serializes access.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::account::Account;
use crate::models::interest_rule::InterestRule;
use crate::models::statement::Statement;
use crate::models::transaction::{Transaction, TransactionKind};
use crate::services::interest_rules::InterestRuleTable;
use crate::services::ledger::Ledger;
use crate::services::statement::StatementGenerator;

#[derive(Debug, Clone, Default)]
pub struct Bank {
    ledger: Ledger,
    rules: InterestRuleTable,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction(
        &mut self,
        account_id: &str,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<Transaction> {
        self.ledger.add_transaction(account_id, date, kind, amount)
    }

    /// See [`InterestRuleTable::set_rule`].
    pub fn set_rule(
        &mut self,
        date: NaiveDate,
        rule_id: impl Into<String>,
        rate: Decimal,
    ) -> Result<Option<InterestRule>> {
        self.rules.set_rule(date, rule_id, rate)
    }

    pub fn statement(&self, account_id: &str, year: i32, month: u32) -> Result<Statement> {
        StatementGenerator::new(&self.ledger, &self.rules).generate(account_id, year, month)
    }

    pub fn balance(&self, account_id: &str) -> Result<Decimal> {
        self.ledger.balance_as_of(account_id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn rules(&self) -> &InterestRuleTable {
        &self.rules
    }

    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.ledger.account(account_id)
    }
}
