//! Statement rows and their wire representation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::format::{format_amount, format_date, format_period};
use crate::models::transaction::{Transaction, TransactionKind};

/// Kind of a statement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementRowKind {
    Deposit,
    Withdrawal,
    Interest,
}

impl StatementRowKind {
    pub fn code(self) -> &'static str {
        match self {
            StatementRowKind::Deposit => "D",
            StatementRowKind::Withdrawal => "W",
            StatementRowKind::Interest => "I",
        }
    }
}

impl From<TransactionKind> for StatementRowKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Deposit => StatementRowKind::Deposit,
            TransactionKind::Withdrawal => StatementRowKind::Withdrawal,
        }
    }
}

/// One line of a statement or account ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRow {
    pub date: NaiveDate,
    /// Empty for the interest row
    pub id: String,
    pub kind: StatementRowKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
}

impl StatementRow {
    pub fn from_transaction(transaction: &Transaction, balance_after: Decimal) -> Self {
        Self {
            date: transaction.date,
            id: transaction.id.clone(),
            kind: transaction.kind.into(),
            amount: transaction.amount,
            balance_after,
        }
    }

    pub fn interest(date: NaiveDate, amount: Decimal, balance_after: Decimal) -> Self {
        Self {
            date,
            id: String::new(),
            kind: StatementRowKind::Interest,
            amount,
            balance_after,
        }
    }
}

/// Monthly statement for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub account: String,
    pub year: i32,
    pub month: u32,
    /// Transaction rows in ledger order, then the interest row if any
    pub rows: Vec<StatementRow>,
    /// Rounded interest, `None` when no rule was effective during the month
    pub interest: Option<Decimal>,
    pub closing_balance: Decimal,
}

/// Statement row as rendered for clients.
#[derive(Debug, Serialize)]
pub struct StatementRowResponse {
    pub date: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub amount: String,
    pub balance: String,
}

impl From<&StatementRow> for StatementRowResponse {
    fn from(row: &StatementRow) -> Self {
        Self {
            date: format_date(row.date),
            id: row.id.clone(),
            kind: row.kind.code(),
            amount: format_amount(row.amount),
            balance: format_amount(row.balance_after),
        }
    }
}

/// Statement as returned to clients.
///
/// # JSON Example
///
/// ```json
/// {
///   "account": "AC001",
///   "period": "202306",
///   "rows": [
///     { "date": "20230601", "id": "20230601-02", "type": "W", "amount": "20.00", "balance": "-20.00" },
///     { "date": "20230630", "id": "", "type": "I", "amount": "-0.03", "balance": "-20.03" }
///   ],
///   "interest": "-0.03",
///   "closing_balance": "-20.03"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct StatementResponse {
    pub account: String,
    pub period: String,
    pub rows: Vec<StatementRowResponse>,
    pub interest: Option<String>,
    pub closing_balance: String,
}

impl From<&Statement> for StatementResponse {
    fn from(statement: &Statement) -> Self {
        Self {
            account: statement.account.clone(),
            period: format_period(statement.year, statement.month),
            rows: statement.rows.iter().map(Into::into).collect(),
            interest: statement.interest.map(format_amount),
            closing_balance: format_amount(statement.closing_balance),
        }
    }
}
