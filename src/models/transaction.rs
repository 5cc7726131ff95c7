//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: an immutable ledger entry held by an account
//! - `TransactionKind`: deposit or withdrawal, carried as `D`/`W` on the wire
//! - `TransactionRequest`: request body for recording a transaction
//! - `TransactionResponse`: the recorded transaction returned to clients
//! - `RecordedTransactionResponse`: the transaction plus the updated account

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BankError, Result};
use crate::models::account::AccountResponse;
use crate::models::format::{format_amount, format_date, parse_date, validate_amount, validate_id};

/// Direction of a transaction.
///
/// Amounts are always stored positive; the kind decides whether they add to
/// or subtract from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Single-letter code used on the wire.
    pub fn code(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "D",
            TransactionKind::Withdrawal => "W",
        }
    }

    /// Apply the kind's sign to a positive amount.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdrawal => -amount,
        }
    }
}

impl FromStr for TransactionKind {
    type Err = BankError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "D" => Ok(TransactionKind::Deposit),
            "W" => Ok(TransactionKind::Withdrawal),
            other => Err(BankError::InvalidRequest(format!(
                "Transaction type must be D or W, got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A recorded ledger entry.
///
/// # Identifier
///
/// `id` has the form `<YYYYMMDD>-<seq>`, where `seq` is the position of the
/// transaction in its account (1-based, zero-padded to two digits). The
/// sequence follows insertion order, not the transaction date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub account: String,
    pub kind: TransactionKind,
    /// Strictly positive
    pub amount: Decimal,
}

impl Transaction {
    /// Balance effect of this transaction.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Request to record a deposit or withdrawal.
///
/// # JSON Example
///
/// ```json
/// {
///   "date": "20230626",
///   "account": "AC001",
///   "type": "W",
///   "amount": "100.00"
/// }
/// ```
///
/// `amount` may also be sent as a JSON number.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub date: String,
    pub account: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
}

/// A transaction request that passed input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub account: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
}

impl TryFrom<TransactionRequest> for NewTransaction {
    type Error = BankError;

    fn try_from(request: TransactionRequest) -> Result<Self> {
        Ok(Self {
            date: parse_date(&request.date)?,
            account: validate_id("Account", &request.account)?,
            kind: request.kind.parse()?,
            amount: validate_amount(request.amount)?,
        })
    }
}

/// Recorded transaction as returned to clients.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub date: String,
    pub account: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub amount: String,
}

impl From<&Transaction> for TransactionResponse {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id.clone(),
            date: format_date(transaction.date),
            account: transaction.account.clone(),
            kind: transaction.kind.code(),
            amount: format_amount(transaction.amount),
        }
    }
}

/// Response to recording a transaction: the new entry plus the account's
/// full ledger after it.
#[derive(Debug, Serialize)]
pub struct RecordedTransactionResponse {
    pub transaction: TransactionResponse,
    pub account: AccountResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_kind_case_insensitively() {
        assert_eq!("d".parse::<TransactionKind>().unwrap(), TransactionKind::Deposit);
        assert_eq!("W".parse::<TransactionKind>().unwrap(), TransactionKind::Withdrawal);
        assert!("X".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn withdrawal_is_negative() {
        assert_eq!(TransactionKind::Withdrawal.signed(dec!(20.00)), dec!(-20.00));
        assert_eq!(TransactionKind::Deposit.signed(dec!(20.00)), dec!(20.00));
    }

    #[test]
    fn validates_request() {
        let request = TransactionRequest {
            date: "20230601".into(),
            account: "AC001".into(),
            kind: "w".into(),
            amount: dec!(20.00),
        };
        let new = NewTransaction::try_from(request).unwrap();
        assert_eq!(new.kind, TransactionKind::Withdrawal);
        assert_eq!(new.date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());

        let bad = TransactionRequest {
            date: "20230601".into(),
            account: "AC001".into(),
            kind: "D".into(),
            amount: dec!(-1),
        };
        assert!(matches!(
            NewTransaction::try_from(bad),
            Err(BankError::InvalidRequest(_))
        ));
    }
}
