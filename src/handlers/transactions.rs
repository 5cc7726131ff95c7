//! Transaction HTTP handlers.
//!
//! This module implements the transaction input endpoint:
//! - POST /api/v1/transactions - Record a deposit or withdrawal

use crate::{
    error::BankError,
    models::{
        account::AccountResponse,
        transaction::{
            NewTransaction, RecordedTransactionResponse, TransactionRequest, TransactionResponse,
        },
    },
    state::BankState,
};
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// Record a deposit or withdrawal.
///
/// # Request Body
///
/// ```json
/// {
///   "date": "20230601",
///   "account": "AC001",
///   "type": "W",
///   "amount": "20.00"
/// }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "transaction": { "id": "20230601-02", "date": "20230601", "account": "AC001", "type": "W", "amount": "20.00" },
///   "account": {
///     "account": "AC001",
///     "balance": "80.00",
///     "transactions": [
///       { "date": "20230505", "id": "20230505-01", "type": "D", "amount": "100.00", "balance": "100.00" },
///       { "date": "20230601", "id": "20230601-02", "type": "W", "amount": "20.00", "balance": "80.00" }
///     ]
///   }
/// }
/// ```
///
/// # Validation
///
/// - `date` must be a valid `YYYYMMDD` date
/// - `type` is `D` or `W`, case-insensitive
/// - `amount` must be positive with at most two decimal places
/// - A withdrawal needs an existing account with sufficient balance
/// - A deposit must keep the balance within range (422 `amount_overflow`)
pub async fn create_transaction(
    State(state): State<BankState>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordedTransactionResponse>), BankError> {
    let Json(request) = payload?;
    let new = NewTransaction::try_from(request)?;

    let mut bank = state.lock().await;
    let transaction = bank.add_transaction(&new.account, new.date, new.kind, new.amount)?;

    let account = bank
        .account(&transaction.account)
        .ok_or_else(|| BankError::UnknownAccount(transaction.account.clone()))?;

    let response = RecordedTransactionResponse {
        transaction: TransactionResponse::from(&transaction),
        account: AccountResponse::from(account),
    };

    Ok((StatusCode::CREATED, Json(response)))
}
