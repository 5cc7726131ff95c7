//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /api/v1/accounts - List accounts with balances
//! - GET /api/v1/accounts/{id} - Full ledger of one account

use crate::{
    error::BankError,
    models::account::{AccountResponse, AccountSummaryResponse},
    state::BankState,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all accounts.
///
/// # Ordering
///
/// Accounts are returned sorted by account id.
///
/// ```json
/// [
///   { "account": "AC001", "balance": "80.00", "transaction_count": 2 },
///   { "account": "AC002", "balance": "15.50", "transaction_count": 1 }
/// ]
/// ```
pub async fn list_accounts(State(state): State<BankState>) -> Json<Vec<AccountSummaryResponse>> {
    let bank = state.lock().await;
    let accounts: Vec<AccountSummaryResponse> =
        bank.ledger().accounts().map(Into::into).collect();
    Json(accounts)
}

/// Get one account with every transaction and its running balance.
///
/// # Response
///
/// - **Success (200 OK)**: account ledger in insertion order
/// - **Error (404)**: account has no transactions
pub async fn get_account(
    State(state): State<BankState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, BankError> {
    let bank = state.lock().await;
    let account = bank
        .account(&account_id)
        .ok_or_else(|| BankError::UnknownAccount(account_id.clone()))?;

    Ok(Json(account.into()))
}
