//! Statement HTTP handler.
//!
//! - GET /api/v1/accounts/{id}/statements/{period} - Monthly statement

use crate::{
    error::BankError,
    models::{format::parse_period, statement::StatementResponse},
    state::BankState,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Monthly statement for an account.
///
/// # URL Parameters
///
/// - `id` - account id
/// - `period` - month as `YYYYMM`
///
/// # Response (200 OK)
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
///
/// `interest` is `null` and no `I` row is present when no interest rule was
/// effective during the month.
///
/// # Errors
///
/// - **400**: malformed period
/// - **404**: account has no transactions
pub async fn get_statement(
    State(state): State<BankState>,
    Path((account_id, period)): Path<(String, String)>,
) -> Result<Json<StatementResponse>, BankError> {
    let (year, month) = parse_period(&period)?;

    let bank = state.lock().await;
    let statement = bank.statement(&account_id, year, month)?;

    tracing::info!(
        account = %account_id,
        %period,
        rows = statement.rows.len(),
        "Statement served"
    );

    Ok(Json(StatementResponse::from(&statement)))
}
