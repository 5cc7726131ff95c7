//! Interest rule HTTP handlers.
//!
//! - POST /api/v1/interest-rules - Define or replace the rule for a date
//! - GET /api/v1/interest-rules - List rules by effective date

use crate::{
    error::BankError,
    models::interest_rule::{
        InterestRuleRequest, InterestRuleResponse, NewInterestRule, SetInterestRuleResponse,
    },
    state::BankState,
};
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// Define an interest rule.
///
/// # Request Body
///
/// ```json
/// { "date": "20230615", "rule_id": "RULE03", "rate": "2.20" }
/// ```
///
/// A rule on a date that already has one replaces it; `replaced` is then
/// `true` in the response.
///
/// # Errors
///
/// - **400 `invalid_rule`**: rate not strictly between 0 and 100
/// - **400 `invalid_request`**: malformed date or rule id
pub async fn create_interest_rule(
    State(state): State<BankState>,
    payload: Result<Json<InterestRuleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SetInterestRuleResponse>), BankError> {
    let Json(request) = payload?;
    let new = NewInterestRule::try_from(request)?;

    let rule = InterestRuleResponse::from(&new);

    let mut bank = state.lock().await;
    let replaced = bank.set_rule(new.date, new.rule_id, new.rate)?;

    let response = SetInterestRuleResponse {
        rule,
        replaced: replaced.is_some(),
        rules: bank.rules().all_rules_sorted().map(Into::into).collect(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// List all interest rules, earliest effective date first.
///
/// ```json
/// [
///   { "date": "20230101", "rule_id": "RULE01", "rate": "1.90" },
///   { "date": "20230520", "rule_id": "RULE02", "rate": "1.95" }
/// ]
/// ```
pub async fn list_interest_rules(
    State(state): State<BankState>,
) -> Json<Vec<InterestRuleResponse>> {
    let bank = state.lock().await;
    Json(bank.rules().all_rules_sorted().map(Into::into).collect())
}
