//! Interest rule data models and API request/response types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BankError, Result};
use crate::models::format::{format_amount, format_date, parse_date, validate_id};

/// Annual interest rate effective from `effective_date` until superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestRule {
    pub effective_date: NaiveDate,
    pub rule_id: String,
    /// Percent per year, strictly between 0 and 100
    pub annual_rate_percent: Decimal,
}

/// Request to define an interest rule.
///
/// # JSON Example
///
/// ```json
/// { "date": "20230615", "rule_id": "RULE03", "rate": "2.20" }
/// ```
#[derive(Debug, Deserialize)]
pub struct InterestRuleRequest {
    pub date: String,
    pub rule_id: String,
    pub rate: Decimal,
}

/// An interest rule request that passed input validation.
///
/// The rate range is enforced by the rule table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterestRule {
    pub date: NaiveDate,
    pub rule_id: String,
    pub rate: Decimal,
}

impl TryFrom<InterestRuleRequest> for NewInterestRule {
    type Error = BankError;

    fn try_from(request: InterestRuleRequest) -> Result<Self> {
        Ok(Self {
            date: parse_date(&request.date)?,
            rule_id: validate_id("Rule id", &request.rule_id)?,
            rate: request.rate,
        })
    }
}

/// Rule listing row.
#[derive(Debug, Serialize)]
pub struct InterestRuleResponse {
    pub date: String,
    pub rule_id: String,
    pub rate: String,
}

impl From<&InterestRule> for InterestRuleResponse {
    fn from(rule: &InterestRule) -> Self {
        Self {
            date: format_date(rule.effective_date),
            rule_id: rule.rule_id.clone(),
            rate: format_amount(rule.annual_rate_percent),
        }
    }
}

impl From<&NewInterestRule> for InterestRuleResponse {
    fn from(rule: &NewInterestRule) -> Self {
        Self {
            date: format_date(rule.date),
            rule_id: rule.rule_id.clone(),
            rate: format_amount(rule.rate),
        }
    }
}

/// Response to defining a rule: the stored rule, whether it replaced an
/// earlier rule on the same date, and the full table afterwards.
#[derive(Debug, Serialize)]
pub struct SetInterestRuleResponse {
    pub rule: InterestRuleResponse,
    pub replaced: bool,
    pub rules: Vec<InterestRuleResponse>,
}
