//! Wire formats shared by request parsing and response rendering.
//!
//! - Dates travel as 8-digit `YYYYMMDD` strings
//! - Statement periods travel as 6-digit `YYYYMM` strings
//! - Amounts and rates are rendered with exactly two decimal places

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{BankError, Result};

const DATE_FORMAT: &str = "%Y%m%d";

/// Parse a `YYYYMMDD` string into a calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BankError::InvalidRequest(format!(
            "Date must be in YYYYMMDD format, got '{value}'"
        )));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| BankError::InvalidRequest(format!("Invalid calendar date '{value}'")))
}

/// Render a date as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYYMM` statement period into `(year, month)`.
pub fn parse_period(value: &str) -> Result<(i32, u32)> {
    let value = value.trim();
    let invalid = || BankError::InvalidRequest(format!("Period must be YYYYMM, got '{value}'"));

    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = value[..4].parse().map_err(|_| invalid())?;
    let month: u32 = value[4..].parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}

/// Render a statement period as `YYYYMM`.
pub fn format_period(year: i32, month: u32) -> String {
    format!("{year:04}{month:02}")
}

/// First and last calendar day of a month, or `None` for an invalid month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}

/// Render an amount with two decimal places, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Check that an identifier is usable as an account or rule id.
pub fn validate_id(kind: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BankError::InvalidRequest(format!("{kind} must not be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(BankError::InvalidRequest(format!(
            "{kind} must not contain whitespace"
        )));
    }
    Ok(value.to_string())
}

/// Check that an amount is strictly positive with at most two decimal places.
pub fn validate_amount(amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(BankError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }
    if amount.round_dp(2) != amount {
        return Err(BankError::InvalidRequest(
            "Amount must have at most two decimal places".to_string(),
        ));
    }
    Ok(amount)
}
