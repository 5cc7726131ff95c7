//! Error types and HTTP error response handling.
//!
//! `BankError` is shared by the ledger core and the HTTP layer. The core
//! returns it from every fallible operation; handlers return it directly and
//! Axum turns it into a JSON error response.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde_json::json;

/// Application-wide error type.
///
/// Every variant is recoverable: a failed operation leaves the ledger and
/// the rule table exactly as they were.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    /// Statement, lookup or withdrawal against an account with no history.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    /// Withdrawal amount exceeds the account's current balance.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Interest rate outside the open interval (0, 100).
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid interest rule: {0}")]
    InvalidRule(String),

    /// Request body or parameters are malformed.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A balance or interest total would leave the representable range.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Amount overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, BankError>;

/// Malformed JSON bodies are reported like any other invalid input.
impl From<JsonRejection> for BankError {
    fn from(rejection: JsonRejection) -> Self {
        BankError::InvalidRequest(rejection.body_text())
    }
}

/// Convert BankError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "insufficient_funds",
///     "message": "Insufficient funds: requested 50.00, available 20.00"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `UnknownAccount` → 404 Not Found
/// - `InsufficientFunds` → 422 Unprocessable Entity
/// - `InvalidRule` → 400 Bad Request
/// - `InvalidRequest` → 400 Bad Request
/// - `Overflow` → 422 Unprocessable Entity
impl IntoResponse for BankError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            BankError::UnknownAccount(_) => (StatusCode::NOT_FOUND, "unknown_account"),
            BankError::InsufficientFunds { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_funds")
            }
            BankError::InvalidRule(_) => (StatusCode::BAD_REQUEST, "invalid_rule"),
            BankError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            BankError::Overflow(_) => (StatusCode::UNPROCESSABLE_ENTITY, "amount_overflow"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn insufficient_funds_maps_to_422() {
        let response = BankError::InsufficientFunds {
            requested: dec!(50.00),
            available: dec!(20.00),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unknown_account_maps_to_404() {
        let response = BankError::UnknownAccount("AC404".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn overflow_maps_to_422() {
        let response = BankError::Overflow("balance".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn message_includes_amounts() {
        let err = BankError::InsufficientFunds {
            requested: dec!(50.00),
            available: dec!(20.00),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 50.00, available 20.00"
        );
    }
}
