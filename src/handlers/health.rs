//! Health check endpoint for service monitoring.

use crate::state::BankState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of accounts held in memory
    pub accounts: usize,

    /// Number of interest rules defined
    pub interest_rules: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "accounts": 2,
///   "interest_rules": 3,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(state): State<BankState>) -> Json<HealthResponse> {
    let bank = state.lock().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        accounts: bank.ledger().len(),
        interest_rules: bank.rules().len(),
        timestamp: Utc::now(),
    })
}
