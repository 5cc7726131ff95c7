//! Bank Ledger Service
//!
//! Per-account transaction ledgers with monthly interest statements, served
//! over a JSON API.
//!
//! # Architecture
//!
//! - **Core** (`services`): synchronous ledger, interest rule table and
//!   statement generator, owned by a `Bank`
//! - **HTTP** (`handlers`): Axum handlers that validate input and render the
//!   core's rows as formatted strings
//! - **State** (`state`): one `Bank` behind an async mutex
//! - **Storage**: in memory only, reset on every run

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::BankState;

/// Build the HTTP router around `state`.
pub fn app(state: BankState) -> Router {
    let api_routes = Router::new()
        // Transaction input
        .route(
            "/api/v1/transactions",
            post(handlers::transactions::create_transaction),
        )
        // Account views and statements
        .route("/api/v1/accounts", get(handlers::accounts::list_accounts))
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account),
        )
        .route(
            "/api/v1/accounts/{id}/statements/{period}",
            get(handlers::statements::get_statement),
        )
        // Interest rules
        .route(
            "/api/v1/interest-rules",
            post(handlers::interest_rules::create_interest_rule)
                .get(handlers::interest_rules::list_interest_rules),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
