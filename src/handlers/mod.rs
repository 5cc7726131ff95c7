//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Validates it and calls the ledger core under the state lock
//! 3. Returns the rendered JSON response or a `BankError`
/// Account listing and ledger views
pub mod accounts;
pub mod health;
/// Interest rule input and listing
pub mod interest_rules;
/// Monthly statements
pub mod statements;
/// Transaction input
pub mod transactions;
