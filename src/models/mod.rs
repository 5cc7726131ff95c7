//! Domain entities and the request/response types built from them.

/// Account entity and account views
pub mod account;
/// Date, period and amount wire formats
pub mod format;
/// Interest rule entity and requests
pub mod interest_rule;
/// Statement rows and statement view
pub mod statement;
/// Transaction entity and requests
pub mod transaction;
