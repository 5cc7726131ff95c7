//! Ledger core.
//!
//! Everything here is synchronous and free of I/O. Handlers call into
//! `Bank`, which owns the ledger and the interest rule table.

pub mod bank;
pub mod interest_rules;
pub mod ledger;
pub mod statement;
