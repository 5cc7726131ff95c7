//! Shared application state.
//!
//! The ledger core is not built for concurrent access, so the whole `Bank`
//! sits behind one async mutex. Handlers hold the lock for the duration of a
//! core call, which keeps rule updates and statement reads from interleaving.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::services::bank::Bank;

/// Type alias for the state shared by every handler.
pub type BankState = Arc<Mutex<Bank>>;

/// Create state around an empty bank.
pub fn create_state() -> BankState {
    with_bank(Bank::new())
}

/// Create state around an existing bank.
pub fn with_bank(bank: Bank) -> BankState {
    Arc::new(Mutex::new(bank))
}
