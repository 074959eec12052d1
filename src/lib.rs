#![doc(test(attr(deny(warnings))))]

//! Envelope Budget tracks named budget envelopes, their monthly allocations and a
//! ledger of expense, income and transfer transactions, and derives per-envelope
//! balances for a selected reporting month.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("envelope budget tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
