//! Inventory domain module.
//!
//! Tracks how many units of each base pizza and topping remain, and hands
//! them out one at a time (no IO, no terminal, no storage).

pub mod ledger;

pub use ledger::{StockEntry, StockLedger, StockSnapshot};
