//! `pizzeria-shop` — the interactive ordering counter.
//!
//! Wires the menu, stock ledger and payment methods into a text dialogue.
//! The dialogue is generic over its input and output streams so it can run
//! against a terminal or a scripted transcript.

pub mod config;
pub mod session;

pub use config::{ConfigError, ShopConfig};
pub use session::{Session, SessionError, SessionSummary};
