//! Payment capability.
//!
//! Payments are simulated: every method accepts any amount and hands back a
//! receipt. Nothing here talks to a real gateway.

pub mod method;
pub mod receipt;

pub use method::{CreditCard, PayPal, PaymentChoice, PaymentMethod};
pub use receipt::PaymentReceipt;
