//! `pizzeria-core` — shared building blocks for the pizzeria crates.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::OrderId;
pub use money::Money;
pub use value_object::ValueObject;
