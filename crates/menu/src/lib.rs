//! Menu domain module.
//!
//! Catalog entries (base pizzas, toppings) and the orderable-item model that
//! stacks toppings onto a base, implemented as deterministic domain logic.

pub mod catalog;
pub mod item;

pub use catalog::{BaseItem, Menu, Topping};
pub use item::OrderableItem;
