//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two prices of
/// 500 cents are the same price, two toppings named "Cheese" with the same
/// delta are the same topping. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Topping {
///     name: String,
///     price_delta: Money,
/// }
///
/// impl ValueObject for Topping {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
