use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use pizzeria_core::{DomainError, DomainResult, Money, ValueObject};

/// A base pizza as listed on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseItem {
    pub name: String,
    pub price: Money,
}

impl BaseItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl ValueObject for BaseItem {}

/// A topping and what it adds to the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    pub name: String,
    pub price_delta: Money,
}

impl Topping {
    pub fn new(name: impl Into<String>, price_delta: Money) -> Self {
        Self {
            name: name.into(),
            price_delta,
        }
    }
}

impl ValueObject for Topping {}

/// Ordered list of what the shop sells.
///
/// Menu numbers are 1-based positions in `bases` / `toppings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub bases: Vec<BaseItem>,
    pub toppings: Vec<Topping>,
}

impl Menu {
    /// The house menu: two bases, three toppings.
    pub fn standard() -> Self {
        Self {
            bases: vec![
                BaseItem::new("Margherita", Money::from_cents(500)),
                BaseItem::new("Pepperoni", Money::from_cents(600)),
            ],
            toppings: vec![
                Topping::new("Cheese", Money::from_cents(100)),
                Topping::new("Olives", Money::from_cents(50)),
                Topping::new("Mushrooms", Money::from_cents(70)),
            ],
        }
    }

    /// Resolve a 1-based base menu number.
    pub fn base(&self, choice: usize) -> Option<&BaseItem> {
        choice.checked_sub(1).and_then(|i| self.bases.get(i))
    }

    /// Resolve a 1-based topping menu number.
    pub fn topping(&self, choice: usize) -> Option<&Topping> {
        choice.checked_sub(1).and_then(|i| self.toppings.get(i))
    }

    /// Menu number that ends the topping loop (one past the last topping).
    pub fn finish_choice(&self) -> usize {
        self.toppings.len() + 1
    }

    /// Names of everything on the menu, bases first.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.bases
            .iter()
            .map(|b| b.name.as_str())
            .chain(self.toppings.iter().map(|t| t.name.as_str()))
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.bases.is_empty() {
            return Err(DomainError::validation("menu must list at least one base pizza"));
        }

        let prices = self
            .bases
            .iter()
            .map(|b| (b.name.as_str(), b.price))
            .chain(self.toppings.iter().map(|t| (t.name.as_str(), t.price_delta)));
        for (name, price) in prices {
            if price > Money::MAX_PRICE {
                return Err(DomainError::validation(format!(
                    "price of {name} exceeds {}",
                    Money::MAX_PRICE
                )));
            }
        }

        let mut seen = HashSet::new();
        for name in self.item_names() {
            if name.trim().is_empty() {
                return Err(DomainError::validation("menu item name cannot be empty"));
            }
            if !seen.insert(name) {
                return Err(DomainError::validation(format!(
                    "menu item listed twice: {name}"
                )));
            }
        }

        Ok(())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}
