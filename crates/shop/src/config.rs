//! Shop configuration: what is on the menu and how much of it is in stock.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pizzeria_core::{DomainError, DomainResult};
use pizzeria_inventory::{StockEntry, StockLedger};
use pizzeria_menu::Menu;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse shop configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Everything a session needs to open the counter.
///
/// `Default` is the house setup: Margherita and Pepperoni bases, Cheese,
/// Olives and Mushrooms toppings, with the usual opening stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub menu: Menu,
    pub starting_stock: Vec<StockEntry>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            menu: Menu::standard(),
            starting_stock: vec![
                StockEntry::new("Margherita", 10),
                StockEntry::new("Pepperoni", 10),
                StockEntry::new("Cheese", 15),
                StockEntry::new("Olives", 10),
                StockEntry::new("Mushrooms", 12),
            ],
        }
    }
}

impl ShopConfig {
    /// Parse and validate a JSON shop definition. Missing sections fall back to the house setup.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ShopConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.menu.validate()?;

        let mut seen = HashSet::new();
        for entry in &self.starting_stock {
            if entry.name.trim().is_empty() {
                return Err(DomainError::validation("stock entry name cannot be empty"));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(DomainError::validation(format!(
                    "stock entry listed twice: {}",
                    entry.name
                )));
            }
        }

        for name in self.menu.item_names() {
            if !seen.contains(name) {
                tracing::warn!(
                    item = name,
                    "menu item has no stock entry; it will always be unavailable"
                );
            }
        }

        Ok(())
    }

    /// Fresh ledger holding the starting stock.
    pub fn ledger(&self) -> StockLedger {
        StockLedger::from_entries(&self.starting_stock)
    }
}
