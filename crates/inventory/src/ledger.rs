use serde::{Deserialize, Serialize};

/// Owned copy of the ledger's counts, in the order items were stocked.
pub type StockSnapshot = Vec<StockEntry>;

/// Starting count for one item (shop configuration input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: String,
    pub count: u32,
}

impl StockEntry {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Per-item stock counts for one session, kept in starting-stock order.
///
/// Counts are unsigned and only ever decremented through
/// [`StockLedger::check_and_decrement`], so they cannot go negative and are
/// never reset within a run.
///
/// ## Concurrency
///
/// `check_and_decrement` reads then writes the count. It takes `&mut self`, so
/// no second caller can interleave between the two steps. A host sharing the
/// ledger across threads must wrap it in a `Mutex` and perform the whole call
/// under one guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLedger {
    entries: Vec<StockEntry>,
}

impl StockLedger {
    /// Build a ledger from `(name, count)` pairs.
    ///
    /// A later duplicate overwrites the earlier count but keeps its position.
    pub fn new<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut entries: Vec<StockEntry> = Vec::new();
        for (name, count) in counts {
            let name = name.into();
            match entries.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.count = count,
                None => entries.push(StockEntry { name, count }),
            }
        }
        Self { entries }
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a StockEntry>) -> Self {
        Self::new(entries.into_iter().map(|e| (e.name.clone(), e.count)))
    }

    /// Take one unit of `item` if any remain.
    ///
    /// Returns `false` and leaves the ledger untouched when the count is zero or
    /// the name is unknown (unknown items have zero stock).
    pub fn check_and_decrement(&mut self, item: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.name == item) {
            Some(entry) if entry.count > 0 => {
                entry.count -= 1;
                tracing::debug!(item, remaining = entry.count, "stock taken");
                true
            }
            Some(_) => {
                tracing::debug!(item, "out of stock");
                false
            }
            None => {
                tracing::debug!(item, "unknown stock item");
                false
            }
        }
    }

    /// Units of `item` currently available (0 for unknown names).
    pub fn available(&self, item: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.name == item)
            .map_or(0, |e| e.count)
    }

    /// Copy of the current counts. Changes to the copy never reach the ledger.
    pub fn snapshot(&self) -> StockSnapshot {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_ledger() -> StockLedger {
        StockLedger::new([
            ("Margherita", 10),
            ("Pepperoni", 10),
            ("Cheese", 15),
            ("Olives", 10),
            ("Mushrooms", 12),
        ])
    }

    fn count_in(snapshot: &StockSnapshot, name: &str) -> Option<u32> {
        snapshot.iter().find(|e| e.name == name).map(|e| e.count)
    }

    #[test]
    fn eleventh_margherita_is_refused() {
        let mut ledger = shop_ledger();

        for _ in 0..10 {
            assert!(ledger.check_and_decrement("Margherita"));
        }

        assert!(!ledger.check_and_decrement("Margherita"));
        assert_eq!(ledger.available("Margherita"), 0);
    }

    #[test]
    fn unknown_item_is_refused_without_mutation() {
        let mut ledger = shop_ledger();
        let before = ledger.snapshot();

        assert!(!ledger.check_and_decrement("Pineapple"));
        assert!(!ledger.check_and_decrement(""));

        assert_eq!(ledger.snapshot(), before);
        assert_eq!(ledger.available("Pineapple"), 0);
    }

    #[test]
    fn decrement_touches_only_the_named_item() {
        let mut ledger = shop_ledger();

        assert!(ledger.check_and_decrement("Olives"));

        let snap = ledger.snapshot();
        assert_eq!(count_in(&snap, "Olives"), Some(9));
        assert_eq!(count_in(&snap, "Cheese"), Some(15));
        assert_eq!(count_in(&snap, "Margherita"), Some(10));
    }

    #[test]
    fn snapshot_keeps_starting_order() {
        let mut ledger = shop_ledger();
        assert!(ledger.check_and_decrement("Mushrooms"));

        let snap = ledger.snapshot();
        let names: Vec<&str> = snap.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["Margherita", "Pepperoni", "Cheese", "Olives", "Mushrooms"]
        );
        assert_eq!(snap[4], StockEntry::new("Mushrooms", 11));
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let ledger = StockLedger::new([("Cheese", 1), ("Olives", 2), ("Cheese", 5)]);

        assert_eq!(
            ledger.snapshot(),
            vec![StockEntry::new("Cheese", 5), StockEntry::new("Olives", 2)]
        );
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut ledger = StockLedger::new([("Cheese", 1)]);

        let mut snap = ledger.snapshot();
        snap[0].count = 100;
        snap.push(StockEntry::new("Olives", 5));

        assert!(ledger.check_and_decrement("Cheese"));
        assert!(!ledger.check_and_decrement("Cheese"));
        assert!(!ledger.check_and_decrement("Olives"));
    }

    #[test]
    fn zero_stock_entry_is_refused() {
        let mut ledger = StockLedger::from_entries(&[StockEntry::new("Olives", 0)]);

        assert!(!ledger.check_and_decrement("Olives"));
        assert_eq!(count_in(&ledger.snapshot(), "Olives"), Some(0));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a count of `n` yields exactly `n` successful takes, and
            /// every call after that fails without going below zero.
            #[test]
            fn takes_exactly_the_starting_count(n in 0u32..200, extra in 1usize..20) {
                let mut ledger = StockLedger::new([("Cheese", n)]);

                let attempts = n as usize + extra;
                let granted = (0..attempts)
                    .filter(|_| ledger.check_and_decrement("Cheese"))
                    .count();

                prop_assert_eq!(granted, n as usize);
                prop_assert_eq!(ledger.available("Cheese"), 0);
            }
        }
    }
}
