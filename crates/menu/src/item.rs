use pizzeria_core::Money;

use crate::catalog::{BaseItem, Topping};

/// Something that can be ordered: a base pizza with zero or more toppings.
///
/// Each `Topped` layer owns the item it wraps, so a finished pizza is a chain
/// `Topped(Topped(Base))`. Building never mutates an existing item;
/// [`OrderableItem::with_topping`] moves the old value into a new wrapper.
///
/// Chains may be arbitrarily deep. Every walk over the chain (reads, `Clone`,
/// `PartialEq`, `Debug`, `Drop`) is a loop, never recursion.
pub enum OrderableItem {
    Base(BaseItem),
    Topped {
        inner: Box<OrderableItem>,
        topping: Topping,
    },
}

impl OrderableItem {
    pub fn base(item: &BaseItem) -> Self {
        Self::Base(item.clone())
    }

    /// Wrap this item with one more topping.
    ///
    /// The same topping may be applied any number of times.
    pub fn with_topping(self, topping: &Topping) -> Self {
        Self::Topped {
            inner: Box::new(self),
            topping: topping.clone(),
        }
    }

    /// `<base>, <topping>, <topping>...` in the order toppings were added.
    pub fn description(&self) -> String {
        let mut description = self.base_name().to_string();
        for topping in self.toppings() {
            description.push_str(", ");
            description.push_str(&topping.name);
        }
        description
    }

    /// Base price plus every topping delta.
    pub fn cost(&self) -> Money {
        let deltas: Money = self.toppings().into_iter().map(|t| t.price_delta).sum();
        self.base_item().price + deltas
    }

    pub fn base_name(&self) -> &str {
        &self.base_item().name
    }

    /// Toppings in application order (first added first).
    pub fn toppings(&self) -> Vec<&Topping> {
        let mut layers = Vec::new();
        let mut current = self;
        while let Self::Topped { inner, topping } = current {
            layers.push(topping);
            current = inner;
        }
        layers.reverse();
        layers
    }

    pub fn topping_count(&self) -> usize {
        let mut count = 0;
        let mut current = self;
        while let Self::Topped { inner, .. } = current {
            count += 1;
            current = inner;
        }
        count
    }

    /// Allocation-free stand-in left behind while a chain is dismantled.
    fn unlinked() -> Self {
        Self::Base(BaseItem::new(String::new(), Money::ZERO))
    }

    fn base_item(&self) -> &BaseItem {
        let mut current = self;
        loop {
            match current {
                Self::Base(base) => return base,
                Self::Topped { inner, .. } => current = inner,
            }
        }
    }
}

impl Clone for OrderableItem {
    fn clone(&self) -> Self {
        self.toppings()
            .into_iter()
            .fold(Self::base(self.base_item()), Self::with_topping)
    }
}

impl PartialEq for OrderableItem {
    fn eq(&self, other: &Self) -> bool {
        self.base_item() == other.base_item() && self.toppings() == other.toppings()
    }
}

impl Eq for OrderableItem {}

impl core::fmt::Debug for OrderableItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderableItem")
            .field("base", self.base_item())
            .field("toppings", &self.toppings())
            .finish()
    }
}

impl Drop for OrderableItem {
    fn drop(&mut self) {
        let Self::Topped { inner, .. } = self else {
            return;
        };

        // Unlink one layer at a time; each detached layer drops with an empty inner.
        let mut next = core::mem::replace(&mut **inner, Self::unlinked());
        while let Self::Topped { inner, .. } = &mut next {
            let deeper = core::mem::replace(&mut **inner, Self::unlinked());
            next = deeper;
        }
    }
}

impl core::fmt::Display for OrderableItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.description())
    }
}
