//! Exact monetary amounts.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Non-negative amount in the smallest currency unit (cents).
///
/// Menu prices and topping deltas are stored as whole cents so totals add up
/// exactly: `5.00 + 1.00 + 0.50` is `650`, never `6.499999`.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest price a single menu entry may carry.
    pub const MAX_PRICE: Money = Money(u32::MAX as u64);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl ValueObject for Money {}

/// Saturates at `u64::MAX` cents instead of overflowing.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Renders as `$<units>.<cents>`, always with two decimals.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
