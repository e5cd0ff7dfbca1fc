use chrono::Utc;

use pizzeria_core::{Money, OrderId};

use crate::receipt::PaymentReceipt;

/// A way of paying for an order.
///
/// `pay` has no failure path: the simulator treats every payment as accepted.
/// Callers dispatch through `Box<dyn PaymentMethod>` picked from [`PaymentChoice`].
pub trait PaymentMethod {
    /// Display name, as shown on the menu and the receipt.
    fn name(&self) -> &'static str;

    fn pay(&self, order_id: OrderId, amount: Money) -> PaymentReceipt {
        tracing::info!(
            %order_id,
            method = self.name(),
            amount = amount.cents(),
            "payment accepted"
        );
        PaymentReceipt {
            order_id,
            amount,
            method: self.name().to_string(),
            paid_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPal;

impl PaymentMethod for PayPal {
    fn name(&self) -> &'static str {
        "PayPal"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCard;

impl PaymentMethod for CreditCard {
    fn name(&self) -> &'static str {
        "Credit Card"
    }
}

/// Payment options offered at checkout, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    PayPal,
    CreditCard,
}

impl PaymentChoice {
    pub fn all() -> [PaymentChoice; 2] {
        [PaymentChoice::PayPal, PaymentChoice::CreditCard]
    }

    /// Resolve a 1-based payment menu number.
    pub fn from_menu(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::all().get(i).copied())
    }

    pub fn into_method(self) -> Box<dyn PaymentMethod> {
        match self {
            PaymentChoice::PayPal => Box::new(PayPal),
            PaymentChoice::CreditCard => Box::new(CreditCard),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentChoice::PayPal => PayPal.name(),
            PaymentChoice::CreditCard => CreditCard.name(),
        }
    }
}
