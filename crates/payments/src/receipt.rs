use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pizzeria_core::{Money, OrderId};

/// Record of one completed payment. Lives only as long as the caller keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub order_id: OrderId,
    pub amount: Money,
    pub method: String,
    pub paid_at: DateTime<Utc>,
}

impl PaymentReceipt {
    /// Human-readable confirmation line.
    pub fn confirmation(&self) -> String {
        format!(
            "Paid {} using {}. Payment Successful!",
            self.amount, self.method
        )
    }
}

impl core::fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.confirmation())
    }
}
