use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fee adjustment applied to a computed bill
pub type StrategyFn = fn(Decimal) -> Decimal;

/// Charge the bill as computed.
pub fn regular(amount: Decimal) -> Decimal {
    amount
}

/// Insurance covers 30% of the bill.
pub fn insurance(amount: Decimal) -> Decimal {
    amount * Decimal::new(7, 1)
}

/// Emergency admissions carry a 20% surcharge.
pub fn emergency(amount: Decimal) -> Decimal {
    amount * Decimal::new(12, 1)
}

/// The named billing strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStrategy {
    Regular,
    Insurance,
    Emergency,
}

impl BillingStrategy {
    pub fn function(self) -> StrategyFn {
        match self {
            BillingStrategy::Regular => regular,
            BillingStrategy::Insurance => insurance,
            BillingStrategy::Emergency => emergency,
        }
    }

    pub fn apply(self, amount: Decimal) -> Decimal {
        (self.function())(amount)
    }
}

impl fmt::Display for BillingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BillingStrategy::Regular => "Regular",
            BillingStrategy::Insurance => "Insurance",
            BillingStrategy::Emergency => "Emergency",
        };
        f.write_str(name)
    }
}
