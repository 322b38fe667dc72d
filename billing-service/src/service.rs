use rust_decimal::Decimal;

/// Apply a billing strategy to a computed bill. The strategy's result is
/// returned as is, without rounding or clamping.
pub fn apply_billing<F>(amount: Decimal, strategy: F) -> Decimal
where
    F: Fn(Decimal) -> Decimal,
{
    let adjusted = strategy(amount);
    tracing::debug!(%amount, %adjusted, "Billing strategy applied");
    adjusted
}

/// Billing service
pub struct BillingService;

impl BillingService {
    /// Create a new billing service
    pub fn new() -> Self {
        Self
    }

    /// Adjust a computed bill with the given strategy
    pub fn apply_billing<F>(&self, amount: Decimal, strategy: F) -> Decimal
    where
        F: Fn(Decimal) -> Decimal,
    {
        apply_billing(amount, strategy)
    }
}

impl Default for BillingService {
    fn default() -> Self {
        Self::new()
    }
}
