use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Personal income tax rebate: a share of gross tax, capped at a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebatePolicy {
    pub rate: Decimal,
    pub cap: Decimal,
}

impl RebatePolicy {
    /// Rebate granted against `gross_tax`. Zero when there is no tax to rebate.
    pub fn apply(
        &self,
        gross_tax: Decimal,
    ) -> Decimal {
        if gross_tax <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (gross_tax * self.rate).min(self.cap)
    }
}
