use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One segment of a progressive income tax schedule.
///
/// `base_tax` is the cumulative tax owed on all income up to `lower_bound`,
/// so the tax for any income inside the bracket is
/// `base_tax + (income - lower_bound) * marginal_rate`.
/// The top bracket of a schedule has no `upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub marginal_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    pub const fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        marginal_rate: Decimal,
        base_tax: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            marginal_rate,
            base_tax,
        }
    }

    /// Whether `income` falls at or below this bracket's upper bound.
    pub fn covers(
        &self,
        income: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|upper| income <= upper)
    }

    /// Tax owed on `income` using this bracket's formula (not floored).
    pub fn tax_at(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.base_tax + (income - self.lower_bound) * self.marginal_rate
    }
}
