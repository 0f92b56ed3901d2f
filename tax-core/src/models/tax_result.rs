use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income tax outcome for one annual income.
///
/// Amounts are exact; rounding to whole dollars and one-decimal rates is
/// left to whoever displays them. Rates are percentages (7 means 7%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// The income the result was computed for, as given.
    pub annual_income: Decimal,

    /// Tax from the bracket schedule before the rebate.
    pub gross_tax: Decimal,

    /// Personal income tax rebate applied against gross tax.
    pub rebate: Decimal,

    /// Tax payable after the rebate.
    pub net_tax: Decimal,

    /// Income left after net tax, never below zero.
    pub after_tax_income: Decimal,

    /// Net tax as a percentage of income.
    pub average_tax_rate: Decimal,

    /// Rate of the bracket the income falls in.
    pub marginal_tax_rate: Decimal,

    /// Position of the selected bracket in the schedule.
    /// `None` when no bracket applied (non-positive income or empty schedule).
    pub bracket_index: Option<usize>,
}

impl TaxResult {
    /// All-zero result echoing the given income.
    pub fn zero(annual_income: Decimal) -> Self {
        Self {
            annual_income,
            gross_tax: Decimal::ZERO,
            rebate: Decimal::ZERO,
            net_tax: Decimal::ZERO,
            after_tax_income: Decimal::ZERO,
            average_tax_rate: Decimal::ZERO,
            marginal_tax_rate: Decimal::ZERO,
            bracket_index: None,
        }
    }
}
