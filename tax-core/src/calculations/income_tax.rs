//! Resident individual income tax.
//!
//! Tax is computed from a progressive bracket schedule: the first bracket
//! whose upper bound is at or above the income is selected and its
//! cumulative base plus marginal amount gives the gross tax. A capped
//! rebate is then taken off to arrive at the net tax payable.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::compute_tax;
//!
//! let result = compute_tax(dec!(80000));
//!
//! // 550 + (80000 - 40000) * 7%
//! assert_eq!(result.gross_tax, dec!(3350));
//! assert_eq!(result.rebate, dec!(200));
//! assert_eq!(result.net_tax, dec!(3150));
//! assert_eq!(result.marginal_tax_rate, dec!(7));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{max, percent_of};
use crate::models::{RebatePolicy, TaxBracket, TaxResult};
use crate::tables::{REBATE_YA2025, TAX_BRACKETS_YA2025};

/// Calculator for income tax over a bracket schedule and rebate policy.
///
/// Brackets should be sorted by `lower_bound` and contiguous, with an
/// unbounded top bracket (see [`crate::tables::validate_brackets`]).
/// Incomes above a bounded top bracket fall back to the last bracket.
#[derive(Debug, Clone, Copy)]
pub struct IncomeTaxCalculator<'a> {
    brackets: &'a [TaxBracket],
    rebate: RebatePolicy,
}

impl<'a> IncomeTaxCalculator<'a> {
    pub fn new(
        brackets: &'a [TaxBracket],
        rebate: RebatePolicy,
    ) -> Self {
        Self { brackets, rebate }
    }

    /// Calculator over the built-in YA 2025 schedule and rebate.
    pub fn ya2025() -> IncomeTaxCalculator<'static> {
        IncomeTaxCalculator::new(&TAX_BRACKETS_YA2025, REBATE_YA2025)
    }

    /// Computes the full tax result for `annual_income`.
    ///
    /// Never fails: zero, negative and very large incomes all produce a
    /// result. Non-positive income yields [`TaxResult::zero`].
    pub fn calculate(
        &self,
        annual_income: Decimal,
    ) -> TaxResult {
        if annual_income <= Decimal::ZERO {
            if annual_income < Decimal::ZERO {
                warn!(annual_income = %annual_income, "negative income; no tax computed");
            }
            return TaxResult::zero(annual_income);
        }

        let Some((index, bracket)) = self.bracket_for(annual_income) else {
            warn!("tax schedule is empty; no tax computed");
            return TaxResult::zero(annual_income);
        };
        debug!(
            annual_income = %annual_income,
            bracket = index,
            lower_bound = %bracket.lower_bound,
            "selected tax bracket"
        );

        let gross_tax = self.gross_tax_in(bracket, annual_income);
        let rebate = self.rebate.apply(gross_tax);
        let net_tax = max(gross_tax - rebate, Decimal::ZERO);

        TaxResult {
            annual_income,
            gross_tax,
            rebate,
            net_tax,
            after_tax_income: max(annual_income - net_tax, Decimal::ZERO),
            average_tax_rate: percent_of(net_tax, annual_income),
            marginal_tax_rate: bracket.marginal_rate * Decimal::ONE_HUNDRED,
            bracket_index: Some(index),
        }
    }

    /// Finds the bracket that applies to `income`.
    ///
    /// Returns the first bracket whose upper bound is at or above the
    /// income, or the last bracket when the income is above every bound.
    /// `None` only for an empty schedule.
    pub fn bracket_for(
        &self,
        income: Decimal,
    ) -> Option<(usize, &'a TaxBracket)> {
        let brackets = self.brackets;
        brackets
            .iter()
            .position(|bracket| bracket.covers(income))
            .or_else(|| brackets.len().checked_sub(1))
            .map(|index| (index, &brackets[index]))
    }

    /// Gross tax before the rebate.
    pub fn gross_tax(
        &self,
        annual_income: Decimal,
    ) -> Decimal {
        self.calculate(annual_income).gross_tax
    }

    /// Net tax payable after the rebate.
    pub fn net_tax(
        &self,
        annual_income: Decimal,
    ) -> Decimal {
        self.calculate(annual_income).net_tax
    }

    /// Marginal rate, as a percentage, of the bracket `annual_income` falls in.
    pub fn marginal_tax_rate(
        &self,
        annual_income: Decimal,
    ) -> Decimal {
        self.calculate(annual_income).marginal_tax_rate
    }

    fn gross_tax_in(
        &self,
        bracket: &TaxBracket,
        annual_income: Decimal,
    ) -> Decimal {
        max(bracket.tax_at(annual_income), Decimal::ZERO)
    }
}

/// Computes income tax for `annual_income` using the YA 2025 tables.
pub fn compute_tax(annual_income: Decimal) -> TaxResult {
    IncomeTaxCalculator::ya2025().calculate(annual_income)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_brackets() -> Vec<TaxBracket> {
        vec![
            TaxBracket::new(dec!(0), Some(dec!(20000)), dec!(0), dec!(0)),
            TaxBracket::new(dec!(20000), Some(dec!(30000)), dec!(0.02), dec!(0)),
            TaxBracket::new(dec!(30000), Some(dec!(40000)), dec!(0.035), dec!(200)),
        ]
    }

    fn test_rebate() -> RebatePolicy {
        RebatePolicy {
            rate: dec!(0.60),
            cap: dec!(200),
        }
    }

    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // bracket_for tests
    // =========================================================================

    #[test]
    fn bracket_for_includes_upper_bound() {
        let brackets = test_brackets();
        let calculator = IncomeTaxCalculator::new(&brackets, test_rebate());

        let (index, _) = calculator.bracket_for(dec!(20000)).unwrap();

        assert_eq!(index, 0);
    }

    #[test]
    fn bracket_for_moves_up_just_past_bound() {
        let brackets = test_brackets();
        let calculator = IncomeTaxCalculator::new(&brackets, test_rebate());

        let (index, bracket) = calculator.bracket_for(dec!(20000.01)).unwrap();

        assert_eq!(index, 1);
        assert_eq!(bracket.marginal_rate, dec!(0.02));
    }

    #[test]
    fn bracket_for_falls_back_to_last_bracket() {
        let brackets = test_brackets();
        let calculator = IncomeTaxCalculator::new(&brackets, test_rebate());

        let (index, _) = calculator.bracket_for(dec!(90000)).unwrap();

        assert_eq!(index, 2);
    }

    #[test]
    fn bracket_for_empty_schedule_is_none() {
        let calculator = IncomeTaxCalculator::new(&[], test_rebate());

        assert_eq!(calculator.bracket_for(dec!(50000)), None);
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_zero_income_is_all_zero() {
        let result = compute_tax(dec!(0));

        assert_eq!(result, TaxResult::zero(dec!(0)));
    }

    #[test]
    fn calculate_negative_income_is_all_zero() {
        let _guard = init_test_tracing();

        let result = compute_tax(dec!(-5000));

        assert_eq!(result, TaxResult::zero(dec!(-5000)));
        assert_eq!(result.marginal_tax_rate, dec!(0));
    }

    #[test]
    fn calculate_income_in_zero_rate_bracket() {
        let result = compute_tax(dec!(18000));

        assert_eq!(result.gross_tax, dec!(0));
        assert_eq!(result.rebate, dec!(0));
        assert_eq!(result.net_tax, dec!(0));
        assert_eq!(result.after_tax_income, dec!(18000));
        assert_eq!(result.marginal_tax_rate, dec!(0));
        assert_eq!(result.bracket_index, Some(0));
    }

    #[test]
    fn calculate_rebate_below_cap() {
        let result = compute_tax(dec!(25000));

        // (25000 - 20000) * 2% = 100, rebate 60% = 60
        assert_eq!(result.gross_tax, dec!(100));
        assert_eq!(result.rebate, dec!(60));
        assert_eq!(result.net_tax, dec!(40));
        assert_eq!(result.after_tax_income, dec!(24960));
        assert_eq!(result.average_tax_rate, dec!(0.16));
        assert_eq!(result.marginal_tax_rate, dec!(2));
    }

    #[test]
    fn calculate_rebate_capped() {
        let result = compute_tax(dec!(80000));

        assert_eq!(result.gross_tax, dec!(3350));
        assert_eq!(result.rebate, dec!(200));
        assert_eq!(result.net_tax, dec!(3150));
        assert_eq!(result.after_tax_income, dec!(76850));
        assert_eq!(result.average_tax_rate, dec!(3.9375));
        assert_eq!(result.bracket_index, Some(3));
    }

    #[test]
    fn calculate_fractional_rate_bracket() {
        let result = compute_tax(dec!(35000));

        // 200 + 5000 * 3.5% = 375, rebate 200 (60% = 225, capped)
        assert_eq!(result.gross_tax, dec!(375));
        assert_eq!(result.net_tax, dec!(175));
        assert_eq!(result.marginal_tax_rate, dec!(3.5));
    }

    #[test]
    fn calculate_top_bracket() {
        let result = compute_tax(dec!(1500000));

        assert_eq!(result.gross_tax, dec!(319150));
        assert_eq!(result.rebate, dec!(200));
        assert_eq!(result.net_tax, dec!(318950));
        assert_eq!(result.marginal_tax_rate, dec!(24));
        assert_eq!(result.bracket_index, Some(12));
    }

    #[test]
    fn calculate_above_bounded_schedule_uses_last_formula() {
        let brackets = test_brackets();
        let calculator = IncomeTaxCalculator::new(&brackets, test_rebate());

        let result = calculator.calculate(dec!(50000));

        // 200 + 20000 * 3.5% = 900
        assert_eq!(result.gross_tax, dec!(900));
        assert_eq!(result.net_tax, dec!(700));
    }

    #[test]
    fn calculate_with_empty_schedule_is_zero() {
        let _guard = init_test_tracing();
        let calculator = IncomeTaxCalculator::new(&[], test_rebate());

        let result = calculator.calculate(dec!(50000));

        assert_eq!(result, TaxResult::zero(dec!(50000)));
    }

    #[test]
    fn convenience_accessors_match_calculate() {
        let calculator = IncomeTaxCalculator::ya2025();

        assert_eq!(calculator.gross_tax(dec!(150000)), dec!(12450));
        assert_eq!(calculator.net_tax(dec!(150000)), dec!(12250));
        assert_eq!(calculator.marginal_tax_rate(dec!(150000)), dec!(15));
    }
}
