//! Combines income tax and CPF into a single take-home figure.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{percent_of, round_rate, round_to_units};
use crate::calculations::{CpfCalculator, IncomeTaxCalculator};
use crate::models::ComprehensiveSummary;

/// Runs the tax and CPF calculators side by side and merges their results.
///
/// The two calculators are independent: both receive the raw annual income.
#[derive(Debug, Clone)]
pub struct SummaryComposer<'a> {
    tax: IncomeTaxCalculator<'a>,
    cpf: CpfCalculator,
}

impl<'a> SummaryComposer<'a> {
    pub fn new(
        tax: IncomeTaxCalculator<'a>,
        cpf: CpfCalculator,
    ) -> Self {
        Self { tax, cpf }
    }

    /// Composer over the built-in YA 2025 tables.
    pub fn ya2025() -> SummaryComposer<'static> {
        SummaryComposer::new(IncomeTaxCalculator::ya2025(), CpfCalculator::ya2025())
    }

    /// Builds the combined summary for `annual_income`.
    ///
    /// Take-home and total deductions are rounded to whole dollars and the
    /// take-home rate to one decimal place. The take-home is not floored
    /// at zero.
    pub fn compose(
        &self,
        annual_income: Decimal,
        is_resident_eligible: bool,
    ) -> ComprehensiveSummary {
        let tax = self.tax.calculate(annual_income);
        let cpf = self.cpf.summary(annual_income, is_resident_eligible);

        let employee_cpf = cpf.result.employee_contribution;
        let final_take_home = annual_income - tax.net_tax - employee_cpf;
        let total_deductions = tax.net_tax + employee_cpf;
        let effective_take_home_rate = round_rate(percent_of(final_take_home, annual_income));

        debug!(
            annual_income = %annual_income,
            net_tax = %tax.net_tax,
            employee_cpf = %employee_cpf,
            "composed take-home summary"
        );

        ComprehensiveSummary {
            annual_income,
            is_resident_eligible,
            tax,
            cpf,
            final_take_home: round_to_units(final_take_home),
            total_deductions: round_to_units(total_deductions),
            effective_take_home_rate,
        }
    }
}

/// Builds the combined tax and CPF summary using the YA 2025 tables.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::compose_summary;
///
/// let summary = compose_summary(dec!(80000), true);
///
/// assert_eq!(summary.tax.net_tax, dec!(3150));
/// assert_eq!(summary.cpf.result.employee_contribution, dec!(16000));
/// assert_eq!(summary.final_take_home, dec!(60850));
/// assert_eq!(summary.effective_take_home_rate, dec!(76.1));
/// ```
pub fn compose_summary(
    annual_income: Decimal,
    is_resident_eligible: bool,
) -> ComprehensiveSummary {
    SummaryComposer::ya2025().compose(annual_income, is_resident_eligible)
}
