//! CPF contributions estimated from a single annual income.
//!
//! The estimate assumes 80% of annual income is paid as a regular monthly
//! (ordinary) wage and the rest as a year-end additional wage. Two branches
//! follow from that split:
//!
//! | Estimated monthly wage | CPF-subject income |
//! |------------------------|--------------------|
//! | At or below the ordinary wage ceiling | income, capped at the annual ceiling |
//! | Above the ordinary wage ceiling | capped ordinary wages plus additional wages up to the remaining annual ceiling |
//!
//! This is an approximation of the month-by-month rules, kept as is so the
//! published figures stay stable.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::compute_cpf;
//!
//! let result = compute_cpf(dec!(150000), true);
//!
//! // 7400 * 12 ordinary wages plus 13200 of the bonus
//! assert_eq!(result.cpf_subject_income, dec!(102000));
//! assert_eq!(result.employee_contribution, dec!(20400));
//! assert_eq!(result.employer_contribution, dec!(17340));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{max, round_to_units};
use crate::models::{
    CalculationMethod, CpfAssumption, CpfConfig, CpfResult, CpfSummary, MonthlyBreakdown,
};
use crate::tables::CPF_YA2025;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Calculator for CPF contributions under one [`CpfConfig`].
#[derive(Debug, Clone)]
pub struct CpfCalculator {
    config: CpfConfig,
}

impl CpfCalculator {
    pub fn new(config: CpfConfig) -> Self {
        Self { config }
    }

    /// Calculator over the built-in 2025 parameters.
    pub fn ya2025() -> Self {
        Self::new(CPF_YA2025)
    }

    pub fn config(&self) -> &CpfConfig {
        &self.config
    }

    /// Computes annual contributions for `annual_income`.
    ///
    /// Returns [`CpfResult::empty`] when the person is not eligible or the
    /// income is not positive.
    pub fn calculate(
        &self,
        annual_income: Decimal,
        is_resident_eligible: bool,
    ) -> CpfResult {
        if !is_resident_eligible {
            debug!("not eligible for CPF; no contributions");
            return CpfResult::empty();
        }
        if annual_income <= Decimal::ZERO {
            if annual_income < Decimal::ZERO {
                warn!(annual_income = %annual_income, "negative income; no CPF computed");
            }
            return CpfResult::empty();
        }

        let monthly_wage = self.estimated_monthly_wage(annual_income);
        let (subject, exempt, assumptions) = if monthly_wage <= self.config.ow_monthly_ceiling {
            debug!(monthly_wage = %monthly_wage, "monthly wage within ceiling");
            self.within_ceiling(annual_income)
        } else {
            debug!(monthly_wage = %monthly_wage, "monthly wage above ceiling");
            self.above_ceiling(annual_income, monthly_wage)
        };

        self.contributions(subject, exempt, assumptions)
    }

    /// [`Self::calculate`] plus the result split into monthly amounts.
    pub fn summary(
        &self,
        annual_income: Decimal,
        is_resident_eligible: bool,
    ) -> CpfSummary {
        let result = self.calculate(annual_income, is_resident_eligible);
        let monthly = MonthlyBreakdown {
            employee_contribution: round_to_units(result.employee_contribution / MONTHS_PER_YEAR),
            employer_contribution: round_to_units(result.employer_contribution / MONTHS_PER_YEAR),
            total_contribution: round_to_units(result.total_contribution / MONTHS_PER_YEAR),
        };
        CpfSummary { result, monthly }
    }

    /// Income less the employee contribution, before any income tax.
    pub fn take_home_before_tax(
        &self,
        annual_income: Decimal,
        is_resident_eligible: bool,
    ) -> Decimal {
        annual_income
            - self
                .calculate(annual_income, is_resident_eligible)
                .employee_contribution
    }

    /// Whether the estimated monthly wage is close enough to the ceiling
    /// that a month-by-month calculation could differ from this estimate.
    pub fn should_use_advanced_calculation(
        &self,
        annual_income: Decimal,
    ) -> bool {
        self.estimated_monthly_wage(annual_income)
            > self.config.ow_monthly_ceiling * self.config.advanced_threshold_share
    }

    /// Regular monthly wage implied by the wage split.
    pub fn estimated_monthly_wage(
        &self,
        annual_income: Decimal,
    ) -> Decimal {
        annual_income * self.config.regular_wage_share / MONTHS_PER_YEAR
    }

    /// Subject and exempt income when the monthly wage is within the ceiling.
    fn within_ceiling(
        &self,
        annual_income: Decimal,
    ) -> (Decimal, Decimal, Vec<CpfAssumption>) {
        let ceiling = self.config.annual_salary_ceiling;
        let subject = annual_income.min(ceiling);
        let exempt = max(annual_income - ceiling, Decimal::ZERO);
        let assumptions = vec![
            CpfAssumption::FullYearEmployment,
            CpfAssumption::AverageMonthlyDistribution,
            CpfAssumption::UnderFiftyFiveRates,
        ];
        (subject, exempt, assumptions)
    }

    /// Subject and exempt income when the monthly wage exceeds the ceiling.
    ///
    /// Ordinary wages are capped at the monthly ceiling for twelve months;
    /// additional wages count only up to what is left of the annual ceiling.
    fn above_ceiling(
        &self,
        annual_income: Decimal,
        monthly_wage: Decimal,
    ) -> (Decimal, Decimal, Vec<CpfAssumption>) {
        let ceiling = self.config.ow_monthly_ceiling;
        let annual_ordinary_wage =
            (monthly_wage * MONTHS_PER_YEAR).min(ceiling * MONTHS_PER_YEAR);
        let remaining_ceiling = self.config.annual_salary_ceiling - annual_ordinary_wage;
        let additional_wage = annual_income - annual_ordinary_wage;
        let subject_additional_wage = max(additional_wage.min(remaining_ceiling), Decimal::ZERO);

        let subject = annual_ordinary_wage + subject_additional_wage;
        let exempt = annual_income - subject;
        let assumptions = vec![
            CpfAssumption::EightyTwentyWageSplit,
            CpfAssumption::FullYearEmployment,
            CpfAssumption::UnderFiftyFiveRates,
            CpfAssumption::MonthlyCeilingExceeded { ceiling },
        ];
        (subject, exempt, assumptions)
    }

    /// Applies the rates to the subject income, rounding each output on its own.
    fn contributions(
        &self,
        subject: Decimal,
        exempt: Decimal,
        assumptions: Vec<CpfAssumption>,
    ) -> CpfResult {
        CpfResult {
            total_contribution: round_to_units(subject * self.config.total_rate()),
            employee_contribution: round_to_units(subject * self.config.employee_rate),
            employer_contribution: round_to_units(subject * self.config.employer_rate),
            cpf_subject_income: round_to_units(subject),
            exempt_income: round_to_units(exempt),
            calculation_method: CalculationMethod::Simple,
            assumptions,
        }
    }
}

/// Computes CPF contributions using the 2025 parameters.
pub fn compute_cpf(
    annual_income: Decimal,
    is_resident_eligible: bool,
) -> CpfResult {
    CpfCalculator::ya2025().calculate(annual_income, is_resident_eligible)
}
