use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a [`CpfConfig`] holds values outside their valid range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpfConfigError {
    /// The employee contribution rate must be between 0 and 1.
    #[error("employee contribution rate must be between 0 and 1, got {0}")]
    InvalidEmployeeRate(Decimal),

    /// The employer contribution rate must be between 0 and 1.
    #[error("employer contribution rate must be between 0 and 1, got {0}")]
    InvalidEmployerRate(Decimal),

    /// The ordinary wage ceiling must be positive.
    #[error("monthly ordinary wage ceiling must be positive, got {0}")]
    InvalidMonthlyCeiling(Decimal),

    /// The annual salary ceiling must be positive.
    #[error("annual salary ceiling must be positive, got {0}")]
    InvalidAnnualCeiling(Decimal),

    /// The regular wage share must be in (0, 1].
    #[error("regular wage share must be between 0 (exclusive) and 1, got {0}")]
    InvalidRegularWageShare(Decimal),

    /// The advanced-calculation threshold share must be in (0, 1].
    #[error("advanced threshold share must be between 0 (exclusive) and 1, got {0}")]
    InvalidAdvancedThresholdShare(Decimal),
}

/// CPF contribution parameters for one contribution year and eligibility class.
///
/// Only the full-rate class (citizens and permanent residents past their
/// first two years, aged 55 and below) is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpfConfig {
    /// Ordinary wage ceiling per month.
    pub ow_monthly_ceiling: Decimal,

    /// Annual ceiling on ordinary plus additional wages.
    pub annual_salary_ceiling: Decimal,

    /// Employee share of contributions.
    pub employee_rate: Decimal,

    /// Employer share of contributions.
    pub employer_rate: Decimal,

    /// Portion of annual income assumed to be paid as regular monthly wage.
    /// The remainder is treated as a year-end additional wage.
    pub regular_wage_share: Decimal,

    /// Fraction of the monthly ceiling above which a month-by-month
    /// calculation would give a noticeably different answer.
    pub advanced_threshold_share: Decimal,
}

impl CpfConfig {
    /// Combined employee and employer rate.
    pub fn total_rate(&self) -> Decimal {
        self.employee_rate + self.employer_rate
    }

    /// Checks every field is inside its valid range.
    ///
    /// # Errors
    ///
    /// Returns the first [`CpfConfigError`] found.
    pub fn validate(&self) -> Result<(), CpfConfigError> {
        if !is_fraction(self.employee_rate) {
            return Err(CpfConfigError::InvalidEmployeeRate(self.employee_rate));
        }
        if !is_fraction(self.employer_rate) {
            return Err(CpfConfigError::InvalidEmployerRate(self.employer_rate));
        }
        if self.ow_monthly_ceiling <= Decimal::ZERO {
            return Err(CpfConfigError::InvalidMonthlyCeiling(
                self.ow_monthly_ceiling,
            ));
        }
        if self.annual_salary_ceiling <= Decimal::ZERO {
            return Err(CpfConfigError::InvalidAnnualCeiling(
                self.annual_salary_ceiling,
            ));
        }
        if self.regular_wage_share <= Decimal::ZERO || self.regular_wage_share > Decimal::ONE {
            return Err(CpfConfigError::InvalidRegularWageShare(
                self.regular_wage_share,
            ));
        }
        if self.advanced_threshold_share <= Decimal::ZERO
            || self.advanced_threshold_share > Decimal::ONE
        {
            return Err(CpfConfigError::InvalidAdvancedThresholdShare(
                self.advanced_threshold_share,
            ));
        }
        Ok(())
    }
}

fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}
