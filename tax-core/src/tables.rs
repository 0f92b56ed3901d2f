//! Rate tables for Year of Assessment 2025.
//!
//! The tables are fixed at compile time. [`validate_ya2025`] checks them
//! once at startup; the calculators trust whatever table they are given.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CpfConfig, CpfConfigError, RebatePolicy, TaxBracket};

/// Problems found in a bracket schedule or CPF table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("tax schedule has no brackets")]
    Empty,

    #[error("first bracket must start at 0, starts at {0}")]
    FirstLowerBoundNotZero(Decimal),

    #[error("bracket {index} starts at {found} but the previous bracket ends at {expected}")]
    Gap {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {index} has an upper bound {upper} not above its lower bound {lower}")]
    InvertedBounds {
        index: usize,
        lower: Decimal,
        upper: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd(usize),

    #[error("last bracket must be unbounded")]
    TopBracketBounded,

    #[error("bracket {index} has rate {rate} outside 0..=1")]
    InvalidRate { index: usize, rate: Decimal },

    #[error("bracket {index} base tax is {found}, expected {expected}")]
    BaseTaxMismatch {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error(transparent)]
    Cpf(#[from] CpfConfigError),
}

/// Resident individual income tax schedule, YA 2025.
pub static TAX_BRACKETS_YA2025: [TaxBracket; 13] = [
    bracket(0, Some(20000), 0, 0),
    bracket(20000, Some(30000), 20, 0),
    bracket(30000, Some(40000), 35, 200),
    bracket(40000, Some(80000), 70, 550),
    bracket(80000, Some(120000), 115, 3350),
    bracket(120000, Some(160000), 150, 7950),
    bracket(160000, Some(200000), 180, 13950),
    bracket(200000, Some(240000), 190, 21150),
    bracket(240000, Some(280000), 195, 28750),
    bracket(280000, Some(320000), 200, 36550),
    bracket(320000, Some(500000), 220, 44550),
    bracket(500000, Some(1000000), 230, 84150),
    bracket(1000000, None, 240, 199150),
];

/// Personal income tax rebate for YA 2025: 60% of tax, at most $200.
pub const REBATE_YA2025: RebatePolicy = RebatePolicy {
    rate: Decimal::from_parts(60, 0, 0, false, 2),
    cap: Decimal::from_parts(200, 0, 0, false, 0),
};

/// CPF parameters for 2025, full-rate class aged 55 and below.
pub const CPF_YA2025: CpfConfig = CpfConfig {
    ow_monthly_ceiling: Decimal::from_parts(7400, 0, 0, false, 0),
    annual_salary_ceiling: Decimal::from_parts(102000, 0, 0, false, 0),
    employee_rate: Decimal::from_parts(20, 0, 0, false, 2),
    employer_rate: Decimal::from_parts(17, 0, 0, false, 2),
    regular_wage_share: Decimal::from_parts(8, 0, 0, false, 1),
    advanced_threshold_share: Decimal::from_parts(9, 0, 0, false, 1),
};

/// Builds a bracket from whole-dollar bounds and a rate in tenths of a percent.
const fn bracket(
    lower: u32,
    upper: Option<u32>,
    rate_per_mille: u32,
    base_tax: u32,
) -> TaxBracket {
    let upper_bound = match upper {
        Some(upper) => Some(Decimal::from_parts(upper, 0, 0, false, 0)),
        None => None,
    };
    TaxBracket::new(
        Decimal::from_parts(lower, 0, 0, false, 0),
        upper_bound,
        Decimal::from_parts(rate_per_mille, 0, 0, false, 3),
        Decimal::from_parts(base_tax, 0, 0, false, 0),
    )
}

/// Checks a bracket schedule is usable by the tax calculator.
///
/// The schedule must start at zero, be sorted and contiguous, end with a
/// single unbounded bracket, keep rates within 0..=1, and carry base amounts
/// equal to the tax accumulated at each bracket's lower bound.
///
/// # Errors
///
/// Returns the first [`TableError`] found, scanning from the bottom bracket.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), TableError> {
    let Some(first) = brackets.first() else {
        return Err(TableError::Empty);
    };
    if first.lower_bound != Decimal::ZERO {
        return Err(TableError::FirstLowerBoundNotZero(first.lower_bound));
    }
    if first.base_tax != Decimal::ZERO {
        return Err(TableError::BaseTaxMismatch {
            index: 0,
            expected: Decimal::ZERO,
            found: first.base_tax,
        });
    }

    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.marginal_rate < Decimal::ZERO || bracket.marginal_rate > Decimal::ONE {
            return Err(TableError::InvalidRate {
                index,
                rate: bracket.marginal_rate,
            });
        }

        match bracket.upper_bound {
            Some(upper) if upper <= bracket.lower_bound => {
                return Err(TableError::InvertedBounds {
                    index,
                    lower: bracket.lower_bound,
                    upper,
                });
            }
            Some(_) if index == last_index => return Err(TableError::TopBracketBounded),
            None if index != last_index => return Err(TableError::UnboundedBeforeEnd(index)),
            _ => {}
        }

        if index == 0 {
            continue;
        }
        let previous = &brackets[index - 1];
        // Checked above: only the last bracket may be unbounded.
        let Some(previous_upper) = previous.upper_bound else {
            return Err(TableError::UnboundedBeforeEnd(index - 1));
        };
        if bracket.lower_bound != previous_upper {
            return Err(TableError::Gap {
                index,
                expected: previous_upper,
                found: bracket.lower_bound,
            });
        }
        let expected = previous.tax_at(previous_upper);
        if bracket.base_tax != expected {
            return Err(TableError::BaseTaxMismatch {
                index,
                expected,
                found: bracket.base_tax,
            });
        }
    }

    Ok(())
}

/// Validates the built-in YA 2025 tax schedule and CPF parameters.
///
/// # Errors
///
/// Returns a [`TableError`] describing the first broken rule.
pub fn validate_ya2025() -> Result<(), TableError> {
    validate_brackets(&TAX_BRACKETS_YA2025)?;
    CPF_YA2025.validate()?;
    Ok(())
}
