use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the contribution figures were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// Estimated from a single annual income figure.
    #[default]
    Simple,
    /// Month-by-month wage ledger. Reserved; nothing produces it yet.
    Advanced,
}

/// Assumptions behind a simple CPF estimate, for display next to the figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CpfAssumption {
    /// Employed for the whole year.
    FullYearEmployment,
    /// Income spread evenly over the months.
    AverageMonthlyDistribution,
    /// 80% of income is monthly wage, 20% a year-end bonus.
    EightyTwentyWageSplit,
    /// Contribution rates for employees aged 55 and below.
    UnderFiftyFiveRates,
    /// The estimated monthly wage is above the ordinary wage ceiling.
    MonthlyCeilingExceeded { ceiling: Decimal },
}

/// Annual CPF contributions. Every amount is rounded to whole dollars on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpfResult {
    pub total_contribution: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,

    /// Income that attracts contributions after the wage ceilings.
    pub cpf_subject_income: Decimal,

    /// Income above the ceilings that attracts no contributions.
    pub exempt_income: Decimal,

    pub calculation_method: CalculationMethod,

    pub assumptions: Vec<CpfAssumption>,
}

impl CpfResult {
    /// Result for an ineligible person or a non-positive income.
    pub fn empty() -> Self {
        Self {
            total_contribution: Decimal::ZERO,
            employee_contribution: Decimal::ZERO,
            employer_contribution: Decimal::ZERO,
            cpf_subject_income: Decimal::ZERO,
            exempt_income: Decimal::ZERO,
            calculation_method: CalculationMethod::Simple,
            assumptions: Vec::new(),
        }
    }
}

/// Annual contributions divided into twelve equal months, rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
    pub total_contribution: Decimal,
}

/// A [`CpfResult`] together with its monthly view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpfSummary {
    #[serde(flatten)]
    pub result: CpfResult,
    pub monthly: MonthlyBreakdown,
}
