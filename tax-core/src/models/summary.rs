use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CpfSummary, TaxResult};

/// Income tax and CPF combined into the take-home figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensiveSummary {
    pub annual_income: Decimal,
    pub is_resident_eligible: bool,
    pub tax: TaxResult,
    pub cpf: CpfSummary,

    /// Income less net tax and the employee CPF contribution, whole dollars.
    pub final_take_home: Decimal,

    /// Net tax plus the employee CPF contribution, whole dollars.
    pub total_deductions: Decimal,

    /// Take-home as a percentage of income, one decimal place.
    pub effective_take_home_rate: Decimal,
}
