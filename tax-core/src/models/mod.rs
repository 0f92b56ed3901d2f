mod cpf_config;
mod cpf_result;
mod rebate_policy;
mod summary;
mod tax_bracket;
mod tax_result;

pub use cpf_config::{CpfConfig, CpfConfigError};
pub use cpf_result::{CalculationMethod, CpfAssumption, CpfResult, CpfSummary, MonthlyBreakdown};
pub use rebate_policy::RebatePolicy;
pub use summary::ComprehensiveSummary;
pub use tax_bracket::TaxBracket;
pub use tax_result::TaxResult;
