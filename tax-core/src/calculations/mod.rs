//! Income tax, CPF and take-home calculations.
//!
//! Every calculator here is a pure function of its inputs and the table it
//! was built with. The free functions use the built-in YA 2025 tables.

pub mod common;
pub mod cpf;
pub mod income_tax;
pub mod summary;

pub use cpf::{CpfCalculator, compute_cpf};
pub use income_tax::{IncomeTaxCalculator, compute_tax};
pub use summary::{SummaryComposer, compose_summary};
