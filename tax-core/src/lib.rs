//! Singapore resident income tax and CPF estimates from one annual income.
//!
//! The three entry points are [`compute_tax`], [`compute_cpf`] and
//! [`compose_summary`]. All of them are total: any income, including zero
//! or negative values, produces a result.

pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{compose_summary, compute_cpf, compute_tax};
pub use models::*;
pub use tables::{TableError, validate_ya2025};
