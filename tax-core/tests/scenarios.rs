//! End-to-end scenarios over the built-in YA 2025 tables.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::{CalculationMethod, compose_summary, compute_cpf, compute_tax};

#[test]
fn zero_income_has_no_tax_cpf_or_take_home() {
    let summary = compose_summary(dec!(0), true);

    assert_eq!(summary.tax.net_tax, dec!(0));
    assert_eq!(summary.cpf.result.total_contribution, dec!(0));
    assert_eq!(summary.final_take_home, dec!(0));
}

#[test]
fn income_25000_rebate_below_cap() {
    let tax = compute_tax(dec!(25000));

    assert_eq!(tax.gross_tax, dec!(100));
    assert_eq!(tax.rebate, dec!(60));
    assert_eq!(tax.net_tax, dec!(40));
}

#[test]
fn income_80000_tax_and_cpf() {
    let tax = compute_tax(dec!(80000));
    let cpf = compute_cpf(dec!(80000), true);

    assert_eq!(tax.gross_tax, dec!(3350));
    assert_eq!(tax.rebate, dec!(200));
    assert_eq!(tax.net_tax, dec!(3150));
    assert_eq!(cpf.cpf_subject_income, dec!(80000));
    assert_eq!(cpf.employee_contribution, dec!(16000));
    assert_eq!(cpf.employer_contribution, dec!(13600));
    assert_eq!(cpf.calculation_method, CalculationMethod::Simple);
}

#[test]
fn income_150000_hits_cpf_ceiling_branch() {
    let cpf = compute_cpf(dec!(150000), true);

    assert_eq!(cpf.cpf_subject_income, dec!(102000));
    assert_eq!(cpf.exempt_income, dec!(48000));
}

#[test]
fn income_1500000_uses_unbounded_top_bracket() {
    let tax = compute_tax(dec!(1500000));

    assert_eq!(tax.gross_tax, dec!(319150));
    assert_eq!(tax.rebate, dec!(200));
    assert_eq!(tax.net_tax, dec!(318950));
}

#[test]
fn summary_serializes_to_json() {
    let summary = compose_summary(dec!(80000), true);

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["final_take_home"], "60850");
    assert_eq!(json["cpf"]["employee_contribution"], "16000");
    assert_eq!(json["cpf"]["monthly"]["employee_contribution"], "1333");
    assert_eq!(json["cpf"]["calculation_method"], "simple");
    assert_eq!(json["cpf"]["assumptions"][0]["kind"], "full_year_employment");
}
