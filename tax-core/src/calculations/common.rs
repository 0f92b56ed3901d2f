//! Rounding and comparison helpers shared by the calculators.
//!
//! Engines keep exact values internally and round only where a figure is
//! published: whole dollars for money, one decimal place for percentages.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to whole dollars, halves away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_units;
///
/// assert_eq!(round_to_units(dec!(1333.33)), dec!(1333));
/// assert_eq!(round_to_units(dec!(1333.5)), dec!(1334));
/// assert_eq!(round_to_units(dec!(-2.5)), dec!(-3)); // Away from zero
/// ```
pub fn round_to_units(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to one decimal place, halves away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(76.0625)), dec!(76.1));
/// assert_eq!(round_rate(dec!(3.94)), dec!(3.9));
/// ```
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// `part` as a percentage of `whole`, or zero when `whole` is not positive.
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part / whole * Decimal::ONE_HUNDRED
}
