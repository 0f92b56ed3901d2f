use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Error returned when income text cannot be parsed as a [`Decimal`].
#[derive(Debug, Error, PartialEq)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Trims whitespace, drops a leading `S$` or `$` and removes thousands separators.
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let without_symbol = trimmed
        .strip_prefix("S$")
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed);
    without_symbol.trim_start().replace(',', "")
}

/// Parses an amount such as `"S$80,000"` or `"1234.50"`.
///
/// Empty or whitespace-only input is 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseAmountError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses income text, treating anything unparseable as 0.
///
/// Invalid input is logged rather than reported to the caller.
pub fn parse_income(s: &str) -> Decimal {
    parse_amount(s).unwrap_or_else(|e| {
        warn!(input = %s, error = %e, "invalid income; using 0");
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    #[test]
    fn parse_amount_accepts_thousands_separator_and_symbol() {
        assert_eq!(parse_amount("80,000"), Ok(dec!(80000)));
        assert_eq!(parse_amount("S$1,234.56"), Ok(dec!(1234.56)));
        assert_eq!(parse_amount(" $ 150000 "), Ok(dec!(150000)));
    }

    #[test]
    fn parse_amount_empty_is_zero() {
        assert_eq!(parse_amount(""), Ok(Decimal::ZERO));
        assert_eq!(parse_amount("   "), Ok(Decimal::ZERO));
    }

    #[test]
    fn parse_amount_rejects_text() {
        assert!(parse_amount("eighty thousand").is_err());
    }

    #[test]
    fn parse_income_falls_back_to_zero() {
        let _guard = init_test_tracing();
        assert_eq!(parse_income("abc"), Decimal::ZERO);
        assert_eq!(parse_income("12..5"), Decimal::ZERO);
    }

    #[test]
    fn parse_income_keeps_negative_values() {
        assert_eq!(parse_income("-5000"), dec!(-5000));
    }
}
