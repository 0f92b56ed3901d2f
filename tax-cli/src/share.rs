//! Shareable links that carry the income in an `income` query parameter.

use rust_decimal::Decimal;

const INCOME_PARAM: &str = "income";

/// Returns `base` with the `income` parameter set to `income`, or removed
/// when `income` is not positive. An existing `income` is replaced where it
/// stands, otherwise the parameter is appended. Other parameters and any
/// fragment are kept.
pub fn share_url(
    base: &str,
    income: Decimal,
) -> String {
    let (without_fragment, fragment) = match base.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (base, None),
    };
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    };

    let income_pair =
        (income > Decimal::ZERO).then(|| format!("{INCOME_PARAM}={}", income.normalize()));
    let mut replaced = false;
    let mut pairs: Vec<&str> = Vec::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        if param_name(pair) != INCOME_PARAM {
            pairs.push(pair);
        } else if !replaced {
            // The first income pair keeps its position; later ones are dropped.
            replaced = true;
            pairs.extend(income_pair.as_deref());
        }
    }
    if !replaced {
        pairs.extend(income_pair.as_deref());
    }

    let mut url = path.to_string();
    if !pairs.is_empty() {
        url.push('?');
        url.push_str(&pairs.join("&"));
    }
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// Reads the `income` parameter from a query string or a full URL.
///
/// Returns `None` unless the value parses to a positive amount.
pub fn income_from_query(query: &str) -> Option<Decimal> {
    let query = query.split_once('#').map_or(query, |(head, _)| head);
    let query = query.split_once('?').map_or(query, |(_, q)| q);

    query
        .split('&')
        .find(|pair| param_name(pair) == INCOME_PARAM)
        .and_then(|pair| pair.split_once('='))
        // Plain decimals only: exponents and trailing text are rejected.
        .and_then(|(_, value)| value.trim().parse::<Decimal>().ok())
        .filter(|income| *income > Decimal::ZERO)
}

fn param_name(pair: &str) -> &str {
    pair.split_once('=').map_or(pair, |(name, _)| name)
}
