//! Field validation for quotely.
//!
//! Every field of a given kind is checked by the same function here, whether the
//! value arrives as command-line text (`parse_*`) or as a number already held by
//! the model (`check_*`, used when constructing items and re-validating loaded data).
//!
//! | Field               | Rule                                            |
//! |---------------------|-------------------------------------------------|
//! | item / quote name   | 1..=30 chars, ASCII letters, digits and spaces  |
//! | customer / company  | non-empty                                       |
//! | price               | decimal, `0 < p < 10000`, two decimals          |
//! | quantity            | integer, `1 <= q <= 999`                        |
//! | tax rate            | decimal, `0 <= t <= 200`, one decimal           |

use crate::error::{QuotelyError, Result};

pub const MAX_NAME_LENGTH: usize = 30;
pub const MAX_ITEMS_PER_QUOTE: usize = 30;
pub const MAX_QUANTITY: u32 = 999;
pub const MAX_PRICE: f64 = 10_000.0;
pub const MAX_TAX_RATE: f64 = 200.0;

/// Validates an item or quote name, returning it trimmed.
///
/// # Examples
/// ```
/// use quotely::validation::validate_name;
///
/// assert_eq!(validate_name("item name", " Item 1 ").unwrap(), "Item 1");
/// assert!(validate_name("item name", "").is_err());
/// assert!(validate_name("item name", "bad!name").is_err());
/// ```
pub fn validate_name(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    let invalid = |reason| QuotelyError::InvalidName {
        field,
        value: trimmed.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("cannot be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid("must be at most 30 characters"));
    }
    if !trimmed.chars().all(is_valid_name_char) {
        return Err(invalid("only letters, digits and spaces are allowed"));
    }

    Ok(trimmed.to_string())
}

/// Validates free text such as a customer or company name, returning it trimmed.
pub fn validate_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(QuotelyError::InvalidName {
            field,
            value: String::new(),
            reason: "cannot be empty",
        });
    }
    Ok(trimmed.to_string())
}

fn is_valid_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ' '
}

pub fn parse_price(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    let value = parse_decimal(raw).ok_or_else(|| QuotelyError::InvalidPrice(raw.to_string()))?;
    check_price(value)
}

/// Range-checks a price and rounds it to cents.
pub fn check_price(value: f64) -> Result<f64> {
    let rounded = round_to(value, 2);
    let in_range = |v: f64| v > 0.0 && v < MAX_PRICE;
    if value.is_finite() && in_range(value) && in_range(rounded) {
        Ok(rounded)
    } else {
        Err(QuotelyError::InvalidPrice(value.to_string()))
    }
}

pub fn parse_quantity(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let value: i64 = raw
        .parse()
        .map_err(|_| QuotelyError::InvalidQuantity(raw.to_string()))?;
    u32::try_from(value)
        .map_err(|_| QuotelyError::InvalidQuantity(raw.to_string()))
        .and_then(check_quantity)
}

pub fn check_quantity(value: u32) -> Result<u32> {
    if (1..=MAX_QUANTITY).contains(&value) {
        Ok(value)
    } else {
        Err(QuotelyError::InvalidQuantity(value.to_string()))
    }
}

pub fn parse_tax_rate(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    let value =
        parse_decimal(raw).ok_or_else(|| QuotelyError::InvalidTaxRate(raw.to_string()))?;
    check_tax_rate(value)
}

/// Range-checks a tax rate percentage and rounds it to one decimal.
pub fn check_tax_rate(value: f64) -> Result<f64> {
    let rounded = round_to(value, 1);
    let in_range = |v: f64| (0.0..=MAX_TAX_RATE).contains(&v);
    if value.is_finite() && in_range(value) && in_range(rounded) {
        Ok(rounded)
    } else {
        Err(QuotelyError::InvalidTaxRate(value.to_string()))
    }
}

/// Strict decimal parsing: optional sign, digits, at most one dot.
/// Rejects exponents, `inf`, `NaN` and anything `f64::from_str` would otherwise accept.
fn parse_decimal(raw: &str) -> Option<f64> {
    let unsigned = raw.strip_prefix(|c| c == '+' || c == '-').unwrap_or(raw);
    let (whole, frac) = match unsigned.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !frac.map_or(true, all_digits) {
        return None;
    }
    if whole.is_empty() && frac.map_or(true, str::is_empty) {
        return None;
    }

    raw.parse::<f64>().ok()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_with_spaces_and_digits() {
        assert_eq!(validate_name("item name", "Item 1").unwrap(), "Item 1");
        assert_eq!(validate_name("quote name", "  quote 1 ").unwrap(), "quote 1");
        assert!(validate_name("item name", &"a".repeat(30)).is_ok());
    }

    #[test]
    fn rejects_bad_names() {
        assert!(matches!(
            validate_name("item name", "   "),
            Err(QuotelyError::InvalidName { .. })
        ));
        assert!(validate_name("item name", &"a".repeat(31)).is_err());
        assert!(validate_name("item name", "!nv@l!#$%Name").is_err());
        assert!(validate_name("item name", "Item-1").is_err());
    }

    #[test]
    fn text_only_needs_content() {
        assert_eq!(validate_text("customer name", " ACME, Inc. ").unwrap(), "ACME, Inc.");
        assert!(validate_text("customer name", "  ").is_err());
    }

    #[test]
    fn price_bounds() {
        assert_eq!(parse_price("10.0").unwrap(), 10.0);
        assert_eq!(parse_price("9999.99").unwrap(), 9999.99);
        assert_eq!(parse_price("0.01").unwrap(), 0.01);
        assert_eq!(parse_price("1.234").unwrap(), 1.23);
        for bad in ["0", "-20", "-0.3", "10000", "10000.00", "9999.999", "0.001"] {
            assert!(
                matches!(parse_price(bad), Err(QuotelyError::InvalidPrice(_))),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn price_must_be_numeric() {
        for bad in ["invalidprice", "", "1e3", "inf", "NaN", "1.2.3", ".", "12abc"] {
            assert!(
                matches!(parse_price(bad), Err(QuotelyError::InvalidPrice(_))),
                "expected {bad} to be rejected"
            );
        }
        assert_eq!(parse_price(".5").unwrap(), 0.5);
    }

    #[test]
    fn quantity_is_a_strict_integer() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity("999").unwrap(), 999);
        for bad in ["0", "1000", "-10", "2.5", "two", ""] {
            assert!(
                matches!(parse_quantity(bad), Err(QuotelyError::InvalidQuantity(_))),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn tax_rate_bounds() {
        assert_eq!(parse_tax_rate("0").unwrap(), 0.0);
        assert_eq!(parse_tax_rate("200").unwrap(), 200.0);
        assert_eq!(parse_tax_rate("10.00").unwrap(), 10.0);
        assert_eq!(parse_tax_rate("7.25").unwrap(), 7.3);
        for bad in ["-1", "200.1", "abc", "-0.01"] {
            assert!(
                matches!(parse_tax_rate(bad), Err(QuotelyError::InvalidTaxRate(_))),
                "expected {bad} to be rejected"
            );
        }
    }
}
