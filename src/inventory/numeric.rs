//! Numeric coercion rules for free-text inventory fields.
//!
//! Fields are compared and highlighted by the first run of ASCII digits they
//! contain, optionally followed by a single fractional part (`12`, `3.5`).
//! Anything before or after that run is ignored, so `"10 units"` reads as 10
//! and `"approx. 4.25kg"` as 4.25.

/// First numeric run in `text`, or `None` when it contains no digits.
pub fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    // A fraction only counts when at least one digit follows the point.
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    text[start..end].parse().ok()
}

/// Sort value of a field: its first numeric run, or 0 when there is none.
pub fn extract_leading_number(text: &str) -> f64 {
    leading_number(text).unwrap_or(0.0)
}

/// Whether a quantity should be flagged as running low.
///
/// Quantities without any digits are never flagged.
pub fn is_low_stock(quantity: &str, threshold: u32) -> bool {
    leading_number(quantity).is_some_and(|value| value < f64::from(threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(extract_leading_number("15"), 15.0);
        assert_eq!(extract_leading_number("0"), 0.0);
    }

    #[test]
    fn skips_leading_text() {
        assert_eq!(extract_leading_number("about 42 pcs"), 42.0);
        assert_eq!(extract_leading_number("x9"), 9.0);
    }

    #[test]
    fn takes_one_fractional_part() {
        assert_eq!(extract_leading_number("3.25kg"), 3.25);
        assert_eq!(extract_leading_number("1.2.3"), 1.2);
    }

    #[test]
    fn dangling_point_is_not_a_fraction() {
        assert_eq!(extract_leading_number("7."), 7.0);
        assert_eq!(extract_leading_number("7.x"), 7.0);
        assert_eq!(extract_leading_number(".5"), 5.0);
    }

    #[test]
    fn no_digits_is_zero() {
        assert_eq!(extract_leading_number(""), 0.0);
        assert_eq!(extract_leading_number("Electronics"), 0.0);
        assert_eq!(leading_number("plenty"), None);
    }

    #[test]
    fn only_ascii_digits_count() {
        assert_eq!(leading_number("٣"), None);
    }

    #[test]
    fn low_stock_boundary() {
        assert!(is_low_stock("9", 10));
        assert!(!is_low_stock("10", 10));
        assert!(!is_low_stock("10 units", 10));
        assert!(is_low_stock("9.99", 10));
    }

    #[test]
    fn quantity_without_digits_is_not_low_stock() {
        assert!(!is_low_stock("", 10));
        assert!(!is_low_stock("out", 10));
    }
}
