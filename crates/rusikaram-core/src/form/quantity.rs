//! Lenient parsing of the per-item quantity field.

/// Parses a quantity the way a number field is read back: leading
/// whitespace, an optional sign, then as many digits as are present.
/// Trailing text is ignored (`"3 packs"` is 3, `"3.7"` is 3).
///
/// Empty, non-numeric, negative and out-of-range input all resolve to 0.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() || negative {
        return 0;
    }

    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_quantity("0"), 0);
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity("007"), 7);
    }

    #[test]
    fn test_empty_and_garbage_resolve_to_zero() {
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("   "), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("-"), 0);
        assert_eq!(parse_quantity("x3"), 0);
    }

    #[test]
    fn test_leading_integer_is_taken() {
        assert_eq!(parse_quantity("  4"), 4);
        assert_eq!(parse_quantity("3 packs"), 3);
        assert_eq!(parse_quantity("3.7"), 3);
        assert_eq!(parse_quantity("+5"), 5);
    }

    #[test]
    fn test_negative_resolves_to_zero() {
        assert_eq!(parse_quantity("-2"), 0);
        assert_eq!(parse_quantity("-0"), 0);
    }

    #[test]
    fn test_overflow_resolves_to_zero() {
        assert_eq!(parse_quantity("99999999999999999999"), 0);
    }
}
