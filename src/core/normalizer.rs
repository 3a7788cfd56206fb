//! Amount normalization.
//!
//! Commas are always thousands separators here. A fragment written with a
//! decimal comma ("1.234,50") is misparsed; that convention never shows up in
//! the chips this tool reads.

/// Keep only ASCII digits and `.`.
pub fn normalize_amount(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parse the numeric part of a fragment. Missing, malformed and zero amounts
/// all come back as `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    normalize_amount(text)
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_symbols_and_separators() {
        assert_eq!(normalize_amount("HK$2,000.00"), "2000.00");
        assert_eq!(normalize_amount("MYR 479.90"), "479.90");
        assert_eq!(normalize_amount("￦79,000"), "79000");
        assert_eq!(normalize_amount("\u{a0}$5\u{a0}"), "5");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for already in ["2000.00", "479.90", "79000", ".5", ""] {
            assert_eq!(normalize_amount(already), already);
            assert_eq!(normalize_amount(&normalize_amount(already)), already);
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("HK$2,000.00"), Some(2000.0));
        assert_eq!(parse_amount("SGD 19.98"), Some(19.98));
        assert_eq!(parse_amount("AU$500"), Some(500.0));
    }

    #[test]
    fn test_zero_is_discarded() {
        assert_eq!(parse_amount("$0.00"), None);
        assert_eq!(parse_amount("0"), None);
    }

    #[test]
    fn test_unparsable_is_discarded() {
        assert_eq!(parse_amount("???"), None);
        assert_eq!(parse_amount("€"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn test_decimal_comma_is_read_as_thousands() {
        assert_eq!(parse_amount("€1.234,50"), Some(1.2345));
        assert_eq!(parse_amount("€12,50"), Some(1250.0));
    }
}
