//! Money amount formatting and the matching input parser.

/// Group the decimal digits of `amount` in threes from the right, separated
/// by single spaces (`5500000` → `"5 500 000"`).
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Formatted amount followed by the currency suffix (`"800 000 so'm"`).
/// An empty suffix yields the bare grouped number.
pub fn format_money(amount: u64, currency: &str) -> String {
    let grouped = format_amount(amount);
    if currency.is_empty() {
        grouped
    } else {
        format!("{grouped} {currency}")
    }
}

/// Parse an amount typed into a masked money field.
///
/// Whitespace anywhere is ignored, so grouped input like `"5 500 000"` is
/// accepted. Anything but ASCII digits (signs included) is rejected, as is
/// a value that overflows `u64`.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() || !compact.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    compact.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_millions() {
        assert_eq!(format_amount(5_500_000), "5 500 000");
    }

    #[test]
    fn groups_exact_thousands() {
        assert_eq!(format_amount(800_000), "800 000");
        assert_eq!(format_amount(1_000), "1 000");
    }

    #[test]
    fn leaves_small_values_alone() {
        assert_eq!(format_amount(99), "99");
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
    }

    #[test]
    fn formats_u64_max() {
        assert_eq!(format_amount(u64::MAX), "18 446 744 073 709 551 615");
    }

    #[test]
    fn money_appends_currency() {
        assert_eq!(format_money(3_200_000, "so'm"), "3 200 000 so'm");
        assert_eq!(format_money(650_000, ""), "650 000");
    }

    #[test]
    fn parses_masked_input() {
        assert_eq!(parse_amount("5 500 000"), Some(5_500_000));
        assert_eq!(parse_amount(" 42 "), Some(42));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("12a"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("+5"), None);
        assert_eq!(parse_amount("99999999999999999999999"), None);
    }

    #[test]
    fn parse_accepts_what_format_produces() {
        for amount in [0, 7, 1_234, 5_500_000, u64::MAX] {
            assert_eq!(parse_amount(&format_amount(amount)), Some(amount));
        }
    }
}
