//! Formatting helpers shared by the terminal views

use crate::models::Money;

/// Format an engine amount with the given currency symbol
pub fn format_amount(amount: f64, symbol: &str) -> String {
    Money::from_amount(amount).format_with_symbol(symbol)
}

/// Format an amount that is only shown when non-zero (ledger columns)
pub fn format_optional_amount(amount: f64, symbol: &str) -> String {
    if Money::from_amount(amount).cents() == 0 {
        String::new()
    } else {
        format_amount(amount, symbol)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_rounds_to_cents() {
        assert_eq!(format_amount(7.499, "$"), "$7.50");
        assert_eq!(format_amount(-400.0, "€"), "-€400.00");
    }

    #[test]
    fn test_optional_amount_blank_for_zero() {
        assert_eq!(format_optional_amount(0.0, "$"), "");
        assert_eq!(format_optional_amount(0.001, "$"), "");
        assert_eq!(format_optional_amount(12.0, "$"), "$12.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Long", 2), "..");
    }

    #[test]
    fn test_separators() {
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(2), "══");
    }
}
