// Locale-aware display formatting
use chrono::{DateTime, NaiveDate};

/// Format an amount as "Rs. 1,23,456.78": two decimals, en-IN digit
/// grouping (last three digits, then groups of two).
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = group_indian(int_part);
    if negative {
        format!("Rs. -{grouped}.{frac_part}")
    } else {
        format!("Rs. {grouped}.{frac_part}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// "2024-01-12" (or an RFC 3339 timestamp) -> "12 Jan 2024". Unparseable
/// input is returned unchanged; a formatter should not fail a render.
pub fn format_date(input: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return timestamp.format("%-d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.format("%-d %b %Y").to_string();
    }
    input.to_string()
}

/// One decimal place plus the percent sign.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_small_amount() {
        assert_eq!(format_currency(1234.5), "Rs. 1,234.50");
        assert_eq!(format_currency(0.0), "Rs. 0.00");
        assert_eq!(format_currency(999.0), "Rs. 999.00");
    }

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(123456.789), "Rs. 1,23,456.79");
        assert_eq!(format_currency(12345678.9), "Rs. 1,23,45,678.90");
        assert_eq!(format_currency(100000.0), "Rs. 1,00,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1500.0), "Rs. -1,500.00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-12"), "12 Jan 2024");
        assert_eq!(format_date("2024-01-12T09:30:00+05:30"), "12 Jan 2024");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(format_percent(87.0), "87.0%");
        assert_eq!(format_percent(66.666), "66.7%");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 50), "short");
        let long = "a".repeat(60);
        let truncated = truncate_text(&long, 50);
        assert_eq!(truncated.len(), 53);
        assert!(truncated.ends_with("..."));
    }
}
