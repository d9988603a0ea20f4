use std::borrow::Cow;

/// Format a rupee amount with Indian-locale digit grouping and two fraction
/// digits, e.g. `5000000.0` -> `₹50,00,000.00`.
///
/// Indian grouping places the last three digits together and pairs of digits
/// before that.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!("{}₹{}.{}", sign, group_indian_digits(int_part), frac_part)
}

fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Format a ratio already expressed in percent with one decimal place.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Shorten a message for single-line display, keeping character boundaries
/// intact.
pub fn truncate_message(message: &str, max_chars: usize) -> Cow<'_, str> {
    if message.chars().count() <= max_chars {
        Cow::Borrowed(message)
    } else {
        let cut: String = message.chars().take(max_chars).collect();
        Cow::Owned(format!("{}...", cut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_small_amount() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
    }

    #[test]
    fn test_format_inr_thousands() {
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(40000.0), "₹40,000.00");
    }

    #[test]
    fn test_format_inr_lakhs() {
        assert_eq!(format_inr(100000.0), "₹1,00,000.00");
        assert_eq!(format_inr(418250.75), "₹4,18,250.75");
    }

    #[test]
    fn test_format_inr_starting_balance() {
        // Fifty lakhs, the generator's starting balance.
        assert_eq!(format_inr(5000000.0), "₹50,00,000.00");
    }

    #[test]
    fn test_format_inr_crores() {
        assert_eq!(format_inr(123456789.5), "₹12,34,56,789.50");
    }

    #[test]
    fn test_format_inr_negative() {
        assert_eq!(format_inr(-1234.5), "-₹1,234.50");
    }

    #[test]
    fn test_format_inr_rounds_fraction() {
        assert_eq!(format_inr(18250.756), "₹18,250.76");
    }

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(format_percent(2.5), "2.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(33.333), "33.3%");
    }

    #[test]
    fn test_truncate_message_short_passthrough() {
        assert_eq!(truncate_message("short", 40), "short");
    }

    #[test]
    fn test_truncate_message_long() {
        let long = "a".repeat(60);
        let shown = truncate_message(&long, 40);
        assert_eq!(shown.len(), 43);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_truncate_message_multibyte_safe() {
        let msg = "₹₹₹₹₹₹";
        assert_eq!(truncate_message(msg, 3).as_ref(), "₹₹₹...");
    }
}
