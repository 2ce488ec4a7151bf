//! Common utilities
//!
//! Shared formatting helpers used by the context builder and CLI output.

/// Format a numeric amount as currency with thousands separators and no
/// decimal places, e.g. `12345.6` -> `"$12,346"`, `-1200.0` -> `"-$1,200"`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Turn a snake_case field name into a human-readable label:
/// underscores become spaces and each word is title-cased,
/// e.g. `"max_tuition"` -> `"Max Tuition"`.
pub fn field_label(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(12345.6), "$12,346");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(999.0), "$999");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1200.0), "-$1,200");
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("max_tuition"), "Max Tuition");
        assert_eq!(field_label("desired_state"), "Desired State");
        assert_eq!(field_label("age"), "Age");
    }
}
