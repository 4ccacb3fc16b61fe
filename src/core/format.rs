//! Number formatting with thousands grouping ("1,234,567").

/// Group an integer with commas every three digits.
pub fn format_number(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Group a decimal with commas, keeping at most three fraction digits and
/// dropping trailing zeros (`551695.0` → `"551,695"`, `1234.5` → `"1,234.5"`).
pub fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
