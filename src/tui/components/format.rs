//! Display formatting for money amounts.

/// Formats an amount with comma thousands separators and at most two
/// decimals, dropping trailing zeros (`250000.5` becomes `250,000.5`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, unsigned) = fixed
        .strip_prefix('-')
        .map_or(("", fixed.as_str()), |rest| ("-", rest));
    let (whole, raw_fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let fraction = raw_fraction.trim_end_matches('0');

    let grouped = group_thousands(whole);
    let shown_sign = if grouped == "0" && fraction.is_empty() {
        ""
    } else {
        sign
    };

    if fraction.is_empty() {
        format!("{shown_sign}{grouped}")
    } else {
        format!("{shown_sign}{grouped}.{fraction}")
    }
}

/// Inserts a comma before every third digit counted from the right.
fn group_thousands(digits: &str) -> String {
    let mut reversed = String::with_capacity(digits.len().saturating_mul(2));
    let mut in_group = 0_u8;
    for digit in digits.chars().rev() {
        if in_group == 3 {
            reversed.push(',');
            in_group = 0;
        }
        reversed.push(digit);
        in_group = in_group.saturating_add(1);
    }
    reversed.chars().rev().collect()
}
