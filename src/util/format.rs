//! Thai-locale display formatting: grouped counts and whole-Baht amounts.

/// Formats a plain count with thousands grouping, e.g. `1234` -> "1,234".
pub fn count(value: u64) -> String {
    group_thousands(value)
}

/// Formats an amount as Thai Baht with zero fractional digits, the way the
/// stand owner sees prices: `7005.0` -> "฿7,005". Non-finite amounts render
/// as zero, matching the zero-coercion rule for inputs.
pub fn baht(value: f64) -> String {
    let rounded = if value.is_finite() {
        value.round() as i64
    } else {
        0
    };

    if rounded < 0 {
        format!("-฿{}", group_thousands(rounded.unsigned_abs()))
    } else {
        format!("฿{}", group_thousands(rounded as u64))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_by_thousands() {
        assert_eq!(count(0), "0");
        assert_eq!(count(467), "467");
        assert_eq!(count(1000), "1,000");
        assert_eq!(count(1234567), "1,234,567");
    }

    #[test]
    fn baht_rounds_to_whole_units() {
        assert_eq!(baht(7005.0), "฿7,005");
        assert_eq!(baht(1234.6), "฿1,235");
        assert_eq!(baht(0.4), "฿0");
    }

    #[test]
    fn baht_handles_zero_and_sign() {
        assert_eq!(baht(0.0), "฿0");
        assert_eq!(baht(-500.0), "-฿500");
    }

    #[test]
    fn non_finite_amounts_format_as_zero() {
        assert_eq!(baht(f64::NAN), "฿0");
        assert_eq!(baht(f64::INFINITY), "฿0");
    }
}
