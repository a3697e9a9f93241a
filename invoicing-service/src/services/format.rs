//! Display formatting in the fixed es-ES / EUR convention.
//!
//! This is the only place monetary values get rounded.

use chrono::{DateTime, Datelike, Utc};

const NBSP: char = '\u{a0}';

/// `1234.5` -> `1234,50 €`, `12345.5` -> `12.345,50 €`.
///
/// Thousands are grouped with `.` only from five integer digits on, as the
/// Spanish locale does.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{}{},{:02}{}€",
        sign,
        group_thousands(units),
        fraction,
        NBSP
    )
}

fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    if digits.len() < 5 {
        return digits;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Short date, `d/m/yyyy`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_two_decimals_with_comma() {
        assert_eq!(format_currency(0.0), "0,00\u{a0}€");
        assert_eq!(format_currency(12.5), "12,50\u{a0}€");
        assert_eq!(format_currency(0.1 + 0.2), "0,30\u{a0}€");
    }

    #[test]
    fn groups_from_five_digits() {
        assert_eq!(format_currency(1234.5), "1234,50\u{a0}€");
        assert_eq!(format_currency(12345.5), "12.345,50\u{a0}€");
        assert_eq!(format_currency(1234567.891), "1.234.567,89\u{a0}€");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_currency(-12.0), "-12,00\u{a0}€");
        assert_eq!(format_currency(-0.001), "0,00\u{a0}€");
    }

    #[test]
    fn formats_short_date() {
        let date = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "5/3/2026");
    }
}
