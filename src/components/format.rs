//! French display formatting

use chrono::{DateTime, Datelike, Utc};

/// Thousands separator used by French number formatting (narrow no-break space)
pub const GROUP_SEPARATOR: char = '\u{202F}';

const MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// Format a number the French way: grouped thousands, comma decimal
/// separator, at most three fraction digits without trailing zeros.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let fixed = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(fixed.len() + 4);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(*digit);
    }
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Format a price in euros, e.g. `1 299,99 €`.
pub fn format_price(value: f64) -> String {
    format!("{}\u{A0}€", format_number(value))
}

/// Long French date, e.g. `1 mars 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Upper-cased first letter, used as an image placeholder.
pub fn initial(name: &str) -> String {
    name.chars()
        .find(|c| !c.is_whitespace())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(1299.99), "1\u{202F}299,99\u{A0}€");
        assert_eq!(format_price(1_000_000.0), "1\u{202F}000\u{202F}000\u{A0}€");
    }

    #[test]
    fn test_format_number_trims_fraction() {
        assert_eq!(format_number(49.0), "49");
        assert_eq!(format_number(19.9), "19,9");
        assert_eq!(format_number(0.1234), "0,123");
        assert_eq!(format_number(999.9999), "1\u{202F}000");
        assert_eq!(format_number(-12.5), "-12,5");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 8, 1, 10, 0, 0).unwrap();
        assert_eq!(format_date(&date), "1 août 2024");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("écouteurs"), "É");
        assert_eq!(initial("  casque"), "C");
        assert_eq!(initial(""), "");
    }
}
