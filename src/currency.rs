//! Locale-aware money and date rendering for the CLI.

use chrono::{Datelike, NaiveDate};
use oasis_core::format::{CurrencyFormatter, DateFormatter};

/// Formats amounts and dates according to a BCP 47 language tag.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    language_tag: String,
    decimal_separator: char,
    grouping_separator: char,
}

impl LocaleFormatter {
    pub fn new(language_tag: &str) -> Self {
        let language = language_tag
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "fr" | "it" | "nl" | "pt" => (',', '.'),
            _ => ('.', ','),
        };
        Self {
            language_tag: language_tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }

    fn is_us(&self) -> bool {
        self.language_tag.eq_ignore_ascii_case("en-US")
    }

    fn format_number(&self, value: f64, precision: usize) -> String {
        let body = format!("{:.*}", precision, value);
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (body.as_str(), None),
        };
        let mut out = group_digits(int_part, self.grouping_separator);
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let code = currency.to_ascii_uppercase();
        let body = self.format_number(amount.abs(), minor_units_for(&code));
        let sign = if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };
        match symbol_for(&code) {
            Some(symbol) => format!("{sign}{symbol}{body}"),
            None => format!("{sign}{body} {code}"),
        }
    }
}

impl DateFormatter for LocaleFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        if self.is_us() {
            format!(
                "{} {}, {}",
                month_label(date.month()),
                date.day(),
                date.year()
            )
        } else {
            format!(
                "{:02} {} {}",
                date.day(),
                month_label(date.month()),
                date.year()
            )
        }
    }
}

fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn minor_units_for(code: &str) -> usize {
    match code {
        "JPY" => 0,
        _ => 2,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_amounts_use_symbol_and_two_decimals() {
        let fmt = LocaleFormatter::default();
        assert_eq!(fmt.format_amount(127.43, "USD"), "$127.43");
        assert_eq!(fmt.format_amount(-23.15, "usd"), "-$23.15");
        assert_eq!(fmt.format_amount(1234.5, "USD"), "$1,234.50");
        assert_eq!(fmt.format_amount(-0.001, "USD"), "$0.00");
    }

    #[test]
    fn unknown_currency_falls_back_to_code() {
        let fmt = LocaleFormatter::default();
        assert_eq!(fmt.format_amount(5.0, "CHF"), "5.00 CHF");
        assert_eq!(fmt.format_amount(1500.0, "JPY"), "¥1,500");
    }

    #[test]
    fn european_locales_swap_separators() {
        let fmt = LocaleFormatter::new("de-DE");
        assert_eq!(fmt.format_amount(1234.5, "EUR"), "€1.234,50");
    }

    #[test]
    fn dates_follow_locale() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
        assert_eq!(LocaleFormatter::default().format_date(date), "Nov 10, 2025");
        assert_eq!(LocaleFormatter::new("en-GB").format_date(date), "10 Nov 2025");
    }
}
