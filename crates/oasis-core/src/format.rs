//! Presentation seams for money and calendar dates. Implementations live with
//! the front end; the defaults here build on the two required methods.

use chrono::NaiveDate;

pub trait CurrencyFormatter: Send + Sync {
    /// `amount` in `currency` (ISO 4217 code), sign included.
    fn format_amount(&self, amount: f64, currency: &str) -> String;

    /// Spending rate such as `$5.54/day`.
    fn format_daily_rate(&self, amount: f64, currency: &str) -> String {
        format!("{}/day", self.format_amount(amount, currency))
    }
}

pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;

    /// `date` with its distance from `today`, e.g. `Nov 28, 2025 (in 23 days)`.
    fn format_countdown(&self, date: NaiveDate, today: NaiveDate) -> String {
        let days = (date - today).num_days();
        let relative = match days {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            -1 => "yesterday".to_string(),
            n if n > 1 => format!("in {n} days"),
            n => format!("{} days ago", -n),
        };
        format!("{} ({relative})", self.format_date(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Iso;

    impl CurrencyFormatter for Iso {
        fn format_amount(&self, amount: f64, currency: &str) -> String {
            format!("{amount:.2} {currency}")
        }
    }

    impl DateFormatter for Iso {
        fn format_date(&self, date: NaiveDate) -> String {
            date.to_string()
        }
    }

    #[test]
    fn daily_rate_wraps_amount() {
        assert_eq!(Iso.format_daily_rate(5.5, "USD"), "5.50 USD/day");
    }

    #[test]
    fn countdown_describes_distance() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        let refill = NaiveDate::from_ymd_opt(2025, 11, 28).unwrap();
        assert_eq!(Iso.format_countdown(refill, today), "2025-11-28 (in 23 days)");
        assert_eq!(Iso.format_countdown(today, today), "2025-11-05 (today)");
        let past = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        assert_eq!(Iso.format_countdown(past, today), "2025-11-01 (4 days ago)");
    }
}
