use chrono::{DateTime, Local, NaiveDate, Utc};

use oasis_core::Clock;

/// Real-time clock. Calendar dates follow the user's local day.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
