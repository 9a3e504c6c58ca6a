//! Wall-clock source for date rules and save timestamps.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Timestamp layout for `created_at`, e.g. `3/7/2024, 4:05:09 PM`.
const CREATED_AT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Source of "now" for validation and record stamping.
pub trait Clock {
    /// Current local date-time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Human-readable save timestamp.
    fn timestamp(&self) -> String {
        self.now().format(CREATED_AT_FORMAT).to_string()
    }
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_formats_us_style_timestamp() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(16, 5, 9)
            .unwrap();
        let clock = FixedClock(now);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(clock.timestamp(), "3/7/2024, 4:05:09 PM");
    }
}
