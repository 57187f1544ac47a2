//! Calendar dates and clock providers.
//!
//! [`CalendarDate`] is the validated proleptic Gregorian date the formula consumes.
//! With the `chrono` feature, [`Clock`] supplies "today" to the local-time API so that the
//! calculator itself never reads the host clock.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Days before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A validated calendar date (proleptic Gregorian calendar).
///
/// # Example
/// ```
/// # use suntime::time::CalendarDate;
/// let date = CalendarDate::new(2024, 3, 1).unwrap();
/// assert_eq!(date.day_of_year(), 61); // leap year
///
/// assert!(CalendarDate::new(2024, 13, 1).is_err());
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date from year, month (1-12) and day of month.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in that
    /// month and year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_date("day must be between 1 and 31"));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the 1-based day of the year (1-365, or 1-366 in leap years).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        let leap_day = if self.month > 2 && is_leap_year(self.year) {
            1
        } else {
            0
        };
        DAYS_BEFORE_MONTH[(self.month - 1) as usize] + self.day + leap_day
    }
}

/// Checks whether `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`; 0 for an invalid month.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<CalendarDate> for NaiveDate {
    type Error = Error;

    fn try_from(date: CalendarDate) -> Result<Self> {
        Self::from_ymd_opt(date.year, date.month, date.day)
            .ok_or_else(|| Error::invalid_date("date is outside the supported chrono range"))
    }
}

/// Source of the current instant, used to resolve "today" in a time zone.
///
/// Pass [`SystemClock`] for the host clock or [`FixedClock`] for reproducible results.
#[cfg(feature = "chrono")]
pub trait Clock {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the host's system time.
#[cfg(all(feature = "chrono", feature = "std"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(all(feature = "chrono", feature = "std"))]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always reports the same instant.
///
/// # Example
/// ```
/// # use suntime::time::{Clock, FixedClock};
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
/// assert_eq!(FixedClock::new(instant).now(), instant);
/// ```
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

#[cfg(feature = "chrono")]
impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

#[cfg(feature = "chrono")]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
