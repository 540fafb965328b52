//! Gregorian calendar rules and the `SolarDate` value type.

use serde::Serialize;

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days between 1970-01-01 and the 1900-01-01 epoch used for all internal
/// day counting.
const UNIX_EPOCH_OFFSET_DAYS: u64 = 25_567;

/// Returns `true` if `year` is a Gregorian leap year (4/100/400 rule).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given Gregorian month.
///
/// February is 29 days in leap years, 28 otherwise.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_days(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// A Gregorian calendar date within the supported 1900..=2100 window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl PartialOrd for SolarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SolarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl SolarDate {
    /// Creates a new `SolarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
    /// 1900..=2100, [`CalendarError::InvalidMonth`] if `month` is outside
    /// 1..=12, and [`CalendarError::InvalidDay`] if `day` is not valid for
    /// the given month and year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1900..=2100).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        let max_day = month_days(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Constructs without range validation; callers guarantee the fields
    /// describe a real Gregorian date.
    pub(crate) fn from_parts(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the number of days between this date and 1900-01-01.
    ///
    /// 1900-01-01 maps to 0. The count is pure integer arithmetic on
    /// whole UTC days; daylight-saving shifts cannot perturb it.
    pub(crate) fn days_from_epoch(self) -> i64 {
        let mut days: i64 = 0;
        for y in 1900..self.year {
            days += if is_leap_year(y) { 366 } else { 365 };
        }
        for m in 1..self.month {
            // Months below self.month are already validated.
            days += i64::from(month_days(self.year, m).expect("month in 1..=12"));
        }
        days + i64::from(self.day) - 1
    }

    /// Inverse of [`Self::days_from_epoch`]: converts a non-negative day
    /// count back to a calendar date.
    pub(crate) fn from_epoch_days(days: i64) -> Self {
        debug_assert!(days >= 0, "epoch day count must be non-negative");
        let mut remaining = days;
        let mut year = 1900;
        loop {
            let len = if is_leap_year(year) { 366 } else { 365 };
            if remaining < len {
                break;
            }
            remaining -= len;
            year += 1;
        }
        let mut month = 1;
        loop {
            let len = i64::from(month_days(year, month).expect("month in 1..=12"));
            if remaining < len {
                break;
            }
            remaining -= len;
            month += 1;
        }
        Self::from_parts(year, month, remaining as u32 + 1)
    }

    /// Returns the weekday as a number in 1..=7 with Monday = 1 and
    /// Sunday = 7 (1900-01-01 was a Monday).
    pub fn weekday(self) -> u32 {
        (self.days_from_epoch() % 7) as u32 + 1
    }

    /// Returns the current date in UTC.
    ///
    /// This is the only clock access in the crate; the conversion
    /// functions themselves never consult it.
    pub fn today() -> Self {
        let since_unix = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system clock set before 1970");
        Self::from_epoch_days((since_unix.as_secs() / 86_400 + UNIX_EPOCH_OFFSET_DAYS) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(1900)); // century, not divisible by 400
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_days_fixture() {
        assert_eq!(month_days(1987, 9).unwrap(), 30);
        assert_eq!(month_days(2000, 2).unwrap(), 29);
        assert_eq!(month_days(1900, 2).unwrap(), 28);
        assert_eq!(month_days(2024, 2).unwrap(), 29);
        assert_eq!(month_days(1999, 12).unwrap(), 31);
    }

    #[test]
    fn month_days_invalid_month() {
        assert_eq!(
            month_days(2000, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            month_days(2000, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_valid() {
        let date = SolarDate::new(1987, 11, 1).unwrap();
        assert_eq!(date.year(), 1987);
        assert_eq!(date.month(), 11);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn new_year_out_of_range() {
        assert_eq!(
            SolarDate::new(1899, 12, 31).unwrap_err(),
            CalendarError::YearOutOfRange { year: 1899 }
        );
        assert_eq!(
            SolarDate::new(2101, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 2101 }
        );
    }

    #[test]
    fn new_feb_29_non_leap() {
        assert_eq!(
            SolarDate::new(1900, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn epoch_day_zero() {
        assert_eq!(SolarDate::new(1900, 1, 1).unwrap().days_from_epoch(), 0);
    }

    #[test]
    fn epoch_day_anchor() {
        // The lunar epoch anchor 1900-01-31 is day 30.
        assert_eq!(SolarDate::new(1900, 1, 31).unwrap().days_from_epoch(), 30);
    }

    #[test]
    fn epoch_day_century() {
        // 100 years, 24 leap days (1904..=1996; 1900 is common).
        assert_eq!(
            SolarDate::new(2000, 1, 1).unwrap().days_from_epoch(),
            36_524
        );
    }

    #[test]
    fn epoch_roundtrip_sweep() {
        // Every 13 days across the whole window exercises all month and
        // year boundaries over time.
        let last = SolarDate::new(2100, 12, 31).unwrap().days_from_epoch();
        let mut day = 0;
        while day <= last {
            let date = SolarDate::from_epoch_days(day);
            assert_eq!(
                date.days_from_epoch(),
                day,
                "roundtrip failed for epoch day {day} ({date})"
            );
            day += 13;
        }
    }

    #[test]
    fn weekday_fixtures() {
        // 1900-01-01 was a Monday, 2000-01-01 a Saturday.
        assert_eq!(SolarDate::new(1900, 1, 1).unwrap().weekday(), 1);
        assert_eq!(SolarDate::new(2000, 1, 1).unwrap().weekday(), 6);
        assert_eq!(SolarDate::new(2000, 1, 2).unwrap().weekday(), 7);
        assert_eq!(SolarDate::new(2024, 2, 10).unwrap().weekday(), 6);
    }

    #[test]
    fn ordering() {
        let a = SolarDate::new(1999, 12, 31).unwrap();
        let b = SolarDate::new(2000, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn display() {
        assert_eq!(SolarDate::new(1987, 11, 1).unwrap().to_string(), "1987-11-1");
    }
}
