//! Packed lunar-year table, its decoder queries, and the `LunarDate`
//! value type.

use serde::Serialize;

use crate::error::CalendarError;

/// Packed per-year lunar records for 1900..=2100, indexed by `year - 1900`.
///
/// Bit layout of each record:
/// - bits 4..=15: one flag per ordinary month (bit 15 = month 1); a set
///   bit means 30 days, a clear bit 29 days,
/// - bits 0..=3: 1-based index of the year's leap month, 0 if none,
/// - bit 16: leap-month length flag (set = 30 days, clear = 29 days).
///
/// The table is a pre-computed data asset; it is never derived or
/// mutated by this crate.
#[rustfmt::skip]
pub(crate) const LUNAR_INFO: [u32; 201] = [
    // 1900-1909
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    // 1910-1919
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    // 1920-1929
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    // 1930-1939
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    // 1940-1949
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    // 1950-1959
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    // 1960-1969
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    // 1970-1979
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    // 1980-1989
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    // 1990-1999
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    // 2000-2009
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    // 2010-2019
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    // 2020-2029
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    // 2030-2039
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    // 2040-2049
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    // 2050-2059
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    // 2060-2069
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    // 2070-2079
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    // 2080-2089
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    // 2090-2099
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    // 2100
    0x0d520,
];

/// Looks up the packed record for `year`.
fn record(year: i32) -> Result<u32, CalendarError> {
    if !(1900..=2100).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(LUNAR_INFO[(year - 1900) as usize])
}

/// Returns the total number of days in lunar year `year`: the 12 ordinary
/// months plus the leap month if the year carries one.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
/// 1900..=2100.
pub fn year_days(year: i32) -> Result<u32, CalendarError> {
    let rec = record(year)?;
    let mut sum = 348;
    let mut mask: u32 = 0x8000;
    while mask > 0x8 {
        if rec & mask != 0 {
            sum += 1;
        }
        mask >>= 1;
    }
    Ok(sum + leap_month_days(year)?)
}

/// Returns the 1-based index of the leap month in lunar year `year`, or 0
/// if the year has no leap month.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
/// 1900..=2100.
pub fn leap_month(year: i32) -> Result<u32, CalendarError> {
    Ok(record(year)? & 0xf)
}

/// Returns the length of the leap month in lunar year `year` (29 or 30),
/// or 0 if the year has no leap month.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
/// 1900..=2100.
pub fn leap_month_days(year: i32) -> Result<u32, CalendarError> {
    if leap_month(year)? == 0 {
        return Ok(0);
    }
    Ok(if record(year)? & 0x10000 != 0 { 30 } else { 29 })
}

/// Returns the length (29 or 30) of ordinary lunar month `month` in year
/// `year`. For the length of a leap month use [`leap_month_days`].
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
/// 1900..=2100 and [`CalendarError::InvalidMonth`] if `month` is outside
/// 1..=12.
pub fn month_days(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(if record(year)? & (0x10000 >> month) != 0 {
        30
    } else {
        29
    })
}

/// A date in the Chinese lunisolar calendar within the supported
/// 1900..=2100 window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl LunarDate {
    /// Creates a new `LunarDate` from year, month, day, and the leap-month
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
    /// 1900..=2100, [`CalendarError::InvalidMonth`] if `month` is outside
    /// 1..=12, [`CalendarError::LeapMonthMismatch`] if `is_leap_month` is
    /// set but the year's leap month is not `month`, and
    /// [`CalendarError::InvalidDay`] if `day` exceeds the month's actual
    /// length (29 or 30 per the year's record).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let leap = leap_month(year)?;
        if is_leap_month && leap != month {
            return Err(CalendarError::LeapMonthMismatch {
                year,
                month,
                leap_month: leap,
            });
        }
        let max_day = if is_leap_month {
            leap_month_days(year)?
        } else {
            month_days(year, month)?
        };
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }

    /// Returns the lunar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the lunar month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day within the lunar month (1..=30).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns `true` if this date falls in the year's leap month.
    pub fn is_leap_month(self) -> bool {
        self.is_leap_month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_month_fixture() {
        assert_eq!(leap_month(1987).unwrap(), 6);
        assert_eq!(leap_month(2017).unwrap(), 6);
        assert_eq!(leap_month(2020).unwrap(), 4);
        assert_eq!(leap_month(2033).unwrap(), 11);
        assert_eq!(leap_month(2001).unwrap(), 4);
    }

    #[test]
    fn no_leap_month_is_zero() {
        assert_eq!(leap_month(1986).unwrap(), 0);
        assert_eq!(leap_month(2000).unwrap(), 0);
        assert_eq!(leap_month_days(1986).unwrap(), 0);
        assert_eq!(leap_month_days(2000).unwrap(), 0);
    }

    #[test]
    fn leap_month_days_fixture() {
        assert_eq!(leap_month_days(1987).unwrap(), 29);
        // 2017's leap sixth month ran 2017-07-23 through 2017-08-21.
        assert_eq!(leap_month_days(2017).unwrap(), 30);
        assert_eq!(leap_month_days(2020).unwrap(), 29);
    }

    #[test]
    fn year_days_fixture() {
        // 1987: 7 long ordinary months + a 29-day leap month.
        assert_eq!(year_days(1987).unwrap(), 384);
        // 1900: lunar new year 1900-01-31, next new year 1901-02-19.
        assert_eq!(year_days(1900).unwrap(), 384);
    }

    #[test]
    fn month_days_fixture() {
        assert_eq!(month_days(1987, 9).unwrap(), 29);
        assert_eq!(month_days(1900, 1).unwrap(), 29);
        assert_eq!(month_days(2100, 12).unwrap(), 29);
    }

    #[test]
    fn month_days_invalid_month() {
        assert_eq!(
            month_days(1987, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            month_days(1987, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn year_out_of_range() {
        assert_eq!(
            year_days(1899).unwrap_err(),
            CalendarError::YearOutOfRange { year: 1899 }
        );
        assert_eq!(
            leap_month(2101).unwrap_err(),
            CalendarError::YearOutOfRange { year: 2101 }
        );
    }

    #[test]
    fn table_integrity_year_days_sum() {
        // The year total must always equal the 12 ordinary months plus the
        // leap month, and fall in the plausible lunisolar range.
        for year in 1900..=2100 {
            let mut sum = 0;
            for month in 1..=12 {
                sum += month_days(year, month).unwrap();
            }
            sum += leap_month_days(year).unwrap();
            assert_eq!(
                year_days(year).unwrap(),
                sum,
                "year {year}: total days disagree with per-month sum"
            );
            assert!(
                (353..=385).contains(&sum),
                "year {year}: implausible year length {sum}"
            );
        }
    }

    #[test]
    fn table_integrity_leap_flags() {
        for year in 1900..=2100 {
            let leap = leap_month(year).unwrap();
            assert!(leap <= 12, "year {year}: leap month index {leap} > 12");
            let days = leap_month_days(year).unwrap();
            if leap == 0 {
                assert_eq!(days, 0, "year {year}: leap days without leap month");
            } else {
                assert!(
                    days == 29 || days == 30,
                    "year {year}: leap month length {days}"
                );
            }
        }
    }

    #[test]
    fn new_valid() {
        let date = LunarDate::new(1987, 6, 15, true).unwrap();
        assert_eq!(date.year(), 1987);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
        assert!(date.is_leap_month());
    }

    #[test]
    fn new_leap_mismatch() {
        assert_eq!(
            LunarDate::new(1987, 5, 1, true).unwrap_err(),
            CalendarError::LeapMonthMismatch {
                year: 1987,
                month: 5,
                leap_month: 6,
            }
        );
        assert_eq!(
            LunarDate::new(1986, 6, 1, true).unwrap_err(),
            CalendarError::LeapMonthMismatch {
                year: 1986,
                month: 6,
                leap_month: 0,
            }
        );
    }

    #[test]
    fn new_day_exceeds_month() {
        // 1987's ninth month is short.
        assert_eq!(
            LunarDate::new(1987, 9, 30, false).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 9,
                max_day: 29,
            }
        );
        // So is its leap sixth month.
        assert_eq!(
            LunarDate::new(1987, 6, 30, true).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 6,
                max_day: 29,
            }
        );
    }

    #[test]
    fn display() {
        let date = LunarDate::new(1987, 9, 10, false).unwrap();
        assert_eq!(date.to_string(), "1987-9-10");
    }
}
