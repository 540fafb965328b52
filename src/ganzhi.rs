//! Sexagenary (gan-zhi) cycle calculator for year, month, and day pillars.

use serde::Serialize;

use crate::error::CalendarError;
use crate::solar::SolarDate;
use crate::term;

/// The ten heavenly stems.
pub(crate) const STEMS: [&str; 10] =
    ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches.
pub(crate) const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// One term of the sexagenary cycle: a heavenly stem paired with an
/// earthly branch.
///
/// The pairing is positional: offset 0 is 甲子, offset 59 is 癸亥, and
/// the cycle repeats every 60 steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GanZhi {
    stem: &'static str,
    branch: &'static str,
}

impl std::fmt::Display for GanZhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl GanZhi {
    /// Returns the cycle term at `offset` steps from 甲子.
    pub fn from_offset(offset: i64) -> Self {
        Self {
            stem: STEMS[offset.rem_euclid(10) as usize],
            branch: BRANCHES[offset.rem_euclid(12) as usize],
        }
    }

    /// Returns the year pillar for a lunar year.
    ///
    /// Defined for any year; the cycle wraps modulo 60 (year 4 CE anchors
    /// 甲子).
    pub fn for_year(year: i32) -> Self {
        Self::from_offset(i64::from(year) - 4)
    }

    /// Returns the month pillar for a solar date.
    ///
    /// The month boundary follows the solar terms, not the calendar
    /// month: the pillar advances on the day of the month's first term
    /// (term `2*month - 1`), so days before it still carry the previous
    /// pillar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside
    /// 1..=12 and [`CalendarError::YearOutOfRange`] if `year` is outside
    /// 1900..=2100 (the term table bounds the computation).
    pub fn for_month(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let first_term_day = term::term_day(year, 2 * month - 1)?;
        let mut offset = i64::from(year - 1900) * 12 + i64::from(month) + 11;
        if day >= first_term_day {
            offset += 1;
        }
        Ok(Self::from_offset(offset))
    }

    /// Returns the day pillar for a solar date (1900-01-01 anchors 甲戌,
    /// ten steps past 甲子).
    pub fn for_day(date: SolarDate) -> Self {
        Self::from_offset(date.days_from_epoch() + 10)
    }

    /// Returns the heavenly stem label.
    pub fn stem(self) -> &'static str {
        self.stem
    }

    /// Returns the earthly branch label.
    pub fn branch(self) -> &'static str {
        self.branch
    }
}
