//! Bidirectional conversion between Gregorian and lunar dates, with all
//! derived annotations attached to the result.

use serde::Serialize;

use crate::error::CalendarError;
use crate::festival;
use crate::fmt;
use crate::ganzhi::GanZhi;
use crate::lunar::{self, LunarDate};
use crate::solar::SolarDate;
use crate::term;
use crate::zodiac;

/// Epoch anchor of the forward conversion: 1900-01-31 (lunar 1900-01-01)
/// as a day count from 1900-01-01.
const FORWARD_ANCHOR_DAYS: i64 = 30;

/// Epoch anchor of the reverse conversion, one calendar day earlier
/// (1900-01-30). The asymmetry against [`FORWARD_ANCHOR_DAYS`] absorbs
/// the 1-based lunar day and makes the two directions exact inverses.
const REVERSE_ANCHOR_DAYS: i64 = 29;

/// The fully annotated outcome of one conversion call.
///
/// Produced fresh by [`solar_to_lunar`] and [`lunar_to_solar`] and never
/// mutated afterwards; both entry points report the same annotations for
/// the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The Gregorian date.
    pub solar: SolarDate,
    /// The lunar date.
    pub lunar: LunarDate,
    /// Year pillar of the sexagenary cycle (lunar-year boundary).
    pub year_pillar: GanZhi,
    /// Month pillar; advances on the solar-term boundary, not the
    /// calendar-month boundary.
    pub month_pillar: GanZhi,
    /// Day pillar.
    pub day_pillar: GanZhi,
    /// Zodiac animal of the lunar year.
    pub animal: &'static str,
    /// Western zodiac sign of the solar date.
    pub western_sign: &'static str,
    /// Weekday in 1..=7, Monday = 1.
    pub weekday: u32,
    /// Weekday rendering (星期一 .. 星期日).
    pub weekday_name: &'static str,
    /// Name of the solar term falling exactly on this day, if any.
    pub solar_term: Option<&'static str>,
    /// Gregorian festival on this day, if any.
    pub festival: Option<&'static str>,
    /// Lunar festival on this day, if any.
    pub lunar_festival: Option<&'static str>,
    /// Rendering of the lunar month, with a 闰 prefix in a leap month.
    pub lunar_month_name: String,
    /// Rendering of the lunar day (初一 .. 三十).
    pub lunar_day_name: &'static str,
}

impl Conversion {
    /// Returns `true` if the converted day is the current UTC day.
    ///
    /// This consults [`SolarDate::today`]; the conversion itself carries
    /// no clock state.
    pub fn is_today(&self) -> bool {
        self.solar == SolarDate::today()
    }
}

/// Converts a Gregorian date to its lunar equivalent.
///
/// Walks forward from the 1900-01-31 epoch anchor one lunar year at a
/// time, then one lunar month at a time (visiting the leap month right
/// after its ordinary twin); the remaining offset is the lunar day.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::InvalidMonth`]
/// or [`CalendarError::InvalidDay`] for malformed input, and
/// [`CalendarError::DateOutOfRange`] for dates before 1900-01-31.
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<Conversion, CalendarError> {
    let solar = SolarDate::new(year, month, day)?;
    let mut offset = solar.days_from_epoch() - FORWARD_ANCHOR_DAYS;
    if offset < 0 {
        return Err(CalendarError::DateOutOfRange { year, month, day });
    }

    let mut lunar_year = 1900;
    loop {
        let len = i64::from(lunar::year_days(lunar_year)?);
        if offset < len {
            break;
        }
        offset -= len;
        lunar_year += 1;
    }

    let leap = lunar::leap_month(lunar_year)?;
    let mut lunar_month = 1;
    let mut is_leap = false;
    loop {
        let len = i64::from(if is_leap {
            lunar::leap_month_days(lunar_year)?
        } else {
            lunar::month_days(lunar_year, lunar_month)?
        });
        if offset < len {
            break;
        }
        offset -= len;
        if !is_leap && lunar_month == leap {
            // The leap month follows its ordinary twin under the same number.
            is_leap = true;
        } else {
            is_leap = false;
            lunar_month += 1;
        }
    }

    let date = LunarDate::new(lunar_year, lunar_month, offset as u32 + 1, is_leap)?;
    annotate(solar, date)
}

/// Converts a lunar date to its Gregorian equivalent.
///
/// Accumulates the day offset of the lunar date from the epoch (year
/// totals, then month lengths with the leap month inserted once at its
/// index), resolves the Gregorian day, and delegates to [`solar_to_lunar`]
/// so both entry points always report one consistent annotated result.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::InvalidMonth`],
/// [`CalendarError::LeapMonthMismatch`] or [`CalendarError::InvalidDay`]
/// for malformed input, and [`CalendarError::DateOutOfRange`] for the
/// first lunar month of 1900 or lunar dates past 2100-12-01.
pub fn lunar_to_solar(
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
) -> Result<Conversion, CalendarError> {
    let date = LunarDate::new(year, month, day, is_leap_month)?;
    if (year == 1900 && month == 1) || (year == 2100 && month == 12 && day > 1) {
        return Err(CalendarError::DateOutOfRange { year, month, day });
    }

    let mut offset: i64 = 0;
    for y in 1900..year {
        offset += i64::from(lunar::year_days(y)?);
    }
    let leap = lunar::leap_month(year)?;
    for m in 1..month {
        if m == leap {
            offset += i64::from(lunar::leap_month_days(year)?);
        }
        offset += i64::from(lunar::month_days(year, m)?);
    }
    if date.is_leap_month() {
        // The ordinary month precedes its leap twin.
        offset += i64::from(lunar::month_days(year, month)?);
    }

    let solar = SolarDate::from_epoch_days(REVERSE_ANCHOR_DAYS + offset + i64::from(day));
    solar_to_lunar(solar.year(), solar.month(), solar.day())
}

/// Attaches every derived annotation to a matched solar/lunar date pair.
fn annotate(solar: SolarDate, lunar_date: LunarDate) -> Result<Conversion, CalendarError> {
    let (year, month, day) = (solar.year(), solar.month(), solar.day());

    let first_term = term::term_day(year, 2 * month - 1)?;
    let second_term = term::term_day(year, 2 * month)?;
    let solar_term = if day == first_term {
        Some(term::term_name(2 * month - 1)?)
    } else if day == second_term {
        Some(term::term_name(2 * month)?)
    } else {
        None
    };

    let weekday = solar.weekday();
    let month_name = fmt::month_name(lunar_date.month())?;
    let lunar_month_name = if lunar_date.is_leap_month() {
        format!("闰{month_name}")
    } else {
        month_name.to_string()
    };

    Ok(Conversion {
        solar,
        lunar: lunar_date,
        year_pillar: GanZhi::for_year(lunar_date.year()),
        month_pillar: GanZhi::for_month(year, month, day)?,
        day_pillar: GanZhi::for_day(solar),
        animal: zodiac::animal(lunar_date.year()),
        western_sign: zodiac::western_sign(month, day)?,
        weekday,
        weekday_name: fmt::WEEKDAY_NAMES[(weekday - 1) as usize],
        solar_term,
        festival: festival::solar_festival(month, day),
        lunar_festival: festival::lunar_festival(lunar_date.month(), lunar_date.day()),
        lunar_month_name,
        lunar_day_name: fmt::day_name(lunar_date.day())?,
    })
}
