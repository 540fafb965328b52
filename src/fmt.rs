//! Chinese renderings of lunar month numbers, lunar day numbers, and
//! weekdays.

use crate::error::CalendarError;

/// Traditional names of the twelve lunar months (month 11 is 冬月,
/// month 12 is 腊月).
#[rustfmt::skip]
const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月",
    "七月", "八月", "九月", "十月", "冬月", "腊月",
];

/// Renderings of lunar days 1..=30: the tens character (初/十/廿/卅
/// families) composed with the ones character, with 10, 20, and 30
/// written in their irregular forms.
#[rustfmt::skip]
const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Weekday names indexed by the 1..=7 numbering (Monday first).
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
];

/// Returns the traditional name of a lunar month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_name(month: u32) -> Result<&'static str, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_NAMES[(month - 1) as usize])
}

/// Returns the rendering of a lunar day number.
///
/// # Errors
///
/// Returns [`CalendarError::DayOutOfRange`] if `day` is outside 1..=30.
pub fn day_name(day: u32) -> Result<&'static str, CalendarError> {
    if !(1..=30).contains(&day) {
        return Err(CalendarError::DayOutOfRange { day });
    }
    Ok(DAY_NAMES[(day - 1) as usize])
}

/// Returns the weekday name for the 1..=7 numbering (Monday = 1), or
/// `None` outside that range.
pub fn weekday_name(weekday: u32) -> Option<&'static str> {
    if !(1..=7).contains(&weekday) {
        return None;
    }
    Some(WEEKDAY_NAMES[(weekday - 1) as usize])
}
