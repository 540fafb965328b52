//! Zodiac annotations: the twelve-animal cycle and the western signs.

use crate::error::CalendarError;

/// The twelve zodiac animals, in branch order starting from the rat.
pub(crate) const ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Western zodiac names. Thirteen slots because Capricorn brackets the
/// year: slot `m` is the sign of month `m` on or after its cut-over day.
const SIGNS: [&str; 13] = [
    "魔羯座", "水瓶座", "双鱼座", "白羊座", "金牛座", "双子座", "巨蟹座",
    "狮子座", "处女座", "天秤座", "天蝎座", "射手座", "魔羯座",
];

/// Day of month on which each month's sign changes (index 0 = January).
const SIGN_CUTOVER: [u32; 12] = [20, 19, 21, 21, 21, 22, 23, 23, 23, 23, 22, 22];

/// Returns the zodiac animal for a lunar year.
///
/// Defined for any year; the cycle wraps modulo 12. Note the boundary is
/// the lunar new year here, not Spring Begins.
pub fn animal(year: i32) -> &'static str {
    ANIMALS[(year - 4).rem_euclid(12) as usize]
}

/// Returns the western zodiac sign for a solar month and day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn western_sign(month: u32, day: u32) -> Result<&'static str, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let idx = if day < SIGN_CUTOVER[(month - 1) as usize] {
        month - 1
    } else {
        month
    };
    Ok(SIGNS[idx as usize])
}
