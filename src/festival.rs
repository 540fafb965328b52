//! Festival lookup keyed by (month, day).

/// Fixed-date festivals of the Gregorian calendar.
const SOLAR_FESTIVALS: &[(u32, u32, &str)] = &[
    (1, 1, "元旦节"),
    (2, 14, "情人节"),
    (3, 8, "妇女节"),
    (3, 12, "植树节"),
    (4, 1, "愚人节"),
    (5, 1, "劳动节"),
    (5, 4, "青年节"),
    (5, 12, "护士节"),
    (6, 1, "儿童节"),
    (7, 1, "建党节"),
    (8, 1, "建军节"),
    (9, 10, "教师节"),
    (10, 1, "国庆节"),
    (12, 24, "平安夜"),
    (12, 25, "圣诞节"),
];

/// Fixed-date festivals of the lunar calendar. New Year's Eve is keyed
/// to 12-30 regardless of the twelfth month's actual length.
const LUNAR_FESTIVALS: &[(u32, u32, &str)] = &[
    (1, 1, "春节"),
    (1, 15, "元宵节"),
    (2, 2, "龙抬头"),
    (5, 5, "端午节"),
    (7, 7, "七夕节"),
    (7, 15, "中元节"),
    (8, 15, "中秋节"),
    (9, 9, "重阳节"),
    (10, 1, "寒衣节"),
    (10, 15, "下元节"),
    (12, 8, "腊八节"),
    (12, 23, "北方小年"),
    (12, 24, "南方小年"),
    (12, 30, "除夕"),
];

fn lookup(table: &[(u32, u32, &'static str)], month: u32, day: u32) -> Option<&'static str> {
    table
        .iter()
        .find(|&&(m, d, _)| m == month && d == day)
        .map(|&(_, _, name)| name)
}

/// Returns the festival on the given Gregorian month and day, or `None`.
pub fn solar_festival(month: u32, day: u32) -> Option<&'static str> {
    lookup(SOLAR_FESTIVALS, month, day)
}

/// Returns the festival on the given lunar month and day, or `None`.
pub fn lunar_festival(month: u32, day: u32) -> Option<&'static str> {
    lookup(LUNAR_FESTIVALS, month, day)
}
