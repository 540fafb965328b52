//! Packed solar-term table and its decoder.

use crate::error::CalendarError;

/// Names of the 24 solar terms in calendrical order, starting from
/// Slight Cold (term 1, early January).
#[rustfmt::skip]
pub(crate) const TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨",
    "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑",
    "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// Packed solar-term records for 1900..=2100, indexed by `year - 1900`.
///
/// Each record is 30 hexadecimal characters forming six 5-character
/// groups. A group, read as a hexadecimal integer and written back as a
/// decimal digit string, packs four day-of-month values in the digit
/// pattern 1-2-1-2; the six groups together give the days on which the
/// 24 solar terms fall in that Gregorian year, in [`TERM_NAMES`] order.
///
/// Like [`crate::lunar::LUNAR_INFO`], this is a pre-computed data asset.
#[rustfmt::skip]
pub(crate) const SOLAR_TERM_INFO: [&str; 201] = [
    "9778397bd097c36b0b6fc9274c91aa", // 1900
    "97b6b97bd19801ec9210c965cc920e", // 1901
    "97bcf97c359801ec95f8c965cc920f", // 1902
    "97bd0b06bdb0722c965ce1cfcc920f", // 1903
    "b027097bd097c36b0b6fc9274c91aa", // 1904
    "97b6b97bd19801ec9210c965cc920e", // 1905
    "97bcf97c359801ec95f8c965cc920f", // 1906
    "97bd0b06bdb0722c965ce1cfcc920f", // 1907
    "b027097bd097c36b0b6fc9274c91aa", // 1908
    "97b6b97bd19801ec9210c965cc920e", // 1909
    "97bcf97c359801ec95f8c965cc920f", // 1910
    "97bd0b06bdb0722c965ce1cfcc920f", // 1911
    "b027097bd097c36b0b6fc9274c91aa", // 1912
    "9778397bd19801ec9210c965cc920e", // 1913
    "97b6b97bd19801ec95f8c965cc920f", // 1914
    "97bd09801d98082c95f8e1cfcc920f", // 1915
    "97bd097bd097c36b0b6fc9210c8dc2", // 1916
    "9778397bd197c36c9210c9274c920e", // 1917
    "97b6b97bd19801ec95f8c965cc920f", // 1918
    "97bd09801d98082c95f8e1cfcc920f", // 1919
    "97bd097bd097c36b0b6fc9210c8dc2", // 1920
    "9778397bd097c36c9210c9274c920e", // 1921
    "97b6b97bd19801ec95f8c965cc920f", // 1922
    "97bd09801d98082c95f8e1cfcc920f", // 1923
    "97bd097bd097c36b0b6fc9210c8dc2", // 1924
    "9778397bd097c36c9210c9274c920e", // 1925
    "97b6b97bd19801ec95f8c965cc920f", // 1926
    "97bd09801d98082c95f8e1cfcc920f", // 1927
    "97bd097bd097c36b0b6fc9210c8dc2", // 1928
    "9778397bd097c36c9210c9274c920e", // 1929
    "97b6b97bd19801ec95f8c965cc920f", // 1930
    "97bd09801d98082c95f8e1cfcc920f", // 1931
    "97bd097bd097c36b0b6fc9210c8dc2", // 1932
    "9778397bd097c36b0b70c9274c91aa", // 1933
    "97b6b97bd19801ec9210c965cc920e", // 1934
    "97bcf97c3598082c95f8e1cfcc920f", // 1935
    "97bd097bd097c36b0b6fc9210c8dc2", // 1936
    "9778397bd097c36b0b70c9274c91aa", // 1937
    "97b6b97bd19801ec9210c965cc920e", // 1938
    "97bcf97c3598082c95f8e1cfcc920f", // 1939
    "97bd097bd097c36b0b6fc9210c8dc2", // 1940
    "9778397bd097c36b0b70c9274c91aa", // 1941
    "97b6b97bd19801ec9210c965cc920e", // 1942
    "97bcf97c3598082c95f8e1cfcc920f", // 1943
    "97bd097bd097c36b0b6fc9210c8dc2", // 1944
    "9778397bd097c36b0b70c9274c91aa", // 1945
    "97b6b97bd19801ec9210c965cc920e", // 1946
    "97bcf97c3598082c95f8e1cfcc920f", // 1947
    "97bd097bd097c36b0b6fc9210c8dc2", // 1948
    "9778397bd097c36b0b70c9274c91aa", // 1949
    "97b6b97bd19801ec9210c965cc920e", // 1950
    "97bcf97c3598082c95f8e1cfcc920f", // 1951
    "97bd097bd097c36b0b6fc9210c8dc2", // 1952
    "9778397bd097c36b0b6fc9274c91aa", // 1953
    "97b6b97bd19801ec9210c965cc920e", // 1954
    "97bcf97c359801ec95f8c965cc920f", // 1955
    "97bd097bd097c35b0b6fc920fb0722", // 1956
    "9778397bd097c36b0b6fc9274c91aa", // 1957
    "97b6b97bd19801ec9210c965cc920e", // 1958
    "97bcf97c359801ec95f8c965cc920f", // 1959
    "97bd097bd097c35b0b6fc920fb0722", // 1960
    "9778397bd097c36b0b6fc9274c91aa", // 1961
    "97b6b97bd19801ec9210c965cc920e", // 1962
    "97bcf97c359801ec95f8c965cc920f", // 1963
    "97bd097bd097c35b0b6fc920fb0722", // 1964
    "9778397bd097c36b0b6fc9274c91aa", // 1965
    "97b6b97bd19801ec9210c965cc920e", // 1966
    "97bcf97c359801ec95f8c965cc920f", // 1967
    "97bd097bd097c35b0b6fc920fb0722", // 1968
    "9778397bd097c36b0b6fc9274c91aa", // 1969
    "97b6b97bd19801ec9210c965cc920e", // 1970
    "97bcf97c359801ec95f8c965cc920f", // 1971
    "97bd097bd097c35b0b6fc920fb0722", // 1972
    "9778397bd097c36b0b6fc9274c91aa", // 1973
    "97b6b97bd19801ec9210c965cc920e", // 1974
    "97bcf97c359801ec95f8c965cc920f", // 1975
    "97bd097bd097c35b0b6fc920fb0722", // 1976
    "9778397bd097c36b0b6fc9274c91aa", // 1977
    "97b6b97bd19801ec9210c965cc920e", // 1978
    "97bcf97c359801ec95f8c965cc920f", // 1979
    "97bd097bd097c35b0b6fc920fb0722", // 1980
    "9778397bd097c36b0b6fc9274c91aa", // 1981
    "97b6b97bd19801ec9210c965cc920e", // 1982
    "97bcf97c359801ec95f8c965cc920f", // 1983
    "97bd097bd097c35b0b6fc920fb0722", // 1984
    "7f0e397bd097c36b0b6fc9210c8dc2", // 1985
    "9778397bd097c36c9210c9274c920e", // 1986
    "9778397bd097c36b0b6fc9274c91aa", // 1987
    "97b6b97bd19801ec9210c965cc920e", // 1988
    "7f0e397bd097c36b0b6fc9210c8dc2", // 1989
    "9778397bd097c36c9210c9274c920e", // 1990
    "9778397bd097c36b0b6fc9274c91aa", // 1991
    "97b6b97bd19801ec9210c965cc920e", // 1992
    "7f0e397bd097c36b0b6fc9210c8dc2", // 1993
    "9778397bd097c36c9210c9274c920e", // 1994
    "9778397bd097c36b0b6fc9274c91aa", // 1995
    "97b6b97bd19801ec9210c965cc920e", // 1996
    "7f0e397bd097c36b0b6fc9210c8dc2", // 1997
    "9778397bd097c36c9210c9274c920e", // 1998
    "9778397bd097c36b0b6fc9274c91aa", // 1999
    "97b6b97bd19801ec9210c965cc920e", // 2000
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2001
    "9778397bd097c36c9210c9274c920e", // 2002
    "9778397bd097c36b0b6fc9274c91aa", // 2003
    "97b6b97bd19801ec9210c965cc920e", // 2004
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2005
    "9778397bd097c36c9210c9274c920e", // 2006
    "9778397bd097c36b0b6fc9274c91aa", // 2007
    "97b6b97bd19801ec9210c965cc920e", // 2008
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2009
    "9778397bd097c36c9210c9274c920e", // 2010
    "9778397bd097c36b0b6fc9274c91aa", // 2011
    "97b6b97bd19801ec9210c965cc920e", // 2012
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2013
    "9778397bd097c36c9210c9274c920e", // 2014
    "9778397bd097c36b0b6fc9274c91aa", // 2015
    "97b6b97bd19801ec9210c965cc920e", // 2016
    "7f07e7f0e47f531b0723b0b6fb0721", // 2017
    "7f0e397bd097c35b0b6fc920fb0722", // 2018
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2019
    "977837f0e47f531b0723b0b6fb0721", // 2020
    "7f07e7f0e47f531b0723b0b6fb0721", // 2021
    "7f0e397bd097c35b0b6fc920fb0722", // 2022
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2023
    "977837f0e47f531b0723b0b6fb0721", // 2024
    "7f07e7f0e47f531b0723b0b6fb0721", // 2025
    "7f0e397bd097c35b0b6fc920fb0722", // 2026
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2027
    "977837f0e47f531b0723b0b6fb0721", // 2028
    "7f07e7f0e47f531b0723b0b6fb0721", // 2029
    "7f0e397bd097c35b0b6fc920fb0722", // 2030
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2031
    "977837f0e47f531b0723b0b6fb0721", // 2032
    "7f07e7f0e47f531b0723b0b6fb0721", // 2033
    "7f0e397bd097c35b0b6fc920fb0722", // 2034
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2035
    "977837f0e47f531b0723b0b6fb0721", // 2036
    "7f07e7f0e47f531b0723b0b6fb0721", // 2037
    "7f0e397bd097c35b0b6fc920fb0722", // 2038
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2039
    "977837f0e47f531b0723b0b6fb0721", // 2040
    "7f07e7f0e47f531b0723b0b6fb0721", // 2041
    "7f0e397bd097c35b0b6fc920fb0722", // 2042
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2043
    "977837f0e47f531b0723b0b6fb0721", // 2044
    "7f07e7f0e47f531b0723b0b6fb0721", // 2045
    "7f0e397bd097c35b0b6fc920fb0722", // 2046
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2047
    "977837f0e47f531b0723b0b6fb0721", // 2048
    "7f07e7f0e47f531b0723b0b6fb0721", // 2049
    "7f0e397bd097c35b0b6fc920fb0722", // 2050
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2051
    "977837f0e47f531b0723b0b6fb0721", // 2052
    "7f07e7f0e47f531b0723b0b6fb0721", // 2053
    "7f0e397bd097c35b0b6fc920fb0722", // 2054
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2055
    "977837f0e47f531b0723b0b6fb0721", // 2056
    "7f07e7f0e47f531b0723b0b6fb0721", // 2057
    "7f0e397bd097c35b0b6fc920fb0722", // 2058
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2059
    "977837f0e47f531b0723b0b6fb0721", // 2060
    "7f07e7f0e47f531b0723b0b6fb0721", // 2061
    "7f0e397bd097c35b0b6fc920fb0722", // 2062
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2063
    "977837f0e47f531b0723b0b6fb0721", // 2064
    "7f07e7f0e47f531b0723b0b6fb0721", // 2065
    "7f0e397bd097c35b0b6fc920fb0722", // 2066
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2067
    "977837f0e47f531b0723b0b6fb0721", // 2068
    "7f07e7f0e47f531b0723b0b6fb0721", // 2069
    "7f0e397bd097c35b0b6fc920fb0722", // 2070
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2071
    "977837f0e47f531b0723b0b6fb0721", // 2072
    "7f07e7f0e47f531b0723b0b6fb0721", // 2073
    "7f0e397bd097c35b0b6fc920fb0722", // 2074
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2075
    "977837f0e47f531b0723b0b6fb0721", // 2076
    "7f07e7f0e47f531b0723b0b6fb0721", // 2077
    "7f0e397bd097c35b0b6fc920fb0722", // 2078
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2079
    "977837f0e47f531b0723b0b6fb0721", // 2080
    "7f07e7f0e47f531b0723b0b6fb0721", // 2081
    "7f0e397bd097c35b0b6fc920fb0722", // 2082
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2083
    "977837f0e47f531b0723b0b6fb0721", // 2084
    "7f07e7f0e47f531b0723b0b6fb0721", // 2085
    "7f0e397bd097c35b0b6fc920fb0722", // 2086
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2087
    "977837f0e47f531b0723b0b6fb0721", // 2088
    "7f07e7f0e47f531b0723b0b6fb0721", // 2089
    "7f0e397bd097c35b0b6fc920fb0722", // 2090
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2091
    "977837f0e47f531b0723b0b6fb0721", // 2092
    "7f07e7f0e47f531b0723b0b6fb0721", // 2093
    "7f0e397bd097c35b0b6fc920fb0722", // 2094
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2095
    "977837f0e47f531b0723b0b6fb0721", // 2096
    "7f07e7f0e47f531b0723b0b6fb0721", // 2097
    "7f0e397bd097c35b0b6fc920fb0722", // 2098
    "7f0e397bd097c36b0b6fc9210c8dc2", // 2099
    "977837f0e47f531b0723b0b6fb0721", // 2100
];

/// Returns the day-of-month on which solar term `term_index` falls in
/// Gregorian year `year`.
///
/// `term_index` is 1-based and counts from Slight Cold; terms `2*m - 1`
/// and `2*m` fall in solar month `m`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
/// 1900..=2100 and [`CalendarError::TermIndexOutOfRange`] if `term_index`
/// is outside 1..=24.
pub fn term_day(year: i32, term_index: u32) -> Result<u32, CalendarError> {
    if !(1900..=2100).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    if !(1..=24).contains(&term_index) {
        return Err(CalendarError::TermIndexOutOfRange { index: term_index });
    }
    let record = SOLAR_TERM_INFO[(year - 1900) as usize];
    let group = ((term_index - 1) / 4) as usize;
    let slot = (term_index - 1) % 4;
    let packed = u32::from_str_radix(&record[group * 5..group * 5 + 5], 16)
        .expect("term records hold hexadecimal digits only");
    let digits = packed.to_string();
    debug_assert_eq!(digits.len(), 6, "term group must decode to six digits");
    let slice = match slot {
        0 => &digits[0..1],
        1 => &digits[1..3],
        2 => &digits[3..4],
        _ => &digits[4..6],
    };
    Ok(slice.parse().expect("term day digits"))
}

/// Returns the name of solar term `term_index` (1..=24, from Slight Cold).
///
/// # Errors
///
/// Returns [`CalendarError::TermIndexOutOfRange`] if `term_index` is
/// outside 1..=24.
pub fn term_name(term_index: u32) -> Result<&'static str, CalendarError> {
    if !(1..=24).contains(&term_index) {
        return Err(CalendarError::TermIndexOutOfRange { index: term_index });
    }
    Ok(TERM_NAMES[(term_index - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_day_fixture_1987() {
        // Spring Begins fell on 1987-02-04.
        assert_eq!(term_day(1987, 3).unwrap(), 4);
    }

    #[test]
    fn term_day_fixture_1900() {
        assert_eq!(term_day(1900, 1).unwrap(), 6); // Slight Cold, Jan 6
        assert_eq!(term_day(1900, 2).unwrap(), 20); // Great Cold, Jan 20
        assert_eq!(term_day(1900, 3).unwrap(), 4); // Spring Begins, Feb 4
        assert_eq!(term_day(1900, 24).unwrap(), 22); // Winter Solstice, Dec 22
    }

    #[test]
    fn term_day_fixture_modern() {
        assert_eq!(term_day(2000, 3).unwrap(), 4);
        assert_eq!(term_day(2021, 1).unwrap(), 5);
        assert_eq!(term_day(2021, 2).unwrap(), 20);
        assert_eq!(term_day(2021, 3).unwrap(), 3);
        assert_eq!(term_day(2021, 4).unwrap(), 18);
    }

    #[test]
    fn term_day_year_out_of_range() {
        assert_eq!(
            term_day(1899, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 1899 }
        );
        assert_eq!(
            term_day(2101, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 2101 }
        );
    }

    #[test]
    fn term_day_index_out_of_range() {
        assert_eq!(
            term_day(2000, 0).unwrap_err(),
            CalendarError::TermIndexOutOfRange { index: 0 }
        );
        assert_eq!(
            term_day(2000, 25).unwrap_err(),
            CalendarError::TermIndexOutOfRange { index: 25 }
        );
    }

    #[test]
    fn term_name_fixture() {
        assert_eq!(term_name(1).unwrap(), "小寒");
        assert_eq!(term_name(3).unwrap(), "立春");
        assert_eq!(term_name(24).unwrap(), "冬至");
        assert_eq!(
            term_name(0).unwrap_err(),
            CalendarError::TermIndexOutOfRange { index: 0 }
        );
    }

    #[test]
    fn table_integrity_record_shape() {
        for (i, record) in SOLAR_TERM_INFO.iter().enumerate() {
            assert_eq!(record.len(), 30, "record {i}: not 30 characters");
            assert!(
                record.chars().all(|c| c.is_ascii_hexdigit()),
                "record {i}: non-hex character"
            );
        }
    }

    #[test]
    fn table_integrity_day_values() {
        // Every decoded value must be a plausible day-of-month.
        for year in 1900..=2100 {
            for index in 1..=24 {
                let day = term_day(year, index).unwrap();
                assert!(
                    (1..=31).contains(&day),
                    "year {year} term {index}: day {day} out of range"
                );
            }
        }
    }
}
