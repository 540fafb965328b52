//! Error types for the nongli crate.

/// Error type for all fallible operations in the nongli crate.
///
/// Every validation failure is reported through a dedicated variant
/// carrying the offending values; no operation ever signals failure
/// through a sentinel in an otherwise numeric result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is outside the tabulated range 1900..=2100.
    #[error("year {year} outside supported range (1900..=2100)")]
    YearOutOfRange {
        /// The unsupported year that was provided.
        year: i32,
    },

    /// Returned when a date is inside the tabulated years but outside the
    /// convertible window (solar dates before 1900-01-31, the whole first
    /// lunar month of 1900, lunar dates after 2100-12-01).
    #[error("date {year}-{month}-{day} outside the convertible window")]
    DateOutOfRange {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u32,
        /// Day of the rejected date.
        day: u32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the actual length of the given
    /// month (solar or lunar).
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month.
        max_day: u32,
    },

    /// Returned when a lunar day number cannot be rendered because it is
    /// outside 1..=30.
    #[error("invalid lunar day: {day} (must be 1..=30)")]
    DayOutOfRange {
        /// The invalid day number that was provided.
        day: u32,
    },

    /// Returned when a caller claims a leap month that does not match the
    /// year's record.
    #[error("month {month} of {year} is not a leap month (leap month is {leap_month})")]
    LeapMonthMismatch {
        /// The year whose record was consulted.
        year: i32,
        /// The month the caller claimed to be leap.
        month: u32,
        /// The year's actual leap month index (0 if none).
        leap_month: u32,
    },

    /// Returned when a solar-term index is outside the valid range 1..=24.
    #[error("invalid solar term index: {index} (must be 1..=24)")]
    TermIndexOutOfRange {
        /// The invalid term index that was provided.
        index: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 1899 };
        assert_eq!(
            err.to_string(),
            "year 1899 outside supported range (1900..=2100)"
        );
    }

    #[test]
    fn error_date_out_of_range() {
        let err = CalendarError::DateOutOfRange {
            year: 1900,
            month: 1,
            day: 30,
        };
        assert_eq!(
            err.to_string(),
            "date 1900-1-30 outside the convertible window"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 6,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 6 (max 29)");
    }

    #[test]
    fn error_day_out_of_range() {
        let err = CalendarError::DayOutOfRange { day: 31 };
        assert_eq!(err.to_string(), "invalid lunar day: 31 (must be 1..=30)");
    }

    #[test]
    fn error_leap_month_mismatch() {
        let err = CalendarError::LeapMonthMismatch {
            year: 1987,
            month: 5,
            leap_month: 6,
        };
        assert_eq!(
            err.to_string(),
            "month 5 of 1987 is not a leap month (leap month is 6)"
        );
    }

    #[test]
    fn error_term_index_out_of_range() {
        let err = CalendarError::TermIndexOutOfRange { index: 25 };
        assert_eq!(
            err.to_string(),
            "invalid solar term index: 25 (must be 1..=24)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
