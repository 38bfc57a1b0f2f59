//! Solar (Gregorian) civil date/time of a birth.
//!
//! Provides `SolarDateTime`, the validated timestamp handed to a
//! [`CalendarService`](crate::CalendarService). No time-zone handling: the
//! fields are taken as local civil time at the birthplace.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::julian::{calendar_to_jdn, days_in_month};

/// Earliest accepted year (astronomical numbering).
pub const MIN_YEAR: i32 = -9999;

/// Latest accepted year.
pub const MAX_YEAR: i32 = 9999;

/// Gregorian date with whole-second time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SolarDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl SolarDateTime {
    /// Validated constructor.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidDate(format!(
                "year {year} (expected {MIN_YEAR}..={MAX_YEAR})"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate(format!("month {month}")));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDate(format!(
                "day {day} (month {month} of {year} has {max_day} days)"
            )));
        }
        if hour >= 24 {
            return Err(CalendarError::InvalidDate(format!("hour {hour}")));
        }
        if minute >= 60 {
            return Err(CalendarError::InvalidDate(format!("minute {minute}")));
        }
        if second >= 60 {
            return Err(CalendarError::InvalidDate(format!("second {second}")));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of a date.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a `YYYY-MM-DD` date and an optional `HH:MM[:SS]` time.
    pub fn from_parts(date: &str, time: Option<&str>) -> Result<Self, CalendarError> {
        let date = date.trim();
        // Leading '-' marks a negative (astronomical) year.
        let (sign, unsigned) = match date.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date),
        };
        let date_parts: Vec<&str> = unsigned.split('-').collect();
        if date_parts.len() != 3 {
            return Err(CalendarError::Parse(format!(
                "expected YYYY-MM-DD, got {date}"
            )));
        }
        let year: i32 = parse_field(date_parts[0], "year")?;
        let month: u32 = parse_field(date_parts[1], "month")?;
        let day: u32 = parse_field(date_parts[2], "day")?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0),
            Some(t) => {
                let t = t.trim().trim_end_matches('Z');
                let time_parts: Vec<&str> = t.split(':').collect();
                match time_parts.as_slice() {
                    [h, m] => (parse_field(h, "hour")?, parse_field(m, "minute")?, 0),
                    [h, m, s] => (
                        parse_field(h, "hour")?,
                        parse_field(m, "minute")?,
                        parse_field(s, "second")?,
                    ),
                    _ => {
                        return Err(CalendarError::Parse(format!(
                            "expected HH:MM or HH:MM:SS, got {t}"
                        )));
                    }
                }
            }
        };
        Self::new(sign * year, month, day, hour, minute, second)
    }

    /// Julian Day Number of the civil date.
    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// `(month, day)` pair, ordered for comparison against fixed yearly dates.
    pub fn month_day(&self) -> (u32, u32) {
        (self.month, self.day)
    }
}

fn parse_field<T: FromStr>(s: &str, what: &str) -> Result<T, CalendarError>
where
    T::Err: std::fmt::Display,
{
    s.trim()
        .parse()
        .map_err(|e| CalendarError::Parse(format!("{what} '{s}': {e}")))
}

impl FromStr for SolarDateTime {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss[Z]`
    /// (a space also separates date and time).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(['T', ' ']) {
            Some((date, time)) => Self::from_parts(date, Some(time)),
            None => Self::from_parts(s, None),
        }
    }
}

impl std::fmt::Display for SolarDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = SolarDateTime::new(1985, 5, 29, 14, 5, 0).unwrap();
        assert_eq!(t.year, 1985);
        assert_eq!(t.month, 5);
        assert_eq!(t.day, 29);
        assert_eq!(t.hour, 14);
        assert_eq!(t.minute, 5);
        assert_eq!(t.second, 0);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(SolarDateTime::new(2023, 2, 29, 0, 0, 0).is_err());
        assert!(SolarDateTime::new(2023, 13, 1, 0, 0, 0).is_err());
        assert!(SolarDateTime::new(2023, 1, 0, 0, 0, 0).is_err());
        assert!(SolarDateTime::new(2023, 1, 1, 24, 0, 0).is_err());
        assert!(SolarDateTime::new(2023, 1, 1, 0, 60, 0).is_err());
        assert!(SolarDateTime::new(2024, 2, 29, 23, 59, 59).is_ok());
    }

    #[test]
    fn year_bounds() {
        assert!(SolarDateTime::date(MIN_YEAR, 1, 1).is_ok());
        assert!(SolarDateTime::date(MAX_YEAR, 12, 31).is_ok());
        assert!(matches!(
            SolarDateTime::new(i32::MIN, 1, 1, 0, 0, 0),
            Err(CalendarError::InvalidDate(_))
        ));
        assert!(SolarDateTime::date(MAX_YEAR + 1, 1, 1).is_err());
        assert!("-10000-01-01".parse::<SolarDateTime>().is_err());
    }

    #[test]
    fn parse_date_only() {
        let t: SolarDateTime = "1985-05-29".parse().unwrap();
        assert_eq!(t, SolarDateTime::date(1985, 5, 29).unwrap());
    }

    #[test]
    fn parse_with_minutes() {
        let t: SolarDateTime = "1985-05-29T14:05".parse().unwrap();
        assert_eq!(t.hour, 14);
        assert_eq!(t.minute, 5);
    }

    #[test]
    fn parse_with_seconds_and_zulu() {
        let t: SolarDateTime = "2024-01-15T12:30:45Z".parse().unwrap();
        assert_eq!(t.second, 45);
        let t: SolarDateTime = "2024-01-15 12:30:45".parse().unwrap();
        assert_eq!(t.minute, 30);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "1985/05/29".parse::<SolarDateTime>(),
            Err(CalendarError::Parse(_))
        ));
        assert!(matches!(
            "1985-05-29T14".parse::<SolarDateTime>(),
            Err(CalendarError::Parse(_))
        ));
        assert!(matches!(
            "1985-02-30".parse::<SolarDateTime>(),
            Err(CalendarError::InvalidDate(_))
        ));
    }

    #[test]
    fn display_format() {
        let t = SolarDateTime::new(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(t.to_string(), "2024-01-15T00:00:00");
    }
}
