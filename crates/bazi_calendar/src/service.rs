//! The calendar-service seam between civil time and the BaZi engine.
//!
//! A service resolves a solar timestamp to the year, month and day pillars.
//! The engine never guesses: a response whose symbols do not map onto the
//! stem/branch tables is rejected with [`BaziError::InvalidCalendarData`].

use bazi_base::{BaziError, Pillar};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::solar_time::SolarDateTime;

/// Year, month and day pillars as resolved by a calendar service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
}

impl LunarPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar) -> Self {
        Self { year, month, day }
    }

    /// Build from a raw textual response, e.g. `("乙丑", "辛巳", "戊辰")`.
    pub fn from_symbols(year: &str, month: &str, day: &str) -> Result<Self, BaziError> {
        Ok(Self::new(
            parse_response_pillar("year", year)?,
            parse_response_pillar("month", month)?,
            parse_response_pillar("day", day)?,
        ))
    }
}

fn parse_response_pillar(which: &str, raw: &str) -> Result<Pillar, BaziError> {
    if raw.trim().is_empty() {
        return Err(BaziError::InvalidCalendarData(format!("{which} pillar missing")));
    }
    raw.parse()
        .map_err(|e| BaziError::InvalidCalendarData(format!("{which} pillar '{raw}': {e}")))
}

/// Resolves solar timestamps to lunar pillars.
pub trait CalendarService {
    fn lunar_pillars(&self, datetime: &SolarDateTime) -> Result<LunarPillars, CalendarError>;
}

impl<T: CalendarService + ?Sized> CalendarService for &T {
    fn lunar_pillars(&self, datetime: &SolarDateTime) -> Result<LunarPillars, CalendarError> {
        (**self).lunar_pillars(datetime)
    }
}

/// A service that answers every query with one pre-resolved raw response.
///
/// Stands in for an external converter whose answer is already known,
/// e.g. pillars read off a printed almanac.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCalendar {
    year: String,
    month: String,
    day: String,
}

impl FixedCalendar {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }
}

impl CalendarService for FixedCalendar {
    fn lunar_pillars(&self, datetime: &SolarDateTime) -> Result<LunarPillars, CalendarError> {
        let pillars = LunarPillars::from_symbols(&self.year, &self.month, &self.day)?;
        tracing::debug!(%datetime, year = %pillars.year, month = %pillars.month, day = %pillars.day, "fixed calendar response");
        Ok(pillars)
    }
}
