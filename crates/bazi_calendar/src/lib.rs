//! Solar timestamps and the calendar service consumed by the BaZi engine.
//!
//! The engine only needs the year, month and day pillars of a birth moment.
//! [`CalendarService`] is the seam; [`SolarTermCalendar`] is an approximate
//! implementation from fixed solar-term dates, and [`FixedCalendar`] replays
//! a known raw response.

pub mod error;
pub mod julian;
pub mod service;
pub mod solar_term;
pub mod solar_time;

pub use error::CalendarError;
pub use julian::{calendar_to_jdn, days_in_month, is_leap_year, jdn_to_calendar};
pub use service::{CalendarService, FixedCalendar, LunarPillars};
pub use solar_term::{
    LICHUN, MONTH_TERMS, SEXAGENARY_DAY_OFFSET, SolarTermCalendar, day_pillar, month_branch,
    month_stem, solar_term_year,
};
pub use solar_time::{MAX_YEAR, MIN_YEAR, SolarDateTime};
