//! Convenience wrapper for the BaZi engine.
//!
//! Glues the calendar service to the pure engine so callers can go from a
//! solar timestamp straight to a chart, balance, decade cycles, or a full
//! serializable report.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bazi_rs::*;
//!
//! let dt: SolarDateTime = "1985-05-29T14:05".parse().unwrap();
//! let report = report(BirthData::new(dt, Sex::Male)).unwrap();
//! println!("day master: {}", report.chart.day_master);
//! ```

pub mod config;
pub mod convenience;
pub mod error;
pub mod report;

// Primary re-exports: callers should only need `use bazi_rs::*`
pub use config::{DEFAULT_ANNUAL_COUNT, MAX_ANNUAL_COUNT, ReportConfig};
pub use convenience::{balance, chart, chart_from_symbols, dayun, report};
pub use error::BaziRsError;
pub use report::{BaziReport, BirthData, compute_report};

// Re-export engine and calendar types so callers don't need direct deps.
pub use bazi_base::{
    AnnualPillar, BaziChart, BaziError, Branch, ChartStrength, DaYunEntry, DaYunSequence,
    DayMasterStrength, Direction, Element, ElementAttributes, ElementCounts, ElementalBalance,
    Pillar, Sex, Stem, ZodiacAnimal,
};
pub use bazi_calendar::{
    CalendarError, CalendarService, FixedCalendar, LunarPillars, SolarDateTime, SolarTermCalendar,
};
