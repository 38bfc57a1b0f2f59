//! Error types for BaZi calculations.

use thiserror::Error;

/// Errors from BaZi chart construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Birth hour outside `[0, 24)`.
    #[error("invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),
    /// Calendar service returned a stem/branch that maps to no table entry.
    #[error("invalid calendar data: {0}")]
    InvalidCalendarData(String),
    /// A year run reaches past the representable calendar range.
    #[error("year out of range: {0}")]
    YearOutOfRange(String),
    /// A stem, branch, pillar, or sex string could not be parsed.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
}
