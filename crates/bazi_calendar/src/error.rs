//! Error types for calendar conversion.

use bazi_base::BaziError;
use thiserror::Error;

/// Errors from timestamp validation, parsing, or pillar resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date/time fields out of range (month 13, Feb 30, hour 24, ...).
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Timestamp string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
    /// The service produced pillars the engine cannot use.
    #[error(transparent)]
    Bazi(#[from] BaziError),
}
