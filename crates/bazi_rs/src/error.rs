//! Error type for the convenience wrapper.

use bazi_base::BaziError;
use bazi_calendar::CalendarError;
use thiserror::Error;

/// Errors from report construction or configuration loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BaziRsError {
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    #[error("bazi error: {0}")]
    Bazi(#[from] BaziError),
    /// Configuration file could not be parsed or holds invalid values.
    #[error("config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
