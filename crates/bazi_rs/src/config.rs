//! Report configuration, loadable from TOML.
//!
//! ```toml
//! annual_start_year = 2024
//! annual_count = 10
//! ```

use std::path::Path;

use bazi_calendar::{MAX_YEAR, MIN_YEAR};
use serde::{Deserialize, Serialize};

use crate::error::BaziRsError;

/// Default number of annual pillars in a report.
pub const DEFAULT_ANNUAL_COUNT: usize = 10;

/// Upper bound on annual pillars per report.
pub const MAX_ANNUAL_COUNT: usize = 120;

/// Knobs for [`compute_report`](crate::compute_report).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// First year of the annual-pillar run; `None` = the birth year.
    pub annual_start_year: Option<i32>,
    /// Number of annual pillars.
    pub annual_count: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            annual_start_year: None,
            annual_count: DEFAULT_ANNUAL_COUNT,
        }
    }
}

impl ReportConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, BaziRsError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| BaziRsError::Config(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, BaziRsError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded report config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BaziRsError> {
        if self.annual_count > MAX_ANNUAL_COUNT {
            return Err(BaziRsError::Config(format!(
                "annual_count {} exceeds {MAX_ANNUAL_COUNT}",
                self.annual_count
            )));
        }
        if let Some(start) = self.annual_start_year {
            if !(MIN_YEAR..=MAX_YEAR).contains(&start) {
                return Err(BaziRsError::Config(format!(
                    "annual_start_year {start} outside {MIN_YEAR}..={MAX_YEAR}"
                )));
            }
        }
        Ok(())
    }
}
