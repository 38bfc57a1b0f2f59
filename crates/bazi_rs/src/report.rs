//! Complete BaZi report: every structure a narrative layer consumes.

use bazi_base::{
    AnnualPillar, BaziChart, DaYunSequence, ElementAttributes, ElementalBalance, Sex,
    analyze_balance, annual_pillars, derive_pillars, generate_decade_cycles,
};
use bazi_calendar::{CalendarService, LunarPillars, SolarDateTime};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::BaziRsError;

/// Birth moment and sex of the chart owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    pub datetime: SolarDateTime,
    pub sex: Sex,
}

impl BirthData {
    pub const fn new(datetime: SolarDateTime, sex: Sex) -> Self {
        Self { datetime, sex }
    }
}

/// Chart, balance, decade cycles and annual pillars for one birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziReport {
    pub birth: BirthData,
    pub lunar_pillars: LunarPillars,
    pub chart: BaziChart,
    pub balance: ElementalBalance,
    pub dayun: DaYunSequence,
    pub annual: Vec<AnnualPillar>,
    /// Colour, direction, digit, accessory and plant attributes of the two
    /// favorable elements.
    pub favorable_attributes: Vec<ElementAttributes>,
    /// Colours of the element that overcomes the dominant one.
    pub unfavorable_colors: Vec<String>,
}

/// Resolve pillars through `service` and build the full report.
///
/// Fails atomically: no partial report on calendar or hour errors.
pub fn compute_report<S: CalendarService>(
    service: &S,
    birth: &BirthData,
    config: &ReportConfig,
) -> Result<BaziReport, BaziRsError> {
    config.validate()?;

    let dt = birth.datetime;
    let lunar_pillars = service.lunar_pillars(&dt)?;
    let chart = derive_pillars(
        lunar_pillars.year,
        lunar_pillars.month,
        lunar_pillars.day,
        dt.hour,
    )?;
    let balance = analyze_balance(&chart);
    let dayun = generate_decade_cycles(&chart, birth.sex);
    tracing::debug!(
        year = %chart.year,
        month = %chart.month,
        day = %chart.day,
        hour = %chart.hour,
        direction = ?dayun.direction,
        favorable = ?balance.favorable_elements,
        "computed chart"
    );

    let start = config.annual_start_year.unwrap_or(dt.year);
    let annual = annual_pillars(dt.year, start, config.annual_count)?;

    Ok(BaziReport {
        birth: *birth,
        lunar_pillars,
        chart,
        balance,
        dayun,
        annual,
        favorable_attributes: balance
            .favorable_elements
            .iter()
            .map(|e| ElementAttributes::from(*e))
            .collect(),
        unfavorable_colors: balance
            .unfavorable_colors()
            .iter()
            .map(|c| c.to_string())
            .collect(),
    })
}
