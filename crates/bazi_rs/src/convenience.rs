use bazi_base::{
    BaziChart, DaYunSequence, ElementalBalance, Sex, analyze_balance, derive_pillars,
    generate_decade_cycles,
};
use bazi_calendar::{CalendarService, LunarPillars, SolarDateTime, SolarTermCalendar};

use crate::config::ReportConfig;
use crate::error::BaziRsError;
use crate::report::{BaziReport, BirthData, compute_report};

/// Chart for a solar timestamp using the solar-term calendar.
pub fn chart(datetime: SolarDateTime) -> Result<BaziChart, BaziRsError> {
    let lp = SolarTermCalendar::new().lunar_pillars(&datetime)?;
    Ok(derive_pillars(lp.year, lp.month, lp.day, datetime.hour)?)
}

/// Chart from explicitly supplied year/month/day pillar symbols.
///
/// Shorthand for [`LunarPillars::from_symbols`] followed by
/// [`derive_pillars`]; bypasses calendar conversion entirely.
pub fn chart_from_symbols(
    year: &str,
    month: &str,
    day: &str,
    hour: u32,
) -> Result<BaziChart, BaziRsError> {
    let lp = LunarPillars::from_symbols(year, month, day)?;
    Ok(derive_pillars(lp.year, lp.month, lp.day, hour)?)
}

/// Elemental balance for a solar timestamp.
pub fn balance(datetime: SolarDateTime) -> Result<ElementalBalance, BaziRsError> {
    Ok(analyze_balance(&chart(datetime)?))
}

/// Decade cycles for a solar timestamp and sex.
pub fn dayun(datetime: SolarDateTime, sex: Sex) -> Result<DaYunSequence, BaziRsError> {
    Ok(generate_decade_cycles(&chart(datetime)?, sex))
}

/// Full report with the solar-term calendar and default config.
pub fn report(birth: BirthData) -> Result<BaziReport, BaziRsError> {
    compute_report(&SolarTermCalendar::new(), &birth, &ReportConfig::default())
}
