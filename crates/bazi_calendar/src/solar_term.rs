//! Approximate calendar service from fixed solar-term dates.
//!
//! The BaZi year opens at Lichun and each month opens at one of the twelve
//! "jie" solar terms. Real term instants drift by a day or so from year to
//! year; this service pins each to a fixed Gregorian date, which is exact
//! for most of the year and off by at most a day near a boundary.
//!
//! - Year: Gregorian year, minus one before Lichun (Feb 4).
//! - Month branch: latest term on or before the date; month stem by the
//!   five-tigers rule `yin_stem = year_stem * 2 + 2`.
//! - Day: sexagenary day `(JDN + 49) mod 60`, 0 = 甲子. The day does not
//!   roll over at 23:00.

use bazi_base::{Branch, Pillar, Stem, year_pillar};

use crate::error::CalendarError;
use crate::service::{CalendarService, LunarPillars};
use crate::solar_time::{MAX_YEAR, MIN_YEAR, SolarDateTime};

/// Offset aligning Julian Day Numbers with the sexagenary day cycle.
pub const SEXAGENARY_DAY_OFFSET: i64 = 49;

/// Fixed Gregorian date of Lichun, the start of the BaZi year.
pub const LICHUN: (u32, u32) = (2, 4);

/// Month-opening terms as `(month, day, branch)`, in calendar order.
pub const MONTH_TERMS: [(u32, u32, Branch); 12] = [
    (1, 6, Branch::Chou),  // Xiaohan
    (2, 4, Branch::Yin),   // Lichun
    (3, 6, Branch::Mao),   // Jingzhe
    (4, 5, Branch::Chen),  // Qingming
    (5, 6, Branch::Si),    // Lixia
    (6, 6, Branch::Wu),    // Mangzhong
    (7, 7, Branch::Wei),   // Xiaoshu
    (8, 8, Branch::Shen),  // Liqiu
    (9, 8, Branch::You),   // Bailu
    (10, 8, Branch::Xu),   // Hanlu
    (11, 7, Branch::Hai),  // Lidong
    (12, 7, Branch::Zi),   // Daxue
];

/// Day pillar of a Julian Day Number.
pub fn day_pillar(jdn: i64) -> Pillar {
    Pillar::from_sexagenary(jdn + SEXAGENARY_DAY_OFFSET)
}

/// Month branch for a `(month, day)`; dates before Xiaohan stay in Zi.
pub fn month_branch(month_day: (u32, u32)) -> Branch {
    MONTH_TERMS
        .iter()
        .rev()
        .find(|(m, d, _)| (*m, *d) <= month_day)
        .map(|(_, _, b)| *b)
        .unwrap_or(Branch::Zi)
}

/// Month stem from the year stem and month branch (five-tigers rule).
pub fn month_stem(year_stem: Stem, branch: Branch) -> Stem {
    let yin_month_stem = year_stem.index() as i64 * 2 + 2;
    let months_since_yin = (branch.index() as i64 - Branch::Yin.index() as i64).rem_euclid(12);
    Stem::from_index(yin_month_stem + months_since_yin)
}

/// The BaZi year a date belongs to (changes at Lichun).
///
/// Saturates at `i32::MIN` for timestamps built without
/// [`SolarDateTime::new`].
pub fn solar_term_year(datetime: &SolarDateTime) -> i32 {
    if datetime.month_day() < LICHUN {
        datetime.year.saturating_sub(1)
    } else {
        datetime.year
    }
}

/// Calendar service backed by the fixed solar-term table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolarTermCalendar;

impl SolarTermCalendar {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendarService for SolarTermCalendar {
    fn lunar_pillars(&self, datetime: &SolarDateTime) -> Result<LunarPillars, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&datetime.year) {
            return Err(CalendarError::InvalidDate(format!("year {}", datetime.year)));
        }
        let year = year_pillar(solar_term_year(datetime));
        let branch = month_branch(datetime.month_day());
        let month = Pillar::new(month_stem(year.stem, branch), branch);
        let day = day_pillar(datetime.jdn());

        tracing::debug!(%datetime, %year, %month, %day, "resolved solar-term pillars");
        Ok(LunarPillars::new(year, month, day))
    }
}
