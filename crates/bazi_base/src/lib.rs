//! BaZi (four pillars) calculation engine.
//!
//! This crate provides:
//! - Stem, branch and element tables with zodiac animals and double-hours
//! - Four-pillar chart derivation from calendar-resolved pillars
//! - Elemental balance and favorable-element analysis
//! - DaYun (decade luck cycle) generation
//! - Annual (LiuNian) pillars
//!
//! Everything here is pure table lookup and modular arithmetic over
//! immutable inputs. Calendar conversion lives in `bazi_calendar`.

pub mod balance;
pub mod branch;
pub mod dayun;
pub mod element;
pub mod error;
pub mod liunian;
pub mod pillar;
pub mod stem;
pub mod util;

pub use balance::{
    ChartStrength, DayMasterStrength, ElementCounts, ElementalBalance, STRONG_CHART_MIN,
    SYMBOLS_PER_CHART, WEAK_CHART_MAX, WEAK_DAY_MASTER_MAX, analyze_balance, favorable_elements,
};
pub use branch::{ALL_BRANCHES, Branch, HOUR_RANGES, HourRange, ZodiacAnimal};
pub use dayun::{
    CYCLE_COUNT, DaYunEntry, DaYunSequence, Direction, START_OF_LUCK_AGE, Sex, YEARS_PER_CYCLE,
    cycle_direction, generate_decade_cycles,
};
pub use element::{ALL_ELEMENTS, Element, ElementAttributes};
pub use error::BaziError;
pub use liunian::{AnnualPillar, SEXAGENARY_EPOCH_YEAR, annual_pillars, year_pillar};
pub use pillar::{BaziChart, Pillar, derive_pillars, hour_branch, hour_stem};
pub use stem::{ALL_STEMS, Polarity, Stem};
