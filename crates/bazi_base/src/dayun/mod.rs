//! DaYun (decade luck cycle) calculations.
//!
//! Ten 10-year cycles walk forward or backward through the sexagenary
//! tables from the month pillar. The walk direction follows the
//! traditional rule: men born in a Yang year and women born in a Yin year
//! go forward, the other two combinations go backward.
//!
//! The first cycle always starts at age 7. The traditional start age
//! depends on the distance to the nearest solar term, which is not modelled.

pub mod cycle;
pub mod types;

pub use cycle::{cycle_direction, cycle_pillar, generate_decade_cycles};
pub use types::{
    CYCLE_COUNT, DaYunEntry, DaYunSequence, Direction, START_OF_LUCK_AGE, Sex, YEARS_PER_CYCLE,
};
