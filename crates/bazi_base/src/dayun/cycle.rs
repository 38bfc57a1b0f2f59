//! DaYun generation: direction from sex and year polarity, then ten
//! consecutive pillars walked from the month pillar.

use crate::pillar::{BaziChart, Pillar};
use crate::stem::{Polarity, Stem};

use super::types::{
    CYCLE_COUNT, DaYunEntry, DaYunSequence, Direction, START_OF_LUCK_AGE, Sex, YEARS_PER_CYCLE,
};

/// Walk direction: male in a Yang year or female in a Yin year go forward.
pub fn cycle_direction(year_stem: Stem, sex: Sex) -> Direction {
    let is_yang_year = year_stem.polarity() == Polarity::Yang;
    if (sex == Sex::Male) == is_yang_year {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

/// The `step`-th cycle pillar (0-based) walked from `month`.
pub fn cycle_pillar(month: Pillar, direction: Direction, step: usize) -> Pillar {
    let delta = direction.sign() * (step as i64 + 1);
    Pillar::new(month.stem.offset(delta), month.branch.offset(delta))
}

/// Generate the ten decade cycles for a chart.
pub fn generate_decade_cycles(chart: &BaziChart, sex: Sex) -> DaYunSequence {
    let direction = cycle_direction(chart.year.stem, sex);

    let entries = (0..CYCLE_COUNT)
        .map(|i| {
            let pillar = cycle_pillar(chart.month, direction, i);
            let start_age = START_OF_LUCK_AGE + YEARS_PER_CYCLE * i as u32;
            DaYunEntry {
                pillar,
                start_age,
                end_age: start_age + YEARS_PER_CYCLE - 1,
                element: pillar.element(),
            }
        })
        .collect();

    DaYunSequence { direction, entries }
}
