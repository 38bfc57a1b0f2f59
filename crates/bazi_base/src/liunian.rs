//! Annual pillars (LiuNian).
//!
//! The sexagenary year cycle is anchored so that CE 4 is 甲子 (index 0):
//! stem `(year - 4) mod 10`, branch `(year - 4) mod 12`, floor-mod so years
//! before the anchor still resolve.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::BaziError;
use crate::pillar::Pillar;

/// Reference year whose pillar is 甲子.
pub const SEXAGENARY_EPOCH_YEAR: i32 = 4;

/// The pillar of a Gregorian year (year boundary not considered).
pub fn year_pillar(year: i32) -> Pillar {
    let offset = year as i64 - SEXAGENARY_EPOCH_YEAR as i64;
    Pillar::from_indices(offset, offset)
}

/// One year of a LiuNian run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualPillar {
    pub year: i32,
    /// Nominal (East Asian) age: 1 in the birth year.
    pub age: i32,
    pub pillar: Pillar,
    /// Element of the year stem.
    pub element: Element,
}

/// `count` consecutive annual pillars starting at `start_year`.
///
/// Fails with [`BaziError::YearOutOfRange`] when the run, or a nominal age
/// in it, does not fit in an `i32`.
pub fn annual_pillars(
    birth_year: i32,
    start_year: i32,
    count: usize,
) -> Result<Vec<AnnualPillar>, BaziError> {
    let span = i32::try_from(count)
        .map_err(|_| BaziError::YearOutOfRange(format!("run of {count} years")))?;
    if span > 0 && start_year.checked_add(span - 1).is_none() {
        return Err(BaziError::YearOutOfRange(format!(
            "{span} years from {start_year}"
        )));
    }

    (0..span)
        .map(|i| {
            let year = start_year + i;
            let age = year
                .checked_sub(birth_year)
                .and_then(|d| d.checked_add(1))
                .ok_or_else(|| {
                    BaziError::YearOutOfRange(format!("age in {year} for birth year {birth_year}"))
                })?;
            let pillar = year_pillar(year);
            Ok(AnnualPillar {
                year,
                age,
                pillar,
                element: pillar.element(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_year_is_jia_zi() {
        assert_eq!(year_pillar(4).to_string(), "甲子");
        assert_eq!(year_pillar(1984).to_string(), "甲子");
    }

    #[test]
    fn year_1985() {
        assert_eq!(year_pillar(1985).to_string(), "乙丑");
    }

    #[test]
    fn year_2024() {
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
    }

    #[test]
    fn year_before_epoch() {
        // 3 CE: offset -1 → 癸亥
        assert_eq!(year_pillar(3).to_string(), "癸亥");
        assert_eq!(year_pillar(-56).to_string(), "甲子");
    }

    #[test]
    fn sixty_year_period() {
        for y in 1900..1960 {
            assert_eq!(year_pillar(y), year_pillar(y + 60));
        }
    }

    #[test]
    fn annual_run_ages() {
        let run = annual_pillars(1985, 2024, 10).unwrap();
        assert_eq!(run.len(), 10);
        assert_eq!(run[0].year, 2024);
        assert_eq!(run[0].age, 40);
        assert_eq!(run[0].pillar.to_string(), "甲辰");
        assert_eq!(run[0].element, Element::Wood);
        assert_eq!(run[9].year, 2033);
        assert_eq!(run[9].age, 49);
    }

    #[test]
    fn empty_run() {
        assert!(annual_pillars(1985, 2024, 0).unwrap().is_empty());
        assert!(annual_pillars(1985, i32::MAX, 0).unwrap().is_empty());
    }

    #[test]
    fn run_ending_at_max_year() {
        let run = annual_pillars(i32::MAX - 1, i32::MAX - 1, 2).unwrap();
        assert_eq!(run[1].year, i32::MAX);
        assert_eq!(run[1].age, 2);
    }

    #[test]
    fn run_past_max_year_rejected() {
        let err = annual_pillars(1985, i32::MAX, 2).unwrap_err();
        assert!(matches!(err, BaziError::YearOutOfRange(_)));
    }

    #[test]
    fn oversized_count_rejected() {
        let err = annual_pillars(1985, 2024, i32::MAX as usize + 3).unwrap_err();
        assert!(matches!(err, BaziError::YearOutOfRange(_)));
    }

    #[test]
    fn age_overflow_rejected() {
        let err = annual_pillars(i32::MIN, 2024, 1).unwrap_err();
        assert!(matches!(err, BaziError::YearOutOfRange(ref m) if m.contains("age")));
    }
}
