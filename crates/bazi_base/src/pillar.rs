//! Pillars and four-pillar chart derivation.
//!
//! The year, month and day pillars come from a calendar service already
//! resolved. The hour pillar is derived here: the branch from the clock
//! hour, the stem from the five-day stem cycle
//! `hour_stem = (day_stem * 2 + hour_branch) mod 10`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::{Branch, ZodiacAnimal};
use crate::element::Element;
use crate::error::BaziError;
use crate::stem::Stem;

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar from raw stem/branch indices, each folded into its cycle.
    pub fn from_indices(stem_idx: i64, branch_idx: i64) -> Self {
        Self::new(Stem::from_index(stem_idx), Branch::from_index(branch_idx))
    }

    /// Pillar at a position of the 60-pair sexagenary cycle (0 = 甲子).
    pub fn from_sexagenary(idx: i64) -> Self {
        Self::from_indices(idx, idx)
    }

    /// Position in the sexagenary cycle, or `None` when stem and branch
    /// have different polarity and so never pair up.
    pub fn sexagenary_index(&self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        (0..6u8)
            .map(|k| s + 10 * k)
            .find(|n| n % 12 == b)
    }

    /// Element of the stem, used as the element of the pillar as a whole.
    pub fn element(&self) -> Element {
        self.stem.element()
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for Pillar {
    type Err = BaziError;

    /// Accepts `甲子`, or pinyin separated by space or dash (`Jia Zi`, `jia-zi`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == '-' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let (stem, branch) = match parts.as_slice() {
            [stem, branch] => (*stem, *branch),
            [joined] => {
                let mut chars = joined.char_indices();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(_), Some((split, _)), None) => joined.split_at(split),
                    _ => return Err(BaziError::UnknownSymbol(format!("pillar '{s}'"))),
                }
            }
            _ => return Err(BaziError::UnknownSymbol(format!("pillar '{s}'"))),
        };
        Ok(Self::new(stem.parse()?, branch.parse()?))
    }
}

/// The four pillars of a birth moment plus their headline attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Stem of the day pillar.
    pub day_master: Stem,
    pub day_master_element: Element,
    /// Animal of the year branch.
    pub zodiac_animal: ZodiacAnimal,
}

impl BaziChart {
    /// Assemble a chart from four resolved pillars.
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            day_master: day.stem,
            day_master_element: day.stem.element(),
            zodiac_animal: year.branch.zodiac_animal(),
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(|p| p.stem)
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(|p| p.branch)
    }
}

/// Branch of the double-hour containing `hour`.
pub fn hour_branch(hour: u32) -> Result<Branch, BaziError> {
    Branch::from_hour(hour)
}

/// Hour stem from the day stem and hour branch (five-day stem cycle).
pub fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    let idx = (day_stem.index() as i64 * 2 + hour_branch.index() as i64) % 10;
    Stem::from_index(idx)
}

/// Derive the full chart from calendar-resolved pillars and a clock hour.
///
/// Fails with [`BaziError::InvalidHour`] when `birth_hour` is not in `[0, 24)`.
pub fn derive_pillars(
    year: Pillar,
    month: Pillar,
    day: Pillar,
    birth_hour: u32,
) -> Result<BaziChart, BaziError> {
    let branch = hour_branch(birth_hour)?;
    let stem = hour_stem(day.stem, branch);
    Ok(BaziChart::new(year, month, day, Pillar::new(stem, branch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn display_roundtrip() {
        let pillar = Pillar::new(Stem::Jia, Branch::Zi);
        assert_eq!(pillar.to_string(), "甲子");
        assert_eq!(p("甲子"), pillar);
    }

    #[test]
    fn parse_pinyin_forms() {
        assert_eq!(p("Geng Wu"), Pillar::new(Stem::Geng, Branch::Wu));
        assert_eq!(p("ren-xu"), Pillar::new(Stem::Ren, Branch::Xu));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("甲".parse::<Pillar>().is_err());
        assert!("甲子丑".parse::<Pillar>().is_err());
        assert!("子甲".parse::<Pillar>().is_err());
        assert!("".parse::<Pillar>().is_err());
    }

    #[test]
    fn sexagenary_roundtrip() {
        for n in 0..60 {
            assert_eq!(Pillar::from_sexagenary(n).sexagenary_index(), Some(n as u8));
        }
    }

    #[test]
    fn mismatched_polarity_has_no_sexagenary_index() {
        assert_eq!(Pillar::new(Stem::Jia, Branch::Chou).sexagenary_index(), None);
    }

    #[test]
    fn jia_day_wu_hour_gives_geng() {
        assert_eq!(hour_stem(Stem::Jia, Branch::Wu), Stem::Geng);
    }

    #[test]
    fn bing_day_wei_hour_gives_yi() {
        // (2*2 + 7) mod 10 = 1
        assert_eq!(hour_stem(Stem::Bing, Branch::Wei), Stem::Yi);
    }

    #[test]
    fn zi_hour_follows_five_rat_rule() {
        // 甲/己 → 甲子, 乙/庚 → 丙子, 丙/辛 → 戊子, 丁/壬 → 庚子, 戊/癸 → 壬子
        let expected = [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren];
        for (i, day) in Stem::all().iter().enumerate() {
            assert_eq!(hour_stem(*day, Branch::Zi), expected[i % 5]);
        }
    }

    #[test]
    fn derive_passes_through_and_fills_attributes() {
        let chart = derive_pillars(p("乙丑"), p("辛巳"), p("丙寅"), 14).unwrap();
        assert_eq!(chart.year, p("乙丑"));
        assert_eq!(chart.month, p("辛巳"));
        assert_eq!(chart.day, p("丙寅"));
        assert_eq!(chart.hour, p("乙未"));
        assert_eq!(chart.day_master, Stem::Bing);
        assert_eq!(chart.day_master_element, Element::Fire);
        assert_eq!(chart.zodiac_animal, ZodiacAnimal::Ox);
    }

    #[test]
    fn derive_rejects_hour_24() {
        let err = derive_pillars(p("甲子"), p("丙寅"), p("甲子"), 24).unwrap_err();
        assert_eq!(err, BaziError::InvalidHour(24));
    }

    #[test]
    fn stems_and_branches_in_pillar_order() {
        let chart = derive_pillars(p("甲子"), p("丙寅"), p("戊辰"), 0).unwrap();
        assert_eq!(chart.stems(), [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Ren]);
        assert_eq!(
            chart.branches(),
            [Branch::Zi, Branch::Yin, Branch::Chen, Branch::Zi]
        );
    }
}
