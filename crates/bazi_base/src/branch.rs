//! The 12 Earthly Branches (DiZhi), their zodiac animals and double-hours.
//!
//! Index 0 = Zi (子, Rat). Each branch governs a two-hour window of the day;
//! Zi straddles midnight, covering `[23, 24) ∪ [0, 1)`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::BaziError;
use crate::stem::Polarity;
use crate::util::wrap_index;

/// The 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_SYMBOLS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

/// Double-hour windows, index-aligned with [`ALL_BRANCHES`].
pub const HOUR_RANGES: [HourRange; 12] = [
    HourRange::new(23, 1),
    HourRange::new(1, 3),
    HourRange::new(3, 5),
    HourRange::new(5, 7),
    HourRange::new(7, 9),
    HourRange::new(9, 11),
    HourRange::new(11, 13),
    HourRange::new(13, 15),
    HourRange::new(15, 17),
    HourRange::new(17, 19),
    HourRange::new(19, 21),
    HourRange::new(21, 23),
];

/// Half-open `[start, end)` window of clock hours.
///
/// When `start > end` the window wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether a clock hour in `[0, 24)` falls inside this window.
    pub const fn contains(&self, hour: u32) -> bool {
        if self.start < self.end {
            self.start <= hour && hour < self.end
        } else {
            (hour >= self.start && hour < 24) || hour < self.end
        }
    }
}

/// Zodiac animal of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

const ZODIAC_ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Rabbit,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

impl ZodiacAnimal {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Chinese character.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龍",
            Self::Snake => "蛇",
            Self::Horse => "馬",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "雞",
            Self::Dog => "狗",
            Self::Pig => "豬",
        }
    }
}

impl Branch {
    /// Pinyin name.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Chinese character.
    pub fn symbol(self) -> &'static str {
        BRANCH_SYMBOLS[self.index() as usize]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cyclic index; any integer is folded into `[0, 12)`.
    pub fn from_index(idx: i64) -> Self {
        ALL_BRANCHES[wrap_index(idx, 12) as usize]
    }

    /// Element of the branch.
    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Zodiac animal of the branch (Zi = Rat).
    pub fn zodiac_animal(self) -> ZodiacAnimal {
        ZODIAC_ANIMALS[self.index() as usize]
    }

    /// The double-hour window this branch governs.
    pub fn hour_range(self) -> HourRange {
        HOUR_RANGES[self.index() as usize]
    }

    /// Branch `offset` steps away on the cycle (negative walks backward).
    pub fn offset(self, offset: i64) -> Self {
        Self::from_index(self.index() as i64 + offset)
    }

    /// Branch governing a clock hour.
    ///
    /// Fails with [`BaziError::InvalidHour`] for `hour >= 24`.
    pub fn from_hour(hour: u32) -> Result<Self, BaziError> {
        if hour >= 24 {
            return Err(BaziError::InvalidHour(hour));
        }
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.hour_range().contains(hour))
            .ok_or(BaziError::InvalidHour(hour))
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Branch {
    type Err = BaziError;

    /// Accepts the Chinese character or the pinyin name (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.symbol() == s || b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaziError::UnknownSymbol(format!("branch '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn zodiac_alignment() {
        assert_eq!(Branch::Zi.zodiac_animal(), ZodiacAnimal::Rat);
        assert_eq!(Branch::Chou.zodiac_animal(), ZodiacAnimal::Ox);
        assert_eq!(Branch::Wei.zodiac_animal(), ZodiacAnimal::Goat);
        assert_eq!(Branch::Hai.zodiac_animal(), ZodiacAnimal::Pig);
    }

    #[test]
    fn earth_branches_are_the_four_storehouses() {
        let earth: Vec<Branch> = ALL_BRANCHES
            .iter()
            .copied()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(
            earth,
            vec![Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu]
        );
    }

    #[test]
    fn zi_wraps_midnight() {
        assert_eq!(Branch::from_hour(23).unwrap(), Branch::Zi);
        assert_eq!(Branch::from_hour(0).unwrap(), Branch::Zi);
        assert_eq!(Branch::from_hour(1).unwrap(), Branch::Chou);
    }

    #[test]
    fn range_boundaries_are_half_open() {
        assert_eq!(Branch::from_hour(13).unwrap(), Branch::Wei);
        assert_eq!(Branch::from_hour(14).unwrap(), Branch::Wei);
        assert_eq!(Branch::from_hour(15).unwrap(), Branch::Shen);
        assert_eq!(Branch::from_hour(22).unwrap(), Branch::Hai);
    }

    #[test]
    fn hour_24_rejected() {
        assert_eq!(Branch::from_hour(24), Err(BaziError::InvalidHour(24)));
        assert_eq!(Branch::from_hour(99), Err(BaziError::InvalidHour(99)));
    }

    #[test]
    fn every_hour_matches_exactly_one_branch() {
        for hour in 0..24 {
            let hits = HOUR_RANGES.iter().filter(|r| r.contains(hour)).count();
            assert_eq!(hits, 1, "hour {hour} matched {hits} ranges");
        }
    }

    #[test]
    fn parse_symbol_and_name() {
        assert_eq!("午".parse::<Branch>().unwrap(), Branch::Wu);
        assert_eq!("SHEN".parse::<Branch>().unwrap(), Branch::Shen);
        assert!("甲".parse::<Branch>().is_err());
    }
}
