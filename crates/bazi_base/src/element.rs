//! The five elements (WuXing) and their production/overcoming cycles.
//!
//! The production cycle runs Wood → Fire → Earth → Metal → Water → Wood.
//! The overcoming cycle skips one step: Wood → Earth → Water → Fire → Metal → Wood.

use serde::{Deserialize, Serialize};

/// The five elements in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in canonical order (index 0 = Wood).
///
/// Every tie-break in the balance analysis iterates this array.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a cyclic offset from this one on the production cycle.
    const fn step(self, offset: u8) -> Self {
        ALL_ELEMENTS[((self.index() + offset) % 5) as usize]
    }

    /// The element this one produces (one step forward).
    pub const fn produces(self) -> Self {
        self.step(1)
    }

    /// The element that produces this one (one step back).
    pub const fn produced_by(self) -> Self {
        self.step(4)
    }

    /// The element this one overcomes (two steps forward).
    pub const fn overcomes(self) -> Self {
        self.step(2)
    }

    /// The element that overcomes this one (two steps back).
    pub const fn overcome_by(self) -> Self {
        self.step(3)
    }

    /// Colours associated with the element.
    pub const fn colors(self) -> [&'static str; 2] {
        match self {
            Self::Wood => ["green", "cyan"],
            Self::Fire => ["red", "orange"],
            Self::Earth => ["yellow", "brown"],
            Self::Metal => ["white", "gold"],
            Self::Water => ["black", "blue"],
        }
    }

    /// Compass direction associated with the element.
    pub const fn direction(self) -> &'static str {
        match self {
            Self::Wood => "East",
            Self::Fire => "South",
            Self::Earth => "Centre",
            Self::Metal => "West",
            Self::Water => "North",
        }
    }

    /// Lucky digits from the He Tu pairing.
    pub const fn lucky_digits(self) -> [u8; 2] {
        match self {
            Self::Wood => [3, 8],
            Self::Fire => [2, 7],
            Self::Earth => [5, 0],
            Self::Metal => [4, 9],
            Self::Water => [1, 6],
        }
    }

    /// Accessory materials that carry the element.
    pub const fn accessories(self) -> &'static [&'static str] {
        match self {
            Self::Wood => &["wood"],
            Self::Fire => &["ruby", "agate"],
            Self::Earth => &["jade", "ceramic"],
            Self::Metal => &["metal", "crystal"],
            Self::Water => &["obsidian", "pearl"],
        }
    }

    /// Household plants associated with the element.
    pub const fn plants(self) -> [&'static str; 2] {
        match self {
            Self::Wood => ["pothos", "lucky bamboo"],
            Self::Fire => ["anthurium", "garden balsam"],
            Self::Earth => ["cactus", "succulents"],
            Self::Metal => ["white champaca", "jasmine"],
            Self::Water => ["narcissus", "lotus"],
        }
    }

    /// All 5 elements in canonical order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup-table attributes of one element, as consumed by report layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementAttributes {
    pub element: Element,
    pub symbol: String,
    pub colors: Vec<String>,
    pub direction: String,
    pub lucky_digits: Vec<u8>,
    pub accessories: Vec<String>,
    pub plants: Vec<String>,
}

impl From<Element> for ElementAttributes {
    fn from(element: Element) -> Self {
        Self {
            element,
            symbol: element.symbol().to_string(),
            colors: element.colors().iter().map(|c| c.to_string()).collect(),
            direction: element.direction().to_string(),
            lucky_digits: element.lucky_digits().to_vec(),
            accessories: element.accessories().iter().map(|a| a.to_string()).collect(),
            plants: element.plants().iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn production_cycle() {
        assert_eq!(Element::Wood.produces(), Element::Fire);
        assert_eq!(Element::Water.produces(), Element::Wood);
        assert_eq!(Element::Wood.produced_by(), Element::Water);
        assert_eq!(Element::Earth.produced_by(), Element::Fire);
    }

    #[test]
    fn overcoming_cycle() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
        assert_eq!(Element::Wood.overcome_by(), Element::Metal);
        assert_eq!(Element::Fire.overcome_by(), Element::Water);
    }

    #[test]
    fn produces_and_produced_by_are_inverse() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.produces().produced_by(), e);
            assert_eq!(e.overcomes().overcome_by(), e);
        }
    }

    #[test]
    fn lucky_digits_cover_all_ten() {
        let mut seen = [false; 10];
        for e in ALL_ELEMENTS {
            for d in e.lucky_digits() {
                seen[d as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn attributes_from_element() {
        let attrs = ElementAttributes::from(Element::Water);
        assert_eq!(attrs.symbol, "水");
        assert_eq!(attrs.direction, "North");
        assert_eq!(attrs.lucky_digits, vec![1, 6]);
        assert_eq!(attrs.accessories, vec!["obsidian", "pearl"]);
        assert_eq!(attrs.plants, vec!["narcissus", "lotus"]);
    }

    #[test]
    fn wood_has_a_single_accessory() {
        assert_eq!(Element::Wood.accessories(), &["wood"]);
        for e in ALL_ELEMENTS {
            assert!(!e.accessories().is_empty());
        }
    }

    #[test]
    fn plants_are_distinct_across_elements() {
        let mut all: Vec<&str> = ALL_ELEMENTS.iter().flat_map(|e| e.plants()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 10);
    }
}
