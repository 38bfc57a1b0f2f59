//! Elemental balance of a chart and the favorable-element recommendation.
//!
//! Counts the element of each of the eight stem/branch symbols, then
//! judges the day master weak (its element appears at most twice) or
//! strong. A weak day master favors its producer and itself; a strong one
//! favors the element that overcomes it and the element it produces.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::BaziChart;

/// Symbols per chart: 4 stems + 4 branches.
pub const SYMBOLS_PER_CHART: u8 = 8;

/// Day-master count at or below which the day master is weak.
pub const WEAK_DAY_MASTER_MAX: u8 = 2;

/// Strength regime of the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayMasterStrength {
    Weak,
    Strong,
}

impl DayMasterStrength {
    pub const fn from_count(count: u8) -> Self {
        if count <= WEAK_DAY_MASTER_MAX {
            Self::Weak
        } else {
            Self::Strong
        }
    }
}

/// Highest element count at or above which the chart leans strong.
pub const STRONG_CHART_MIN: u8 = 4;

/// Highest element count at or below which the chart leans weak.
pub const WEAK_CHART_MAX: u8 = 2;

/// Overall lean of a chart, judged from its most frequent element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartStrength {
    Strong,
    Balanced,
    Weak,
}

impl ChartStrength {
    pub const fn from_max_count(count: u8) -> Self {
        if count >= STRONG_CHART_MIN {
            Self::Strong
        } else if count <= WEAK_CHART_MAX {
            Self::Weak
        } else {
            Self::Balanced
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Balanced => "Balanced",
            Self::Weak => "Weak",
        }
    }

    /// Chinese label.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Strong => "偏強",
            Self::Balanced => "中和",
            Self::Weak => "偏弱",
        }
    }
}

// Index-aligned with ALL_ELEMENTS.
const WEAK_FAVORABLE: [[Element; 2]; 5] = [
    [Element::Water, Element::Wood],
    [Element::Wood, Element::Fire],
    [Element::Fire, Element::Earth],
    [Element::Earth, Element::Metal],
    [Element::Metal, Element::Water],
];

const STRONG_FAVORABLE: [[Element; 2]; 5] = [
    [Element::Metal, Element::Fire],
    [Element::Water, Element::Earth],
    [Element::Wood, Element::Metal],
    [Element::Fire, Element::Water],
    [Element::Earth, Element::Wood],
];

/// Favorable element pair for a day-master element in a strength regime.
pub fn favorable_elements(day_master: Element, strength: DayMasterStrength) -> [Element; 2] {
    let table = match strength {
        DayMasterStrength::Weak => &WEAK_FAVORABLE,
        DayMasterStrength::Strong => &STRONG_FAVORABLE,
    };
    table[day_master.index() as usize]
}

/// Per-element counts over the eight symbols of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementCounts {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn bump(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u8 {
        ALL_ELEMENTS.iter().map(|e| self.get(*e)).sum()
    }

    /// `(element, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(move |e| (*e, self.get(*e)))
    }
}

/// Result of the elemental balance analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalBalance {
    pub counts: ElementCounts,
    /// Most frequent element; ties go to the first in canonical order.
    pub max_element: Element,
    /// Least frequent element; ties go to the first in canonical order.
    pub min_element: Element,
    pub day_master_strength: DayMasterStrength,
    pub favorable_elements: [Element; 2],
    pub chart_strength: ChartStrength,
    /// Element that overcomes `max_element`; its colours are the ones to avoid.
    pub unfavorable_element: Element,
}

impl ElementalBalance {
    pub fn unfavorable_colors(&self) -> [&'static str; 2] {
        self.unfavorable_element.colors()
    }
}

/// Tally the chart's elements and derive the favorable pair.
pub fn analyze_balance(chart: &BaziChart) -> ElementalBalance {
    let mut counts = ElementCounts::default();
    for stem in chart.stems() {
        counts.bump(stem.element());
    }
    for branch in chart.branches() {
        counts.bump(branch.element());
    }

    // Strict comparisons keep the earliest element on ties.
    let mut max_element = ALL_ELEMENTS[0];
    let mut min_element = ALL_ELEMENTS[0];
    for (element, count) in counts.iter().skip(1) {
        if count > counts.get(max_element) {
            max_element = element;
        }
        if count < counts.get(min_element) {
            min_element = element;
        }
    }

    let day_master_strength =
        DayMasterStrength::from_count(counts.get(chart.day_master_element));

    ElementalBalance {
        counts,
        max_element,
        min_element,
        day_master_strength,
        favorable_elements: favorable_elements(chart.day_master_element, day_master_strength),
        chart_strength: ChartStrength::from_max_count(counts.get(max_element)),
        unfavorable_element: max_element.overcome_by(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::{Pillar, derive_pillars};

    fn chart(y: &str, m: &str, d: &str, hour: u32) -> BaziChart {
        let p = |s: &str| s.parse::<Pillar>().unwrap();
        derive_pillars(p(y), p(m), p(d), hour).unwrap()
    }

    #[test]
    fn weak_table_is_producer_then_self() {
        for e in ALL_ELEMENTS {
            assert_eq!(
                favorable_elements(e, DayMasterStrength::Weak),
                [e.produced_by(), e]
            );
        }
    }

    #[test]
    fn strong_table_is_controller_then_output() {
        for e in ALL_ELEMENTS {
            assert_eq!(
                favorable_elements(e, DayMasterStrength::Strong),
                [e.overcome_by(), e.produces()]
            );
        }
    }

    #[test]
    fn favorable_pairs_are_distinct() {
        for e in ALL_ELEMENTS {
            for s in [DayMasterStrength::Weak, DayMasterStrength::Strong] {
                let [a, b] = favorable_elements(e, s);
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn strength_threshold() {
        assert_eq!(DayMasterStrength::from_count(0), DayMasterStrength::Weak);
        assert_eq!(DayMasterStrength::from_count(2), DayMasterStrength::Weak);
        assert_eq!(DayMasterStrength::from_count(3), DayMasterStrength::Strong);
    }

    #[test]
    fn counts_sum_to_eight() {
        let b = analyze_balance(&chart("乙丑", "辛巳", "戊辰", 14));
        assert_eq!(b.counts.total(), SYMBOLS_PER_CHART);
    }

    #[test]
    fn tally_known_chart() {
        // 乙丑 辛巳 戊辰 己未: 乙 Wood, 辛 Metal, 戊 Earth, 己 Earth,
        // 丑 Earth, 巳 Fire, 辰 Earth, 未 Earth
        let b = analyze_balance(&chart("乙丑", "辛巳", "戊辰", 14));
        assert_eq!(b.counts.wood, 1);
        assert_eq!(b.counts.fire, 1);
        assert_eq!(b.counts.earth, 5);
        assert_eq!(b.counts.metal, 1);
        assert_eq!(b.counts.water, 0);
        assert_eq!(b.max_element, Element::Earth);
        assert_eq!(b.min_element, Element::Water);
        assert_eq!(b.day_master_strength, DayMasterStrength::Strong);
        assert_eq!(b.favorable_elements, [Element::Wood, Element::Metal]);
        assert_eq!(b.chart_strength, ChartStrength::Strong);
        assert_eq!(b.unfavorable_element, Element::Wood);
        assert_eq!(b.unfavorable_colors(), ["green", "cyan"]);
    }

    #[test]
    fn chart_strength_thresholds() {
        assert_eq!(ChartStrength::from_max_count(2), ChartStrength::Weak);
        assert_eq!(ChartStrength::from_max_count(3), ChartStrength::Balanced);
        assert_eq!(ChartStrength::from_max_count(4), ChartStrength::Strong);
        assert_eq!(ChartStrength::from_max_count(8), ChartStrength::Strong);
        assert_eq!(ChartStrength::Balanced.symbol(), "中和");
    }

    #[test]
    fn max_and_min_on_distinct_counts() {
        // hour 0 on a 庚 day is 丙子
        let b = analyze_balance(&chart("甲寅", "丙午", "庚申", 0));
        assert_eq!(b.counts.wood, 2);
        assert_eq!(b.counts.fire, 3);
        assert_eq!(b.counts.earth, 0);
        assert_eq!(b.counts.metal, 2);
        assert_eq!(b.counts.water, 1);
        assert_eq!(b.max_element, Element::Fire);
        assert_eq!(b.min_element, Element::Earth);
        assert_eq!(b.day_master_strength, DayMasterStrength::Weak);
        assert_eq!(b.favorable_elements, [Element::Earth, Element::Metal]);
        assert_eq!(b.chart_strength, ChartStrength::Balanced);
        // Fire dominates, so Water colours are unfavorable
        assert_eq!(b.unfavorable_colors(), ["black", "blue"]);
    }

    #[test]
    fn ties_break_in_canonical_order() {
        // hour 9 on a 壬 day is 乙巳: Wood 3, Fire 3, Water 2, Earth 0, Metal 0
        let b = analyze_balance(&chart("甲寅", "丙午", "壬子", 9));
        assert_eq!(b.counts.wood, 3);
        assert_eq!(b.counts.fire, 3);
        assert_eq!(b.max_element, Element::Wood);
        assert_eq!(b.min_element, Element::Earth);
        assert_eq!(b.day_master_strength, DayMasterStrength::Weak);
        assert_eq!(b.favorable_elements, [Element::Metal, Element::Water]);
    }
}
