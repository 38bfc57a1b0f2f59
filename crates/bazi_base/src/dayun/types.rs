//! Core types for DaYun (decade luck cycle) calculations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::BaziError;
use crate::pillar::Pillar;

/// Age at which the first cycle begins.
///
/// Traditionally derived from the distance between birth and the nearest
/// month-opening solar term; here it is the fixed approximation 7.
pub const START_OF_LUCK_AGE: u32 = 7;

/// Years spanned by one cycle.
pub const YEARS_PER_CYCLE: u32 = 10;

/// Cycles generated per chart.
pub const CYCLE_COUNT: usize = 10;

/// Sex of the chart owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sex {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            other => Err(BaziError::UnknownSymbol(format!("sex '{other}'"))),
        }
    }
}

/// Direction the cycles walk through the stem/branch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// A single decade cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaYunEntry {
    pub pillar: Pillar,
    /// Inclusive.
    pub start_age: u32,
    /// Inclusive, `start_age + 9`.
    pub end_age: u32,
    /// Element of the cycle's stem.
    pub element: Element,
}

impl DaYunEntry {
    pub fn contains_age(&self, age: u32) -> bool {
        self.start_age <= age && age <= self.end_age
    }
}

/// The ten decade cycles of one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaYunSequence {
    pub direction: Direction,
    pub entries: Vec<DaYunEntry>,
}

impl DaYunSequence {
    /// The cycle whose age span contains `age`, if any.
    pub fn entry_at_age(&self, age: u32) -> Option<&DaYunEntry> {
        self.entries.iter().find(|e| e.contains_age(age))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DaYunEntry> {
        self.entries.iter()
    }
}
