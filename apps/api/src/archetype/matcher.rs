//! Nearest-neighbor archetype lookup over a fixed reference set.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const TRAIT_MAX: i64 = 100;
pub const TRAIT_DEFAULT: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Swiss,
    Cyber,
    Brutal,
    Ethereal,
    Midnight,
    Paper,
    Bauhaus,
    Y2k,
    Botanical,
    Obsidian,
}

impl Archetype {
    pub fn label(self) -> &'static str {
        match self {
            Archetype::Swiss => "swiss",
            Archetype::Cyber => "cyber",
            Archetype::Brutal => "brutal",
            Archetype::Ethereal => "ethereal",
            Archetype::Midnight => "midnight",
            Archetype::Paper => "paper",
            Archetype::Bauhaus => "bauhaus",
            Archetype::Y2k => "y2k",
            Archetype::Botanical => "botanical",
            Archetype::Obsidian => "obsidian",
        }
    }
}

/// Structure, energy and warmth, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitVector {
    pub structure: u8,
    pub energy: u8,
    pub warmth: u8,
}

impl TraitVector {
    pub fn new(structure: i64, energy: i64, warmth: i64) -> Result<Self, AppError> {
        Ok(Self {
            structure: bounded("structure", structure)?,
            energy: bounded("energy", energy)?,
            warmth: bounded("warmth", warmth)?,
        })
    }

    fn as_point(&self) -> [i32; 3] {
        [
            i32::from(self.structure),
            i32::from(self.energy),
            i32::from(self.warmth),
        ]
    }
}

fn bounded(name: &str, value: i64) -> Result<u8, AppError> {
    if (0..=TRAIT_MAX).contains(&value) {
        Ok(value as u8)
    } else {
        Err(AppError::Validation(format!(
            "{name} must be between 0 and {TRAIT_MAX}, got {value}"
        )))
    }
}

/// Reference points in (structure, energy, warmth) space, in index order 0–9.
pub const REFERENCE_POINTS: [([i32; 3], Archetype); 10] = [
    ([100, 0, 0], Archetype::Swiss),
    ([100, 100, 0], Archetype::Cyber),
    ([0, 100, 0], Archetype::Brutal),
    ([10, 10, 100], Archetype::Ethereal),
    ([50, 50, 30], Archetype::Midnight),
    ([30, 20, 90], Archetype::Paper),
    ([80, 60, 80], Archetype::Bauhaus),
    ([40, 90, 50], Archetype::Y2k),
    ([20, 10, 70], Archetype::Botanical),
    ([90, 10, 20], Archetype::Obsidian),
];

fn squared_distance(a: [i32; 3], b: [i32; 3]) -> i32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Returns the archetype whose reference point is closest (Euclidean, k=1).
/// Ties go to the lower index.
pub fn match_archetype(traits: &TraitVector) -> Archetype {
    let point = traits.as_point();
    let mut best = REFERENCE_POINTS[0];
    let mut best_distance = squared_distance(point, best.0);

    for candidate in &REFERENCE_POINTS[1..] {
        let distance = squared_distance(point, candidate.0);
        if distance < best_distance {
            best = *candidate;
            best_distance = distance;
        }
    }
    best.1
}
