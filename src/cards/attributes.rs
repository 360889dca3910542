//! Card attribute vocabulary: sizes, resource types, rarities, stat ranges.
//!
//! Size and rarity are *outputs* of the generation rolls, never inputs:
//! - `size` is a pure function of `tier`
//! - `rarity` is a pure function of the (tier, quality) score
//!
//! Keeping both derivations here, next to the stat range table, is what
//! guarantees the score-to-rarity and tier-to-size invariants hold everywhere.

use serde::{Deserialize, Serialize};

/// Physical size band of a Resource Core, determined solely by tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreSize {
    Small,
    Medium,
    Large,
    Massive,
}

impl CoreSize {
    /// All sizes, smallest first.
    pub const ALL: [CoreSize; 4] = [
        CoreSize::Small,
        CoreSize::Medium,
        CoreSize::Large,
        CoreSize::Massive,
    ];

    /// Display/storage name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CoreSize::Small => "Small",
            CoreSize::Medium => "Medium",
            CoreSize::Large => "Large",
            CoreSize::Massive => "Massive",
        }
    }
}

impl std::fmt::Display for CoreSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resource a core produces. Caller-supplied, never rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Energy,
    Matter,
    Signal,
    Life,
    Omni,
}

impl ResourceType {
    /// Display/storage name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Energy => "Energy",
            ResourceType::Matter => "Matter",
            ResourceType::Signal => "Signal",
            ResourceType::Life => "Life",
            ResourceType::Omni => "Omni",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rarity label derived from the (tier, quality) score.
///
/// Ordered from most to least common, so `Ord` compares rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Display/storage name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive roll bounds for a single stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check a rolled value against the bounds, inclusive.
    #[must_use]
    pub fn contains(self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Per-size roll bounds for all four stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRanges {
    pub cost: StatRange,
    pub rpt: StatRange,
    pub hp: StatRange,
    pub links: StatRange,
}

/// The fixed stat range table for each core size.
#[must_use]
pub const fn stat_ranges(size: CoreSize) -> StatRanges {
    match size {
        CoreSize::Small => StatRanges {
            cost: StatRange::new(0, 0),
            rpt: StatRange::new(2, 2),
            hp: StatRange::new(2, 4),
            links: StatRange::new(1, 1),
        },
        CoreSize::Medium => StatRanges {
            cost: StatRange::new(1, 3),
            rpt: StatRange::new(2, 4),
            hp: StatRange::new(3, 5),
            links: StatRange::new(1, 2),
        },
        CoreSize::Large => StatRanges {
            cost: StatRange::new(2, 5),
            rpt: StatRange::new(3, 6),
            hp: StatRange::new(4, 8),
            links: StatRange::new(1, 3),
        },
        CoreSize::Massive => StatRanges {
            cost: StatRange::new(4, 8),
            rpt: StatRange::new(5, 10),
            hp: StatRange::new(7, 12),
            links: StatRange::new(2, 4),
        },
    }
}

/// Map a tier (1-10) to its size band.
///
/// Tier 1-3: Small, 4-6: Medium, 7-8: Large, 9-10: Massive.
#[must_use]
pub const fn size_from_tier(tier: u32) -> CoreSize {
    if tier <= 3 {
        CoreSize::Small
    } else if tier <= 6 {
        CoreSize::Medium
    } else if tier <= 8 {
        CoreSize::Large
    } else {
        CoreSize::Massive
    }
}

/// Combined rarity score: `quality * 0.7 + tier * 3`.
///
/// Ranges over roughly [3.7, 100]. Monotonic increasing in both inputs.
#[must_use]
pub fn rarity_score(tier: u32, quality: u32) -> f64 {
    f64::from(quality) * 0.7 + f64::from(tier) * 3.0
}

/// Bucket a score into a rarity label.
///
/// Thresholds (98 / 90 / 75 / 55) are calibrated so Legendary requires
/// near-maximum tier and quality simultaneously.
#[must_use]
pub fn rarity_from_score(score: f64) -> Rarity {
    if score >= 98.0 {
        Rarity::Legendary
    } else if score >= 90.0 {
        Rarity::Epic
    } else if score >= 75.0 {
        Rarity::Rare
    } else if score >= 55.0 {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// Derive the rarity label directly from the two rolls.
#[must_use]
pub fn rarity_from_rolls(tier: u32, quality: u32) -> Rarity {
    rarity_from_score(rarity_score(tier, quality))
}
