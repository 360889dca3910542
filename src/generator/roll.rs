//! Weighted roll primitives for the tier/quality system.
//!
//! Two independent inverse-probability rolls (tier, quality) compose into a
//! combined weight that biases every stat roll toward its range maximum.
//! No single large lookup table needed.

use smallvec::SmallVec;

use crate::core::ForgeRng;

/// Tier bounds, inclusive.
pub const TIER_MIN: u32 = 1;
pub const TIER_MAX: u32 = 10;

/// Quality bounds, inclusive.
pub const QUALITY_MIN: u32 = 1;
pub const QUALITY_MAX: u32 = 100;

/// Weight buffer sized for stat ranges; tier/quality rolls spill to the heap.
type Weights = SmallVec<[f32; 16]>;

/// Roll a value in `[low, high]` inclusive, biased by `weight`.
///
/// The i-th value (0-indexed from `low`) has relative weight
/// `1 + i * weight * 10`, so weight near 0 favors `low` and weight near 1
/// favors `high`. `low == high` short-circuits without touching the RNG.
pub fn roll_weighted(rng: &mut ForgeRng, low: u32, high: u32, weight: f64) -> u32 {
    debug_assert!(low <= high);
    if low == high {
        return low;
    }

    let span = (high - low + 1) as usize;
    let weights: Weights = (0..span)
        .map(|i| 1.0 + (i as f64 * weight * 10.0) as f32)
        .collect();

    // Weights are all >= 1.0, so choose_weighted cannot fail
    let idx = rng.choose_weighted(&weights).unwrap_or(0);
    low + idx as u32
}

/// Roll a tier from 1-10 where higher tiers are rarer.
///
/// Inverse probability weighting: tier `t` has weight `11 - t`, so tier 1 is
/// 10x more likely than tier 10.
pub fn roll_tier(rng: &mut ForgeRng) -> u32 {
    let weights: Weights = (TIER_MIN..=TIER_MAX).map(|t| (11 - t) as f32).collect();
    let idx = rng.choose_weighted(&weights).unwrap_or(0);
    TIER_MIN + idx as u32
}

/// Roll a quality from 1-100 where higher values are rarer.
///
/// Quality `q` has weight `101 - q`, so 1 is 100x more likely than 100.
pub fn roll_quality(rng: &mut ForgeRng) -> u32 {
    let weights: Weights = (QUALITY_MIN..=QUALITY_MAX)
        .map(|q| (101 - q) as f32)
        .collect();
    let idx = rng.choose_weighted(&weights).unwrap_or(0);
    QUALITY_MIN + idx as u32
}

/// Combined roll weight: `(tier/10) * (quality/100)`.
///
/// Monotonic increasing in both inputs, maxing out at 1.0 for T10 Q100.
#[must_use]
pub fn combined_weight(tier: u32, quality: u32) -> f64 {
    (f64::from(tier) / 10.0) * (f64::from(quality) / 100.0)
}
