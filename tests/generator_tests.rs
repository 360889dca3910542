//! Generation invariants: roll ranges, derived fields, rarity partition.

use proptest::prelude::*;
use starcore_forge::{
    rarity_from_rolls, rarity_from_score, rarity_score, roll_weighted, size_from_tier,
    stat_ranges, CoreGenerator, CoreSize, ForgeRng, Rarity, ResourceType, CARD_ID_LEN,
    QUALITY_MAX, QUALITY_MIN, TIER_MAX, TIER_MIN,
};

// =============================================================================
// Range Invariants
// =============================================================================

#[test]
fn test_all_generated_cards_within_bounds() {
    let mut gen = CoreGenerator::new(42);

    for _ in 0..5000 {
        let core = gen.generate(ResourceType::Energy);

        assert!((TIER_MIN..=TIER_MAX).contains(&core.tier));
        assert!((QUALITY_MIN..=QUALITY_MAX).contains(&core.quality));

        let ranges = stat_ranges(core.size);
        assert!(ranges.cost.contains(core.cost));
        assert!(ranges.rpt.contains(core.rpt));
        assert!(ranges.hp.contains(core.hp));
        assert!(ranges.links.contains(core.links));
    }
}

#[test]
fn test_card_id_shape() {
    let mut gen = CoreGenerator::from_entropy();

    for _ in 0..100 {
        let core = gen.generate(ResourceType::Matter);
        assert_eq!(core.id.as_str().len(), CARD_ID_LEN);
        assert!(core.id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}

// =============================================================================
// Weighted Roller Boundaries
// =============================================================================

#[test]
fn test_degenerate_roll_is_constant() {
    let mut rng = ForgeRng::new(1);
    for bias in [0.0, 0.25, 0.5, 0.75, 1.0] {
        assert_eq!(roll_weighted(&mut rng, 5, 5, bias), 5);
    }
}

#[test]
fn test_extreme_bias_stays_in_range() {
    let mut rng = ForgeRng::new(2);
    for bias in [0.0, 1.0] {
        for _ in 0..5000 {
            let v = roll_weighted(&mut rng, 1, 10, bias);
            assert!((1..=10).contains(&v), "out-of-range draw {v} at bias {bias}");
        }
    }
}

// =============================================================================
// Derived Fields
// =============================================================================

#[test]
fn test_size_is_pure_function_of_tier() {
    for tier in TIER_MIN..=TIER_MAX {
        assert_eq!(size_from_tier(tier), size_from_tier(tier));
    }

    assert_eq!(size_from_tier(3), CoreSize::Small);
    assert_eq!(size_from_tier(4), CoreSize::Medium);
    assert_eq!(size_from_tier(8), CoreSize::Large);
    assert_eq!(size_from_tier(9), CoreSize::Massive);
}

#[test]
fn test_rarity_is_pure_function_of_rolls() {
    for tier in TIER_MIN..=TIER_MAX {
        for quality in QUALITY_MIN..=QUALITY_MAX {
            assert_eq!(
                rarity_from_rolls(tier, quality),
                rarity_from_rolls(tier, quality)
            );
        }
    }
}

#[test]
fn test_rarity_partition_has_no_gaps() {
    // Every reachable score maps to exactly one band, and the bands cut
    // exactly at the stated thresholds
    for tier in TIER_MIN..=TIER_MAX {
        for quality in QUALITY_MIN..=QUALITY_MAX {
            let score = rarity_score(tier, quality);
            let expected = if score >= 98.0 {
                Rarity::Legendary
            } else if score >= 90.0 {
                Rarity::Epic
            } else if score >= 75.0 {
                Rarity::Rare
            } else if score >= 55.0 {
                Rarity::Uncommon
            } else {
                Rarity::Common
            };
            assert_eq!(rarity_from_score(score), expected);
        }
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_score_monotonic_in_tier(tier in 1u32..10, quality in 1u32..=100) {
        prop_assert!(rarity_score(tier, quality) <= rarity_score(tier + 1, quality));
    }

    #[test]
    fn prop_score_monotonic_in_quality(tier in 1u32..=10, quality in 1u32..100) {
        prop_assert!(rarity_score(tier, quality) <= rarity_score(tier, quality + 1));
    }

    #[test]
    fn prop_roll_weighted_in_range(
        seed in any::<u64>(),
        low in 0u32..50,
        span in 0u32..50,
        bias in 0.0f64..=1.0,
    ) {
        let mut rng = ForgeRng::new(seed);
        let high = low + span;
        let v = roll_weighted(&mut rng, low, high, bias);
        prop_assert!((low..=high).contains(&v));
    }

    #[test]
    fn prop_generated_card_consistent(seed in any::<u64>()) {
        let mut gen = CoreGenerator::new(seed);
        let core = gen.generate(ResourceType::Signal);

        prop_assert_eq!(core.size, size_from_tier(core.tier));
        prop_assert_eq!(core.rarity, rarity_from_rolls(core.tier, core.quality));
        prop_assert!((0.001..=1.0).contains(&core.weight()));
        prop_assert!((3.69..=100.0).contains(&core.score()));
    }
}
