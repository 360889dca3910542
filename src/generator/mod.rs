//! Resource Core generation.
//!
//! `CoreGenerator` owns the RNG and turns two independent rarity rolls
//! (tier, quality) into a complete card:
//!
//! 1. Roll tier (1-10) and quality (1-100), both inverse-weighted
//! 2. Combine them into a stat-roll weight
//! 3. Derive the size band from tier
//! 4. Roll each stat within its size's range, biased by the weight
//! 5. Derive the rarity label from the (tier, quality) score
//! 6. Hash the attributes plus a fresh timestamp into the card id
//!
//! Rarity and size are outputs of the rolls, never inputs.

pub mod roll;

pub use roll::{
    combined_weight, roll_quality, roll_tier, roll_weighted, QUALITY_MAX, QUALITY_MIN, TIER_MAX,
    TIER_MIN,
};

use tracing::debug;

use crate::cards::{
    derive_card_id, rarity_from_rolls, size_from_tier, stat_ranges, ResourceCore, ResourceType,
    StatRange,
};
use crate::core::{ForgeRng, ForgeRngState};

/// Weighted Resource Core generator.
///
/// Stateless apart from the RNG; every `generate` call is independent.
///
/// ## Example
///
/// ```
/// use starcore_forge::generator::CoreGenerator;
/// use starcore_forge::cards::ResourceType;
///
/// let mut gen = CoreGenerator::new(42);
/// let core = gen.generate(ResourceType::Energy);
///
/// assert!((1..=10).contains(&core.tier));
/// assert_eq!(core.id.as_str().len(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct CoreGenerator {
    rng: ForgeRng,
}

impl CoreGenerator {
    /// Create a generator with a fixed seed (reproducible rolls).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ForgeRng::new(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ForgeRng::from_entropy(),
        }
    }

    /// Restore a generator from a saved RNG checkpoint.
    #[must_use]
    pub fn from_rng_state(state: &ForgeRngState) -> Self {
        Self {
            rng: ForgeRng::from_state(state),
        }
    }

    /// Capture the RNG state for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> ForgeRngState {
        self.rng.state()
    }

    /// Generate a complete Resource Core of the given resource type.
    pub fn generate(&mut self, resource_type: ResourceType) -> ResourceCore {
        let tier = roll_tier(&mut self.rng);
        let quality = roll_quality(&mut self.rng);
        let weight = combined_weight(tier, quality);

        let size = size_from_tier(tier);
        let ranges = stat_ranges(size);

        let cost = self.roll_stat(ranges.cost, weight);
        let rpt = self.roll_stat(ranges.rpt, weight);
        let hp = self.roll_stat(ranges.hp, weight);
        let links = self.roll_stat(ranges.links, weight);

        let rarity = rarity_from_rolls(tier, quality);
        let id = derive_card_id(size, tier, quality, cost, rpt, hp, links, resource_type);

        debug!(
            card_id = %id,
            tier,
            quality,
            %size,
            %rarity,
            "generated resource core"
        );

        ResourceCore {
            id,
            size,
            resource_type,
            tier,
            quality,
            cost,
            rpt,
            hp,
            links,
            rarity,
        }
    }

    /// Generate `count` cores of the same resource type.
    pub fn generate_batch(&mut self, count: usize, resource_type: ResourceType) -> Vec<ResourceCore> {
        (0..count).map(|_| self.generate(resource_type)).collect()
    }

    fn roll_stat(&mut self, range: StatRange, weight: f64) -> u32 {
        roll_weighted(&mut self.rng, range.min, range.max, weight)
    }
}
