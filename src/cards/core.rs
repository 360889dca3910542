//! The generated Resource Core record and its content-addressed id.
//!
//! A `ResourceCore` is immutable once generated. Its id is the first 12 hex
//! characters of a SHA-256 over the card's attributes plus a fresh timestamp,
//! so two identical rolls still get distinct ids almost always. 12 hex chars
//! is ~48 bits; collisions are accepted risk, not defended against.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::attributes::{rarity_score, CoreSize, Rarity, ResourceType};

/// Length of a card id in hex characters.
pub const CARD_ID_LEN: usize = 12;

/// Content-addressed card identifier (12 lowercase hex characters).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wrap an existing identifier string.
    ///
    /// Not validated; ids loaded from storage are trusted as-is.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A generated Resource Core with all stats.
///
/// Immutable once generated. `size` and `rarity` are derived from
/// `tier`/`quality` at generation time; nothing else may set them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceCore {
    /// Content-addressed identifier.
    pub id: CardId,

    /// Size band, determined solely by tier.
    pub size: CoreSize,

    /// Resource the core produces (caller-supplied).
    pub resource_type: ResourceType,

    /// Primary rarity roll, 1-10.
    pub tier: u32,

    /// Secondary rarity roll, 1-100.
    pub quality: u32,

    /// Deploy cost.
    pub cost: u32,

    /// Resources per turn.
    pub rpt: u32,

    /// Hit points.
    pub hp: u32,

    /// Link slots.
    pub links: u32,

    /// Rarity label, derived from tier and quality.
    pub rarity: Rarity,
}

impl ResourceCore {
    /// Combined rarity score of this card: `quality * 0.7 + tier * 3`.
    ///
    /// Exposed so persistence glue can store it as a derived column.
    #[must_use]
    pub fn score(&self) -> f64 {
        rarity_score(self.tier, self.quality)
    }

    /// Combined roll weight of this card: `(tier/10) * (quality/100)`.
    #[must_use]
    pub fn weight(&self) -> f64 {
        f64::from(self.tier) / 10.0 * (f64::from(self.quality) / 100.0)
    }
}

/// Derive a card id from the card's attributes and a fresh timestamp.
///
/// First 12 hex chars of SHA-256 over the concatenated attributes and the
/// current RFC 3339 instant. One-way: practical uniqueness, not reversibility.
#[must_use]
pub fn derive_card_id(
    size: CoreSize,
    tier: u32,
    quality: u32,
    cost: u32,
    rpt: u32,
    hp: u32,
    links: u32,
    resource_type: ResourceType,
) -> CardId {
    let payload = format!(
        "{}{}{}{}{}{}{}{}{}",
        size,
        tier,
        quality,
        cost,
        rpt,
        hp,
        links,
        resource_type,
        Utc::now().to_rfc3339()
    );

    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    let hash = hasher.finalize();

    let mut hex = hex::encode(hash);
    hex.truncate(CARD_ID_LEN);
    CardId(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_length_and_charset() {
        let id = derive_card_id(CoreSize::Small, 1, 1, 0, 2, 3, 1, ResourceType::Energy);
        assert_eq!(id.as_str().len(), CARD_ID_LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identical_rolls_distinct_ids() {
        // Timestamp component makes ids distinct across calls
        let ids: Vec<_> = (0..20)
            .map(|_| {
                std::thread::sleep(std::time::Duration::from_millis(1));
                derive_card_id(CoreSize::Medium, 5, 50, 2, 3, 4, 1, ResourceType::Matter)
            })
            .collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_score_and_weight() {
        let core = ResourceCore {
            id: CardId::new("abc123def456"),
            size: CoreSize::Massive,
            resource_type: ResourceType::Life,
            tier: 10,
            quality: 100,
            cost: 8,
            rpt: 10,
            hp: 12,
            links: 4,
            rarity: Rarity::Legendary,
        };

        assert!((core.score() - 100.0).abs() < 1e-9);
        assert!((core.weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_card_id_serde_transparent() {
        let id = CardId::new("deadbeef0123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"deadbeef0123\"");

        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_core_serde_round_trip() {
        let core = ResourceCore {
            id: CardId::new("abc123def456"),
            size: CoreSize::Large,
            resource_type: ResourceType::Signal,
            tier: 7,
            quality: 60,
            cost: 3,
            rpt: 4,
            hp: 6,
            links: 2,
            rarity: Rarity::Uncommon,
        };

        let json = serde_json::to_string(&core).unwrap();
        let back: ResourceCore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, core);
    }
}
