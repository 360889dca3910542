//! Card data model: attribute vocabulary and the generated core record.
//!
//! ## Key Types
//!
//! - `CoreSize`, `ResourceType`, `Rarity`: closed attribute vocabularies
//! - `StatRanges`: per-size roll bounds for cost/rpt/hp/links
//! - `ResourceCore`: immutable generated card
//! - `CardId`: 12-hex content-addressed identifier
//!
//! Size and rarity are derived fields. The derivations (`size_from_tier`,
//! `rarity_from_score`) live in `attributes` next to the range table.

pub mod attributes;
pub mod core;

pub use attributes::{
    rarity_from_rolls, rarity_from_score, rarity_score, size_from_tier, stat_ranges, CoreSize,
    Rarity, ResourceType, StatRange, StatRanges,
};
pub use core::{derive_card_id, CardId, ResourceCore, CARD_ID_LEN};
