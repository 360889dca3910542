//! # starcore-forge
//!
//! Card generation and publishing workflow for the StarCore TCG.
//!
//! ## Design Principles
//!
//! 1. **Rarity is an output**: size and rarity are pure functions of the
//!    tier/quality rolls, never caller inputs.
//!
//! 2. **Total operations**: the state machine reports unknown ids and illegal
//!    transitions through return values. No core operation panics on bad
//!    input.
//!
//! 3. **Injected persistence**: the manager talks to a `StateStore` trait,
//!    not a concrete backend. A failing store degrades the manager to
//!    in-memory mode instead of failing the caller.
//!
//! ## Generation
//!
//! Two independent inverse-weighted rolls (tier 1-10, quality 1-100) combine
//! into a stat-roll weight, a size band, and a rarity label:
//!
//! ```
//! use starcore_forge::{CoreGenerator, ResourceType};
//!
//! let mut gen = CoreGenerator::new(42);
//! let core = gen.generate(ResourceType::Energy);
//! assert_eq!(core.id.as_str().len(), 12);
//! ```
//!
//! ## Workflow
//!
//! Cards move forward-only through draft -> published -> archived:
//!
//! ```
//! use starcore_forge::{CardId, CardStateManager, PublishState};
//!
//! let mut mgr = CardStateManager::in_memory();
//! let id = CardId::new("abc123def456");
//! mgr.create_card_state(id.clone(), "resource_core", "");
//!
//! assert!(mgr.publish(&id));
//! assert!(!mgr.can_transition(&id, PublishState::Draft));
//! ```
//!
//! ## Modules
//!
//! - `core`: deterministic RNG with weighted sampling
//! - `cards`: attribute vocabulary and the generated `ResourceCore` record
//! - `generator`: weighted rolls and the `CoreGenerator`
//! - `workflow`: lifecycle state machine and the storage seam

pub mod cards;
pub mod core;
pub mod generator;
pub mod workflow;

// Re-export commonly used types
pub use crate::core::{ForgeRng, ForgeRngState};

pub use crate::cards::{
    derive_card_id, rarity_from_rolls, rarity_from_score, rarity_score, size_from_tier,
    stat_ranges, CardId, CoreSize, Rarity, ResourceCore, ResourceType, StatRange, StatRanges,
    CARD_ID_LEN,
};

pub use crate::generator::{
    combined_weight, roll_quality, roll_tier, roll_weighted, CoreGenerator, QUALITY_MAX,
    QUALITY_MIN, TIER_MAX, TIER_MIN,
};

pub use crate::workflow::{
    CardStateManager, JsonFileStore, MemoryStore, PublishState, StateMap, StateRecord, StateStore,
    StoreError, WorkflowStats,
};
