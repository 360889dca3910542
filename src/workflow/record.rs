//! Publishing lifecycle states and the per-card lifecycle record.
//!
//! Cards move forward-only through draft -> published -> archived, with a
//! direct draft -> archived shortcut. Archived is terminal. The transition
//! table lives on `PublishState` so every caller checks legality the same way.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Lifecycle state of a card in the publishing workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishState {
    Draft,
    Published,
    Archived,
}

impl PublishState {
    /// All states, in lifecycle order.
    pub const ALL: [PublishState; 3] = [
        PublishState::Draft,
        PublishState::Published,
        PublishState::Archived,
    ];

    /// Storage/display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PublishState::Draft => "draft",
            PublishState::Published => "published",
            PublishState::Archived => "archived",
        }
    }

    /// The states this state may legally move to.
    #[must_use]
    pub fn allowed_targets(self) -> &'static [PublishState] {
        match self {
            PublishState::Draft => &[PublishState::Published, PublishState::Archived],
            PublishState::Published => &[PublishState::Archived],
            PublishState::Archived => &[],
        }
    }

    /// Check a single transition against the table.
    #[must_use]
    pub fn can_transition_to(self, target: PublishState) -> bool {
        self.allowed_targets().contains(&target)
    }

    /// Archived cards have no outgoing transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.allowed_targets().is_empty()
    }
}

impl std::fmt::Display for PublishState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable lifecycle record, one per card id.
///
/// Only the state machine mutates these; the generated card attributes live
/// separately and never change. Unknown fields in stored records are rejected
/// at deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateRecord {
    /// Id of the card this record tracks.
    pub card_id: CardId,

    /// Free-form category tag, e.g. "resource_core".
    pub card_type: String,

    /// Current lifecycle state.
    pub state: PublishState,

    /// Set once at creation.
    pub created_at: DateTime<Utc>,

    /// Set the first time the card reaches published; never cleared.
    pub published_at: Option<DateTime<Utc>>,

    /// Set the first time the card reaches archived.
    pub archived_at: Option<DateTime<Utc>>,

    /// Opaque informational counter. Not incremented by transitions.
    pub version: u32,

    /// Free-text annotation.
    pub notes: String,
}

impl StateRecord {
    /// Create a fresh draft record.
    #[must_use]
    pub fn new_draft(card_id: CardId, card_type: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            card_id,
            card_type: card_type.into(),
            state: PublishState::Draft,
            created_at: Utc::now(),
            published_at: None,
            archived_at: None,
            version: 1,
            notes: notes.into(),
        }
    }
}

/// Aggregate counts over all lifecycle records.
///
/// Recomputed by full scan on each call; nothing is maintained incrementally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStats {
    pub total: usize,
    pub draft: usize,
    pub published: usize,
    pub archived: usize,
    pub by_type: FxHashMap<String, usize>,
}
