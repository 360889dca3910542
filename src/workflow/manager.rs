//! The card lifecycle state machine.
//!
//! `CardStateManager` owns the in-memory record map and an optional injected
//! store. Every operation is total: unknown ids and illegal transitions come
//! back as `false`/`None`/empty, never as a panic or error. Persistence
//! failures degrade the manager to in-memory mode instead of failing the
//! caller's operation; `flush` exposes the explicit save result.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::record::{PublishState, StateRecord, WorkflowStats};
use super::store::{StateMap, StateStore, StoreError};
use crate::cards::CardId;

/// Manages publishing states across all card types.
pub struct CardStateManager {
    states: StateMap,
    store: Option<Box<dyn StateStore>>,
    degraded: bool,
}

impl CardStateManager {
    /// Create a manager with no durable store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            states: StateMap::default(),
            store: None,
            degraded: false,
        }
    }

    /// Create a manager backed by the given store, loading existing records.
    ///
    /// If the store cannot be read at all the manager starts empty and
    /// degraded rather than failing construction.
    pub fn with_store(store: impl StateStore + 'static) -> Self {
        let mut store: Box<dyn StateStore> = Box::new(store);
        let (states, degraded) = match store.load_all() {
            Ok(states) => (states, false),
            Err(e) => {
                warn!(error = %e, "state store unreadable, starting empty in degraded mode");
                (StateMap::default(), true)
            }
        };

        Self {
            states,
            store: Some(store),
            degraded,
        }
    }

    /// Create a new card record in draft state.
    ///
    /// Idempotent: if the id already has a record, that record is returned
    /// unchanged and nothing is overwritten.
    pub fn create_card_state(
        &mut self,
        card_id: CardId,
        card_type: impl Into<String>,
        notes: impl Into<String>,
    ) -> StateRecord {
        if let Some(existing) = self.states.get(&card_id) {
            return existing.clone();
        }

        let record = StateRecord::new_draft(card_id.clone(), card_type, notes);
        self.states.insert(card_id, record.clone());
        self.persist();
        record
    }

    /// Get the record for a specific card.
    #[must_use]
    pub fn get_card_state(&self, card_id: &CardId) -> Option<&StateRecord> {
        self.states.get(card_id)
    }

    /// Check whether a transition would be legal, without performing it.
    ///
    /// False for unknown ids.
    #[must_use]
    pub fn can_transition(&self, card_id: &CardId, new_state: PublishState) -> bool {
        self.states
            .get(card_id)
            .is_some_and(|record| record.state.can_transition_to(new_state))
    }

    /// Transition a card to a new state.
    ///
    /// Returns false for unknown ids and moves not in the transition table.
    /// `published_at`/`archived_at` are set the first time each state is
    /// reached and never overwritten.
    pub fn transition_state(&mut self, card_id: &CardId, new_state: PublishState) -> bool {
        let Some(record) = self.states.get_mut(card_id) else {
            return false;
        };

        if !record.state.can_transition_to(new_state) {
            return false;
        }

        let from = record.state;
        record.state = new_state;

        let now = chrono::Utc::now();
        match new_state {
            PublishState::Published => {
                record.published_at.get_or_insert(now);
            }
            PublishState::Archived => {
                record.archived_at.get_or_insert(now);
            }
            PublishState::Draft => {}
        }

        debug!(card_id = %card_id, %from, to = %new_state, "card state transition");
        self.persist();
        true
    }

    /// Transition multiple cards, independently per id.
    ///
    /// One id's failure does not block the others. The result map has one
    /// entry per distinct input id; a duplicate id overwrites its prior entry.
    pub fn bulk_transition(
        &mut self,
        card_ids: &[CardId],
        new_state: PublishState,
    ) -> FxHashMap<CardId, bool> {
        let mut results = FxHashMap::default();
        for card_id in card_ids {
            let ok = self.transition_state(card_id, new_state);
            results.insert(card_id.clone(), ok);
        }
        results
    }

    /// Promote a draft card to published.
    pub fn publish(&mut self, card_id: &CardId) -> bool {
        self.transition_state(card_id, PublishState::Published)
    }

    /// Archive a card.
    pub fn archive(&mut self, card_id: &CardId) -> bool {
        self.transition_state(card_id, PublishState::Archived)
    }

    /// All records currently in the given state.
    #[must_use]
    pub fn get_cards_by_state(&self, state: PublishState) -> Vec<&StateRecord> {
        self.states.values().filter(|r| r.state == state).collect()
    }

    /// All records with the given card type tag.
    #[must_use]
    pub fn get_cards_by_type(&self, card_type: &str) -> Vec<&StateRecord> {
        self.states
            .values()
            .filter(|r| r.card_type == card_type)
            .collect()
    }

    /// All records, no ordering guarantee.
    #[must_use]
    pub fn get_all_cards(&self) -> Vec<&StateRecord> {
        self.states.values().collect()
    }

    /// Remove a card's record unconditionally.
    ///
    /// Returns false if the id is unknown. The generated card itself is
    /// unaffected; the two are not referentially linked.
    pub fn delete_card_state(&mut self, card_id: &CardId) -> bool {
        if self.states.remove(card_id).is_some() {
            self.persist();
            true
        } else {
            false
        }
    }

    /// Full-scan aggregate counts, recomputed on each call.
    #[must_use]
    pub fn stats(&self) -> WorkflowStats {
        let mut stats = WorkflowStats {
            total: self.states.len(),
            ..WorkflowStats::default()
        };

        for record in self.states.values() {
            match record.state {
                PublishState::Draft => stats.draft += 1,
                PublishState::Published => stats.published += 1,
                PublishState::Archived => stats.archived += 1,
            }
            *stats.by_type.entry(record.card_type.clone()).or_insert(0) += 1;
        }

        stats
    }

    /// Number of records tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True if no records are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// True once a persistence attempt has failed and the manager is running
    /// in-memory only. Cleared when a later save succeeds.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Explicitly save the full map, surfacing any store error.
    ///
    /// A no-store manager flushes trivially.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        let Some(store) = &mut self.store else {
            return Ok(());
        };

        match store.save_all(&self.states) {
            Ok(()) => {
                self.degraded = false;
                Ok(())
            }
            Err(e) => {
                self.degraded = true;
                Err(e)
            }
        }
    }

    /// Best-effort save after a mutation. Failure flips the degraded flag
    /// instead of failing the caller's operation.
    fn persist(&mut self) {
        let Some(store) = &mut self.store else {
            return;
        };

        match store.save_all(&self.states) {
            Ok(()) => {
                self.degraded = false;
            }
            Err(e) => {
                if !self.degraded {
                    warn!(error = %e, "state save failed, continuing in-memory only");
                }
                self.degraded = true;
            }
        }
    }
}

impl std::fmt::Debug for CardStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardStateManager")
            .field("records", &self.states.len())
            .field("has_store", &self.store.is_some())
            .field("degraded", &self.degraded)
            .finish()
    }
}
