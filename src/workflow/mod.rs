//! Publishing workflow: lifecycle records, the state machine, and storage.
//!
//! ## Key Types
//!
//! - `PublishState`: draft / published / archived with the transition table
//! - `StateRecord`: mutable lifecycle record, one per card id
//! - `CardStateManager`: single and bulk transitions, filters, stats
//! - `StateStore`: injected persistence seam (`JsonFileStore`, `MemoryStore`)
//!
//! All manager operations are total functions: unknown ids and illegal
//! transitions report failure through return values, never panics.

pub mod manager;
pub mod record;
pub mod store;

pub use manager::CardStateManager;
pub use record::{PublishState, StateRecord, WorkflowStats};
pub use store::{JsonFileStore, MemoryStore, StateMap, StateStore, StoreError};
