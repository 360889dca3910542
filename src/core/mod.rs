//! Core primitives shared across the crate.
//!
//! Currently this is the deterministic RNG that drives every weighted roll.

pub mod rng;

pub use rng::{ForgeRng, ForgeRngState};
