//! Domain records persisted by the store.
//!
//! # Responsibility
//! - Define the base `Equipment` record and its `Tank` specialization.
//!
//! # Invariants
//! - A `Tank` shares its identity with exactly one `Equipment`.
//! - Identities are assigned by the store, never generated in core.

pub mod equipment;
pub mod tank;
