//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define CRUD contracts for equipment and tanks.
//! - Keep SQL details out of the service layer.
//!
//! # Invariants
//! - Repositories only wrap connections whose schema matches this build.
//! - Missing identities surface as `RepoError::NotFound`, storage constraint
//!   failures as `RepoError::ConstraintViolation`.

pub mod equipment_repo;
mod error;
mod schema;
pub mod tank_repo;

pub use error::{RepoError, RepoResult};
