//! Equipment domain record.
//!
//! # Invariants
//! - `id` is store-assigned and positive once persisted.
//! - `name` is non-empty; the store rejects empty or missing names.

use serde::{Deserialize, Serialize};

/// Store-assigned identity shared by an `Equipment` and any specialization
/// of it.
pub type EquipmentId = i64;

/// Generic piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Primary key in `Equipment.Id`.
    pub id: EquipmentId,
    /// Display name, stored in `Equipment.Name`.
    pub name: String,
}

impl Equipment {
    pub fn new(id: EquipmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
