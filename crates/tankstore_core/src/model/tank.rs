//! Tank domain record.
//!
//! A tank is a specialization of [`Equipment`]: it is stored in its own
//! `Tank` table whose primary key is also a foreign key to `Equipment.Id`.
//! In core the relationship is composition, the tank embeds its base record.
//!
//! # Invariants
//! - `id == equipment.id` for every value built through [`Tank::new`] or
//!   read back from the store.
//! - Reads always carry the associated `Equipment`; there is no lazily
//!   loaded or missing association.

use super::equipment::{Equipment, EquipmentId};
use serde::{Deserialize, Serialize};

/// Tank with its base equipment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tank {
    /// Shared identity, equal to `equipment.id`.
    pub id: EquipmentId,
    /// Capacity stored in `Tank.Volume`.
    pub volume: i64,
    /// Base record sharing this tank's identity.
    pub equipment: Equipment,
}

impl Tank {
    /// Builds a tank over `equipment`, taking the identity from it.
    pub fn new(equipment: Equipment, volume: i64) -> Self {
        Self {
            id: equipment.id,
            volume,
            equipment,
        }
    }

    /// Name of the underlying equipment.
    pub fn name(&self) -> &str {
        self.equipment.name.as_str()
    }

    /// Returns whether the shared-key relationship holds.
    pub fn is_linked(&self) -> bool {
        self.id == self.equipment.id
    }
}
