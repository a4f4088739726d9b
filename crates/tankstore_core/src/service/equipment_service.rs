//! Equipment use-case service.
//!
//! # Responsibility
//! - Provide the equipment CRUD entry points for core callers.
//! - Delegate persistence to an [`EquipmentRepository`].
//!
//! # Invariants
//! - `update_equipment` only touches the name.
//! - `update_equipment`/`delete_equipment` fail with `NotFound(id)` when the
//!   identity does not resolve.

use super::log_write;
use crate::model::equipment::{Equipment, EquipmentId};
use crate::repo::equipment_repo::EquipmentRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for equipment CRUD operations.
pub struct EquipmentService<R: EquipmentRepository> {
    repo: R,
}

impl<R: EquipmentRepository> EquipmentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored equipment row; empty store yields an empty vector.
    pub fn list_equipment(&self) -> RepoResult<Vec<Equipment>> {
        self.repo.list_equipment()
    }

    /// Gets one equipment by identity.
    pub fn get_equipment(&self, id: EquipmentId) -> RepoResult<Option<Equipment>> {
        self.repo.get_equipment(id)
    }

    /// Creates equipment and returns it with the store-assigned identity.
    ///
    /// An empty name is rejected by the store as `ConstraintViolation`.
    pub fn create_equipment(&self, name: &str) -> RepoResult<Equipment> {
        let result = self.repo.create_equipment(name);
        log_write(
            "equipment_create",
            result.as_ref().ok().map(|equipment| equipment.id),
            &result,
        );
        result
    }

    /// Overwrites the name of existing equipment.
    pub fn update_equipment(&self, id: EquipmentId, name: &str) -> RepoResult<()> {
        let result = self.repo.update_equipment(id, name);
        log_write("equipment_update", Some(id), &result);
        result
    }

    /// Deletes equipment by identity.
    pub fn delete_equipment(&self, id: EquipmentId) -> RepoResult<()> {
        let result = self.repo.delete_equipment(id);
        log_write("equipment_delete", Some(id), &result);
        result
    }

    /// Counts stored equipment, tanks included.
    pub fn count_equipment(&self) -> RepoResult<u64> {
        self.repo.count_equipment()
    }
}
