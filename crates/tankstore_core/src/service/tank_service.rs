//! Tank use-case service.
//!
//! # Responsibility
//! - Provide the tank CRUD entry points for core callers.
//! - Delegate persistence to a [`TankRepository`].
//!
//! # Invariants
//! - Returned tanks always carry their equipment (eager join).
//! - `update_tank` writes volume and equipment name in one transaction.
//! - `delete_tank` cascades to the tank's equipment.

use super::log_write;
use crate::model::equipment::EquipmentId;
use crate::model::tank::Tank;
use crate::repo::tank_repo::TankRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for tank CRUD operations.
pub struct TankService<R: TankRepository> {
    repo: R,
}

impl<R: TankRepository> TankService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_tanks(&self) -> RepoResult<Vec<Tank>> {
        self.repo.list_tanks()
    }

    pub fn get_tank(&self, id: EquipmentId) -> RepoResult<Option<Tank>> {
        self.repo.get_tank(id)
    }

    /// Creates a tank and its equipment under one store-assigned identity.
    pub fn create_tank(&self, volume: i64, equipment_name: &str) -> RepoResult<Tank> {
        let result = self.repo.create_tank(volume, equipment_name);
        log_write("tank_create", result.as_ref().ok().map(|tank| tank.id), &result);
        result
    }

    /// Turns existing equipment into a tank without changing its identity.
    ///
    /// # Contract
    /// - `NotFound(equipment_id)` when the equipment does not exist.
    /// - `ConstraintViolation` when the equipment already is a tank.
    pub fn create_tank_for_equipment(
        &self,
        equipment_id: EquipmentId,
        volume: i64,
    ) -> RepoResult<Tank> {
        let result = self.repo.create_tank_for_equipment(equipment_id, volume);
        log_write("tank_specialize", Some(equipment_id), &result);
        result
    }

    pub fn update_tank(
        &self,
        id: EquipmentId,
        volume: i64,
        equipment_name: &str,
    ) -> RepoResult<()> {
        let result = self.repo.update_tank(id, volume, equipment_name);
        log_write("tank_update", Some(id), &result);
        result
    }

    pub fn delete_tank(&self, id: EquipmentId) -> RepoResult<()> {
        let result = self.repo.delete_tank(id);
        log_write("tank_delete", Some(id), &result);
        result
    }

    pub fn count_tanks(&self) -> RepoResult<u64> {
        self.repo.count_tanks()
    }
}
