//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Expose the equipment and tank CRUD surface to embedding callers.
//! - Emit metadata-only log events for every write.
//!
//! # Invariants
//! - Services hold no state beyond their repository.
//! - Repository errors are returned unchanged.

use crate::model::equipment::EquipmentId;
use crate::repo::RepoResult;
use log::{info, warn};

pub mod equipment_service;
pub mod tank_service;

fn log_write<T>(event: &str, id: Option<EquipmentId>, result: &RepoResult<T>) {
    let id = id.map_or_else(|| "none".to_string(), |id| id.to_string());
    match result {
        Ok(_) => info!("event={event} module=service status=ok id={id}"),
        Err(err) => warn!(
            "event={event} module=service status=error id={id} error_code={}",
            err.code()
        ),
    }
}
