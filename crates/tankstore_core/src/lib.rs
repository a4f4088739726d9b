//! Core data-access layer for equipment and tanks.
//!
//! A `Tank` specializes `Equipment` by sharing its primary key: both live in
//! their own table and the tank key is a foreign key to the equipment key.
//! Stores are SQLite, either in memory or on disk, opened through
//! [`db::open_store`].

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, open_store, DbError, DbResult, StoreLocation};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::equipment::{Equipment, EquipmentId};
pub use model::tank::Tank;
pub use repo::equipment_repo::{EquipmentRepository, SqliteEquipmentRepository};
pub use repo::tank_repo::{SqliteTankRepository, TankRepository};
pub use repo::{RepoError, RepoResult};
pub use service::equipment_service::EquipmentService;
pub use service::tank_service::TankService;
