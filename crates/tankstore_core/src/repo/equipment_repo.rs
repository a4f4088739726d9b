//! Equipment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `Equipment` table.
//!
//! # Invariants
//! - Identities are assigned by SQLite on insert.
//! - Name rules are enforced by the table constraints, not pre-validated here.
//! - Deleting equipment that backs a tank removes the tank too
//!   (`ON DELETE CASCADE`).

use super::schema::{ensure_connection_ready, EQUIPMENT_TABLE};
use super::{RepoError, RepoResult};
use crate::model::equipment::{Equipment, EquipmentId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const EQUIPMENT_SELECT_SQL: &str = "SELECT Id, Name FROM Equipment";

/// Repository interface for equipment CRUD operations.
pub trait EquipmentRepository {
    /// Lists all equipment ordered by identity.
    fn list_equipment(&self) -> RepoResult<Vec<Equipment>>;
    /// Loads one equipment row, `None` when absent.
    fn get_equipment(&self, id: EquipmentId) -> RepoResult<Option<Equipment>>;
    /// Inserts a new row and returns it with its assigned identity.
    fn create_equipment(&self, name: &str) -> RepoResult<Equipment>;
    /// Overwrites the name of an existing row.
    fn update_equipment(&self, id: EquipmentId, name: &str) -> RepoResult<()>;
    /// Removes an existing row.
    fn delete_equipment(&self, id: EquipmentId) -> RepoResult<()>;
    /// Number of stored equipment rows, tanks included.
    fn count_equipment(&self) -> RepoResult<u64>;
}

/// SQLite-backed equipment repository.
pub struct SqliteEquipmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEquipmentRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[EQUIPMENT_TABLE])?;
        Ok(Self { conn })
    }
}

impl EquipmentRepository for SqliteEquipmentRepository<'_> {
    fn list_equipment(&self) -> RepoResult<Vec<Equipment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EQUIPMENT_SELECT_SQL} ORDER BY Id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_equipment_row(row)?);
        }
        Ok(items)
    }

    fn get_equipment(&self, id: EquipmentId) -> RepoResult<Option<Equipment>> {
        let equipment = self
            .conn
            .query_row(
                &format!("{EQUIPMENT_SELECT_SQL} WHERE Id = ?1;"),
                [id],
                parse_equipment_row,
            )
            .optional()?;
        Ok(equipment)
    }

    fn create_equipment(&self, name: &str) -> RepoResult<Equipment> {
        self.conn
            .execute("INSERT INTO Equipment (Name) VALUES (?1);", [name])?;
        Ok(Equipment::new(self.conn.last_insert_rowid(), name))
    }

    fn update_equipment(&self, id: EquipmentId, name: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE Equipment SET Name = ?2 WHERE Id = ?1;",
            params![id, name],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_equipment(&self, id: EquipmentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM Equipment WHERE Id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn count_equipment(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Equipment;", [], |row| row.get(0))?;
        Ok(count.unsigned_abs())
    }
}

fn parse_equipment_row(row: &Row<'_>) -> rusqlite::Result<Equipment> {
    Ok(Equipment {
        id: row.get("Id")?,
        name: row.get("Name")?,
    })
}
