//! Tank repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist tanks as an `Equipment` row plus a `Tank` row sharing its key.
//! - Keep both rows consistent inside one transaction per write.
//!
//! # Invariants
//! - Reads always join `Equipment`; returned tanks carry their base record.
//! - `create_tank` inserts `Equipment` first and reuses its identity.
//! - `delete_tank` removes both rows, leaving no orphaned equipment.

use super::schema::{ensure_connection_ready, EQUIPMENT_TABLE, TANK_TABLE};
use super::{RepoError, RepoResult};
use crate::model::equipment::{Equipment, EquipmentId};
use crate::model::tank::Tank;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const TANK_SELECT_SQL: &str = "SELECT
    t.Id AS Id,
    t.Volume AS Volume,
    e.Name AS Name
FROM Tank t
INNER JOIN Equipment e ON e.Id = t.Id";

/// Repository interface for tank CRUD operations.
pub trait TankRepository {
    /// Lists all tanks with their equipment, ordered by identity.
    fn list_tanks(&self) -> RepoResult<Vec<Tank>>;
    /// Loads one tank with its equipment, `None` when absent.
    fn get_tank(&self, id: EquipmentId) -> RepoResult<Option<Tank>>;
    /// Inserts a new equipment row and a tank row sharing its identity.
    fn create_tank(&self, volume: i64, equipment_name: &str) -> RepoResult<Tank>;
    /// Specializes already stored equipment into a tank.
    fn create_tank_for_equipment(
        &self,
        equipment_id: EquipmentId,
        volume: i64,
    ) -> RepoResult<Tank>;
    /// Writes tank volume and equipment name together.
    fn update_tank(&self, id: EquipmentId, volume: i64, equipment_name: &str) -> RepoResult<()>;
    /// Removes the tank and its equipment.
    fn delete_tank(&self, id: EquipmentId) -> RepoResult<()>;
    /// Number of stored tank rows.
    fn count_tanks(&self) -> RepoResult<u64>;
}

/// SQLite-backed tank repository.
pub struct SqliteTankRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTankRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[EQUIPMENT_TABLE, TANK_TABLE])?;
        Ok(Self { conn })
    }
}

impl TankRepository for SqliteTankRepository<'_> {
    fn list_tanks(&self) -> RepoResult<Vec<Tank>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TANK_SELECT_SQL} ORDER BY t.Id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut tanks = Vec::new();
        while let Some(row) = rows.next()? {
            tanks.push(parse_tank_row(row)?);
        }
        Ok(tanks)
    }

    fn get_tank(&self, id: EquipmentId) -> RepoResult<Option<Tank>> {
        let tank = self
            .conn
            .query_row(
                &format!("{TANK_SELECT_SQL} WHERE t.Id = ?1;"),
                [id],
                parse_tank_row,
            )
            .optional()?;
        Ok(tank)
    }

    fn create_tank(&self, volume: i64, equipment_name: &str) -> RepoResult<Tank> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO Equipment (Name) VALUES (?1);",
            [equipment_name],
        )?;
        let id = tx.last_insert_rowid();
        tx.execute(
            "INSERT INTO Tank (Id, Volume) VALUES (?1, ?2);",
            params![id, volume],
        )?;
        tx.commit()?;

        Ok(Tank::new(Equipment::new(id, equipment_name), volume))
    }

    fn create_tank_for_equipment(
        &self,
        equipment_id: EquipmentId,
        volume: i64,
    ) -> RepoResult<Tank> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let name: Option<String> = tx
            .query_row(
                "SELECT Name FROM Equipment WHERE Id = ?1;",
                [equipment_id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(name) = name else {
            return Err(RepoError::NotFound(equipment_id));
        };

        tx.execute(
            "INSERT INTO Tank (Id, Volume) VALUES (?1, ?2);",
            params![equipment_id, volume],
        )?;
        tx.commit()?;

        Ok(Tank::new(Equipment::new(equipment_id, name), volume))
    }

    fn update_tank(&self, id: EquipmentId, volume: i64, equipment_name: &str) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE Tank SET Volume = ?2 WHERE Id = ?1;",
            params![id, volume],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        tx.execute(
            "UPDATE Equipment SET Name = ?2 WHERE Id = ?1;",
            params![id, equipment_name],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn delete_tank(&self, id: EquipmentId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute("DELETE FROM Tank WHERE Id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        tx.execute("DELETE FROM Equipment WHERE Id = ?1;", [id])?;
        tx.commit()?;
        Ok(())
    }

    fn count_tanks(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Tank;", [], |row| row.get(0))?;
        Ok(count.unsigned_abs())
    }
}

fn parse_tank_row(row: &Row<'_>) -> rusqlite::Result<Tank> {
    let equipment = Equipment {
        id: row.get("Id")?,
        name: row.get("Name")?,
    };
    Ok(Tank::new(equipment, row.get("Volume")?))
}
