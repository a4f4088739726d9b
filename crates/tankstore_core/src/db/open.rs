//! Connection bootstrap for the record store.
//!
//! # Responsibility
//! - Resolve a [`StoreLocation`] into an open SQLite connection.
//! - Configure pragmas and run migrations before handing the connection out.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the record store lives.
///
/// Both variants go through the same bootstrap, so repositories and tests see
/// identical schema and constraint behavior regardless of the backing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Private in-memory database, dropped with its connection.
    Memory,
    /// Database file on disk, created when missing.
    File(PathBuf),
}

impl StoreLocation {
    /// Builds a file-backed location.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Short label used in log events.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File(_) => "file",
        }
    }
}

/// Opens the store at `location` and applies all pending migrations.
///
/// # Side effects
/// - Emits `db_open` logging events with mode, duration and status.
pub fn open_store(location: &StoreLocation) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = location.mode();
    info!("event=db_open module=db status=start mode={mode}");

    let opened = match location {
        StoreLocation::Memory => Connection::open_in_memory(),
        StoreLocation::File(path) => Connection::open(path),
    };
    let mut conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

/// Opens a file-backed store.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_store(&StoreLocation::file(path))
}

/// Opens a fresh in-memory store.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_store(&StoreLocation::Memory)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::StoreLocation;

    #[test]
    fn mode_labels_match_variant() {
        assert_eq!(StoreLocation::Memory.mode(), "memory");
        assert_eq!(StoreLocation::file("/tmp/store.db").mode(), "file");
    }
}
