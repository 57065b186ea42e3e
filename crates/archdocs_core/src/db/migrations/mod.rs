//! Ordered migration registry.
//!
//! `version` values must stay strictly increasing; the applied version is
//! mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult, DbStage};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_preferences.sql"),
}];

pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies pending migrations in one transaction.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = current_user_version(conn)?;
    let supported = latest_version();

    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }
    if found == supported {
        return Ok(());
    }

    run_pending(conn, found).map_err(DbError::at(DbStage::Migrate))
}

fn run_pending(conn: &mut Connection, found: u32) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > found) {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))
        .map_err(DbError::at(DbStage::Migrate))
}
