//! SQLite bootstrap for the preference store.
//!
//! # Responsibility
//! - Open file or in-memory connections ready for preference reads/writes.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A connection is returned only after migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Step that was running when SQLite reported an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbStage {
    Open,
    Configure,
    Migrate,
    Query,
}

impl DbStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Configure => "configure",
            Self::Migrate => "migrate",
            Self::Query => "query",
        }
    }
}

#[derive(Debug)]
pub enum DbError {
    Sqlite {
        stage: DbStage,
        source: rusqlite::Error,
    },
    /// The file was migrated by a newer build; it is left untouched.
    SchemaTooNew { found: u32, supported: u32 },
}

impl DbError {
    /// Adapter for `map_err` that tags a SQLite error with `stage`.
    pub fn at(stage: DbStage) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Sqlite { stage, source }
    }

    /// `None` for schema errors, which are not tied to a SQLite call.
    pub fn stage(&self) -> Option<DbStage> {
        match self {
            Self::Sqlite { stage, .. } => Some(*stage),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite { stage, source } => {
                write!(f, "sqlite {} failed: {source}", stage.as_str())
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "preference file has schema v{found}; this build reads up to v{supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite { source, .. } => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}
