//! Preference storage contracts and implementations.

use crate::db::{open_db, open_db_in_memory, DbError, DbStage};
use crate::preference::theme::{Theme, THEME_STORAGE_KEY};
use log::{error, info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::Mutex;

pub type PreferenceResult<T> = Result<T, PreferenceError>;

#[derive(Debug)]
pub enum PreferenceError {
    Db(DbError),
    /// The in-process store's lock was poisoned by a panicking writer.
    Poisoned,
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Poisoned => write!(f, "preference store lock poisoned"),
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Poisoned => None,
        }
    }
}

impl From<DbError> for PreferenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PreferenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::at(DbStage::Query)(value))
    }
}

/// Key/value persistence for UI preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> PreferenceResult<Option<String>>;
    /// Replaces any previous value for `key`.
    fn write(&self, key: &str, value: &str) -> PreferenceResult<()>;
}

/// Preferences in a migrated SQLite database.
pub struct SqlitePreferenceStore {
    conn: Connection,
}

impl SqlitePreferenceStore {
    /// Wraps a connection returned by [`open_db`] or [`open_db_in_memory`].
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: impl AsRef<Path>) -> PreferenceResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn in_memory() -> PreferenceResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn read(&self, key: &str) -> PreferenceResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> PreferenceResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local store for runs without a database path.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> PreferenceResult<Option<String>> {
        let values = self.values.lock().map_err(|_| PreferenceError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> PreferenceResult<()> {
        let mut values = self.values.lock().map_err(|_| PreferenceError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the stored theme; absent or unknown values yield `Theme::System`.
pub fn load_theme(store: &dyn PreferenceStore) -> PreferenceResult<Theme> {
    let Some(raw) = store.read(THEME_STORAGE_KEY)? else {
        return Ok(Theme::default());
    };
    match Theme::parse(raw.as_str()) {
        Some(theme) => Ok(theme),
        None => {
            warn!("event=theme_read module=preference status=fallback stored={raw:?}");
            Ok(Theme::default())
        }
    }
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> PreferenceResult<()> {
    match store.write(THEME_STORAGE_KEY, theme.as_str()) {
        Ok(()) => {
            info!("event=theme_write module=preference status=ok theme={theme}");
            Ok(())
        }
        Err(err) => {
            error!("event=theme_write module=preference status=error theme={theme} error={err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load_theme, save_theme, MemoryPreferenceStore, PreferenceStore};
    use crate::preference::theme::{Theme, THEME_STORAGE_KEY};

    #[test]
    fn absent_theme_defaults_to_system() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(load_theme(&store).unwrap(), Theme::System);
    }

    #[test]
    fn garbage_theme_defaults_to_system() {
        let store = MemoryPreferenceStore::new();
        store.write(THEME_STORAGE_KEY, "neon").unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::System);
    }

    #[test]
    fn save_then_load_returns_latest_choice() {
        let store = MemoryPreferenceStore::new();
        save_theme(&store, Theme::Dark).unwrap();
        save_theme(&store, Theme::Light).unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);
    }
}
