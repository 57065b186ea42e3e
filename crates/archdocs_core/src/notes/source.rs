//! Note retrieval contract and the embedded note modules.
//!
//! # Responsibility
//! - Declare which ids are loadable (`NoteCatalog`).
//! - Define the async retrieval seam used by `NotesLoader`.
//! - Ship the builtin note modules compiled into the crate.

use crate::model::note::{NoteRecord, CHANGELOG_ID};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

const POLYKEY_NOTES_JSON: &str = include_str!("../../data/notes/polykey-service.json");
const CHANGELOG_NOTES_JSON: &str = include_str!("../../data/notes/changelog.json");

/// Category of a loadable note module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// Developer notes for one component.
    Service,
    /// Project-wide changelog.
    Changelog,
}

/// Ordered set of loadable note ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCatalog {
    entries: Vec<(String, NoteKind)>,
}

impl NoteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one id. Re-registering an id keeps the first entry.
    pub fn with(mut self, id: impl Into<String>, kind: NoteKind) -> Self {
        let id = id.into();
        if !self.contains(id.as_str()) {
            self.entries.push((id, kind));
        }
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.kind_of(id).is_some()
    }

    pub fn kind_of(&self, id: &str) -> Option<NoteKind> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, kind)| *kind)
    }

    /// Ids of the given kind, in registration order.
    pub fn ids_of(&self, kind: NoteKind) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry_kind)| *entry_kind == kind)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Retrieval-layer failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The backing store could not be reached or refused the request.
    Unavailable(String),
    /// The module was reached but its content could not be decoded.
    InvalidData(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "note source unavailable: {message}"),
            Self::InvalidData(message) => write!(f, "invalid note data: {message}"),
        }
    }
}

impl Error for SourceError {}

/// Async retrieval collaborator behind `NotesLoader`.
///
/// Implementations only fetch; ordering and caching live in the loader.
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// Ids this source can load.
    fn catalog(&self) -> &NoteCatalog;

    /// Fetches all records for one catalog id, in stored order.
    async fn fetch(&self, id: &str) -> Result<Vec<NoteRecord>, SourceError>;
}

#[async_trait]
impl<S: NoteSource + ?Sized> NoteSource for Arc<S> {
    fn catalog(&self) -> &NoteCatalog {
        (**self).catalog()
    }

    async fn fetch(&self, id: &str) -> Result<Vec<NoteRecord>, SourceError> {
        (**self).fetch(id).await
    }
}

/// Note modules embedded as JSON text; decoded on every fetch.
#[derive(Debug, Clone)]
pub struct StaticNoteSource {
    catalog: NoteCatalog,
    modules: Vec<(String, &'static str)>,
}

impl StaticNoteSource {
    pub fn new() -> Self {
        Self {
            catalog: NoteCatalog::new(),
            modules: Vec::new(),
        }
    }

    /// Modules shipped with the crate: `polykey-service` and `changelog`.
    pub fn builtin() -> Self {
        Self::new()
            .with_module("polykey-service", NoteKind::Service, POLYKEY_NOTES_JSON)
            .with_module(CHANGELOG_ID, NoteKind::Changelog, CHANGELOG_NOTES_JSON)
    }

    /// Adds one JSON module (an array of note records).
    pub fn with_module(mut self, id: &str, kind: NoteKind, json: &'static str) -> Self {
        if !self.catalog.contains(id) {
            self.catalog = self.catalog.with(id, kind);
            self.modules.push((id.to_string(), json));
        }
        self
    }
}

impl Default for StaticNoteSource {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl NoteSource for StaticNoteSource {
    fn catalog(&self) -> &NoteCatalog {
        &self.catalog
    }

    async fn fetch(&self, id: &str) -> Result<Vec<NoteRecord>, SourceError> {
        let json = self
            .modules
            .iter()
            .find(|(module_id, _)| module_id == id)
            .map(|(_, json)| *json)
            .ok_or_else(|| SourceError::Unavailable(format!("no module for `{id}`")))?;

        serde_json::from_str::<Vec<NoteRecord>>(json)
            .map_err(|err| SourceError::InvalidData(format!("module `{id}`: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteCatalog, NoteKind};

    #[test]
    fn catalog_keeps_registration_order_and_first_kind() {
        let catalog = NoteCatalog::new()
            .with("b-service", NoteKind::Service)
            .with("changelog", NoteKind::Changelog)
            .with("a-service", NoteKind::Service)
            .with("b-service", NoteKind::Changelog);

        assert_eq!(catalog.ids(), vec!["b-service", "changelog", "a-service"]);
        assert_eq!(catalog.kind_of("b-service"), Some(NoteKind::Service));
        assert_eq!(catalog.ids_of(NoteKind::Service), vec!["b-service", "a-service"]);
        assert!(!catalog.contains("missing"));
    }
}
