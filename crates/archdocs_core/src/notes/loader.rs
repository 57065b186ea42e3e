//! Cached, single-flight note loader.
//!
//! # Responsibility
//! - Resolve a component/changelog id to its notes, newest first.
//! - Own the per-id cache and coalesce concurrent loads of one id.
//!
//! # Invariants
//! - Unknown ids fail with `NotFound` before any retrieval and leave no
//!   cache entry.
//! - Callers that join an in-flight load share its outcome, failure included.
//! - Failures are never cached; once the in-flight slot is released the next
//!   call retries from scratch.
//! - A cached id always returns the same `Arc` (reference-identical).
//! - Cache and in-flight maps are locked only for short, non-async sections.

use crate::model::note::{sort_notes_newest_first, NoteRecord, CHANGELOG_ID};
use crate::notes::source::{NoteKind, NoteSource, SourceError};
use log::{error, info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Shared, immutable note sequence handed out by the loader.
pub type NoteList = Arc<[NoteRecord]>;

/// Per-id in-flight gate; holds the leader's outcome for callers that
/// joined the same retrieval.
type Gate = Arc<tokio::sync::Mutex<Option<Result<NoteList, NotesError>>>>;

/// Loader-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesError {
    /// Id is not in the source catalog.
    NotFound { id: String },
    /// The source failed while retrieving a known id.
    Retrieval { id: String, source: SourceError },
}

impl NotesError {
    pub fn id(&self) -> &str {
        match self {
            Self::NotFound { id } | Self::Retrieval { id, .. } => id.as_str(),
        }
    }
}

impl Display for NotesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "notes not found: `{id}`"),
            Self::Retrieval { id, source } => {
                write!(f, "unable to load notes for `{id}`: {source}")
            }
        }
    }
}

impl Error for NotesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Retrieval { source, .. } => Some(source),
        }
    }
}

/// Observable cache state for one id.
///
/// `Failed` is not represented: a failed load returns to `Uncached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uncached,
    Loading,
    Cached,
}

/// Note loader owning its cache; construct once per session.
pub struct NotesLoader<S: NoteSource> {
    source: S,
    cache: Mutex<HashMap<String, NoteList>>,
    inflight: Mutex<HashMap<String, Gate>>,
}

impl<S: NoteSource> NotesLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns cached notes without awaiting.
    pub fn cached(&self, id: &str) -> Option<NoteList> {
        lock(&self.cache).get(id).cloned()
    }

    pub fn state(&self, id: &str) -> LoadState {
        if lock(&self.cache).contains_key(id) {
            return LoadState::Cached;
        }
        if lock(&self.inflight).contains_key(id) {
            return LoadState::Loading;
        }
        LoadState::Uncached
    }

    /// Ids currently cached, sorted.
    pub fn cached_ids(&self) -> Vec<String> {
        let mut ids = lock(&self.cache).keys().cloned().collect::<Vec<_>>();
        ids.sort();
        ids
    }

    /// Loads notes for one id, newest first.
    ///
    /// Concurrent calls for the same uncached id share one retrieval.
    ///
    /// # Errors
    /// - `NotFound` when `id` is not in the source catalog.
    /// - `Retrieval` when the source fails; nothing is cached.
    pub async fn load_notes(&self, id: &str) -> Result<NoteList, NotesError> {
        if let Some(notes) = self.cached(id) {
            info!(
                "event=notes_load module=notes status=ok cache=hit id={id} count={}",
                notes.len()
            );
            return Ok(notes);
        }

        if !self.source.catalog().contains(id) {
            warn!("event=notes_load module=notes status=error error_code=not_found id={id}");
            return Err(NotesError::NotFound { id: id.to_string() });
        }

        let slot = InflightSlot::enter(&self.inflight, id);
        let mut outcome = slot.gate.lock().await;

        if let Some(shared) = outcome.as_ref() {
            info!(
                "event=notes_load module=notes status={} cache=coalesced id={id}",
                if shared.is_ok() { "ok" } else { "error" }
            );
            return shared.clone();
        }

        let started_at = Instant::now();
        info!("event=notes_load module=notes status=start cache=miss id={id}");
        let result = match self.source.fetch(id).await {
            Ok(mut notes) => {
                sort_notes_newest_first(&mut notes);
                let notes: NoteList = notes.into();
                lock(&self.cache).insert(id.to_string(), Arc::clone(&notes));
                info!(
                    "event=notes_load module=notes status=ok cache=miss id={id} count={} duration_ms={}",
                    notes.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(notes)
            }
            Err(err) => {
                error!(
                    "event=notes_load module=notes status=error error_code=retrieval_failed id={id} duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(NotesError::Retrieval {
                    id: id.to_string(),
                    source: err,
                })
            }
        };
        *outcome = Some(result.clone());
        result
    }

    /// Loads the project changelog.
    pub async fn load_changelog(&self) -> Result<NoteList, NotesError> {
        self.load_notes(CHANGELOG_ID).await
    }

    /// Loads every service module in catalog order and concatenates them.
    ///
    /// Stops at the first failure.
    pub async fn load_all_service_notes(&self) -> Result<Vec<NoteRecord>, NotesError> {
        let ids = self
            .source
            .catalog()
            .ids_of(NoteKind::Service)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut all = Vec::new();
        for id in ids {
            let notes = self.load_notes(id.as_str()).await?;
            all.extend(notes.iter().cloned());
        }
        Ok(all)
    }
}

/// Registration of one in-flight load; unregisters on drop, including when
/// the owning future is cancelled.
struct InflightSlot<'a> {
    map: &'a Mutex<HashMap<String, Gate>>,
    id: String,
    gate: Gate,
}

impl<'a> InflightSlot<'a> {
    fn enter(map: &'a Mutex<HashMap<String, Gate>>, id: &str) -> Self {
        let gate = Arc::clone(
            lock(map)
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(None))),
        );
        Self {
            map,
            id: id.to_string(),
            gate,
        }
    }
}

impl Drop for InflightSlot<'_> {
    fn drop(&mut self) {
        let mut map = lock(self.map);
        let is_current = map
            .get(self.id.as_str())
            .is_some_and(|gate| Arc::ptr_eq(gate, &self.gate));
        // Waiters still hold their own clone; remove once nobody else does.
        if is_current && Arc::strong_count(&self.gate) <= 2 {
            map.remove(self.id.as_str());
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
