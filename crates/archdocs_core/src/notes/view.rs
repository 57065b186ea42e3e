//! Render-state projections for note lists.
//!
//! Loading, empty and error are distinct states; a view is never blank.

use crate::model::note::{newest_first, NoteRecord};
use crate::notes::loader::{NoteList, NotesError};
use std::ops::Range;

/// Component notes show one note per page.
pub const DEFAULT_NOTES_PER_PAGE: usize = 1;

const RETRIEVAL_FAILURE_MESSAGE: &str = "Unable to load notes. Try again.";

/// What a notes panel should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesView {
    Loading,
    Empty,
    Error { id: String, message: String },
    Ready(NoteList),
}

impl NotesView {
    /// Projects a finished load into a render state.
    ///
    /// `NotFound` names the id; retrieval failures use a generic message.
    pub fn from_outcome(outcome: &Result<NoteList, NotesError>) -> Self {
        match outcome {
            Ok(notes) if notes.is_empty() => Self::Empty,
            Ok(notes) => Self::Ready(NoteList::clone(notes)),
            Err(err @ NotesError::NotFound { .. }) => Self::Error {
                id: err.id().to_string(),
                message: err.to_string(),
            },
            Err(err @ NotesError::Retrieval { .. }) => Self::Error {
                id: err.id().to_string(),
                message: RETRIEVAL_FAILURE_MESSAGE.to_string(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Previous/next pager over a note list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotesPager {
    total: usize,
    per_page: usize,
    page: usize,
}

impl NotesPager {
    /// `per_page` of zero is treated as one.
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
            page: 0,
        }
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Advances one page; returns `false` at the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Goes back one page; returns `false` at the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Index range of the current page, clamped to `total`.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn items<'a>(&self, notes: &'a [NoteRecord]) -> &'a [NoteRecord] {
        let range = self.range();
        let end = range.end.min(notes.len());
        let start = range.start.min(end);
        &notes[start..end]
    }

    /// Footer label such as `2 of 3`.
    pub fn label(&self) -> String {
        format!("{} of {}", self.page + 1, self.total_pages().max(1))
    }
}

/// Changelog entries newest first, truncated to `limit` when given.
pub fn changelog_entries(notes: &[NoteRecord], limit: Option<usize>) -> Vec<&NoteRecord> {
    let mut entries = notes.iter().collect::<Vec<_>>();
    entries.sort_by(|left, right| newest_first(left, right));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}
