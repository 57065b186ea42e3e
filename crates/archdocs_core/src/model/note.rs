//! Note records and date helpers.
//!
//! # Responsibility
//! - Define the timestamped annotation shape shared by component notes and
//!   the changelog.
//! - Own date ordering and human date formatting.
//!
//! # Invariants
//! - Ordering is by `date` descending; ties keep original order (stable sort).
//! - Date formatting never fails; malformed input is echoed back unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel owner id used by changelog entries.
pub const CHANGELOG_ID: &str = "changelog";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// One timestamped annotation attached to a component or the changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: String,
    /// Owning component id, or [`CHANGELOG_ID`].
    pub component_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    /// ISO calendar date (`YYYY-MM-DD`), used for ordering.
    pub date: String,
    /// Free-text labels; duplicates are allowed.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NoteRecord {
    /// Parsed `date`, or `None` when it is not an ISO calendar date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(self.date.as_str())
    }

    /// Whether this record belongs to the changelog rather than a component.
    pub fn is_changelog(&self) -> bool {
        self.component_id == CHANGELOG_ID
    }
}

/// Sorts notes newest first.
///
/// Stable: equal dates keep their original relative order. Records with an
/// unparseable date sort after every dated record.
pub fn sort_notes_newest_first(notes: &mut [NoteRecord]) {
    notes.sort_by(newest_first);
}

/// Comparator behind [`sort_notes_newest_first`], usable on borrowed records.
pub fn newest_first(left: &NoteRecord, right: &NoteRecord) -> Ordering {
    compare_dates_desc(left.parsed_date(), right.parsed_date())
}

/// Formats an ISO date as `January 15, 2024`.
///
/// Returns `raw` unchanged when it cannot be parsed.
pub fn format_note_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).ok()
}

fn compare_dates_desc(left: Option<NaiveDate>, right: Option<NaiveDate>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
