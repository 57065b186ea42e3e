//! Component notes and changelog loading.
//!
//! # Responsibility
//! - Define the retrieval seam (`NoteSource`) and its builtin modules.
//! - Cache loaded notes per id with single-flight retrieval.
//! - Project load outcomes into explicit render states.
//!
//! # Invariants
//! - Notes are returned newest first, stable for equal dates.
//! - Unknown ids and failed retrievals are never cached.

pub mod loader;
pub mod source;
pub mod view;
