//! Domain model for the architecture catalog.
//!
//! # Responsibility
//! - Define the records shared by registry, search, notes and navigation.
//! - Keep one canonical shape per concept (component, note, section).
//!
//! # Invariants
//! - Every component is identified by a stable kebab-case `ComponentId`.
//! - Records are read-only after load; no write path exists in core.

pub mod component;
pub mod note;
pub mod section;
