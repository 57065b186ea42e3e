//! Search-as-you-type over the component registry.
//!
//! # Responsibility
//! - Filter registry components by a literal, case-insensitive query.
//! - Keep result shaping (matched fields, icon, summary line) inside core.

pub mod component_search;
