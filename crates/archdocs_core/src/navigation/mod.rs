//! Active-section navigation and the route table.
//!
//! # Responsibility
//! - Hold the single active section and report side effects of a switch.
//! - Map sections to shareable paths and back.
//!
//! # Invariants
//! - Exactly one section is active; the last `set_active` wins.
//! - Unknown ids are accepted and render an empty detail view.

pub mod controller;
pub mod routes;
