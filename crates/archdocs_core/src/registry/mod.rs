//! Component registry over the static system dataset.
//!
//! # Responsibility
//! - Load and validate the dataset once per process.
//! - Serve read-only lookups in declaration order.
//!
//! # Invariants
//! - Component ids are unique kebab-case strings.
//! - The registry is never mutated after construction.

pub mod component_registry;
