//! Architecture diagram text.
//!
//! # Responsibility
//! - Parse the flowchart subset used by the bundled diagrams.
//! - Cross-check clickable node labels against the label resolver.
//!
//! # Invariants
//! - Parsing is lenient: unrecognized lines are skipped, never rejected.
//! - Nodes keep first-declaration order and first-declaration labels.

pub mod graph;
