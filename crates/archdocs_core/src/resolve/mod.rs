//! Diagram label resolution.
//!
//! # Responsibility
//! - Map free-text diagram node labels to component ids.
//! - Report mapping configurations that make resolution ambiguous.
//!
//! # Invariants
//! - Resolution is pure; a miss is `None`, never an error.
//! - Exact key matches always win over substring matches.
//! - Substring matching walks the mapping in declaration order.

pub mod label_map;
pub mod resolver;
