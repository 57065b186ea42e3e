//! Component catalog records.
//!
//! # Responsibility
//! - Define the serialized shape of the static system dataset.
//! - Provide id validation shared by registry and mapping checks.
//!
//! # Invariants
//! - `id` is non-empty kebab-case and unique within one dataset.
//! - Tag order is display order; matching never depends on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier for one architectural component.
///
/// Kept as a type alias so signatures read as domain intent.
pub type ComponentId = String;

/// Category label attached to a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Palette name used by the viewer (`blue`, `red`, ...).
    pub color: String,
}

/// Team ownership and operational notes for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    pub team_owner: String,
    pub key_responsibilities: String,
    pub deployment_strategy: String,
    pub containerization: String,
}

/// One evaluated implementation option for a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicOption {
    pub name: String,
    pub recommendation: bool,
    pub summary: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

/// Canonical record for one architectural component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: ComponentId,
    /// Rollout phase this component belongs to.
    pub phase: u32,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub visual_analogy: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Free-form dependency entries; usually component ids, sometimes prose.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub ownership: Ownership,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strategic_options: Vec<StrategicOption>,
}

impl ComponentRecord {
    /// Returns whether any tag name equals `name` exactly.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }

    /// Human-facing title derived from the id (`api-gateway` -> `Api Gateway`).
    pub fn display_name(&self) -> String {
        self.id
            .split('-')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One rollout phase of the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// Roadmap section of the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub description: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

/// Declarative graph description rendered by the diagram view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    pub title: String,
    pub goal: String,
    pub graph: String,
}

/// Whole static dataset as shipped with the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemData {
    pub app_name: String,
    #[serde(default)]
    pub app_description: String,
    #[serde(default)]
    pub roadmap: Roadmap,
    /// Keyed by diagram slot (`phase1`, `phase2`, ...).
    #[serde(default)]
    pub diagrams: BTreeMap<String, Diagram>,
    pub components: Vec<ComponentRecord>,
}

/// Returns whether `value` is non-empty kebab-case (`[a-z0-9]+(-[a-z0-9]+)*`).
pub fn is_valid_component_id(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::{is_valid_component_id, ComponentRecord, Ownership, Tag};

    fn record(id: &str) -> ComponentRecord {
        ComponentRecord {
            id: id.to_string(),
            phase: 1,
            tags: vec![Tag {
                name: "Gateway".to_string(),
                color: "purple".to_string(),
            }],
            repository: String::new(),
            visual_analogy: String::new(),
            description: "entry point".to_string(),
            responsibilities: vec![],
            dependencies: vec![],
            technologies: String::new(),
            ownership: Ownership::default(),
            strategic_options: vec![],
        }
    }

    #[test]
    fn kebab_case_ids_are_accepted() {
        assert!(is_valid_component_id("api-gateway"));
        assert!(is_valid_component_id("vector-db-service"));
        assert!(is_valid_component_id("s3"));
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(!is_valid_component_id(""));
        assert!(!is_valid_component_id("Api-Gateway"));
        assert!(!is_valid_component_id("key vault"));
        assert!(!is_valid_component_id("-leading"));
        assert!(!is_valid_component_id("double--dash"));
    }

    #[test]
    fn display_name_capitalizes_every_segment() {
        assert_eq!(record("llm-provider-service").display_name(), "Llm Provider Service");
    }

    #[test]
    fn has_tag_matches_exact_name() {
        let component = record("api-gateway");
        assert!(component.has_tag("Gateway"));
        assert!(!component.has_tag("gateway"));
    }
}
