//! Ordered label → component id relation.

use crate::model::component::ComponentId;
use crate::registry::component_registry::ComponentRegistry;
use std::collections::HashMap;

/// Builtin diagram mapping, in declaration order.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("spounge-client", "spounge-client"),
    ("api-gateway", "api-gateway"),
    ("workflow-engine", "workflow-engine"),
    ("polykey-service", "polykey-service"),
    ("user-service", "user-service"),
    ("llm-provider-service", "llm-provider-service"),
    ("vector-db-service", "vector-db-service"),
    ("key vault", "key-vault"),
    ("state management", "state-management"),
    ("service-mesh", "service-mesh"),
    ("spounge-infra", "spounge-infra"),
    ("external apis", "external-apis"),
    ("spounge-protos", "spounge-protos"),
];

/// Consistency finding for one mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingIssue {
    /// A key points at an id the registry does not know.
    UnknownTarget { key: String, target: ComponentId },
    /// `shadowed` contains `shadowing` (or the reverse) so an input can
    /// match both; the earlier entry wins under first-match resolution.
    OverlappingKeys { shadowing: String, shadowed: String },
}

/// Ordered, many-to-one relation from normalized label to component id.
///
/// Keys are stored trimmed and lower-cased. Re-inserting a key replaces its
/// target but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMapping {
    entries: Vec<(String, ComponentId)>,
    positions: HashMap<String, usize>,
}

impl LabelMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mapping used by the shipped architecture diagrams.
    pub fn builtin() -> Self {
        BUILTIN_ENTRIES
            .iter()
            .map(|(key, target)| (*key, *target))
            .collect()
    }

    /// Appends one entry. Blank keys are ignored.
    pub fn insert(&mut self, key: &str, target: impl Into<ComponentId>) {
        let key = normalize_label(key);
        if key.is_empty() {
            return;
        }
        let target = target.into();
        match self.positions.get(key.as_str()) {
            Some(position) => self.entries[*position].1 = target,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, target));
            }
        }
    }

    /// Exact lookup on an already-normalized key.
    pub fn get(&self, normalized_key: &str) -> Option<&str> {
        self.positions
            .get(normalized_key)
            .map(|position| self.entries[*position].1.as_str())
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, target)| (key.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks targets against `registry` and reports overlapping keys.
    ///
    /// Overlaps only matter when the two keys point at different ids.
    pub fn validate_against(&self, registry: &ComponentRegistry) -> Vec<MappingIssue> {
        let mut issues = Vec::new();
        for (key, target) in self.iter() {
            if !registry.contains(target) {
                issues.push(MappingIssue::UnknownTarget {
                    key: key.to_string(),
                    target: target.to_string(),
                });
            }
        }

        for (index, (earlier_key, earlier_target)) in self.iter().enumerate() {
            for (later_key, later_target) in self.iter().skip(index + 1) {
                if earlier_target == later_target {
                    continue;
                }
                if earlier_key.contains(later_key) || later_key.contains(earlier_key) {
                    issues.push(MappingIssue::OverlappingKeys {
                        shadowing: earlier_key.to_string(),
                        shadowed: later_key.to_string(),
                    });
                }
            }
        }
        issues
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LabelMapping {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (key, target) in iter {
            mapping.insert(key, target);
        }
        mapping
    }
}

/// Trims and lower-cases a label.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{normalize_label, LabelMapping};

    #[test]
    fn insert_normalizes_keys_and_keeps_first_position() {
        let mut mapping = LabelMapping::new();
        mapping.insert("  Key Vault ", "key-vault");
        mapping.insert("api-gateway", "api-gateway");
        mapping.insert("KEY VAULT", "vault");

        let entries = mapping.iter().collect::<Vec<_>>();
        assert_eq!(entries, vec![("key vault", "vault"), ("api-gateway", "api-gateway")]);
    }

    #[test]
    fn blank_keys_are_ignored() {
        let mut mapping = LabelMapping::new();
        mapping.insert("   ", "anything");
        assert!(mapping.is_empty());
    }

    #[test]
    fn builtin_mapping_keeps_declaration_order() {
        let mapping = LabelMapping::builtin();
        assert_eq!(mapping.len(), 13);
        assert_eq!(mapping.iter().next(), Some(("spounge-client", "spounge-client")));
        assert_eq!(mapping.get("external apis"), Some("external-apis"));
    }

    #[test]
    fn normalize_label_trims_and_lowercases() {
        assert_eq!(normalize_label("\t State Management \n"), "state management");
    }
}
