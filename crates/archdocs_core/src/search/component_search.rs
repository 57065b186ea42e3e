//! Linear component search.
//!
//! # Invariants
//! - An empty query returns no hits; it never means "match all".
//! - Query text is literal; there is no pattern syntax.
//! - Hits keep registry declaration order and each component appears once.

use crate::affordance::{icon_for, Icon};
use crate::model::component::{ComponentId, ComponentRecord};
use crate::registry::component_registry::ComponentRegistry;

/// Record field that matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Id,
    Tag,
    Description,
}

/// Search options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSearchQuery {
    /// Raw query text, used as-is (not trimmed).
    pub text: String,
    /// Optional cap on returned hits; `None` keeps every hit.
    pub limit: Option<usize>,
}

impl ComponentSearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One matching component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub component_id: ComponentId,
    /// Matched fields in `Id`, `Tag`, `Description` order, without repeats.
    pub matched: Vec<MatchField>,
    pub icon: Icon,
}

/// Returns components whose id, any tag name or description contains the
/// query, ignoring case.
pub fn search_components(
    registry: &ComponentRegistry,
    query: &ComponentSearchQuery,
) -> Vec<SearchHit> {
    if query.text.is_empty() {
        return Vec::new();
    }

    let needle = query.text.to_lowercase();
    let hits = registry.iter().filter_map(|component| {
        let matched = matched_fields(component, needle.as_str());
        if matched.is_empty() {
            return None;
        }
        Some(SearchHit {
            component_id: component.id.clone(),
            matched,
            icon: icon_for(component.id.as_str()),
        })
    });

    match query.limit {
        Some(limit) => hits.take(limit).collect(),
        None => hits.collect(),
    }
}

/// Convenience wrapper returning the matching records themselves.
pub fn search<'r>(registry: &'r ComponentRegistry, text: &str) -> Vec<&'r ComponentRecord> {
    search_components(registry, &ComponentSearchQuery::new(text))
        .iter()
        .filter_map(|hit| registry.get(hit.component_id.as_str()))
        .collect()
}

/// Dropdown summary line for a result count.
pub fn result_summary(query: &str, count: usize) -> String {
    match count {
        0 => format!("No results found for \"{query}\""),
        1 => "1 result found".to_string(),
        n => format!("{n} results found"),
    }
}

fn matched_fields(component: &ComponentRecord, needle: &str) -> Vec<MatchField> {
    let mut matched = Vec::new();
    if component.id.to_lowercase().contains(needle) {
        matched.push(MatchField::Id);
    }
    if component
        .tags
        .iter()
        .any(|tag| tag.name.to_lowercase().contains(needle))
    {
        matched.push(MatchField::Tag);
    }
    if component.description.to_lowercase().contains(needle) {
        matched.push(MatchField::Description);
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::result_summary;

    #[test]
    fn summary_pluralizes_counts() {
        assert_eq!(result_summary("x", 0), "No results found for \"x\"");
        assert_eq!(result_summary("x", 1), "1 result found");
        assert_eq!(result_summary("x", 4), "4 results found");
    }
}
