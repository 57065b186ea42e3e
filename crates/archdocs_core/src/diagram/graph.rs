//! Node and click-directive extraction.

use crate::resolve::resolver::LabelResolver;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static NODE_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b([A-Za-z][A-Za-z0-9_]*)(?:\["([^"]*)"\]|\[([^\]"]*)\]|\(([^)]*)\))"#)
        .expect("node declaration regex must compile")
});

static CLICK_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"^\s*click\s+([A-Za-z][A-Za-z0-9_]*)\s+"#?([^"]+)""##)
        .expect("click directive regex must compile")
});

const SKIPPED_PREFIXES: &[&str] = &[
    "%%",
    "style ",
    "classDef ",
    "class ",
    "subgraph",
    "linkStyle ",
];

/// One node as declared in the diagram text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub node_id: String,
    /// Display label with `<br/>` breaks flattened to spaces.
    pub label: String,
    /// Section id from a `click` directive, without the leading `#`.
    pub click_target: Option<String>,
}

/// A clickable node whose label resolves somewhere other than its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMismatch {
    pub node_id: String,
    pub label: String,
    pub click_target: String,
    pub resolved: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramGraph {
    pub nodes: Vec<DiagramNode>,
}

impl DiagramGraph {
    pub fn node(&self, node_id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|node| node.node_id == node_id)
    }

    pub fn clickable(&self) -> impl Iterator<Item = &DiagramNode> {
        self.nodes.iter().filter(|node| node.click_target.is_some())
    }

    /// Clickable nodes whose label does not resolve to their click target.
    pub fn label_mismatches(&self, resolver: &LabelResolver) -> Vec<LabelMismatch> {
        let mut mismatches = Vec::new();
        for node in &self.nodes {
            let Some(target) = node.click_target.as_deref() else {
                continue;
            };
            let resolved = resolver.resolve(node.label.as_str());
            if resolved != Some(target) {
                mismatches.push(LabelMismatch {
                    node_id: node.node_id.clone(),
                    label: node.label.clone(),
                    click_target: target.to_string(),
                    resolved: resolved.map(str::to_string),
                });
            }
        }
        mismatches
    }
}

/// Parses node declarations and click directives out of `text`.
///
/// A click on an undeclared node adds the node with its id as label.
pub fn parse_diagram(text: &str) -> DiagramGraph {
    let mut graph = DiagramGraph::default();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(captures) = CLICK_DIRECTIVE.captures(trimmed) {
            let node_id = &captures[1];
            let target = captures[2].trim().to_string();
            let position = match positions.get(node_id) {
                Some(position) => *position,
                None => push_node(&mut graph, &mut positions, node_id, node_id.to_string()),
            };
            graph.nodes[position].click_target = Some(target);
            continue;
        }
        if trimmed.is_empty() || SKIPPED_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix)) {
            continue;
        }

        for captures in NODE_DECL.captures_iter(trimmed) {
            let node_id = &captures[1];
            if positions.contains_key(node_id) {
                continue;
            }
            let raw = captures
                .get(2)
                .or_else(|| captures.get(3))
                .or_else(|| captures.get(4))
                .map_or("", |label| label.as_str());
            push_node(&mut graph, &mut positions, node_id, flatten_label(raw));
        }
    }
    graph
}

fn push_node(
    graph: &mut DiagramGraph,
    positions: &mut HashMap<String, usize>,
    node_id: &str,
    label: String,
) -> usize {
    let position = graph.nodes.len();
    positions.insert(node_id.to_string(), position);
    graph.nodes.push(DiagramNode {
        node_id: node_id.to_string(),
        label,
        click_target: None,
    });
    position
}

fn flatten_label(raw: &str) -> String {
    raw.replace("<br/>", " ")
        .replace("<br>", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::parse_diagram;

    #[test]
    fn parses_all_declaration_shapes() {
        let graph = parse_diagram(
            "graph TD\n  A[api-gateway];\n  B[\"External APIs<br/>(e.g., Slack)\"]\n  C(Key Vault)\n",
        );
        let labels = graph
            .nodes
            .iter()
            .map(|node| (node.node_id.as_str(), node.label.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                ("A", "api-gateway"),
                ("B", "External APIs (e.g., Slack)"),
                ("C", "Key Vault"),
            ]
        );
    }

    #[test]
    fn edges_do_not_redeclare_nodes() {
        let graph = parse_diagram("A[first]\nA -- calls --> B[second]\nA[renamed]\n");
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.node("A").map(|node| node.label.as_str()), Some("first"));
    }

    #[test]
    fn click_directives_attach_targets() {
        let graph = parse_diagram("J[Key Vault]\nclick J \"#key-vault\"\nclick Z \"#orphan\"\n");
        assert_eq!(
            graph.node("J").and_then(|node| node.click_target.as_deref()),
            Some("key-vault")
        );
        assert_eq!(graph.node("Z").map(|node| node.label.as_str()), Some("Z"));
        assert_eq!(graph.clickable().count(), 2);
    }

    #[test]
    fn subgraph_and_style_lines_are_skipped() {
        let graph = parse_diagram(
            "subgraph \"Tools (Called by Polykey)\"\n  style Tools fill:none\nend\n%% note[x]\n",
        );
        assert!(graph.nodes.is_empty());
    }
}
