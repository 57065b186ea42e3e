//! Label resolver over a [`LabelMapping`].

use crate::resolve::label_map::{normalize_label, LabelMapping};
use log::debug;

/// Rule applied when no key matches exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// First substring candidate in declaration order.
    #[default]
    FirstMatch,
    /// Longest substring candidate; ties go to the earlier declaration.
    LongestKey,
}

/// Resolves raw diagram labels to component ids.
#[derive(Debug, Clone)]
pub struct LabelResolver {
    mapping: LabelMapping,
    policy: MatchPolicy,
}

impl LabelResolver {
    pub fn new(mapping: LabelMapping) -> Self {
        Self::with_policy(mapping, MatchPolicy::default())
    }

    pub fn with_policy(mapping: LabelMapping, policy: MatchPolicy) -> Self {
        Self { mapping, policy }
    }

    /// Resolver over [`LabelMapping::builtin`] with first-match semantics.
    pub fn builtin() -> Self {
        Self::new(LabelMapping::builtin())
    }

    pub fn mapping(&self) -> &LabelMapping {
        &self.mapping
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Maps a raw label to a component id.
    ///
    /// Returns `None` for blank labels and for labels with no exact or
    /// substring match. Substring matching is two-way: the label may contain
    /// the key or the key may contain the label.
    pub fn resolve(&self, raw_label: &str) -> Option<&str> {
        let label = normalize_label(raw_label);
        if label.is_empty() {
            return None;
        }

        if let Some(target) = self.mapping.get(label.as_str()) {
            debug!("event=label_resolve module=resolve status=ok match=exact target={target}");
            return Some(target);
        }

        let resolved = match self.policy {
            MatchPolicy::FirstMatch => self.first_match(label.as_str()),
            MatchPolicy::LongestKey => self.longest_key(label.as_str()),
        };
        match resolved {
            Some(target) => {
                debug!(
                    "event=label_resolve module=resolve status=ok match=substring target={target}"
                );
            }
            None => debug!("event=label_resolve module=resolve status=miss"),
        }
        resolved
    }

    fn first_match(&self, label: &str) -> Option<&str> {
        self.mapping
            .iter()
            .find(|(key, _)| overlaps(label, key))
            .map(|(_, target)| target)
    }

    fn longest_key(&self, label: &str) -> Option<&str> {
        let mut best: Option<(&str, &str)> = None;
        for (key, target) in self.mapping.iter().filter(|(key, _)| overlaps(label, key)) {
            match best {
                Some((best_key, _)) if best_key.len() >= key.len() => {}
                _ => best = Some((key, target)),
            }
        }
        best.map(|(_, target)| target)
    }
}

impl Default for LabelResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

fn overlaps(label: &str, key: &str) -> bool {
    label.contains(key) || key.contains(label)
}

#[cfg(test)]
mod tests {
    use super::{LabelResolver, MatchPolicy};
    use crate::resolve::label_map::LabelMapping;

    fn overlapping() -> LabelMapping {
        [("vault", "generic-vault"), ("key vault", "key-vault")]
            .into_iter()
            .collect()
    }

    #[test]
    fn first_match_prefers_declaration_order() {
        let resolver = LabelResolver::new(overlapping());
        assert_eq!(resolver.resolve("Key Vault (prod)"), Some("generic-vault"));
    }

    #[test]
    fn longest_key_prefers_more_specific_entry() {
        let resolver = LabelResolver::with_policy(overlapping(), MatchPolicy::LongestKey);
        assert_eq!(resolver.resolve("Key Vault (prod)"), Some("key-vault"));
    }

    #[test]
    fn exact_match_wins_under_both_policies() {
        for policy in [MatchPolicy::FirstMatch, MatchPolicy::LongestKey] {
            let resolver = LabelResolver::with_policy(overlapping(), policy);
            assert_eq!(resolver.resolve("KEY VAULT"), Some("key-vault"));
        }
    }

    #[test]
    fn blank_label_never_matches() {
        let resolver = LabelResolver::new(overlapping());
        assert_eq!(resolver.resolve("   "), None);
    }
}
