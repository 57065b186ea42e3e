use archdocs_core::resolve::label_map::MappingIssue;
use archdocs_core::{ComponentRegistry, LabelMapping, LabelResolver, MatchPolicy};

#[test]
fn every_builtin_key_resolves_to_its_own_target() {
    let resolver = LabelResolver::builtin();
    for (key, target) in resolver.mapping().iter() {
        assert_eq!(resolver.resolve(key), Some(target), "key {key:?}");
        assert_eq!(resolver.resolve(&key.to_uppercase()), Some(target));
    }
}

#[test]
fn substrings_of_keys_always_resolve_somewhere() {
    let resolver = LabelResolver::builtin();
    for (key, _) in resolver.mapping().iter() {
        for start in 0..key.len() {
            for end in start + 1..=key.len() {
                let fragment = &key[start..end];
                if fragment.trim().is_empty() {
                    continue;
                }
                assert!(
                    resolver.resolve(fragment).is_some(),
                    "fragment {fragment:?} of {key:?} did not resolve"
                );
            }
        }
    }
}

#[test]
fn empty_and_unknown_labels_do_not_resolve() {
    let resolver = LabelResolver::builtin();
    assert_eq!(resolver.resolve(""), None);
    assert_eq!(resolver.resolve("no-such-label"), None);
}

#[test]
fn diagram_style_labels_resolve_by_containment() {
    let resolver = LabelResolver::builtin();
    assert_eq!(resolver.resolve("  Key Vault "), Some("key-vault"));
    assert_eq!(
        resolver.resolve("External APIs (e.g., Slack)"),
        Some("external-apis")
    );
    assert_eq!(resolver.resolve("State Management"), Some("state-management"));
}

#[test]
fn ambiguous_fragment_follows_declaration_order() {
    // "service" appears in several keys; the first declared one wins.
    let resolver = LabelResolver::builtin();
    assert_eq!(resolver.resolve("service"), Some("polykey-service"));

    let reordered: LabelMapping = [
        ("user-service", "user-service"),
        ("polykey-service", "polykey-service"),
    ]
    .into_iter()
    .collect();
    let resolver = LabelResolver::new(reordered);
    assert_eq!(resolver.resolve("service"), Some("user-service"));
}

#[test]
fn longest_key_policy_is_order_independent() {
    let mapping: LabelMapping = [("vault", "generic-vault"), ("key vault", "key-vault")]
        .into_iter()
        .collect();
    let reversed: LabelMapping = [("key vault", "key-vault"), ("vault", "generic-vault")]
        .into_iter()
        .collect();

    for mapping in [mapping, reversed] {
        let resolver = LabelResolver::with_policy(mapping, MatchPolicy::LongestKey);
        assert_eq!(resolver.resolve("primary key vault"), Some("key-vault"));
    }
}

#[test]
fn builtin_mapping_matches_registry_without_conflicts() {
    let registry = ComponentRegistry::builtin();
    let issues = LabelMapping::builtin().validate_against(registry);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn validation_reports_unknown_targets_and_shadowed_keys() {
    let registry = ComponentRegistry::builtin();
    let mapping: LabelMapping = [("vault", "generic-vault"), ("key vault", "key-vault")]
        .into_iter()
        .collect();

    let issues = mapping.validate_against(registry);
    assert!(issues.contains(&MappingIssue::UnknownTarget {
        key: "vault".to_string(),
        target: "generic-vault".to_string(),
    }));
    assert!(issues.contains(&MappingIssue::OverlappingKeys {
        shadowing: "vault".to_string(),
        shadowed: "key vault".to_string(),
    }));
}
