use archdocs_core::search::component_search::{search, MatchField};
use archdocs_core::{search_components, ComponentRegistry, ComponentSearchQuery};

fn hit_ids(query: &ComponentSearchQuery) -> Vec<String> {
    search_components(ComponentRegistry::builtin(), query)
        .into_iter()
        .map(|hit| hit.component_id)
        .collect()
}

#[test]
fn empty_query_returns_nothing() {
    assert!(hit_ids(&ComponentSearchQuery::new("")).is_empty());
    assert!(search(ComponentRegistry::builtin(), "").is_empty());
}

#[test]
fn every_component_is_found_once_by_id_tag_and_description() {
    let registry = ComponentRegistry::builtin();
    for component in registry.iter() {
        let mut probes = vec![component.id.to_uppercase()];
        probes.extend(component.tags.iter().map(|tag| tag.name.to_lowercase()));
        probes.push(component.description.chars().take(24).collect());

        for probe in probes {
            let ids = hit_ids(&ComponentSearchQuery::new(probe.as_str()));
            let occurrences = ids.iter().filter(|id| *id == &component.id).count();
            assert_eq!(occurrences, 1, "{} for probe {probe:?}", component.id);
        }
    }
}

#[test]
fn tag_hits_keep_registry_order() {
    let ids = hit_ids(&ComponentSearchQuery::new("security"));
    let positions = ["polykey-service", "key-vault", "service-mesh"]
        .iter()
        .map(|wanted| ids.iter().position(|id| id == wanted).unwrap())
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn hits_report_which_fields_matched() {
    let hits = search_components(
        ComponentRegistry::builtin(),
        &ComponentSearchQuery::new("key-vault"),
    );
    let key_vault = hits
        .iter()
        .find(|hit| hit.component_id == "key-vault")
        .unwrap();
    assert_eq!(key_vault.matched.first(), Some(&MatchField::Id));
}

#[test]
fn limit_truncates_after_ordering() {
    let all = hit_ids(&ComponentSearchQuery::new("service"));
    let limited = hit_ids(&ComponentSearchQuery::new("service").with_limit(2));
    assert!(all.len() > 2);
    assert_eq!(limited, all[..2].to_vec());
}

#[test]
fn query_is_literal_text() {
    assert!(hit_ids(&ComponentSearchQuery::new(".*")).is_empty());
    assert!(hit_ids(&ComponentSearchQuery::new("zzz-no-match")).is_empty());
}
