use archdocs_core::affordance::{doc_links_for, icon_for, Icon};
use archdocs_core::model::component::is_valid_component_id;
use archdocs_core::ComponentRegistry;

#[test]
fn builtin_dataset_loads_every_component() {
    let registry = ComponentRegistry::builtin();
    assert_eq!(registry.len(), 13);
    assert_eq!(registry.ids().first(), Some(&"spounge-client"));
    assert!(registry.ids().iter().all(|id| is_valid_component_id(id)));
    assert_eq!(registry.by_phase(1).len(), 10);
    assert_eq!(registry.by_phase(2).len(), 3);
}

#[test]
fn prose_dependencies_are_reported_not_rejected() {
    let unresolved = ComponentRegistry::builtin().unresolved_dependencies();
    assert!(unresolved.contains(&(
        "user-service".to_string(),
        "PostgreSQL Database".to_string()
    )));
    assert_eq!(unresolved.len(), 3);
}

#[test]
fn only_workflow_engine_lists_strategic_options() {
    let registry = ComponentRegistry::builtin();
    let with_options = registry
        .iter()
        .filter(|component| !component.strategic_options.is_empty())
        .map(|component| component.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(with_options, vec!["workflow-engine"]);
}

#[test]
fn every_component_gets_a_twelve_factor_link() {
    let registry = ComponentRegistry::builtin();
    for component in registry.iter() {
        assert!(doc_links_for(component)
            .iter()
            .any(|link| link.title.contains("12-Factor")));
    }
}

#[test]
fn unknown_ids_fall_back_to_the_document_icon() {
    assert_eq!(icon_for("api-gateway"), Icon::Globe);
    assert_eq!(icon_for("no-such-component"), Icon::FileText);
}
