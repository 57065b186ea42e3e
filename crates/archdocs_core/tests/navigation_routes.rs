use archdocs_core::navigation::routes::{path_for, route_by_id, routes, section_for_path};
use archdocs_core::{ComponentRegistry, DetailView, LabelResolver, NavigationController, Section};

#[test]
fn last_set_active_wins() {
    let mut controller = NavigationController::new();
    controller.set_active("api-gateway");
    controller.set_active("user-service");
    assert_eq!(controller.active_id(), "user-service");
}

#[test]
fn unknown_component_renders_empty_detail() {
    let registry = ComponentRegistry::builtin();
    let mut controller = NavigationController::new();

    controller.set_active("does-not-exist");
    assert_eq!(controller.active_id(), "does-not-exist");
    assert_eq!(controller.detail(registry), DetailView::Empty);

    controller.set_active("key-vault");
    match controller.detail(registry) {
        DetailView::Component(record) => assert_eq!(record.id, "key-vault"),
        other => panic!("unexpected detail view: {other:?}"),
    }
}

#[test]
fn fixed_sections_render_their_own_views() {
    let registry = ComponentRegistry::builtin();
    let mut controller = NavigationController::new();
    assert_eq!(controller.detail(registry), DetailView::Roadmap);

    controller.set_active("architecture-diagrams");
    assert_eq!(controller.detail(registry), DetailView::Diagrams);
    controller.set_active("changelog");
    assert_eq!(controller.detail(registry), DetailView::Changelog);
}

#[test]
fn label_navigation_ignores_misses() {
    let resolver = LabelResolver::builtin();
    let mut controller = NavigationController::new();

    let effects = controller.navigate_label(&resolver, "Key Vault").unwrap();
    assert!(effects.scroll_to_top);
    assert_eq!(controller.active_id(), "key-vault");

    assert!(controller.navigate_label(&resolver, "no-such-label").is_none());
    assert_eq!(controller.active_id(), "key-vault");
}

#[test]
fn every_component_has_a_route() {
    let registry = ComponentRegistry::builtin();
    for component in registry.iter() {
        let route = route_by_id(component.id.as_str()).unwrap();
        assert!(route.category.is_some(), "{} has no category", component.id);
        assert_eq!(section_for_path(route.path).id(), component.id);
    }
}

#[test]
fn route_table_round_trips_every_section() {
    for route in routes() {
        let section = Section::from_id(route.id);
        assert_eq!(path_for(&section), route.path);
        assert_eq!(section_for_path(route.path), section);
    }
}

#[test]
fn root_path_opens_roadmap() {
    let mut controller = NavigationController::new();
    controller.navigate(section_for_path("/"));
    assert_eq!(controller.active(), &Section::Roadmap);
}
