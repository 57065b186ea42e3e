//! Shareable path table for sections.

use crate::model::section::Section;

/// One routable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub id: &'static str,
    pub path: &'static str,
    pub label: &'static str,
    /// Sidebar group; `None` for top-level pages.
    pub category: Option<&'static str>,
}

const fn route(
    id: &'static str,
    path: &'static str,
    label: &'static str,
    category: Option<&'static str>,
) -> Route {
    Route {
        id,
        path,
        label,
        category,
    }
}

const ROUTES: &[Route] = &[
    route("roadmap", "/roadmap", "Implementation Roadmap", None),
    route("architecture-diagrams", "/architecture-diagrams", "Architecture Diagrams", None),
    route("changelog", "/changelog", "Changelog", None),
    route("api-gateway", "/api-gateway", "API Gateway", Some("core-services")),
    route("workflow-engine", "/workflow-engine", "Workflow Engine", Some("core-services")),
    route("user-service", "/user-service", "User Service", Some("core-services")),
    route("polykey-service", "/polykey-service", "Polykey Service", Some("core-services")),
    route(
        "llm-provider-service",
        "/llm-provider-service",
        "LLM Provider Service",
        Some("polykey-tools"),
    ),
    route("vector-db-service", "/vector-db-service", "Vector DB Service", Some("polykey-tools")),
    route("key-vault", "/key-vault", "Key Vault", Some("platform-infrastructure")),
    route(
        "state-management",
        "/state-management",
        "State Management",
        Some("platform-infrastructure"),
    ),
    route("service-mesh", "/service-mesh", "Service Mesh", Some("platform-infrastructure")),
    route(
        "spounge-infra",
        "/spounge-infra",
        "Spounge Infrastructure",
        Some("platform-infrastructure"),
    ),
    route("spounge-client", "/spounge-client", "Spounge Client", Some("external-client")),
    route("external-apis", "/external-apis", "External APIs", Some("external-client")),
    route("spounge-protos", "/spounge-protos", "Spounge Protos", Some("external-client")),
];

/// All routes in table order.
pub fn routes() -> &'static [Route] {
    ROUTES
}

pub fn route_by_id(id: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.id == id)
}

/// Path for a section; sections without a route get `/<id>`.
pub fn path_for(section: &Section) -> String {
    match route_by_id(section.id()) {
        Some(route) => route.path.to_string(),
        None => format!("/{}", section.id()),
    }
}

/// Section for a path. `/`, empty and unknown paths map to the roadmap.
///
/// A trailing slash and a `#fragment` prefix are tolerated.
pub fn section_for_path(path: &str) -> Section {
    let trimmed = path.trim().trim_start_matches('#').trim_end_matches('/');
    let normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    ROUTES
        .iter()
        .find(|route| route.path == normalized)
        .map_or(Section::Roadmap, |route| Section::from_id(route.id))
}

/// Distinct categories in first-appearance order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for category in ROUTES.iter().filter_map(|route| route.category) {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

pub fn routes_in(category: &str) -> Vec<&'static Route> {
    ROUTES
        .iter()
        .filter(|route| route.category == Some(category))
        .collect()
}
