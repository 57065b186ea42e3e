//! Static UI affordance tables (icons, documentation links).
//!
//! # Responsibility
//! - Map component ids to icons and technologies to reference docs.
//!
//! # Invariants
//! - Lookups are plain table scans; unknown keys fall back to defaults.
//! - Link order is stable and follows table order.

use crate::model::component::ComponentRecord;

/// Icon family shown next to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Globe,
    Workflow,
    Database,
    Shield,
    Cpu,
    Cloud,
    FileText,
    Code,
    Book,
}

const COMPONENT_ICONS: &[(&str, Icon)] = &[
    ("api-gateway", Icon::Globe),
    ("workflow-engine", Icon::Workflow),
    ("user-service", Icon::Database),
    ("polykey-service", Icon::Shield),
    ("llm-provider-service", Icon::Cpu),
    ("vector-db-service", Icon::Database),
    ("key-vault", Icon::Shield),
    ("state-management", Icon::Database),
    ("service-mesh", Icon::Cloud),
    ("spounge-infra", Icon::Cloud),
    ("spounge-client", Icon::Globe),
    ("external-apis", Icon::Globe),
    ("spounge-protos", Icon::FileText),
];

/// One external reference link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocLink {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

const fn link(
    title: &'static str,
    url: &'static str,
    icon: Icon,
    description: &'static str,
) -> DocLink {
    DocLink {
        title,
        url,
        icon,
        description,
    }
}

/// Technology keyword (case-sensitive substring of `technologies`) → link.
const TECHNOLOGY_LINKS: &[(&str, DocLink)] = &[
    (
        "TypeScript",
        link(
            "TypeScript Docs",
            "https://www.typescriptlang.org/docs/",
            Icon::Code,
            "Official TypeScript documentation",
        ),
    ),
    (
        "Node.js",
        link(
            "Node.js Docs",
            "https://nodejs.org/en/docs/",
            Icon::Code,
            "Node.js runtime documentation",
        ),
    ),
    (
        "Go",
        link(
            "Go Documentation",
            "https://golang.org/doc/",
            Icon::Code,
            "Official Go programming language docs",
        ),
    ),
    ("React", link("React Docs", "https://react.dev/", Icon::Code, "React library documentation")),
    (
        "gRPC",
        link(
            "gRPC Documentation",
            "https://grpc.io/docs/",
            Icon::FileText,
            "gRPC framework documentation",
        ),
    ),
    (
        "Redis",
        link(
            "Redis Documentation",
            "https://redis.io/documentation",
            Icon::Database,
            "Redis in-memory database docs",
        ),
    ),
    (
        "PostgreSQL",
        link(
            "PostgreSQL Docs",
            "https://www.postgresql.org/docs/",
            Icon::Database,
            "PostgreSQL database documentation",
        ),
    ),
    (
        "Prisma",
        link(
            "Prisma Documentation",
            "https://www.prisma.io/docs",
            Icon::Database,
            "Prisma ORM documentation",
        ),
    ),
    (
        "Kong",
        link(
            "Kong Gateway Docs",
            "https://docs.konghq.com/gateway/",
            Icon::Shield,
            "Kong API Gateway documentation",
        ),
    ),
    (
        "NGINX",
        link(
            "NGINX Documentation",
            "https://nginx.org/en/docs/",
            Icon::Shield,
            "NGINX web server documentation",
        ),
    ),
    (
        "Vault",
        link(
            "HashiCorp Vault",
            "https://www.vaultproject.io/docs",
            Icon::Shield,
            "Vault secrets management docs",
        ),
    ),
    (
        "Terraform",
        link(
            "Terraform Docs",
            "https://www.terraform.io/docs",
            Icon::Cloud,
            "Infrastructure as Code documentation",
        ),
    ),
    (
        "Helm",
        link(
            "Helm Documentation",
            "https://helm.sh/docs/",
            Icon::Cloud,
            "Kubernetes package manager docs",
        ),
    ),
    (
        "Istio",
        link(
            "Istio Documentation",
            "https://istio.io/latest/docs/",
            Icon::Cloud,
            "Service mesh documentation",
        ),
    ),
    (
        "Linkerd",
        link(
            "Linkerd Documentation",
            "https://linkerd.io/docs/",
            Icon::Cloud,
            "Linkerd service mesh docs",
        ),
    ),
];

const CONTAINER_LINKS: &[DocLink] = &[
    link(
        "Kubernetes Docs",
        "https://kubernetes.io/docs/",
        Icon::Cloud,
        "Container orchestration platform",
    ),
    link(
        "Docker Documentation",
        "https://docs.docker.com/",
        Icon::Cloud,
        "Container platform documentation",
    ),
];

const TWELVE_FACTOR_LINK: DocLink = link(
    "12-Factor App",
    "https://12factor.net/",
    Icon::Book,
    "Methodology for building SaaS apps",
);

const OWASP_LINK: DocLink = link(
    "OWASP Guidelines",
    "https://owasp.org/www-project-top-ten/",
    Icon::Shield,
    "Web application security risks",
);

/// Icon for a component id; `FileText` when unknown.
pub fn icon_for(component_id: &str) -> Icon {
    COMPONENT_ICONS
        .iter()
        .find(|(id, _)| *id == component_id)
        .map_or(Icon::FileText, |(_, icon)| *icon)
}

/// Reference links for one component detail page.
///
/// Keyword matching is a plain substring test, so `Go` also matches e.g.
/// `Google`.
pub fn doc_links_for(component: &ComponentRecord) -> Vec<DocLink> {
    let mut links = TECHNOLOGY_LINKS
        .iter()
        .filter(|(keyword, _)| component.technologies.contains(keyword))
        .map(|(_, link)| *link)
        .collect::<Vec<_>>();

    let containerization = component.ownership.containerization.as_str();
    if containerization.contains("Kubernetes") || containerization.contains("Docker") {
        links.extend_from_slice(CONTAINER_LINKS);
    }

    links.push(TWELVE_FACTOR_LINK);

    if component.has_tag("Security") {
        links.push(OWASP_LINK);
    }
    links
}
