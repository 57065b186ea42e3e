//! In-memory component registry.

use crate::model::component::{
    is_valid_component_id, ComponentId, ComponentRecord, Diagram, Roadmap, SystemData,
};
use log::{error, info};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BUILTIN_SYSTEM_JSON: &str = include_str!("../../data/system.json");

static BUILTIN_REGISTRY: Lazy<ComponentRegistry> = Lazy::new(|| {
    ComponentRegistry::from_json(BUILTIN_SYSTEM_JSON).expect("embedded system dataset is valid")
});

/// Dataset load/validation errors.
#[derive(Debug)]
pub enum RegistryError {
    /// Dataset text is not valid JSON for [`SystemData`].
    Parse(serde_json::Error),
    /// A component id is empty or not kebab-case.
    InvalidId(String),
    /// Two components share one id.
    DuplicateId(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid system dataset: {err}"),
            Self::InvalidId(id) => write!(f, "component id is invalid: `{id}`"),
            Self::DuplicateId(id) => write!(f, "component id already registered: `{id}`"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Read-only catalog of components plus the surrounding dataset metadata.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    data: SystemData,
    index: HashMap<ComponentId, usize>,
}

impl ComponentRegistry {
    /// Builds a registry from an already-parsed dataset.
    ///
    /// # Errors
    /// - `InvalidId` when an id is not kebab-case.
    /// - `DuplicateId` when an id appears twice.
    pub fn new(data: SystemData) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(data.components.len());
        for (position, component) in data.components.iter().enumerate() {
            if !is_valid_component_id(component.id.as_str()) {
                return Err(RegistryError::InvalidId(component.id.clone()));
            }
            if index.insert(component.id.clone(), position).is_some() {
                return Err(RegistryError::DuplicateId(component.id.clone()));
            }
        }
        Ok(Self { data, index })
    }

    /// Parses and validates a JSON dataset.
    pub fn from_json(text: &str) -> Result<Self, RegistryError> {
        let parsed = serde_json::from_str::<SystemData>(text).map_err(|err| {
            error!(
                "event=registry_load module=registry status=error error_code=parse_failed error={}",
                err
            );
            RegistryError::from(err)
        })?;
        let registry = Self::new(parsed)?;
        info!(
            "event=registry_load module=registry status=ok components={}",
            registry.len()
        );
        Ok(registry)
    }

    /// Returns the dataset embedded in this crate, parsed once per process.
    pub fn builtin() -> &'static ComponentRegistry {
        &BUILTIN_REGISTRY
    }

    pub fn get(&self, id: &str) -> Option<&ComponentRecord> {
        self.index
            .get(id)
            .and_then(|position| self.data.components.get(*position))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates components in dataset declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.data.components.iter()
    }

    pub fn len(&self) -> usize {
        self.data.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.components.is_empty()
    }

    /// Component ids in declaration order.
    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|component| component.id.as_str()).collect()
    }

    pub fn by_phase(&self, phase: u32) -> Vec<&ComponentRecord> {
        self.iter()
            .filter(|component| component.phase == phase)
            .collect()
    }

    /// Dependency entries that do not name a registered component.
    ///
    /// The dataset mixes ids with prose ("Manages all other services."), so
    /// these are reported rather than rejected at load time.
    pub fn unresolved_dependencies(&self) -> Vec<(ComponentId, String)> {
        self.iter()
            .flat_map(|component| {
                component
                    .dependencies
                    .iter()
                    .filter(|dependency| !self.contains(dependency.as_str()))
                    .map(|dependency| (component.id.clone(), dependency.clone()))
            })
            .collect()
    }

    pub fn app_name(&self) -> &str {
        self.data.app_name.as_str()
    }

    pub fn app_description(&self) -> &str {
        self.data.app_description.as_str()
    }

    pub fn roadmap(&self) -> &Roadmap {
        &self.data.roadmap
    }

    /// Diagrams ordered by slot key.
    pub fn diagrams(&self) -> impl Iterator<Item = (&str, &Diagram)> {
        self.data
            .diagrams
            .iter()
            .map(|(slot, diagram)| (slot.as_str(), diagram))
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentRegistry, RegistryError};

    fn dataset(ids: &[&str]) -> String {
        let components = ids
            .iter()
            .map(|id| format!(r#"{{"id":"{id}","phase":1,"description":"d"}}"#))
            .collect::<Vec<_>>()
            .join(",");
        format!(r#"{{"app_name":"test","components":[{components}]}}"#)
    }

    #[test]
    fn loads_minimal_dataset_in_declaration_order() {
        let registry = ComponentRegistry::from_json(&dataset(&["b-svc", "a-svc"]))
            .expect("dataset should load");
        assert_eq!(registry.ids(), vec!["b-svc", "a-svc"]);
        assert!(registry.contains("a-svc"));
        assert!(registry.get("c-svc").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ComponentRegistry::from_json(&dataset(&["a-svc", "a-svc"]))
            .expect_err("duplicate ids must fail");
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "a-svc"));
    }

    #[test]
    fn rejects_non_kebab_ids() {
        let err = ComponentRegistry::from_json(&dataset(&["Key Vault"]))
            .expect_err("invalid ids must fail");
        assert!(matches!(err, RegistryError::InvalidId(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ComponentRegistry::from_json("{").expect_err("broken json must fail");
        assert!(matches!(err, RegistryError::Parse(_)));
    }
}
