//! Navigable sections of the viewer.

use crate::model::component::ComponentId;
use crate::model::note::CHANGELOG_ID;
use std::fmt::{Display, Formatter};

pub const ROADMAP_ID: &str = "roadmap";
pub const ARCHITECTURE_DIAGRAMS_ID: &str = "architecture-diagrams";

/// One page the navigation state can point at.
///
/// Any id that is not a fixed page is carried as `Component`, known or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    Roadmap,
    ArchitectureDiagrams,
    Changelog,
    Component(ComponentId),
}

impl Section {
    /// Maps a section id to a section. Never fails.
    pub fn from_id(id: &str) -> Self {
        match id {
            ROADMAP_ID => Self::Roadmap,
            ARCHITECTURE_DIAGRAMS_ID => Self::ArchitectureDiagrams,
            CHANGELOG_ID => Self::Changelog,
            other => Self::Component(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Roadmap => ROADMAP_ID,
            Self::ArchitectureDiagrams => ARCHITECTURE_DIAGRAMS_ID,
            Self::Changelog => CHANGELOG_ID,
            Self::Component(id) => id.as_str(),
        }
    }

    pub fn component_id(&self) -> Option<&str> {
        match self {
            Self::Component(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::Roadmap
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl From<&str> for Section {
    fn from(value: &str) -> Self {
        Self::from_id(value)
    }
}
