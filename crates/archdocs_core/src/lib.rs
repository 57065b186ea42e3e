//! Core logic for the architecture documentation viewer.
//! Owns the component dataset, label resolution, search, notes loading and
//! navigation state; renderers only consume what this crate returns.

pub mod affordance;
pub mod db;
pub mod diagram;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod notes;
pub mod preference;
pub mod registry;
pub mod resolve;
pub mod search;

pub use diagram::graph::{parse_diagram, DiagramGraph, DiagramNode, LabelMismatch};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::component::{ComponentId, ComponentRecord};
pub use model::note::NoteRecord;
pub use model::section::Section;
pub use navigation::controller::{DetailView, NavigationController, NavigationEffects};
pub use notes::loader::{LoadState, NoteList, NotesError, NotesLoader};
pub use notes::source::{NoteCatalog, NoteKind, NoteSource, SourceError, StaticNoteSource};
pub use notes::view::{NotesPager, NotesView};
pub use preference::store::{
    load_theme, save_theme, MemoryPreferenceStore, PreferenceError, PreferenceStore,
    SqlitePreferenceStore,
};
pub use preference::theme::{AppliedTheme, Theme};
pub use registry::component_registry::{ComponentRegistry, RegistryError};
pub use resolve::label_map::LabelMapping;
pub use resolve::resolver::{LabelResolver, MatchPolicy};
pub use search::component_search::{search_components, ComponentSearchQuery, SearchHit};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
