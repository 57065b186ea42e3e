//! Navigation controller.

use crate::model::component::ComponentRecord;
use crate::model::section::Section;
use crate::registry::component_registry::ComponentRegistry;
use crate::resolve::resolver::LabelResolver;
use log::info;

/// Viewports narrower than this show navigation as an overlay panel.
pub const CONSTRAINED_VIEWPORT_MAX_WIDTH: u32 = 1024;

/// Side effects the shell must apply after a section switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEffects {
    /// Scroll the content viewport back to the top.
    pub scroll_to_top: bool,
    /// Close the overlay navigation panel.
    pub close_overlay: bool,
}

/// Page body selected by the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'r> {
    Roadmap,
    Diagrams,
    Changelog,
    Component(&'r ComponentRecord),
    /// Active id names no known component.
    Empty,
}

/// Owner of the navigation state.
#[derive(Debug, Clone)]
pub struct NavigationController {
    active: Section,
    viewport_width: Option<u32>,
    overlay_open: bool,
}

impl NavigationController {
    /// Starts on the roadmap with an unknown (wide) viewport.
    pub fn new() -> Self {
        Self {
            active: Section::Roadmap,
            viewport_width: None,
            overlay_open: false,
        }
    }

    pub fn active(&self) -> &Section {
        &self.active
    }

    pub fn active_id(&self) -> &str {
        self.active.id()
    }

    /// Switches the active section unconditionally.
    pub fn set_active(&mut self, id: &str) -> NavigationEffects {
        self.navigate(Section::from_id(id))
    }

    /// Switches to an already-parsed section.
    pub fn navigate(&mut self, section: Section) -> NavigationEffects {
        let close_overlay = self.is_constrained() && self.overlay_open;
        if close_overlay {
            self.overlay_open = false;
        }
        info!(
            "event=navigate module=navigation status=ok from={} to={} close_overlay={}",
            self.active, section, close_overlay
        );
        self.active = section;
        NavigationEffects {
            scroll_to_top: true,
            close_overlay,
        }
    }

    /// Resolves a diagram label and navigates on a hit.
    ///
    /// A miss is a no-op and returns `None`.
    pub fn navigate_label(
        &mut self,
        resolver: &LabelResolver,
        label: &str,
    ) -> Option<NavigationEffects> {
        let target = resolver.resolve(label)?.to_string();
        Some(self.set_active(target.as_str()))
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = Some(width);
    }

    pub fn is_constrained(&self) -> bool {
        self.viewport_width
            .is_some_and(|width| width < CONSTRAINED_VIEWPORT_MAX_WIDTH)
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Page body for the active section.
    pub fn detail<'r>(&self, registry: &'r ComponentRegistry) -> DetailView<'r> {
        match &self.active {
            Section::Roadmap => DetailView::Roadmap,
            Section::ArchitectureDiagrams => DetailView::Diagrams,
            Section::Changelog => DetailView::Changelog,
            Section::Component(id) => registry
                .get(id.as_str())
                .map_or(DetailView::Empty, DetailView::Component),
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationController;
    use crate::model::section::Section;

    #[test]
    fn starts_on_roadmap() {
        let controller = NavigationController::new();
        assert_eq!(controller.active(), &Section::Roadmap);
    }

    #[test]
    fn overlay_closes_only_on_constrained_viewports() {
        let mut controller = NavigationController::new();
        controller.open_overlay();
        let effects = controller.set_active("api-gateway");
        assert!(effects.scroll_to_top);
        assert!(!effects.close_overlay);
        assert!(controller.overlay_open());

        controller.set_viewport_width(800);
        let effects = controller.set_active("user-service");
        assert!(effects.close_overlay);
        assert!(!controller.overlay_open());
    }

    #[test]
    fn closed_overlay_is_not_reported_again() {
        let mut controller = NavigationController::new();
        controller.set_viewport_width(320);
        let effects = controller.set_active("changelog");
        assert!(!effects.close_overlay);
    }
}
