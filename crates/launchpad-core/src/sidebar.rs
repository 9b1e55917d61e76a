//! Sidebar panel -- a slide-in drawer toggled by a header button.
//!
//! Opening the drawer locks page scrolling; every path that closes it
//! (close button, outside click) restores scrolling.

use crate::backend::PageBackend;
use crate::registry::ElementRegistry;

/// Runtime state for the sidebar.
#[derive(Debug)]
pub struct SidebarState {
    /// Whether the panel is currently open.
    open: bool,
    /// Class marking the open panel.
    active_class: String,
}

impl SidebarState {
    pub fn new(active_class: &str) -> Self {
        Self {
            open: false,
            active_class: active_class.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open (`show == true`) or close the panel.
    pub fn toggle<P: PageBackend>(
        &mut self,
        page: &mut P,
        registry: &ElementRegistry<P::Element>,
        show: bool,
    ) {
        page.set_class(&registry.sidebar, &self.active_class, show);
        page.set_scroll_locked(show);
        if self.open != show {
            log::debug!("Sidebar {}", if show { "opened" } else { "closed" });
        }
        self.open = show;
    }

    /// Whether a document click should close the panel: it must be open and
    /// the target must be outside both the panel and its open trigger.
    pub fn is_outside_click<P: PageBackend>(
        &self,
        page: &P,
        registry: &ElementRegistry<P::Element>,
        target: Option<&P::Element>,
    ) -> bool {
        if !self.open {
            return false;
        }
        match target {
            Some(t) => {
                !page.contains(&registry.sidebar, t) && !page.contains(&registry.sidebar_toggle, t)
            },
            None => true,
        }
    }

    /// Handle a document-wide click. Returns `true` if the panel closed.
    pub fn handle_document_click<P: PageBackend>(
        &mut self,
        page: &mut P,
        registry: &ElementRegistry<P::Element>,
        target: Option<&P::Element>,
    ) -> bool {
        if self.is_outside_click(page, registry, target) {
            self.toggle(page, registry, false);
            true
        } else {
            false
        }
    }
}
