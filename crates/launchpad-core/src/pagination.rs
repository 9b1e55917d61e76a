//! "Show more" pagination for the app icons.
//!
//! At startup only the first `page_size` items are shown. The show-more
//! control reveals the rest on its first activation and then disappears for
//! the rest of the page session. There is no re-collapsing.

use crate::backend::{Display, PageBackend};
use crate::config::DashboardConfig;
use crate::items::{read_items, set_item_visible};
use crate::registry::ElementRegistry;

/// Lifecycle of the show-more control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowMorePhase {
    /// Pagination has not run yet, or everything fit on one page.
    #[default]
    Idle,
    /// Items are truncated; the next activation expands them.
    Armed,
    /// The control was used; all items stay visible.
    Expanded,
}

/// Runtime state for the show-more control.
#[derive(Debug, Default)]
pub struct PaginationState {
    phase: ShowMorePhase,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ShowMorePhase {
        self.phase
    }

    /// Apply the initial page to the item list.
    ///
    /// Safe to call again: an armed control stays armed exactly once, and an
    /// expanded list stays expanded.
    pub fn manage_visibility<P: PageBackend>(
        &mut self,
        page: &mut P,
        registry: &ElementRegistry<P::Element>,
        config: &DashboardConfig,
    ) {
        let items = read_items(
            page,
            &registry.apps_container,
            &config.item_selector,
            &config.label_selector,
        );

        if self.phase == ShowMorePhase::Expanded || items.len() <= config.page_size {
            for item in &items {
                set_item_visible(page, &item.element, true);
            }
            page.set_display(&registry.show_more, Display::None);
            if self.phase == ShowMorePhase::Armed {
                self.phase = ShowMorePhase::Idle;
            }
            return;
        }

        for (index, item) in items.iter().enumerate() {
            set_item_visible(page, &item.element, index < config.page_size);
        }
        page.set_display(&registry.show_more, Display::InlineFlex);
        if self.phase == ShowMorePhase::Idle {
            log::debug!(
                "Showing {} of {} apps behind show-more",
                config.page_size,
                items.len()
            );
        }
        self.phase = ShowMorePhase::Armed;
    }

    /// Handle an activation of the show-more control.
    ///
    /// Returns `true` if the list was expanded. Only the first activation
    /// after arming has an effect.
    pub fn show_more<P: PageBackend>(
        &mut self,
        page: &mut P,
        registry: &ElementRegistry<P::Element>,
        config: &DashboardConfig,
    ) -> bool {
        if self.phase != ShowMorePhase::Armed {
            return false;
        }
        for item in read_items(
            page,
            &registry.apps_container,
            &config.item_selector,
            &config.label_selector,
        ) {
            set_item_visible(page, &item.element, true);
        }
        page.set_display(&registry.show_more, Display::None);
        self.phase = ShowMorePhase::Expanded;
        log::debug!("Show-more expanded the app list");
        true
    }
}
