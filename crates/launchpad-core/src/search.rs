//! Search filtering over the app icons.
//!
//! Matching is a case-insensitive substring test against each item's label.
//! The query is trimmed first; an empty query matches every item.

use crate::backend::PageBackend;
use crate::config::DashboardConfig;
use crate::items::{read_items, set_item_visible};
use crate::registry::ElementRegistry;

/// Result of one search pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    /// Normalized query that was applied.
    pub query: String,
    /// Items left visible.
    pub shown: usize,
    /// Items inspected.
    pub total: usize,
    /// Whether the no-results panel is showing.
    pub no_results: bool,
}

/// Trim and case-fold a raw query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether an item name matches an already-normalized query.
pub fn matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(query)
}

/// Filter the items by the current search field value.
///
/// Idempotent: running it twice with the same query yields the same page.
pub fn perform_search<P: PageBackend>(
    page: &mut P,
    registry: &ElementRegistry<P::Element>,
    config: &DashboardConfig,
) -> SearchSummary {
    let query = normalize_query(&page.input_value(&registry.search_input));
    let items = read_items(
        page,
        &registry.apps_container,
        &config.item_selector,
        &config.label_selector,
    );

    let mut shown = 0;
    for item in &items {
        let show = matches(&item.name, &query);
        set_item_visible(page, &item.element, show);
        if show {
            shown += 1;
        }
    }

    let no_results = shown == 0 && !query.is_empty();
    if no_results {
        page.set_message(&registry.search_results, &config.no_results_text);
    }
    page.set_class(&registry.search_results, &config.active_class, no_results);

    log::debug!("Search {query:?}: {shown}/{} items shown", items.len());
    SearchSummary {
        query,
        shown,
        total: items.len(),
        no_results,
    }
}
