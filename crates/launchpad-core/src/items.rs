//! Item list accessor.
//!
//! The app icons are not owned by the dashboard. They are re-read from the
//! page on every call and never cached, so items added or removed by other
//! scripts are picked up on the next search or pagination pass.

use crate::backend::{Display, PageBackend};

/// One app icon read from the page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppItem<E> {
    pub element: E,
    /// Display name as shown in the item's label.
    pub name: String,
}

/// Read the current item list under `container`, in page order.
pub fn read_items<P: PageBackend>(
    page: &P,
    container: &P::Element,
    item_selector: &str,
    label_selector: &str,
) -> Vec<AppItem<P::Element>> {
    page.query_within(container, item_selector)
        .into_iter()
        .map(|element| {
            let name = page.label_text(&element, label_selector);
            AppItem { element, name }
        })
        .collect()
}

/// Show or hide a single item.
pub fn set_item_visible<P: PageBackend>(page: &mut P, item: &P::Element, visible: bool) {
    let display = if visible {
        Display::Default
    } else {
        Display::None
    };
    page.set_display(item, display);
}
