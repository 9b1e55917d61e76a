//! Page backend trait and the display values it applies.
//!
//! Every host (the browser via `web-sys`, or an in-memory fake in tests)
//! implements [`PageBackend`]. The core framework never sees raw DOM nodes;
//! it only holds the backend's opaque `Element` handles.

/// CSS `display` values the dashboard writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Display {
    /// Inline style removed; the stylesheet decides.
    Default,
    /// `display: none`.
    None,
    /// `display: flex`.
    Flex,
    /// `display: inline-flex`.
    InlineFlex,
}

impl Display {
    /// The inline style value, or `None` when the property should be removed.
    pub fn as_css(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::None => Some("none"),
            Self::Flex => Some("flex"),
            Self::InlineFlex => Some("inline-flex"),
        }
    }

    /// Whether an element with this display value is visible.
    pub fn is_visible(self) -> bool {
        self != Self::None
    }
}

/// Abstraction over the page the dashboard controls.
///
/// Lookups are query-on-use: nothing returned here is cached by the caller
/// beyond the startup element registry, so items added or removed by other
/// scripts are picked up on the next call.
pub trait PageBackend {
    /// Opaque handle to one page element.
    type Element: Clone;

    /// Opaque platform handle for a pending install offer.
    type InstallSignal;

    /// Look up a single element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements in the document matching a CSS selector.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// All descendants of `root` matching a CSS selector, in document order.
    fn query_within(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element>;

    /// Text of the first descendant of `item` matching `selector`.
    /// Returns an empty string if there is no such descendant.
    fn label_text(&self, item: &Self::Element, selector: &str) -> String;

    /// Current value of an input element (empty for non-inputs).
    fn input_value(&self, element: &Self::Element) -> String;

    /// Set the inline `display` style of an element.
    fn set_display(&mut self, element: &Self::Element, display: Display);

    /// Add (`on == true`) or remove a CSS class.
    fn set_class(&mut self, element: &Self::Element, class: &str, on: bool);

    /// Whether the element currently carries a CSS class.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Replace an element's content with a single paragraph of text.
    fn set_message(&mut self, element: &Self::Element, text: &str);

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Element, node: &Self::Element) -> bool;

    /// Lock (`true`) or restore (`false`) scrolling of the page body.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Whether the page runs as an installed, standalone app.
    fn is_standalone(&self) -> bool;

    /// Whether the host can register a background service worker.
    fn supports_service_worker(&self) -> bool;

    /// Show a blocking user-facing notice.
    fn alert(&mut self, text: &str);

    /// Reload the page, bypassing any cached copy.
    fn reload_bypassing_cache(&mut self);
}
