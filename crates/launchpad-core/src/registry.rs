//! Element registry -- every page element the dashboard binds to, resolved
//! once at startup.
//!
//! Single elements are required: a missing one is a startup defect and
//! aborts with [`LaunchpadError::MissingElement`]. The install buttons are a
//! multi-element entry and may legitimately resolve to nothing.

use crate::backend::PageBackend;
use crate::config::ElementIds;
use crate::error::{LaunchpadError, Result};

/// Resolved references to the dashboard's page elements.
#[derive(Debug, Clone)]
pub struct ElementRegistry<E> {
    pub search_input: E,
    pub search_button: E,
    pub search_results: E,
    pub refresh_button: E,
    pub sidebar: E,
    pub sidebar_toggle: E,
    pub sidebar_close: E,
    pub show_more: E,
    pub apps_container: E,
    /// Zero or more install buttons.
    pub install_buttons: Vec<E>,
}

impl<E: Clone> ElementRegistry<E> {
    /// Resolve every entry against the page. Performs no page mutation.
    pub fn resolve<P>(page: &P, ids: &ElementIds) -> Result<Self>
    where
        P: PageBackend<Element = E>,
    {
        let required = |name: &str, id: &str| -> Result<E> {
            page.element_by_id(id).ok_or_else(|| {
                log::error!("Required element {name} (#{id}) not found");
                LaunchpadError::MissingElement(format!("{name} (#{id})"))
            })
        };

        let registry = Self {
            search_input: required("search_input", &ids.search_input)?,
            search_button: required("search_button", &ids.search_button)?,
            search_results: required("search_results", &ids.search_results)?,
            refresh_button: required("refresh_button", &ids.refresh_button)?,
            sidebar: required("sidebar", &ids.sidebar)?,
            sidebar_toggle: required("sidebar_toggle", &ids.sidebar_toggle)?,
            sidebar_close: required("sidebar_close", &ids.sidebar_close)?,
            show_more: required("show_more", &ids.show_more)?,
            apps_container: required("apps_container", &ids.apps_container)?,
            install_buttons: page.query_all(&ids.install_buttons),
        };
        log::debug!(
            "Element registry resolved ({} install buttons)",
            registry.install_buttons.len()
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakePage;

    #[test]
    fn resolves_stock_markup() {
        let page = FakePage::dashboard(3);
        let ids = ElementIds::default();
        let reg = ElementRegistry::resolve(&page, &ids).unwrap();
        assert_eq!(reg.sidebar, page.id("sidebar"));
        assert_eq!(reg.apps_container, page.id("mainApps"));
        assert_eq!(reg.install_buttons.len(), 2);
    }

    #[test]
    fn missing_single_element_fails() {
        let mut page = FakePage::dashboard(3);
        page.drop_id("sidebarClose");
        let err = ElementRegistry::resolve(&page, &ElementIds::default()).unwrap_err();
        match err {
            LaunchpadError::MissingElement(name) => assert!(name.contains("sidebar_close")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn no_install_buttons_is_fine() {
        let mut page = FakePage::dashboard(3);
        page.drop_id("installPWA");
        page.drop_id("settingsInstallPWA");
        let reg = ElementRegistry::resolve(&page, &ElementIds::default()).unwrap();
        assert!(reg.install_buttons.is_empty());
    }

    #[test]
    fn custom_ids_are_honored() {
        let mut page = FakePage::dashboard(1);
        let drawer = page.add(Some(0), Some("drawer"), &[]);
        let ids = ElementIds {
            sidebar: "drawer".into(),
            ..ElementIds::default()
        };
        let reg = ElementRegistry::resolve(&page, &ids).unwrap();
        assert_eq!(reg.sidebar, drawer);
    }
}
