//! Shared test utilities for launchpad-core.
//!
//! Provides a [`FakePage`] that holds an in-memory element tree and records
//! every side effect for assertion.

use crate::backend::{Display, PageBackend};
use crate::config::DashboardConfig;

/// One element of the fake document.
#[derive(Debug, Clone)]
pub struct FakeNode {
    pub id: Option<String>,
    /// Selector tokens this node matches (`#id`, `.class`, `tag`).
    pub matches: Vec<String>,
    pub classes: Vec<String>,
    pub display: Display,
    pub text: String,
    pub value: String,
    pub parent: Option<usize>,
}

/// An in-memory page that records all side effects.
pub struct FakePage {
    pub nodes: Vec<FakeNode>,
    pub scroll_locked: bool,
    pub alerts: Vec<String>,
    pub reloads: usize,
    pub standalone: bool,
    pub service_worker: bool,
}

impl FakePage {
    pub fn new() -> Self {
        let body = FakeNode {
            id: None,
            matches: vec!["body".into()],
            classes: Vec::new(),
            display: Display::Default,
            text: String::new(),
            value: String::new(),
            parent: None,
        };
        Self {
            nodes: vec![body],
            scroll_locked: false,
            alerts: Vec::new(),
            reloads: 0,
            standalone: false,
            service_worker: true,
        }
    }

    /// Stock dashboard markup with one app per name.
    pub fn with_apps(names: &[&str]) -> Self {
        let ids = DashboardConfig::default().elements;
        let mut page = Self::new();
        for id in [
            &ids.search_input,
            &ids.search_button,
            &ids.search_results,
            &ids.refresh_button,
            &ids.sidebar_toggle,
            &ids.show_more,
        ] {
            page.add(Some(0), Some(id.as_str()), &[]);
        }
        let sidebar = page.add(Some(0), Some(ids.sidebar.as_str()), &[]);
        page.add(Some(sidebar), Some(ids.sidebar_close.as_str()), &[]);
        let settings = page.add(Some(sidebar), Some("settingsPanel"), &[]);
        page.add(Some(settings), Some("settingsInstallPWA"), &[]);
        page.add(Some(0), Some("installPWA"), &[]);
        let container = page.add(Some(0), Some(ids.apps_container.as_str()), &[]);
        for name in names {
            page.add_app(container, name);
        }
        page
    }

    /// Stock dashboard markup with `n` apps named `App 0`, `App 1`, ...
    pub fn dashboard(n: usize) -> Self {
        let names: Vec<String> = (0..n).map(|i| format!("App {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        Self::with_apps(&refs)
    }

    /// Append a node. Returns its handle.
    pub fn add(&mut self, parent: Option<usize>, id: Option<&str>, matches: &[&str]) -> usize {
        let mut tokens: Vec<String> = matches.iter().map(|s| s.to_string()).collect();
        if let Some(id) = id {
            tokens.push(format!("#{id}"));
        }
        self.nodes.push(FakeNode {
            id: id.map(str::to_string),
            matches: tokens,
            classes: Vec::new(),
            display: Display::Default,
            text: String::new(),
            value: String::new(),
            parent,
        });
        self.nodes.len() - 1
    }

    /// Append an `.icon` item with a `p` label to `container`.
    pub fn add_app(&mut self, container: usize, name: &str) -> usize {
        let item = self.add(Some(container), None, &[".icon"]);
        let label = self.add(Some(item), None, &["p"]);
        self.nodes[label].text = name.to_string();
        item
    }

    /// Handle of the node with this id. Panics if absent.
    pub fn id(&self, id: &str) -> usize {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .unwrap_or_else(|| panic!("no node with id {id}"))
    }

    /// Remove a node's id so lookups fail.
    pub fn drop_id(&mut self, id: &str) {
        let idx = self.id(id);
        self.nodes[idx].id = None;
        self.nodes[idx].matches.retain(|m| m != &format!("#{id}"));
    }

    pub fn display_of(&self, el: usize) -> Display {
        self.nodes[el].display
    }

    pub fn set_value(&mut self, el: usize, value: &str) {
        self.nodes[el].value = value.to_string();
    }

    /// All `.icon` items, in document order.
    pub fn items(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| self.nodes[i].matches.iter().any(|m| m == ".icon"))
            .collect()
    }

    /// Names of items whose display is not `none`.
    pub fn visible_names(&self) -> Vec<String> {
        self.items()
            .into_iter()
            .filter(|&i| self.nodes[i].display.is_visible())
            .map(|i| self.label_text(&i, "p"))
            .collect()
    }

    pub fn install_buttons(&self) -> [usize; 2] {
        [self.id("installPWA"), self.id("settingsInstallPWA")]
    }

    fn is_descendant(&self, ancestor: usize, mut node: usize) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.nodes[node].parent {
                Some(p) => node = p,
                None => return false,
            }
        }
    }

    fn node_matches(&self, node: usize, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .any(|token| self.nodes[node].matches.iter().any(|m| m == token))
    }
}

impl PageBackend for FakePage {
    type Element = usize;
    type InstallSignal = u32;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id.as_deref() == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| self.node_matches(i, selector))
            .collect()
    }

    fn query_within(&self, root: &usize, selector: &str) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| i != *root && self.is_descendant(*root, i))
            .filter(|&i| self.node_matches(i, selector))
            .collect()
    }

    fn label_text(&self, item: &usize, selector: &str) -> String {
        self.query_within(item, selector)
            .first()
            .map(|&i| self.nodes[i].text.clone())
            .unwrap_or_default()
    }

    fn input_value(&self, element: &usize) -> String {
        self.nodes[*element].value.clone()
    }

    fn set_display(&mut self, element: &usize, display: Display) {
        self.nodes[*element].display = display;
    }

    fn set_class(&mut self, element: &usize, class: &str, on: bool) {
        let classes = &mut self.nodes[*element].classes;
        classes.retain(|c| c != class);
        if on {
            classes.push(class.to_string());
        }
    }

    fn has_class(&self, element: &usize, class: &str) -> bool {
        self.nodes[*element].classes.iter().any(|c| c == class)
    }

    fn set_message(&mut self, element: &usize, text: &str) {
        self.nodes[*element].text = text.to_string();
    }

    fn contains(&self, ancestor: &usize, node: &usize) -> bool {
        self.is_descendant(*ancestor, *node)
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn is_standalone(&self) -> bool {
        self.standalone
    }

    fn supports_service_worker(&self) -> bool {
        self.service_worker
    }

    fn alert(&mut self, text: &str) {
        self.alerts.push(text.to_string());
    }

    fn reload_bypassing_cache(&mut self) {
        self.reloads += 1;
    }
}
