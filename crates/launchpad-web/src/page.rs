//! `web-sys` implementation of [`PageBackend`].

use launchpad_core::backend::{Display, PageBackend};
use launchpad_core::error::{LaunchpadError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Node, NodeList, Window};

use crate::prompt::BeforeInstallPromptEvent;

/// The live browser page.
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    /// Bind to the global window and its document.
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| LaunchpadError::Backend("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| LaunchpadError::Backend("window has no document".into()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn set_style(element: &Element, property: &str, value: Option<&str>) {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            log::warn!("Cannot style non-HTML element <{}>", element.tag_name());
            return;
        };
        let style = html.style();
        let result = match value {
            Some(v) => style.set_property(property, v),
            None => style.remove_property(property).map(|_| ()),
        };
        if let Err(e) = result {
            log::warn!("Setting {property} failed: {}", describe(&e));
        }
    }
}

impl PageBackend for WebPage {
    type Element = Element;
    type InstallSignal = BeforeInstallPromptEvent;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                log::warn!("Bad selector {selector:?}: {}", describe(&e));
                Vec::new()
            },
        }
    }

    fn query_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        match root.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                log::warn!("Bad selector {selector:?}: {}", describe(&e));
                Vec::new()
            },
        }
    }

    fn label_text(&self, item: &Element, selector: &str) -> String {
        item.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|label| label.text_content())
            .unwrap_or_default()
    }

    fn input_value(&self, element: &Element) -> String {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_display(&mut self, element: &Element, display: Display) {
        Self::set_style(element, "display", display.as_css());
    }

    fn set_class(&mut self, element: &Element, class: &str, on: bool) {
        if let Err(e) = element.class_list().toggle_with_force(class, on) {
            log::warn!("Toggling class {class:?} failed: {}", describe(&e));
        }
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_message(&mut self, element: &Element, text: &str) {
        element.set_inner_html("");
        let paragraph = match self.document.create_element("p") {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Creating message paragraph failed: {}", describe(&e));
                return;
            },
        };
        paragraph.set_text_content(Some(text));
        if let Err(e) = element.append_child(&paragraph) {
            log::warn!("Appending message failed: {}", describe(&e));
        }
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        match self.document.body() {
            Some(body) => Self::set_style(&body, "overflow", locked.then_some("hidden")),
            None => log::warn!("Document has no body to lock"),
        }
    }

    fn is_standalone(&self) -> bool {
        let display_mode = self
            .window
            .match_media("(display-mode: standalone)")
            .ok()
            .flatten()
            .is_some_and(|mql| mql.matches());
        // iOS Safari exposes a non-standard `navigator.standalone` flag.
        let legacy = js_sys::Reflect::get(&self.window.navigator(), &JsValue::from_str("standalone"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        display_mode || legacy
    }

    fn supports_service_worker(&self) -> bool {
        js_sys::Reflect::has(&self.window.navigator(), &JsValue::from_str("serviceWorker"))
            .unwrap_or(false)
    }

    fn alert(&mut self, text: &str) {
        if let Err(e) = self.window.alert_with_message(text) {
            log::warn!("alert() failed: {}", describe(&e));
        }
    }

    #[allow(deprecated)]
    fn reload_bypassing_cache(&mut self) {
        if let Err(e) = self.window.location().reload_with_forceget(true) {
            log::error!("Reload failed: {}", describe(&e));
        }
    }
}

/// Collect the element entries of a `NodeList`.
fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Best-effort human-readable text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// Wrap a thrown JS value as a backend error.
pub(crate) fn js_error(value: JsValue) -> LaunchpadError {
    LaunchpadError::Backend(describe(&value))
}
