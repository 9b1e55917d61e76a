//! DOM listener wiring.
//!
//! Every listener maps its DOM event onto a [`DashEvent`] and hands it to
//! the shared controller. Listeners are attached exactly once per page load
//! and live as long as the page, so their closures are leaked.

use std::cell::RefCell;
use std::rc::Rc;

use launchpad_core::DashboardController;
use launchpad_core::config::DashboardConfig;
use launchpad_core::error::Result;
use launchpad_core::event::{DashEvent, Effect, InstallOutcome};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

use crate::page::{WebPage, js_error};
use crate::prompt::{self, BeforeInstallPromptEvent};
use crate::worker;

type Shared = Rc<RefCell<DashboardController<WebPage>>>;
type WebEvent = DashEvent<Element, BeforeInstallPromptEvent>;

/// Build the controller, attach every listener and run startup.
pub fn mount(config: DashboardConfig) -> Result<()> {
    let page = WebPage::new()?;
    let window = page.window().clone();
    let document = page.document().clone();
    let controller = DashboardController::new(page, config)?;
    let registry = controller.registry().clone();
    let shared: Shared = Rc::new(RefCell::new(controller));

    // Search
    on(&shared, &registry.search_button, "click", |_| {
        Some(DashEvent::SearchSubmitted)
    })?;
    on(&shared, &registry.search_input, "input", |_| {
        Some(DashEvent::SearchEdited)
    })?;
    on(&shared, &registry.search_input, "keypress", |ev| {
        ev.dyn_ref::<KeyboardEvent>()
            .map(|key| DashEvent::KeyPressed(key.key()))
    })?;

    // Sidebar
    on(&shared, &registry.sidebar_toggle, "click", |_| {
        Some(DashEvent::SidebarToggleClicked)
    })?;
    on(&shared, &registry.sidebar_close, "click", |_| {
        Some(DashEvent::SidebarCloseClicked)
    })?;
    on(&shared, &document, "click", |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
        Some(DashEvent::DocumentClicked { target })
    })?;

    // Pagination
    on(&shared, &registry.show_more, "click", |_| {
        Some(DashEvent::ShowMoreClicked)
    })?;

    // Install prompt
    on(&shared, &window, "beforeinstallprompt", |ev| {
        ev.prevent_default();
        Some(DashEvent::InstallAvailable(ev.unchecked_into()))
    })?;
    for button in &registry.install_buttons {
        on(&shared, button, "click", |_| Some(DashEvent::InstallClicked))?;
    }

    // Refresh
    on(&shared, &registry.refresh_button, "click", |_| {
        Some(DashEvent::RefreshClicked)
    })?;

    let effect = shared.borrow_mut().start();
    run_effect(&shared, effect);
    Ok(())
}

/// Attach a listener that translates DOM events for the controller.
fn on<F>(shared: &Shared, target: &EventTarget, kind: &str, translate: F) -> Result<()>
where
    F: Fn(Event) -> Option<WebEvent> + 'static,
{
    let shared = Rc::clone(shared);
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Some(event) = translate(ev) {
            dispatch(&shared, event);
        }
    });
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Deliver one event and carry out the resulting effect.
fn dispatch(shared: &Shared, event: WebEvent) {
    let effect = shared.borrow_mut().handle(event);
    run_effect(shared, effect);
}

fn run_effect(shared: &Shared, effect: Effect<BeforeInstallPromptEvent>) {
    match effect {
        Effect::None => {},
        Effect::PromptInstall(signal) => {
            let shared = Rc::clone(shared);
            spawn_local(async move {
                let outcome = prompt::ask_user(signal).await.unwrap_or_else(|e| {
                    log::warn!("Install prompt failed: {e}");
                    InstallOutcome::Dismissed
                });
                dispatch(&shared, DashEvent::InstallChoiceMade(outcome));
            });
        },
        Effect::RegisterWorker(path) => {
            let window = shared.borrow().page().window().clone();
            let shared = Rc::clone(shared);
            spawn_local(async move {
                let outcome = worker::register(&window, &path).await;
                dispatch(&shared, DashEvent::WorkerRegistered(outcome));
            });
        },
    }
}
