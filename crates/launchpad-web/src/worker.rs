//! Service worker registration.

use launchpad_core::event::WorkerOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ServiceWorkerRegistration, Window};

use crate::page::describe;

/// Register the worker script at `path` and report the terminal outcome.
pub async fn register(window: &Window, path: &str) -> WorkerOutcome {
    let container = window.navigator().service_worker();
    match JsFuture::from(container.register(path)).await {
        Ok(value) => {
            let registration: ServiceWorkerRegistration = value.unchecked_into();
            WorkerOutcome::Registered {
                scope: registration.scope(),
            }
        },
        Err(e) => WorkerOutcome::Failed(describe(&e)),
    }
}
