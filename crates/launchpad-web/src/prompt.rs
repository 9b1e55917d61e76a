//! Bindings for the non-standard `BeforeInstallPromptEvent`.
//!
//! `web-sys` has no binding for it, so the two members the dashboard uses
//! are declared here.

use launchpad_core::error::{LaunchpadError, Result};
use launchpad_core::event::InstallOutcome;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::page::js_error;

#[wasm_bindgen]
extern "C" {
    /// Deferred install offer delivered with the `beforeinstallprompt` event.
    #[wasm_bindgen(extends = web_sys::Event, typescript_type = "BeforeInstallPromptEvent")]
    #[derive(Debug, Clone)]
    pub type BeforeInstallPromptEvent;

    #[wasm_bindgen(method, catch)]
    fn prompt(this: &BeforeInstallPromptEvent) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter, js_name = userChoice)]
    fn user_choice(this: &BeforeInstallPromptEvent) -> js_sys::Promise;
}

/// Show the install prompt and wait for the user's answer.
///
/// There is no timeout: if the platform never settles `userChoice`, the
/// returned future never completes.
pub async fn ask_user(event: BeforeInstallPromptEvent) -> Result<InstallOutcome> {
    event.prompt().map_err(js_error)?;
    let choice = JsFuture::from(event.user_choice())
        .await
        .map_err(js_error)?;
    let outcome = js_sys::Reflect::get(&choice, &JsValue::from_str("outcome"))
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| LaunchpadError::Backend("userChoice has no outcome".into()))?;
    outcome.parse()
}
