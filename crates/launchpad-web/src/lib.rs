//! Launchpad browser entry point.
//!
//! Compiled to WebAssembly and loaded by the dashboard page. Installs the
//! panic hook and console logger, then mounts the dashboard controller once
//! the document has been parsed.

mod page;
mod prompt;
mod wiring;
mod worker;

use anyhow::{Context, anyhow};
use launchpad_core::config::DashboardConfig;
use wasm_bindgen::prelude::*;

pub use page::WebPage;
pub use prompt::BeforeInstallPromptEvent;

/// Configuration baked into the module at build time.
const CONFIG: &str = include_str!("../launchpad.toml");

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    boot().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn boot() -> anyhow::Result<()> {
    let config = DashboardConfig::from_toml(CONFIG).context("invalid launchpad.toml")?;
    let level = config.level_filter().to_level().unwrap_or(log::Level::Error);
    wasm_logger::init(wasm_logger::Config::new(level));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document to mount on")?;

    if document.ready_state() != "loading" {
        wiring::mount(config).context("failed to start dashboard")?;
        return Ok(());
    }

    let on_ready = Closure::once(move || {
        if let Err(e) = wiring::mount(config) {
            log::error!("Failed to start dashboard: {e}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("cannot wait for DOMContentLoaded: {}", page::describe(&e)))?;
    on_ready.forget();
    Ok(())
}
