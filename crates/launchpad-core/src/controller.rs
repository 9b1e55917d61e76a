//! Dashboard controller -- owns the page backend and every piece of
//! per-session state, and routes each [`DashEvent`] to the sub-state that
//! handles it.
//!
//! Handlers run to completion. The only work that outlives a handler (the
//! install prompt and the worker registration) is returned to the host as
//! an [`Effect`]; the host reports the result back as another event.

use crate::backend::PageBackend;
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::event::{DashEvent, Effect};
use crate::install::{InstallRequest, InstallState};
use crate::pagination::PaginationState;
use crate::registry::ElementRegistry;
use crate::search::{SearchSummary, perform_search};
use crate::sidebar::SidebarState;
use crate::worker::ServiceWorker;

/// Event type accepted by a controller over backend `P`.
pub type PageEvent<P> =
    DashEvent<<P as PageBackend>::Element, <P as PageBackend>::InstallSignal>;

/// Effect type returned by a controller over backend `P`.
pub type PageEffect<P> = Effect<<P as PageBackend>::InstallSignal>;

/// One page session's dashboard.
pub struct DashboardController<P: PageBackend> {
    page: P,
    config: DashboardConfig,
    registry: ElementRegistry<P::Element>,
    sidebar: SidebarState,
    pagination: PaginationState,
    install: InstallState<P::InstallSignal>,
    worker: ServiceWorker,
    started: bool,
}

impl<P: PageBackend> DashboardController<P> {
    /// Validate the config and resolve the element registry.
    ///
    /// Fails if any required element is missing; no page mutation happens
    /// before that check.
    pub fn new(page: P, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let registry = ElementRegistry::resolve(&page, &config.elements)?;
        let sidebar = SidebarState::new(&config.active_class);
        let worker = ServiceWorker::new(&config.worker_path);
        Ok(Self {
            page,
            config,
            registry,
            sidebar,
            pagination: PaginationState::new(),
            install: InstallState::new(),
            worker,
            started: false,
        })
    }

    /// Run the startup sequence: paginate the items, hide install buttons
    /// in standalone mode and request worker registration.
    ///
    /// Runs once; later calls return [`Effect::None`].
    pub fn start(&mut self) -> PageEffect<P> {
        if self.started {
            log::warn!("Dashboard already started");
            return Effect::None;
        }
        self.started = true;
        self.manage_app_visibility();
        self.install
            .hide_if_standalone(&mut self.page, &self.registry);
        log::info!("Dashboard started");
        match self.worker.begin(&self.page) {
            Some(path) => Effect::RegisterWorker(path),
            None => Effect::None,
        }
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: PageEvent<P>) -> PageEffect<P> {
        match event {
            DashEvent::SearchSubmitted | DashEvent::SearchEdited => {
                self.perform_search();
            },
            DashEvent::KeyPressed(key) => {
                if key == "Enter" {
                    self.perform_search();
                }
            },
            DashEvent::SidebarToggleClicked => self.toggle_sidebar(true),
            DashEvent::SidebarCloseClicked => self.toggle_sidebar(false),
            DashEvent::DocumentClicked { target } => {
                self.sidebar
                    .handle_document_click(&mut self.page, &self.registry, target.as_ref());
            },
            DashEvent::ShowMoreClicked => {
                self.pagination
                    .show_more(&mut self.page, &self.registry, &self.config);
            },
            DashEvent::InstallAvailable(signal) => {
                self.install
                    .capture(&mut self.page, &self.registry, signal);
            },
            DashEvent::InstallClicked => return self.install_app(),
            DashEvent::InstallChoiceMade(outcome) => {
                self.install
                    .finish(&mut self.page, &self.registry, outcome);
            },
            DashEvent::WorkerRegistered(outcome) => self.worker.record(outcome),
            DashEvent::RefreshClicked => {
                log::info!("Reloading page");
                self.page.reload_bypassing_cache();
            },
        }
        Effect::None
    }

    /// Filter the items by the search field's current value.
    pub fn perform_search(&mut self) -> SearchSummary {
        perform_search(&mut self.page, &self.registry, &self.config)
    }

    /// Apply the initial "show more" page to the items.
    pub fn manage_app_visibility(&mut self) {
        self.pagination
            .manage_visibility(&mut self.page, &self.registry, &self.config);
    }

    /// Open or close the sidebar.
    pub fn toggle_sidebar(&mut self, show: bool) {
        self.sidebar.toggle(&mut self.page, &self.registry, show);
    }

    /// Handle an install-button activation.
    pub fn install_app(&mut self) -> PageEffect<P> {
        match self
            .install
            .request(&mut self.page, &self.config.install_unavailable_text)
        {
            InstallRequest::Prompt(signal) => Effect::PromptInstall(signal),
            InstallRequest::Unavailable => Effect::None,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn registry(&self) -> &ElementRegistry<P::Element> {
        &self.registry
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn install(&self) -> &InstallState<P::InstallSignal> {
        &self.install
    }

    pub fn worker(&self) -> &ServiceWorker {
        &self.worker
    }
}
