//! Service worker registration bookkeeping.
//!
//! Registration is fire-and-forget: the outcome is logged and nothing else
//! waits on it. It is attempted at most once per page session and never
//! surfaced to the user.

use crate::backend::PageBackend;
use crate::event::WorkerOutcome;

/// Registration lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkerState {
    /// Startup has not run yet.
    #[default]
    NotStarted,
    /// The host has no service worker support.
    Unsupported,
    /// Registration handed to the host, outcome not yet known.
    Pending,
    /// Registered under this scope.
    Registered(String),
    /// Registration failed with this error.
    Failed(String),
}

/// Tracks the single registration attempt for this page session.
#[derive(Debug)]
pub struct ServiceWorker {
    path: String,
    state: WorkerState,
}

impl ServiceWorker {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            state: WorkerState::NotStarted,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn state(&self) -> &WorkerState {
        &self.state
    }

    /// Decide whether to register. Returns the path to register on the
    /// first call when the host supports workers, `None` otherwise.
    pub fn begin<P: PageBackend>(&mut self, page: &P) -> Option<String> {
        if self.state != WorkerState::NotStarted {
            return None;
        }
        if !page.supports_service_worker() {
            log::info!("Service workers unsupported; skipping registration");
            self.state = WorkerState::Unsupported;
            return None;
        }
        log::debug!("Registering service worker {}", self.path);
        self.state = WorkerState::Pending;
        Some(self.path.clone())
    }

    /// Record the terminal outcome. There is no retry.
    pub fn record(&mut self, outcome: WorkerOutcome) {
        if self.state != WorkerState::Pending {
            log::warn!("Ignoring service worker outcome in state {:?}", self.state);
            return;
        }
        self.state = match outcome {
            WorkerOutcome::Registered { scope } => {
                log::info!("Service Worker registered with scope: {scope}");
                WorkerState::Registered(scope)
            },
            WorkerOutcome::Failed(err) => {
                log::error!("Service Worker registration failed: {err}");
                WorkerState::Failed(err)
            },
        };
    }
}
