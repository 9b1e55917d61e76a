//! Platform-agnostic dashboard events.
//!
//! Every backend maps the DOM events it listens to onto [`DashEvent`]. The
//! controller answers each one with an [`Effect`] the host must carry out
//! asynchronously, if any.

use std::fmt;
use std::str::FromStr;

use crate::error::LaunchpadError;

/// An event delivered to the dashboard controller.
///
/// `E` is the backend's element handle, `S` its install signal.
#[derive(Debug, Clone, PartialEq)]
pub enum DashEvent<E, S> {
    /// The search button was clicked.
    SearchSubmitted,
    /// The search field's value changed.
    SearchEdited,
    /// A key was pressed in the search field (DOM `key` name).
    KeyPressed(String),
    /// The sidebar open-trigger was clicked.
    SidebarToggleClicked,
    /// The sidebar close button was clicked.
    SidebarCloseClicked,
    /// A click reached the document. `None` if the target is not an element.
    DocumentClicked { target: Option<E> },
    /// The "show more" control was clicked.
    ShowMoreClicked,
    /// The platform offered to install the page.
    InstallAvailable(S),
    /// One of the install buttons was clicked.
    InstallClicked,
    /// The user answered the install prompt.
    InstallChoiceMade(InstallOutcome),
    /// Service worker registration finished.
    WorkerRegistered(WorkerOutcome),
    /// The refresh control was clicked.
    RefreshClicked,
}

/// Work the host must perform after an event was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<S> {
    /// Nothing further to do.
    None,
    /// Show the install prompt for this signal, then deliver
    /// [`DashEvent::InstallChoiceMade`] with the user's answer.
    PromptInstall(S),
    /// Register the service worker at this path, then deliver
    /// [`DashEvent::WorkerRegistered`].
    RegisterWorker(String),
}

/// The user's answer to the install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Dismissed => write!(f, "dismissed"),
        }
    }
}

impl FromStr for InstallOutcome {
    type Err = LaunchpadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Self::Accepted),
            "dismissed" => Ok(Self::Dismissed),
            other => Err(LaunchpadError::Backend(format!(
                "unknown install outcome: {other}"
            ))),
        }
    }
}

/// Terminal result of a service worker registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerOutcome {
    /// Registered; carries the worker's scope URL.
    Registered { scope: String },
    /// Registration rejected; carries the platform's error text.
    Failed(String),
}
