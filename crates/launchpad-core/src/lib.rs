//! Launchpad core.
//!
//! Platform-agnostic controller for the app dashboard page: element
//! registry, search filtering, "show more" pagination, sidebar toggle,
//! install-prompt mediation and service worker bookkeeping. All page access
//! goes through [`backend::PageBackend`], so this crate has zero browser
//! dependencies and runs its tests natively.

// Re-exports from launchpad-types (foundation types and traits).
pub use launchpad_types::backend;
pub use launchpad_types::config;
pub use launchpad_types::error;
pub use launchpad_types::event;

pub mod controller;
pub mod install;
pub mod items;
pub mod pagination;
pub mod registry;
pub mod search;
pub mod sidebar;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_utils;

pub use controller::DashboardController;
