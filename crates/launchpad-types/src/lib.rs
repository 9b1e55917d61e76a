//! Foundation types and traits for Launchpad.
//!
//! This crate contains the platform-agnostic types shared by all Launchpad
//! crates: the page backend trait, the event enum every DOM event is mapped
//! to, configuration, and error types.

pub mod backend;
pub mod config;
pub mod error;
pub mod event;
