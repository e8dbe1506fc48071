//! # Infrastructure Layer
//!
//! External collaborators: runtime configuration and the adapters for
//! the upstream price and rate APIs.

pub mod providers;
pub mod settings;
