//! AccessDesk workflow engine
//!
//! Core of a directory/access-request application: users browse groups,
//! request membership, and owners approve or reject those requests. This
//! library provides the role classification model, the session directory,
//! the request lifecycle state machine, bulk action coordination, and the
//! chat intent payload codec.

#![allow(non_snake_case)]

pub mod config;
pub mod chat;
pub mod directory;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AccessDeskError, Result};

// Re-export main components for easy access
pub use directory::{Role, SessionDirectory};
pub use services::ServiceFactory;
pub use workflow::{BulkAction, BulkActionCoordinator, RequestLifecycle, Selection};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
