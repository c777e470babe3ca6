//! Utility modules
//!
//! Shared error types and logging helpers.

pub mod errors;
pub mod logging;

pub use errors::{AccessDeskError, ErrorSeverity, Result};
