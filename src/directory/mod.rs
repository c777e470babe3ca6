//! Group directory module
//!
//! Session-scoped directory state and role classification.

pub mod roles;
pub mod store;

pub use roles::{classify, display_owners, Role};
pub use store::SessionDirectory;
