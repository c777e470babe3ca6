//! Workflow module
//!
//! Request lifecycle transitions, list selection, and bulk action
//! coordination.

pub mod actions;
pub mod bulk;
pub mod lifecycle;
pub mod selection;

pub use actions::{actions_for, BulkAction, Row, RowKind};
pub use bulk::{BulkActionCoordinator, BulkOutcome};
pub use lifecycle::RequestLifecycle;
pub use selection::{Identified, Selection};
