//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod group;
pub mod proposal;

// Re-export commonly used models
pub use user::User;
pub use group::Group;
pub use proposal::{Proposal, ProposalKind, ProposalState, ProposalStatus, REQUEST_ROLE_ACCESS};
