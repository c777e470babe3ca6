//! Error handling for AccessDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for AccessDesk operations
#[derive(Error, Debug)]
pub enum AccessDeskError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Group not found: {group_id}")]
    GroupNotFound { group_id: i64 },

    #[error("Proposal not found: {proposal_id}")]
    ProposalNotFound { proposal_id: i64 },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Remote call rejected: {endpoint} returned {status}")]
    RemoteRejected { endpoint: String, status: u16 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for AccessDesk operations
pub type Result<T> = std::result::Result<T, AccessDeskError>;

impl AccessDeskError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AccessDeskError::Http(_) => true,
            AccessDeskError::Serialization(_) => false,
            AccessDeskError::UrlParse(_) => false,
            AccessDeskError::Io(_) => true,
            AccessDeskError::Config(_) => false,
            AccessDeskError::PermissionDenied(_) => false,
            AccessDeskError::UserNotFound { .. } => false,
            AccessDeskError::GroupNotFound { .. } => false,
            AccessDeskError::ProposalNotFound { .. } => false,
            AccessDeskError::InvalidStateTransition { .. } => false,
            AccessDeskError::RemoteRejected { .. } => true,
            AccessDeskError::InvalidInput(_) => false,
            AccessDeskError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AccessDeskError::Config(_) => ErrorSeverity::Critical,
            AccessDeskError::PermissionDenied(_) => ErrorSeverity::Warning,
            AccessDeskError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            AccessDeskError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
