//! Notification surface
//!
//! User-visible confirmations and error reporting for workflow operations.
//! Notices are kept in an inspectable log so the hosting UI (and tests)
//! can render them; counters track sent and failed outcomes.

use std::sync::{Arc, Mutex};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::utils::errors::AccessDeskError;

/// Notice severity shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    Confirmation,
    Error,
}

/// A single user-visible notice
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Notification delivery counters
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NotificationStats {
    pub confirmations: u64,
    pub errors: u64,
}

#[derive(Debug, Default)]
struct NoticeLog {
    notices: Vec<Notice>,
    stats: NotificationStats,
}

/// Notification service shared across workflow components
#[derive(Debug, Clone, Default)]
pub struct NotificationService {
    log: Arc<Mutex<NoticeLog>>,
}

impl NotificationService {
    /// Create a new NotificationService instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a user-visible confirmation message
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        info!(message = %message, "Notification");

        let mut log = self.log.lock().expect("notification log poisoned");
        log.stats.confirmations += 1;
        log.notices.push(Notice {
            kind: NoticeKind::Confirmation,
            message,
            at: Utc::now(),
        });
    }

    /// Record a failure for the user to see
    pub fn log_error(&self, context: &str, err: &AccessDeskError) {
        error!(context = context, error = %err, severity = %err.severity(), "Operation failed");

        let mut log = self.log.lock().expect("notification log poisoned");
        log.stats.errors += 1;
        log.notices.push(Notice {
            kind: NoticeKind::Error,
            message: format!("{}: {}", context, err),
            at: Utc::now(),
        });
    }

    /// Snapshot of all notices so far
    pub fn notices(&self) -> Vec<Notice> {
        self.log.lock().expect("notification log poisoned").notices.clone()
    }

    /// Get notification statistics
    pub fn stats(&self) -> NotificationStats {
        self.log.lock().expect("notification log poisoned").stats
    }

    /// Drop all recorded notices
    pub fn clear(&self) {
        let mut log = self.log.lock().expect("notification log poisoned");
        log.notices.clear();
        log.stats = NotificationStats::default();
    }
}
