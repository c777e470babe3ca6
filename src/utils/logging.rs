//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the AccessDesk application.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "accessdesk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log group membership changes
pub fn log_membership_change(group_id: i64, user_id: i64, change: &str) {
    info!(
        group_id = group_id,
        user_id = user_id,
        change = change,
        "Group membership changed"
    );
}

/// Log proposal lifecycle events
pub fn log_proposal_event(proposal_id: i64, event: &str, closer: Option<i64>) {
    info!(
        proposal_id = proposal_id,
        event = event,
        closer = closer,
        "Proposal lifecycle event"
    );
}

/// Log bulk action outcomes
pub fn log_bulk_action(action: &str, attempted: usize, succeeded: usize, failed: usize) {
    if failed > 0 {
        warn!(
            action = action,
            attempted = attempted,
            succeeded = succeeded,
            failed = failed,
            "Bulk action completed with failures"
        );
    } else {
        info!(
            action = action,
            attempted = attempted,
            succeeded = succeeded,
            "Bulk action completed"
        );
    }
}
