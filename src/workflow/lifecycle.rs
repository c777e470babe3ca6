//! Request lifecycle manager
//!
//! Drives a single proposal through OPEN -> APPROVED | REJECTED. The local
//! status precondition is authoritative: a resolved proposal fails before
//! any remote call is made. Local directory state mutates only after the
//! remote call succeeds; a failed call leaves the displayed state
//! untouched and surfaces the error through the notification surface.

use tracing::{debug, info};

use crate::directory::SessionDirectory;
use crate::services::{LoadingIndicator, NotificationService, RequestApi};
use crate::utils::errors::{AccessDeskError, Result};
use super::actions::Row;

/// Approve/deny workflow for individual proposals
#[derive(Debug, Clone)]
pub struct RequestLifecycle {
    api: RequestApi,
    notifications: NotificationService,
    loading: LoadingIndicator,
}

impl RequestLifecycle {
    /// Create a new RequestLifecycle instance
    pub fn new(
        api: RequestApi,
        notifications: NotificationService,
        loading: LoadingIndicator,
    ) -> Self {
        Self {
            api,
            notifications,
            loading,
        }
    }

    /// Approve an OPEN proposal.
    ///
    /// On success the directory records the transition and its side
    /// effects; the caller removes the proposal from any displayed list.
    pub async fn approve(
        &self,
        directory: &mut SessionDirectory,
        proposal_id: i64,
        closer: i64,
        reason: &str,
    ) -> Result<()> {
        debug!(proposal_id = proposal_id, closer = closer, reason = reason, "Approving proposal");
        self.check_open(directory, proposal_id)?;

        self.loading.start();
        let outcome = self.api.approve(proposal_id).await;
        self.loading.stop();

        match outcome {
            Ok(()) => {
                directory.record_approval(proposal_id, closer)?;
                self.notifications.notify(format!("Request {} approved", proposal_id));
                info!(proposal_id = proposal_id, closer = closer, "Proposal approved");
                Ok(())
            }
            Err(e) => {
                self.notifications.log_error("approve", &e);
                Err(e)
            }
        }
    }

    /// Reject an OPEN proposal
    pub async fn deny(
        &self,
        directory: &mut SessionDirectory,
        proposal_id: i64,
        closer: i64,
        reason: &str,
    ) -> Result<()> {
        debug!(proposal_id = proposal_id, closer = closer, reason = reason, "Denying proposal");
        self.check_open(directory, proposal_id)?;

        self.loading.start();
        let outcome = self.api.deny(proposal_id).await;
        self.loading.stop();

        match outcome {
            Ok(()) => {
                directory.record_rejection(proposal_id, closer)?;
                self.notifications.notify(format!("Request {} denied", proposal_id));
                info!(proposal_id = proposal_id, closer = closer, "Proposal denied");
                Ok(())
            }
            Err(e) => {
                self.notifications.log_error("deny", &e);
                Err(e)
            }
        }
    }

    /// Remove a resolved proposal's row from a displayed list
    pub fn drop_row(list: &mut Vec<Row>, proposal_id: i64) {
        list.retain(|row| row.id != proposal_id);
    }

    fn check_open(&self, directory: &SessionDirectory, proposal_id: i64) -> Result<()> {
        let proposal = directory
            .proposal(proposal_id)
            .ok_or(AccessDeskError::ProposalNotFound { proposal_id })?;

        if !proposal.is_open() {
            return Err(AccessDeskError::InvalidStateTransition {
                from: proposal.status.status.to_string(),
                to: "resolved".to_string(),
            });
        }
        Ok(())
    }
}
