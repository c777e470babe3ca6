//! Bulk action coordinator
//!
//! Applies one transition to every entity in a selection: one remote call
//! per entity, dispatched concurrently, reconciled only after the full
//! batch has settled. Reconciliation is by identity and preserves the
//! relative order of untouched rows. The selection is cleared
//! unconditionally once the batch completes, even when individual calls
//! failed; failures are logged and counted in the returned outcome.

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info};

use crate::directory::{Role, SessionDirectory};
use crate::services::{GroupApi, LoadingIndicator, NotificationService, RequestApi};
use crate::utils::errors::Result;
use crate::utils::logging::log_bulk_action;
use super::actions::{BulkAction, Row};
use super::selection::Selection;

/// Outcome of a settled bulk batch
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BulkOutcome {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Coordinates bulk transitions over selected list entries
#[derive(Debug, Clone)]
pub struct BulkActionCoordinator {
    requests: RequestApi,
    groups: GroupApi,
    notifications: NotificationService,
    loading: LoadingIndicator,
}

impl BulkActionCoordinator {
    /// Create a new BulkActionCoordinator instance
    pub fn new(
        requests: RequestApi,
        groups: GroupApi,
        notifications: NotificationService,
        loading: LoadingIndicator,
    ) -> Self {
        Self {
            requests,
            groups,
            notifications,
            loading,
        }
    }

    /// Run one action over the current selection and reconcile the list.
    ///
    /// `actor` is the user performing the action (the closer for
    /// approve/deny). The coordinator always completes once every
    /// dispatched call has settled; per-call failures do not propagate.
    pub async fn run(
        &self,
        action: BulkAction,
        group_id: i64,
        actor: i64,
        directory: &mut SessionDirectory,
        list: &mut Vec<Row>,
        selection: &mut Selection<Row>,
    ) -> Result<BulkOutcome> {
        let selected_ids = selection.ids();
        if selected_ids.is_empty() {
            debug!(action = %action, "Bulk action with empty selection");
            return Ok(BulkOutcome::default());
        }

        info!(action = %action, group_id = group_id, count = selected_ids.len(), "Dispatching bulk action");
        self.loading.start();

        // one call per entity, all in flight at once; a single slow call
        // holds back reconciliation of the whole batch
        let calls = selected_ids
            .iter()
            .map(|&id| self.dispatch(action, id, group_id));
        let results = join_all(calls).await;

        self.loading.stop();

        let mut outcome = BulkOutcome {
            attempted: selected_ids.len(),
            ..BulkOutcome::default()
        };

        for (&id, result) in selected_ids.iter().zip(results) {
            match result {
                Ok(()) => {
                    self.apply_local(action, id, group_id, actor, directory);
                    outcome.succeeded += 1;
                }
                Err(e) => {
                    self.notifications.log_error(&format!("bulk {}", action), &e);
                    outcome.failed += 1;
                }
            }
        }

        Self::reconcile(action, list, &selected_ids);

        // at-least-attempted semantics: the selection never survives a batch
        selection.clear();

        log_bulk_action(&action.to_string(), outcome.attempted, outcome.succeeded, outcome.failed);
        if outcome.failed == 0 {
            self.notifications.notify(format!(
                "{} applied to {} entries",
                action, outcome.succeeded
            ));
        }

        Ok(outcome)
    }

    async fn dispatch(&self, action: BulkAction, id: i64, group_id: i64) -> Result<()> {
        match action {
            BulkAction::Approve => self.requests.approve(id).await,
            BulkAction::Deny => self.requests.deny(id).await,
            BulkAction::Promote => self.groups.promote(id, group_id).await,
            BulkAction::Remove => self.groups.remove(id, group_id).await,
        }
    }

    /// Mirror a confirmed remote transition into the session directory
    fn apply_local(
        &self,
        action: BulkAction,
        id: i64,
        group_id: i64,
        actor: i64,
        directory: &mut SessionDirectory,
    ) {
        let applied = match action {
            BulkAction::Approve => directory.record_approval(id, actor),
            BulkAction::Deny => directory.record_rejection(id, actor),
            BulkAction::Promote => directory.promote_member(group_id, id),
            BulkAction::Remove => directory.remove_member(group_id, id),
        };

        if let Err(e) = applied {
            self.notifications.log_error(&format!("bulk {} reconcile", action), &e);
        }
    }

    /// Reconcile the displayed list after the batch settles.
    ///
    /// Approve/deny/remove delete selected rows by identity; promote sets
    /// the displayed status in place and leaves the length unchanged.
    fn reconcile(action: BulkAction, list: &mut Vec<Row>, selected_ids: &[i64]) {
        match action {
            BulkAction::Approve | BulkAction::Deny | BulkAction::Remove => {
                list.retain(|row| !selected_ids.contains(&row.id));
            }
            BulkAction::Promote => {
                for row in list.iter_mut() {
                    if selected_ids.contains(&row.id) {
                        row.status = Role::Owner.to_string();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: &[i64]) -> Vec<Row> {
        ids.iter().map(|&id| Row::pending_request(id, format!("r{}", id))).collect()
    }

    #[test]
    fn test_reconcile_removes_selected_preserving_order() {
        let mut list = rows(&[1, 2, 3, 4, 5]);
        BulkActionCoordinator::reconcile(BulkAction::Approve, &mut list, &[2, 4]);

        let remaining: Vec<i64> = list.iter().map(|r| r.id).collect();
        assert_eq!(remaining, vec![1, 3, 5]);
    }

    #[test]
    fn test_reconcile_promote_in_place() {
        let mut list: Vec<Row> = [1, 2, 3]
            .iter()
            .map(|&id| Row::group_member(id, format!("u{}", id), "Member"))
            .collect();
        BulkActionCoordinator::reconcile(BulkAction::Promote, &mut list, &[2]);

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].status, "Member");
        assert_eq!(list[1].status, "Owner");
        assert_eq!(list[2].status, "Member");
    }

    #[test]
    fn test_reconcile_ignores_unselected() {
        let mut list = rows(&[1, 2]);
        BulkActionCoordinator::reconcile(BulkAction::Deny, &mut list, &[9]);
        assert_eq!(list.len(), 2);
    }
}
