//! Bulk action coordinator integration tests
//!
//! Verifies the batch contract against a mock backend: parallel dispatch,
//! settle-all reconciliation, order preservation, in-place promotion, and
//! the unconditional selection clear on partial failure.

mod helpers;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use AccessDesk::models::ProposalStatus;
use AccessDesk::services::ServiceFactory;
use AccessDesk::workflow::{BulkAction, BulkActionCoordinator, Selection};

use helpers::{member_rows, pending_rows, seeded_directory, test_settings};

fn coordinator(services: &ServiceFactory) -> BulkActionCoordinator {
    BulkActionCoordinator::new(
        services.request_api.clone(),
        services.group_api.clone(),
        services.notifications.clone(),
        services.loading.clone(),
    )
}

#[tokio::test]
async fn test_bulk_approve_removes_selected_rows() {
    let server = MockServer::start().await;
    for id in [0, 2] {
        Mock::given(method("POST"))
            .and(path(format!("/proposals/{}/approve", id)))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }

    let services = ServiceFactory::new(&test_settings(&server.uri())).unwrap();
    let (mut directory, owner, group, proposals) = seeded_directory(3);
    let mut list = pending_rows(&proposals);
    let mut selection = Selection::new();
    selection.toggle_one(&list[0]);
    selection.toggle_one(&list[2]);

    let outcome = coordinator(&services)
        .run(BulkAction::Approve, group, owner, &mut directory, &mut list, &mut selection)
        .await
        .unwrap();

    assert_eq!(outcome.attempted, 2);
    assert_eq!(outcome.succeeded, 2);
    assert_eq!(outcome.failed, 0);

    // n - k rows remain, original relative order preserved
    let remaining: Vec<i64> = list.iter().map(|r| r.id).collect();
    assert_eq!(remaining, vec![proposals[1]]);
    assert!(selection.is_empty());

    for &id in &[proposals[0], proposals[2]] {
        assert_eq!(
            directory.proposal(id).unwrap().status.status,
            ProposalStatus::Approved
        );
    }
    assert!(directory.proposal(proposals[1]).unwrap().is_open());
    assert_eq!(directory.pending_approvals(owner).len(), 1);
}

#[tokio::test]
async fn test_bulk_deny_skips_unselected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proposals/1/deny"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let services = ServiceFactory::new(&test_settings(&server.uri())).unwrap();
    let (mut directory, owner, group, proposals) = seeded_directory(2);
    let mut list = pending_rows(&proposals);
    let mut selection = Selection::new();
    selection.toggle_one(&list[1]);

    coordinator(&services)
        .run(BulkAction::Deny, group, owner, &mut directory, &mut list, &mut selection)
        .await
        .unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, proposals[0]);
    assert!(directory.proposal(proposals[0]).unwrap().is_open());
    assert_eq!(
        directory.proposal(proposals[1]).unwrap().status.status,
        ProposalStatus::Rejected
    );
}

#[tokio::test]
async fn test_bulk_promote_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/groups/0/owners"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let services = ServiceFactory::new(&test_settings(&server.uri())).unwrap();
    let (mut directory, owner, group, _) = seeded_directory(0);
    let bob = directory.add_user("Bob").id;
    let carol = directory.add_user("Carol").id;
    for id in [bob, carol] {
        directory.group_mut(group).unwrap().members.insert(id);
    }

    let mut list = member_rows(&[bob, carol]);
    let mut selection = Selection::new();
    selection.toggle_all(&list, true);

    let outcome = coordinator(&services)
        .run(BulkAction::Promote, group, owner, &mut directory, &mut list, &mut selection)
        .await
        .unwrap();

    assert_eq!(outcome.succeeded, 2);
    // list length unchanged, status rewritten in place
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|row| row.status == "Owner"));
    assert!(selection.is_empty());
    assert!(directory.group(group).unwrap().owners.contains(&bob));
    assert!(directory.group(group).unwrap().owners.contains(&carol));
}

#[tokio::test]
async fn test_bulk_remove_from_group() {
    let server = MockServer::start().await;
    let services_settings = test_settings(&server.uri());
    let (mut directory, owner, group, _) = seeded_directory(0);
    let bob = directory.add_user("Bob").id;
    directory.group_mut(group).unwrap().members.insert(bob);

    Mock::given(method("DELETE"))
        .and(path(format!("/groups/{}/members/{}", group, bob)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let services = ServiceFactory::new(&services_settings).unwrap();
    let mut list = member_rows(&[bob]);
    let mut selection = Selection::new();
    selection.toggle_all(&list, true);

    coordinator(&services)
        .run(BulkAction::Remove, group, owner, &mut directory, &mut list, &mut selection)
        .await
        .unwrap();

    assert!(list.is_empty());
    assert!(!directory.group(group).unwrap().members.contains(&bob));
    assert!(!directory.user(bob).unwrap().member_of.contains(&group));
}

#[tokio::test]
async fn test_partial_failure_still_reconciles_and_clears() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proposals/0/approve"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/proposals/1/approve"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let services = ServiceFactory::new(&test_settings(&server.uri())).unwrap();
    let (mut directory, owner, group, proposals) = seeded_directory(2);
    let mut list = pending_rows(&proposals);
    let mut selection = Selection::new();
    selection.toggle_all(&list, true);

    let outcome = coordinator(&services)
        .run(BulkAction::Approve, group, owner, &mut directory, &mut list, &mut selection)
        .await
        .unwrap();

    assert_eq!(outcome.attempted, 2);
    assert_eq!(outcome.succeeded, 1);
    assert_eq!(outcome.failed, 1);

    // best-effort batch: every selected row leaves the list, selection clears
    assert!(list.is_empty());
    assert!(selection.is_empty());

    // directory stays pessimistic: the failed entry is still OPEN
    assert_eq!(
        directory.proposal(proposals[0]).unwrap().status.status,
        ProposalStatus::Approved
    );
    assert!(directory.proposal(proposals[1]).unwrap().is_open());
    assert_eq!(services.notifications.stats().errors, 1);
    assert!(!services.loading.is_active());
}

#[tokio::test]
async fn test_empty_selection_is_a_no_op() {
    let server = MockServer::start().await;
    let services = ServiceFactory::new(&test_settings(&server.uri())).unwrap();
    let (mut directory, owner, group, proposals) = seeded_directory(1);
    let mut list = pending_rows(&proposals);
    let mut selection = Selection::new();

    let outcome = coordinator(&services)
        .run(BulkAction::Approve, group, owner, &mut directory, &mut list, &mut selection)
        .await
        .unwrap();

    assert_eq!(outcome.attempted, 0);
    assert_eq!(list.len(), 1);
}
