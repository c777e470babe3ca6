//! Shared test fixtures
//!
//! Builders for settings pointed at a mock backend and pre-seeded session
//! directories used across the integration suites.

#![allow(dead_code)]

use AccessDesk::config::Settings;
use AccessDesk::directory::SessionDirectory;
use AccessDesk::workflow::Row;

/// Settings pointed at a mock backend
pub fn test_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = base_url.to_string();
    settings.api.timeout_seconds = 2;
    settings
}

/// Directory with one owner, one group, and `openers` pending proposals.
///
/// Returns (directory, owner id, group id, proposal ids).
pub fn seeded_directory(openers: usize) -> (SessionDirectory, i64, i64, Vec<i64>) {
    let mut directory = SessionDirectory::new();
    let owner = directory.add_user("Alice").id;
    let group = directory.create_group("Ops", owner).unwrap().id;

    let mut proposal_ids = Vec::new();
    for i in 0..openers {
        let opener = directory.add_user(format!("Requester {}", i)).id;
        let id = directory
            .open_proposal(opener, group, "please add me")
            .unwrap()
            .id;
        proposal_ids.push(id);
    }

    (directory, owner, group, proposal_ids)
}

/// Pending-approval rows for the given proposal ids
pub fn pending_rows(ids: &[i64]) -> Vec<Row> {
    ids.iter()
        .map(|&id| Row::pending_request(id, format!("request {}", id)))
        .collect()
}

/// Group roster rows for the given user ids
pub fn member_rows(ids: &[i64]) -> Vec<Row> {
    ids.iter()
        .map(|&id| Row::group_member(id, format!("user {}", id), "Member"))
        .collect()
}
