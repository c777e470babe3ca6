//! Proposal (access request) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proposal type string for role access requests
pub const REQUEST_ROLE_ACCESS: &str = "REQUEST_ROLE_ACCESS";

/// Proposal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    Open,
    Approved,
    Rejected,
}

impl ProposalStatus {
    /// APPROVED and REJECTED are terminal; no transition leaves them
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProposalStatus::Open)
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalStatus::Open => write!(f, "OPEN"),
            ProposalStatus::Approved => write!(f, "APPROVED"),
            ProposalStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Wire wrapper around the proposal type string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalKind {
    pub proposal_type: String,
}

/// Wire wrapper around the proposal status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalState {
    pub status: ProposalStatus,
}

/// A pending ask for group access, with a lifecycle and a resolving owner.
///
/// `target` is the user the request is about, normally equal to `opener`.
/// `closer` stays `None` while the proposal is OPEN.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: i64,
    pub opener: i64,
    pub target: i64,
    pub object: i64,
    pub open_reason: String,
    #[serde(rename = "type")]
    pub kind: ProposalKind,
    pub status: ProposalState,
    pub closer: Option<i64>,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Proposal {
    /// Open a new role-access proposal
    pub fn new(id: i64, opener: i64, object: i64, open_reason: impl Into<String>) -> Self {
        Self {
            id,
            opener,
            target: opener,
            object,
            open_reason: open_reason.into(),
            kind: ProposalKind {
                proposal_type: REQUEST_ROLE_ACCESS.to_string(),
            },
            status: ProposalState {
                status: ProposalStatus::Open,
            },
            closer: None,
            opened_at: Utc::now(),
            closed_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status.status == ProposalStatus::Open
    }
}
