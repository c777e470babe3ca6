//! Row kinds and bulk action sets
//!
//! Each displayed list row carries a `RowKind` discriminant; the set of
//! bulk actions available for a row is resolved through a static lookup
//! table instead of instantiating per-row action components at runtime.

use serde::Serialize;

use super::selection::Identified;

/// Discriminant for the kind of entity a list row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RowKind {
    /// An OPEN proposal awaiting an owner decision
    PendingRequest,
    /// A user shown in a group roster
    GroupMember,
}

/// A bulk transition applied to every selected entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BulkAction {
    Approve,
    Deny,
    Promote,
    Remove,
}

impl std::fmt::Display for BulkAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BulkAction::Approve => write!(f, "approve"),
            BulkAction::Deny => write!(f, "deny"),
            BulkAction::Promote => write!(f, "promote"),
            BulkAction::Remove => write!(f, "remove"),
        }
    }
}

/// Actions available for each row kind
pub fn actions_for(kind: RowKind) -> &'static [BulkAction] {
    match kind {
        RowKind::PendingRequest => &[BulkAction::Approve, BulkAction::Deny],
        RowKind::GroupMember => &[BulkAction::Promote, BulkAction::Remove],
    }
}

/// A displayed list entry
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub kind: RowKind,
}

impl Row {
    /// Row for an OPEN proposal in a pending-approval list
    pub fn pending_request(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: "OPEN".to_string(),
            kind: RowKind::PendingRequest,
        }
    }

    /// Row for a user in a group roster
    pub fn group_member(id: i64, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: role.into(),
            kind: RowKind::GroupMember,
        }
    }
}

impl Identified for Row {
    fn entity_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_table_per_kind() {
        assert_eq!(
            actions_for(RowKind::PendingRequest),
            &[BulkAction::Approve, BulkAction::Deny]
        );
        assert_eq!(
            actions_for(RowKind::GroupMember),
            &[BulkAction::Promote, BulkAction::Remove]
        );
    }

    #[test]
    fn test_row_identity() {
        let row = Row::pending_request(7, "Bob");
        assert_eq!(row.entity_id(), 7);
        assert_eq!(row.status, "OPEN");
    }
}
