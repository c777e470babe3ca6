//! Role classification
//!
//! This module derives a user's relationship to a group. The precedence
//! order is part of the product contract: membership is checked before
//! ownership, then administrator status, and the first match wins. An
//! owner who is also a member is therefore reported as Member.

use tracing::warn;

use crate::models::Group;
use super::store::SessionDirectory;

/// A user's relationship to a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Member,
    Owner,
    Administrator,
    None,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Member => write!(f, "Member"),
            Role::Owner => write!(f, "Owner"),
            Role::Administrator => write!(f, "Administrator"),
            Role::None => write!(f, "None"),
        }
    }
}

/// Classify a user's role in a group.
///
/// The checks run as an explicit ordered table and the first match is
/// returned, so the precedence cannot drift with refactoring.
pub fn classify(user_id: i64, group: &Group) -> Role {
    let precedence = [
        (group.members.contains(&user_id), Role::Member),
        (group.owners.contains(&user_id), Role::Owner),
        (group.administrators.contains(&user_id), Role::Administrator),
    ];

    precedence
        .iter()
        .find(|(matches, _)| *matches)
        .map(|(_, role)| *role)
        .unwrap_or(Role::None)
}

/// Format a group's owner set for display.
///
/// Groups are expected to carry at least one owner; a zero-owner group is
/// logged and rendered with the count form.
pub fn display_owners(group: &Group, current_user: i64, directory: &SessionDirectory) -> String {
    let count = group.owners.len();

    if count > 1 {
        if group.owners.contains(&current_user) {
            format!("You and {} others", count - 1)
        } else {
            format!("{} Owners", count)
        }
    } else if count == 1 {
        let owner_id = *group.owners.iter().next().unwrap_or(&current_user);
        if owner_id == current_user {
            "You".to_string()
        } else {
            directory
                .user(owner_id)
                .map(|u| u.name.clone())
                .unwrap_or_else(|| format!("User {}", owner_id))
        }
    } else {
        warn!(group_id = group.id, "Group has no owners");
        "0 Owners".to_string()
    }
}
