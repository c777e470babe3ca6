//! User model

use std::collections::HashSet;
use serde::{Deserialize, Serialize};

/// A directory user and their relationships to groups.
///
/// The role sets hold group identifiers; `proposals` holds the identifiers
/// of requests this user opened that have been approved, in approval order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub owner_of: HashSet<i64>,
    pub member_of: HashSet<i64>,
    pub managers: HashSet<i64>,
    pub subordinates: HashSet<i64>,
    pub administrator_of: HashSet<i64>,
    pub proposals: Vec<i64>,
    pub metadata: String,
}

impl User {
    /// Create a user with no group relationships
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            owner_of: HashSet::new(),
            member_of: HashSet::new(),
            managers: HashSet::new(),
            subordinates: HashSet::new(),
            administrator_of: HashSet::new(),
            proposals: Vec::new(),
            metadata: String::new(),
        }
    }
}
