//! Group model

use std::collections::HashSet;
use serde::{Deserialize, Serialize};

/// A group (role) users can belong to; the unit of access control.
///
/// The role sets hold user identifiers. A user id may appear in more than
/// one set; role precedence in `directory::roles` guarantees a single
/// reported role per (user, group) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub owners: HashSet<i64>,
    pub members: HashSet<i64>,
    pub administrators: HashSet<i64>,
    /// Requests opened against this group, in open order
    pub proposals: Vec<i64>,
    pub tasks: Vec<i64>,
    pub metadata: String,
}

impl Group {
    /// Create a group with a single owner
    pub fn new(id: i64, name: impl Into<String>, owner: i64) -> Self {
        let mut owners = HashSet::new();
        owners.insert(owner);
        Self {
            id,
            name: name.into(),
            owners,
            members: HashSet::new(),
            administrators: HashSet::new(),
            proposals: Vec::new(),
            tasks: Vec::new(),
            metadata: String::new(),
        }
    }
}
