//! Session directory
//!
//! In-memory store of all users, groups, and proposals for the
//! authenticated session. The directory is created by the session
//! bootstrap at login, passed by reference to every component that needs
//! it, and cleared at logout. All mutation goes through this type.

use tracing::{debug, info};

use crate::models::{Group, Proposal, ProposalStatus, User};
use crate::utils::errors::{AccessDeskError, Result};
use crate::utils::logging::{log_membership_change, log_proposal_event};
use super::roles::{self, Role};

/// Session-scoped directory of users, groups, and proposals.
///
/// Identifier allocation is monotonic: users start at 1, groups and
/// proposals at 0. Bootstrapped data seeds the counters past the largest
/// loaded id.
#[derive(Debug, Clone, Default)]
pub struct SessionDirectory {
    users: Vec<User>,
    groups: Vec<Group>,
    proposals: Vec<Proposal>,
    next_user_id: i64,
    next_group_id: i64,
    next_proposal_id: i64,
}

impl SessionDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            groups: Vec::new(),
            proposals: Vec::new(),
            next_user_id: 1,
            next_group_id: 0,
            next_proposal_id: 0,
        }
    }

    /// Build a directory from bootstrapped session data
    pub fn from_bootstrap(users: Vec<User>, groups: Vec<Group>, proposals: Vec<Proposal>) -> Self {
        let next_user_id = users.iter().map(|u| u.id + 1).max().unwrap_or(1).max(1);
        let next_group_id = groups.iter().map(|g| g.id + 1).max().unwrap_or(0);
        let next_proposal_id = proposals.iter().map(|p| p.id + 1).max().unwrap_or(0);

        info!(
            users = users.len(),
            groups = groups.len(),
            proposals = proposals.len(),
            "Session directory loaded"
        );

        Self {
            users,
            groups,
            proposals,
            next_user_id,
            next_group_id,
            next_proposal_id,
        }
    }

    /// Clear all session state at logout
    pub fn clear(&mut self) {
        info!("Clearing session directory");
        *self = Self::new();
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: i64) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn group(&self, id: i64) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: i64) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    pub fn proposal(&self, id: i64) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    pub fn all_groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn all_users(&self) -> &[User] {
        &self.users
    }

    /// Groups where the user has any role (Member, Owner, or Administrator)
    pub fn my_groups(&self, user_id: i64) -> Vec<&Group> {
        self.groups
            .iter()
            .filter(|g| roles::classify(user_id, g) != Role::None)
            .collect()
    }

    /// Users with a non-None role in the group, in directory order
    pub fn group_members(&self, group_id: i64) -> Vec<&User> {
        let Some(group) = self.group(group_id) else {
            return Vec::new();
        };
        self.users
            .iter()
            .filter(|u| roles::classify(u.id, group) != Role::None)
            .collect()
    }

    /// Open proposals against groups the user owns
    pub fn pending_approvals(&self, owner_id: i64) -> Vec<&Proposal> {
        self.proposals
            .iter()
            .filter(|p| {
                p.is_open()
                    && self
                        .group(p.object)
                        .map(|g| g.owners.contains(&owner_id))
                        .unwrap_or(false)
            })
            .collect()
    }

    /// Add a user to the directory
    pub fn add_user(&mut self, name: impl Into<String>) -> &User {
        let id = self.next_user_id;
        self.next_user_id += 1;
        self.users.push(User::new(id, name));
        debug!(user_id = id, "User added to directory");
        self.users.last().expect("user just pushed")
    }

    /// Create a group with the creating user as sole owner.
    ///
    /// Appends synchronously so the caller's list reflects the new group
    /// without a refetch; call only after the remote create has resolved.
    pub fn create_group(&mut self, name: impl Into<String>, creator: i64) -> Result<&Group> {
        if self.user(creator).is_none() {
            return Err(AccessDeskError::UserNotFound { user_id: creator });
        }

        let id = self.next_group_id;
        self.next_group_id += 1;
        let group = Group::new(id, name, creator);
        info!(group_id = id, creator = creator, name = %group.name, "Group created");

        if let Some(user) = self.user_mut(creator) {
            user.owner_of.insert(id);
        }
        self.groups.push(group);
        Ok(self.groups.last().expect("group just pushed"))
    }

    /// Open a role-access proposal against a group
    pub fn open_proposal(
        &mut self,
        opener: i64,
        group_id: i64,
        reason: impl Into<String>,
    ) -> Result<&Proposal> {
        if self.user(opener).is_none() {
            return Err(AccessDeskError::UserNotFound { user_id: opener });
        }
        if self.group(group_id).is_none() {
            return Err(AccessDeskError::GroupNotFound { group_id });
        }

        let id = self.next_proposal_id;
        self.next_proposal_id += 1;
        let proposal = Proposal::new(id, opener, group_id, reason);

        if let Some(group) = self.group_mut(group_id) {
            group.proposals.push(id);
        }
        info!(proposal_id = id, opener = opener, group_id = group_id, "Proposal opened");
        self.proposals.push(proposal);
        Ok(self.proposals.last().expect("proposal just pushed"))
    }

    /// Record an approved proposal: OPEN -> APPROVED plus side effects.
    ///
    /// The target joins the group's member set, the target's `member_of`
    /// gains the group, and the opener's `proposals` gains the id.
    pub fn record_approval(&mut self, proposal_id: i64, closer: i64) -> Result<()> {
        let (target, opener, group_id) = {
            let proposal = self.transition(proposal_id, ProposalStatus::Approved, closer)?;
            (proposal.target, proposal.opener, proposal.object)
        };

        if let Some(group) = self.group_mut(group_id) {
            group.members.insert(target);
        }
        if let Some(user) = self.user_mut(target) {
            user.member_of.insert(group_id);
        }
        if let Some(user) = self.user_mut(opener) {
            user.proposals.push(proposal_id);
        }

        log_proposal_event(proposal_id, "APPROVED", Some(closer));
        log_membership_change(group_id, target, "member added");
        Ok(())
    }

    /// Record a rejected proposal: OPEN -> REJECTED
    pub fn record_rejection(&mut self, proposal_id: i64, closer: i64) -> Result<()> {
        self.transition(proposal_id, ProposalStatus::Rejected, closer)?;
        log_proposal_event(proposal_id, "REJECTED", Some(closer));
        Ok(())
    }

    /// Promote a group member to owner
    pub fn promote_member(&mut self, group_id: i64, user_id: i64) -> Result<()> {
        let group = self
            .group_mut(group_id)
            .ok_or(AccessDeskError::GroupNotFound { group_id })?;
        group.owners.insert(user_id);
        if let Some(user) = self.user_mut(user_id) {
            user.owner_of.insert(group_id);
        }
        log_membership_change(group_id, user_id, "promoted to owner");
        Ok(())
    }

    /// Remove a user from all of a group's role sets
    pub fn remove_member(&mut self, group_id: i64, user_id: i64) -> Result<()> {
        let group = self
            .group_mut(group_id)
            .ok_or(AccessDeskError::GroupNotFound { group_id })?;
        group.members.remove(&user_id);
        group.owners.remove(&user_id);
        group.administrators.remove(&user_id);
        if let Some(user) = self.user_mut(user_id) {
            user.member_of.remove(&group_id);
            user.owner_of.remove(&group_id);
            user.administrator_of.remove(&group_id);
        }
        log_membership_change(group_id, user_id, "removed from group");
        Ok(())
    }

    /// Apply a terminal status to an OPEN proposal. The status precondition
    /// is authoritative: a resolved proposal never transitions again.
    fn transition(
        &mut self,
        proposal_id: i64,
        to: ProposalStatus,
        closer: i64,
    ) -> Result<&Proposal> {
        let proposal = self
            .proposals
            .iter_mut()
            .find(|p| p.id == proposal_id)
            .ok_or(AccessDeskError::ProposalNotFound { proposal_id })?;

        if !proposal.is_open() {
            return Err(AccessDeskError::InvalidStateTransition {
                from: proposal.status.status.to_string(),
                to: to.to_string(),
            });
        }

        proposal.status.status = to;
        proposal.closer = Some(closer);
        proposal.closed_at = Some(chrono::Utc::now());
        Ok(proposal)
    }
}
