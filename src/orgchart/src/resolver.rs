//! Subordinate resolver
//!
//! Walks `children` links from a user's role to collect every descendant
//! role, then gathers the users attached to those roles. The walk uses an
//! explicit stack and a visited set, so depth is not bounded by the call
//! stack and each role is expanded at most once.

use crate::error::{OrgChartError, Result};
use crate::output::{SubordinateRecord, Subordinates};
use crate::roles::RoleRegistry;
use crate::types::{RoleId, UserId};
use crate::users::UserRegistry;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Read-only query over built registries
#[derive(Debug, Clone, Copy)]
pub struct SubordinateResolver<'a> {
    roles: &'a RoleRegistry,
    users: &'a UserRegistry,
}

impl<'a> SubordinateResolver<'a> {
    pub fn new(roles: &'a RoleRegistry, users: &'a UserRegistry) -> Self {
        Self { roles, users }
    }

    /// Users whose role is a strict descendant of `user_id`'s role
    ///
    /// The user itself and users sharing its role are never included.
    ///
    /// # Errors
    ///
    /// `NotFound` if `user_id` is not registered.
    pub fn resolve(&self, user_id: UserId) -> Result<Subordinates> {
        let user = self
            .users
            .get(user_id)
            .ok_or_else(|| OrgChartError::NotFound(format!("user {} does not exist", user_id)))?;

        let role = self.roles.get(user.role).ok_or_else(|| {
            OrgChartError::UnresolvedReference(format!(
                "role {} of user {} is not registered",
                user.role, user_id
            ))
        })?;

        if role.is_leaf() {
            debug!(user = user_id, role = user.role, "Role has no child roles");
            return Ok(Subordinates::none());
        }

        let descendants = self.subordinate_roles(user.role)?;

        let mut records = Vec::new();
        for role_id in &descendants {
            let descendant = self.roles.get(*role_id).ok_or_else(|| {
                OrgChartError::UnresolvedReference(format!(
                    "child role {} below role {} is not registered",
                    role_id, user.role
                ))
            })?;
            for member in &descendant.users {
                let holder = self.users.get(*member).ok_or_else(|| {
                    OrgChartError::UnresolvedReference(format!(
                        "user {} attached to role {} is not registered",
                        member, role_id
                    ))
                })?;
                records.push(SubordinateRecord {
                    id: *member,
                    name: holder.name.clone(),
                    role: holder.role,
                });
            }
        }

        let subordinates = Subordinates::new(records);
        info!(
            user = user_id,
            roles = descendants.len(),
            subordinates = subordinates.len(),
            "Resolved subordinates"
        );

        Ok(subordinates)
    }

    /// All roles reachable from `role_id` through one or more child links
    ///
    /// # Errors
    ///
    /// `NotFound` if `role_id` is not registered.
    pub fn subordinate_roles(&self, role_id: RoleId) -> Result<BTreeSet<RoleId>> {
        let start = self
            .roles
            .get(role_id)
            .ok_or_else(|| OrgChartError::NotFound(format!("role {} does not exist", role_id)))?;

        let mut visited = BTreeSet::new();
        let mut stack: Vec<RoleId> = start.children.iter().copied().collect();

        while let Some(current) = stack.pop() {
            // A role may only be reached twice through an out-of-band cycle
            if !visited.insert(current) {
                continue;
            }

            if let Some(role) = self.roles.get(current) {
                stack.extend(role.children.iter().filter(|child| !visited.contains(*child)));
            }
        }

        // The start role can only show up here through a cycle
        visited.remove(&role_id);

        Ok(visited)
    }
}
