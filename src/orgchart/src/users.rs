//! User registry

use crate::error::{OrgChartError, Result};
use crate::roles::RoleRegistry;
use crate::types::{User, UserDefinition, UserId};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Mapping from user id to registered user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRegistry {
    users: BTreeMap<UserId, User>,
}

impl UserRegistry {
    /// Build a registry from an ordered list of user definitions
    ///
    /// Each registered user is also added to the `users` set of its role.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `definitions` is empty
    /// - `DuplicateKey` if a user id repeats
    /// - `UnresolvedReference` if a user's role is not in `roles`
    pub fn build(definitions: &[UserDefinition], roles: &mut RoleRegistry) -> Result<Self> {
        if definitions.is_empty() {
            return Err(OrgChartError::InvalidInput(
                "at least one user is required".to_string(),
            ));
        }

        // Check every definition before touching `roles`, so a failed build
        // leaves the role registry as it was
        let mut registry = Self::default();
        for definition in definitions {
            if registry.users.contains_key(&definition.id) {
                return Err(OrgChartError::DuplicateKey(format!(
                    "user id {} is already registered",
                    definition.id
                )));
            }

            if !roles.contains(definition.role) {
                return Err(OrgChartError::UnresolvedReference(format!(
                    "role {} of user {} is not registered",
                    definition.role, definition.id
                )));
            }

            registry
                .users
                .insert(definition.id, User::new(definition.name.clone(), definition.role));
        }

        for definition in definitions {
            roles.attach_user(definition.role, definition.id)?;

            debug!(
                user = definition.id,
                role = definition.role,
                name = %definition.name,
                "Registered user"
            );
        }

        info!(users = registry.len(), "User registry built");

        Ok(registry)
    }

    /// Look up a user by id
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate users ordered by id
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &User)> {
        self.users.iter().map(|(id, user)| (*id, user))
    }
}
