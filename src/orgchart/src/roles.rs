//! Role registry
//!
//! Roles are registered in input order. A non-root role may only name a
//! parent that was registered before it, so the registry is always a forest
//! and never holds a forward reference.

use crate::error::{OrgChartError, Result};
use crate::types::{Role, RoleDefinition, RoleId, UserId, ROOT_PARENT};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Mapping from role id to registered role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRegistry {
    roles: BTreeMap<RoleId, Role>,
}

impl RoleRegistry {
    /// Build a registry from an ordered list of role definitions
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `definitions` is empty or a role uses id 0
    /// - `DuplicateKey` if a role id repeats
    /// - `UnresolvedReference` if a parent is not registered earlier in the list
    pub fn build(definitions: &[RoleDefinition]) -> Result<Self> {
        if definitions.is_empty() {
            return Err(OrgChartError::InvalidInput(
                "at least one role is required".to_string(),
            ));
        }

        let mut registry = Self::default();
        for definition in definitions {
            registry.register(definition)?;
        }

        info!(
            roles = registry.len(),
            roots = registry.roots().len(),
            "Role registry built"
        );

        Ok(registry)
    }

    fn register(&mut self, definition: &RoleDefinition) -> Result<()> {
        if definition.id == ROOT_PARENT {
            return Err(OrgChartError::InvalidInput(format!(
                "role '{}' uses reserved id {}",
                definition.name, ROOT_PARENT
            )));
        }

        if self.roles.contains_key(&definition.id) {
            return Err(OrgChartError::DuplicateKey(format!(
                "role id {} is already registered",
                definition.id
            )));
        }

        if !definition.is_root() {
            let parent = self.roles.get_mut(&definition.parent).ok_or_else(|| {
                OrgChartError::UnresolvedReference(format!(
                    "parent role {} of role {} is not registered",
                    definition.parent, definition.id
                ))
            })?;
            parent.children.insert(definition.id);
        }

        debug!(
            role = definition.id,
            parent = definition.parent,
            name = %definition.name,
            "Registered role"
        );

        self.roles
            .insert(definition.id, Role::new(definition.name.clone(), definition.parent));

        Ok(())
    }

    /// Record that `user` holds `role`
    pub(crate) fn attach_user(&mut self, role: RoleId, user: UserId) -> Result<()> {
        let entry = self.roles.get_mut(&role).ok_or_else(|| {
            OrgChartError::UnresolvedReference(format!(
                "role {} of user {} is not registered",
                role, user
            ))
        })?;
        entry.users.insert(user);
        Ok(())
    }

    /// Look up a role by id
    pub fn get(&self, id: RoleId) -> Option<&Role> {
        self.roles.get(&id)
    }

    #[cfg(test)]
    pub(crate) fn get_mut(&mut self, id: RoleId) -> Option<&mut Role> {
        self.roles.get_mut(&id)
    }

    pub fn contains(&self, id: RoleId) -> bool {
        self.roles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Iterate roles ordered by id
    pub fn iter(&self) -> impl Iterator<Item = (RoleId, &Role)> {
        self.roles.iter().map(|(id, role)| (*id, role))
    }

    /// Ids of all roles without a parent, ordered
    pub fn roots(&self) -> Vec<RoleId> {
        self.roles
            .iter()
            .filter(|(_, role)| role.parent == ROOT_PARENT)
            .map(|(id, _)| *id)
            .collect()
    }
}
