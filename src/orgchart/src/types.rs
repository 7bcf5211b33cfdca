//! Core type definitions for the org chart

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Unique role identifier
pub type RoleId = u64;

/// Unique user identifier
pub type UserId = u64;

/// Parent id marking a root role
pub const ROOT_PARENT: RoleId = 0;

/// Role definition as supplied by a dataset
///
/// Accepts both the legacy capitalised keys (`Id`, `Name`, `Parent`) and
/// lower-case keys. Every key is required and unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleDefinition {
    /// Role identifier (non-zero)
    #[serde(rename = "Id", alias = "id")]
    pub id: RoleId,

    /// Display name (e.g., "Location Manager")
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    /// Parent role id, `ROOT_PARENT` for roots
    #[serde(rename = "Parent", alias = "parent")]
    pub parent: RoleId,
}

impl RoleDefinition {
    /// Create a new role definition
    pub fn new(id: RoleId, name: impl Into<String>, parent: RoleId) -> Self {
        Self {
            id,
            name: name.into(),
            parent,
        }
    }

    /// Create a root role definition (no parent)
    pub fn root(id: RoleId, name: impl Into<String>) -> Self {
        Self::new(id, name, ROOT_PARENT)
    }

    /// Whether this definition has no parent
    pub fn is_root(&self) -> bool {
        self.parent == ROOT_PARENT
    }
}

/// User definition as supplied by a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserDefinition {
    /// User identifier
    #[serde(rename = "Id", alias = "id")]
    pub id: UserId,

    /// Display name (e.g., "Adam Admin")
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    /// Role held by the user
    #[serde(rename = "Role", alias = "role")]
    pub role: RoleId,
}

impl UserDefinition {
    /// Create a new user definition
    pub fn new(id: UserId, name: impl Into<String>, role: RoleId) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }
}

/// Registered role node
///
/// `children` and `users` grow as child roles and users are registered
/// against this role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    pub parent: RoleId,
    pub children: BTreeSet<RoleId>,
    pub users: BTreeSet<UserId>,
}

impl Role {
    pub(crate) fn new(name: impl Into<String>, parent: RoleId) -> Self {
        Self {
            name: name.into(),
            parent,
            children: BTreeSet::new(),
            users: BTreeSet::new(),
        }
    }

    /// Whether the role has no child roles
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"Name\": \"{}\", \"Parent\": {}, \"children\": {}, \"Users\": {}",
            self.name,
            self.parent,
            IdSet(&self.children),
            IdSet(&self.users)
        )
    }
}

/// Registered user node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub role: RoleId,
}

impl User {
    pub(crate) fn new(name: impl Into<String>, role: RoleId) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"Name\": \"{}\", \"Role\": {}", self.name, self.role)
    }
}

/// Set of ids rendered as `{1, 2}`, or `set()` when empty
struct IdSet<'a>(&'a BTreeSet<u64>);

impl fmt::Display for IdSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "set()");
        }

        write!(f, "{{")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "}}")
    }
}
