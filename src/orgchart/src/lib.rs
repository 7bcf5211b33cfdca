//! # CretoAI Org Chart
//!
//! Organizational role hierarchy with subordinate lookup.
//!
//! ## Features
//!
//! - **Role registry** built from an ordered list; parents must precede children
//! - **User registry** attaching each user to exactly one role
//! - **Subordinate resolution** over all descendant roles, ordered by user id
//! - **TOML datasets** with a built-in five role hierarchy as fallback
//!
//! ## Example
//!
//! ```rust
//! use cretoai_orgchart::{OrgChart, OutputFormat, RoleDefinition, UserDefinition};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chart = OrgChart::build(
//!     &[
//!         RoleDefinition::root(1, "System Administrator"),
//!         RoleDefinition::new(2, "Employee", 1),
//!     ],
//!     &[
//!         UserDefinition::new(1, "Adam Admin", 1),
//!         UserDefinition::new(2, "Emily Employee", 2),
//!     ],
//! )?;
//!
//! let subordinates = chart.subordinates(1)?;
//! assert_eq!(
//!     subordinates.render(OutputFormat::Text)?,
//!     r#"{"Id": 2, "Name": "Emily Employee", "Role": 2}"#
//! );
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod resolver;
pub mod roles;
pub mod types;
pub mod users;

pub use config::DatasetConfig;
pub use error::{OrgChartError, Result};
pub use output::{OutputFormat, SubordinateRecord, Subordinates, NO_SUBORDINATES};
pub use resolver::SubordinateResolver;
pub use roles::RoleRegistry;
pub use types::{Role, RoleDefinition, RoleId, User, UserDefinition, UserId, ROOT_PARENT};
pub use users::UserRegistry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Both registries, built in order and owned together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgChart {
    roles: RoleRegistry,
    users: UserRegistry,
}

impl OrgChart {
    /// Build the role registry, then the user registry against it
    pub fn build(roles: &[RoleDefinition], users: &[UserDefinition]) -> Result<Self> {
        let mut role_registry = RoleRegistry::build(roles)?;
        let user_registry = UserRegistry::build(users, &mut role_registry)?;

        Ok(Self {
            roles: role_registry,
            users: user_registry,
        })
    }

    /// Build from a loaded dataset
    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        Self::build(&config.roles, &config.users)
    }

    /// Users holding roles below `user_id`'s role
    pub fn subordinates(&self, user_id: UserId) -> Result<Subordinates> {
        self.resolver().resolve(user_id)
    }

    pub fn resolver(&self) -> SubordinateResolver<'_> {
        SubordinateResolver::new(&self.roles, &self.users)
    }

    pub fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }
}
