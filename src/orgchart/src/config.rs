//! Dataset loading and validation
//!
//! A dataset is a TOML file listing roles and users in registration order:
//!
//! ```toml
//! [output]
//! format = "text"
//!
//! [[roles]]
//! Id = 1
//! Name = "System Administrator"
//! Parent = 0
//!
//! [[users]]
//! Id = 1
//! Name = "Adam Admin"
//! Role = 1
//! ```

use crate::error::OrgChartError;
use crate::output::OutputFormat;
use crate::types::{RoleDefinition, UserDefinition};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Role and user lists plus output preferences
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub roles: Vec<RoleDefinition>,

    #[serde(default)]
    pub users: Vec<UserDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

impl DatasetConfig {
    /// The built-in five role hierarchy
    pub fn builtin() -> Self {
        Self {
            output: OutputSection::default(),
            roles: vec![
                RoleDefinition::root(1, "System Administrator"),
                RoleDefinition::new(2, "Location Manager", 1),
                RoleDefinition::new(3, "Supervisor", 2),
                RoleDefinition::new(4, "Employee", 3),
                RoleDefinition::new(5, "Trainer", 3),
            ],
            users: vec![
                UserDefinition::new(1, "Adam Admin", 1),
                UserDefinition::new(2, "Emily Employee", 4),
                UserDefinition::new(3, "Sam Supervisor", 3),
                UserDefinition::new(4, "Mary Manager", 2),
                UserDefinition::new(5, "Steve Trainer", 5),
            ],
        }
    }

    /// Load a dataset from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse dataset file {}", path.display()))
    }

    /// Parse a dataset from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        let config: DatasetConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Validate the dataset before building registries
    ///
    /// Reference and uniqueness checks happen while the registries are built.
    /// Empty lists surface as `OrgChartError::InvalidInput`.
    pub fn validate(&self) -> Result<()> {
        if self.roles.is_empty() {
            return Err(OrgChartError::InvalidInput(
                "at least one role is required".to_string(),
            ))
            .context("Dataset must define at least one role");
        }

        if self.users.is_empty() {
            return Err(OrgChartError::InvalidInput(
                "at least one user is required".to_string(),
            ))
            .context("Dataset must define at least one user");
        }

        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
