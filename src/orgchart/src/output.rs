//! Subordinate records and their rendering

use crate::error::{OrgChartError, Result};
use crate::types::{RoleId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message printed when a query yields no users
pub const NO_SUBORDINATES: &str = "No subordinates found";

/// One subordinate user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubordinateRecord {
    #[serde(rename = "Id")]
    pub id: UserId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: RoleId,
}

impl fmt::Display for SubordinateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Names go through the JSON encoder so quotes and control chars are escaped
        let name = serde_json::to_string(&self.name).map_err(|_| fmt::Error)?;
        write!(f, "{{\"Id\": {}, \"Name\": {}, \"Role\": {}}}", self.id, name, self.role)
    }
}

/// Result of a subordinate query, ordered by user id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subordinates {
    records: Vec<SubordinateRecord>,
}

impl Subordinates {
    /// Wrap records, sorting them by user id
    pub fn new(mut records: Vec<SubordinateRecord>) -> Self {
        records.sort_by_key(|record| record.id);
        Self { records }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[SubordinateRecord] {
        &self.records
    }

    pub fn user_ids(&self) -> Vec<UserId> {
        self.records.iter().map(|record| record.id).collect()
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(&self.records)?),
        }
    }
}

impl fmt::Display for Subordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return f.write_str(NO_SUBORDINATES);
        }

        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Output format for query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated `{"Id": .., "Name": .., "Role": ..}` records
    #[default]
    Text,
    /// JSON array of records
    Json,
}

impl FromStr for OutputFormat {
    type Err = OrgChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(OrgChartError::InvalidInput(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: UserId, name: &str, role: RoleId) -> SubordinateRecord {
        SubordinateRecord {
            id,
            name: name.to_string(),
            role,
        }
    }

    #[test]
    fn test_record_display() {
        assert_eq!(
            record(2, "Emily Employee", 4).to_string(),
            r#"{"Id": 2, "Name": "Emily Employee", "Role": 4}"#
        );
    }

    #[test]
    fn test_record_display_escapes_name() {
        assert_eq!(
            record(7, "Bob \"The Boss\"", 1).to_string(),
            r#"{"Id": 7, "Name": "Bob \"The Boss\"", "Role": 1}"#
        );
    }

    #[test]
    fn test_text_sorted_and_joined() {
        let subordinates = Subordinates::new(vec![
            record(5, "Steve Trainer", 5),
            record(2, "Emily Employee", 4),
        ]);

        assert_eq!(subordinates.user_ids(), vec![2, 5]);
        assert_eq!(
            subordinates.render(OutputFormat::Text).unwrap(),
            r#"{"Id": 2, "Name": "Emily Employee", "Role": 4},{"Id": 5, "Name": "Steve Trainer", "Role": 5}"#
        );
    }

    #[test]
    fn test_empty_rendering() {
        let subordinates = Subordinates::none();
        assert_eq!(subordinates.render(OutputFormat::Text).unwrap(), NO_SUBORDINATES);
        assert_eq!(subordinates.render(OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_json_rendering() {
        let subordinates = Subordinates::new(vec![record(3, "Sam Supervisor", 3)]);
        let json = subordinates.render(OutputFormat::Json).unwrap();
        assert_eq!(json, r#"[{"Id":3,"Name":"Sam Supervisor","Role":3}]"#);

        let parsed: Vec<SubordinateRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, subordinates.records());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(OrgChartError::InvalidInput(_))
        ));
    }
}
