//! Integration tests for subordinate lookup
//!
//! Covers the built-in hierarchy, multi-root forests, TOML datasets and
//! output rendering end to end.

use cretoai_orgchart::{
    DatasetConfig, OrgChart, OrgChartError, OutputFormat, RoleDefinition, UserDefinition,
    NO_SUBORDINATES,
};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

fn sample_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/company.toml")
}

// ============================================================================
// BUILT-IN HIERARCHY
// ============================================================================

#[test]
fn test_location_manager_subordinates() {
    let chart = OrgChart::from_config(&DatasetConfig::builtin()).unwrap();

    let result = chart.subordinates(4).unwrap();
    assert_eq!(
        result.render(OutputFormat::Text).unwrap(),
        concat!(
            r#"{"Id": 2, "Name": "Emily Employee", "Role": 4},"#,
            r#"{"Id": 3, "Name": "Sam Supervisor", "Role": 3},"#,
            r#"{"Id": 5, "Name": "Steve Trainer", "Role": 5}"#
        )
    );
}

#[test]
fn test_supervisor_subordinates() {
    let chart = OrgChart::from_config(&DatasetConfig::builtin()).unwrap();

    assert_eq!(chart.subordinates(3).unwrap().user_ids(), vec![2, 5]);
}

#[test]
fn test_leaf_users_print_no_subordinates() {
    let chart = OrgChart::from_config(&DatasetConfig::builtin()).unwrap();

    for user_id in [2, 5] {
        let result = chart.subordinates(user_id).unwrap();
        assert_eq!(result.render(OutputFormat::Text).unwrap(), NO_SUBORDINATES);
    }
}

#[test]
fn test_unknown_user_is_not_found() {
    let chart = OrgChart::from_config(&DatasetConfig::builtin()).unwrap();

    let err = chart.subordinates(6).unwrap_err();
    assert!(matches!(err, OrgChartError::NotFound(_)));
    assert!(err.to_string().contains("user 6"));
}

#[test]
fn test_registry_shape() {
    let chart = OrgChart::from_config(&DatasetConfig::builtin()).unwrap();
    let roles = chart.roles();

    assert_eq!(roles.roots(), vec![1]);
    assert_eq!(roles.get(3).unwrap().children, BTreeSet::from([4, 5]));
    assert_eq!(roles.get(2).unwrap().users, BTreeSet::from([4]));
    assert_eq!(
        roles.get(3).unwrap().to_string(),
        r#""Name": "Supervisor", "Parent": 2, "children": {4, 5}, "Users": {3}"#
    );
    assert_eq!(
        chart.users().get(4).unwrap().to_string(),
        r#""Name": "Mary Manager", "Role": 2"#
    );
}

// ============================================================================
// FORESTS
// ============================================================================

#[test]
fn test_separate_trees_do_not_mix() {
    let chart = OrgChart::build(
        &[
            RoleDefinition::root(1, "Engineering Director"),
            RoleDefinition::root(2, "Sales Director"),
            RoleDefinition::new(3, "Engineer", 1),
            RoleDefinition::new(4, "Account Executive", 2),
        ],
        &[
            UserDefinition::new(10, "Erin Director", 1),
            UserDefinition::new(20, "Sean Director", 2),
            UserDefinition::new(30, "Eve Engineer", 3),
            UserDefinition::new(40, "Andy Exec", 4),
        ],
    )
    .unwrap();

    assert_eq!(chart.subordinates(10).unwrap().user_ids(), vec![30]);
    assert_eq!(chart.subordinates(20).unwrap().user_ids(), vec![40]);
    assert_eq!(chart.roles().roots(), vec![1, 2]);
}

// ============================================================================
// DATASET FILES
// ============================================================================

#[test]
fn test_sample_dataset_file() {
    let config = DatasetConfig::load(sample_dataset()).unwrap();
    config.validate().unwrap();
    let chart = OrgChart::from_config(&config).unwrap();

    assert_eq!(chart.subordinates(1).unwrap().user_ids(), vec![2, 3, 4, 5, 6, 7]);
    assert_eq!(chart.subordinates(2).unwrap().user_ids(), vec![4, 6, 7]);
    assert_eq!(chart.subordinates(3).unwrap().user_ids(), vec![5]);
    assert!(chart.subordinates(7).unwrap().is_empty());
}

#[test]
fn test_dataset_with_forward_reference() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[roles]]
Id = 2
Name = "Location Manager"
Parent = 1

[[roles]]
Id = 1
Name = "System Administrator"
Parent = 0

[[users]]
Id = 1
Name = "Adam Admin"
Role = 1
"#
    )
    .unwrap();

    let config = DatasetConfig::load(file.path()).unwrap();
    config.validate().unwrap();

    let result = OrgChart::from_config(&config);
    assert!(matches!(result, Err(OrgChartError::UnresolvedReference(_))));
}

#[test]
fn test_json_output_round_trips() {
    let chart = OrgChart::from_config(&DatasetConfig::builtin()).unwrap();
    let result = chart.subordinates(1).unwrap();

    let json = result.render(OutputFormat::Json).unwrap();
    let parsed: Vec<cretoai_orgchart::SubordinateRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.len(), 4);
    assert_eq!(parsed, result.records());
}
