//! The declarative scheduling configuration document.
//!
//! [`Config`] is the entity tree rendered to and parsed from the textual
//! configuration format. Optional fields are omitted from the output, never
//! emitted as zero-value placeholders, so a dumped document round-trips
//! without noise.

use std::collections::BTreeMap;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Top-level configuration document.
///
/// Owns its rules; each pass produces a fresh immutable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Region the rules live in. Required before any synchronization runs.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// Cluster the rule targets run on. Required before any synchronization
    /// runs.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster: String,

    /// Default role for rule targets. Empty means the built-in default
    /// ([`crate::DEFAULT_ROLE`]) applies.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,

    /// Rules in remote listing order.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Config {
    /// Parses a configuration document from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML for this schema.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_yaml::from_reader(reader).map_err(CoreError::from)
    }

    /// Renders the document as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(CoreError::from)
    }
}

impl FromStr for Config {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(CoreError::from)
    }
}

/// A named schedule and the task invocation it triggers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Rule name, unique per region and matching the remote rule name.
    pub name: String,

    /// Human-readable description, copied verbatim.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Cron or rate expression, opaque to this layer.
    pub schedule_expression: String,

    /// Whether the rule is disabled. Only an exact remote `DISABLED` state
    /// sets this; any other state string means enabled.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    /// The single target of the rule. A rule with no qualifying target is
    /// not represented at all, so this is only `None` transiently in the
    /// write direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

/// The compute invocation attached to a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Target ID. Empty means it defaults to the rule name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target_id: String,

    /// Role name. Empty means the context role applies.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,

    /// Number of tasks to launch. Absent means 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i64>,

    /// Task definition, relative to the task-definition namespace.
    pub task_definition: String,

    /// Per-run container overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_overrides: Vec<ContainerOverride>,
}

/// Command and environment overrides for one container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOverride {
    /// Container name. Always the owning rule's name.
    pub name: String,

    /// Command override, in argument order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    /// Environment overrides. Keys are unique; rendered in sorted order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(v: &bool) -> bool {
    !*v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_absent_fields_as_absent() {
        let config = Config {
            region: "us-east-1".to_string(),
            cluster: "default".to_string(),
            role: String::new(),
            rules: vec![Rule {
                name: "nightly-job".to_string(),
                description: String::new(),
                schedule_expression: "rate(1 day)".to_string(),
                disabled: false,
                target: Some(Target {
                    target_id: String::new(),
                    role: String::new(),
                    task_count: None,
                    task_definition: "app:3".to_string(),
                    container_overrides: Vec::new(),
                }),
            }],
        };
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("region: us-east-1"));
        assert!(yaml.contains("name: nightly-job"));
        assert!(yaml.contains("scheduleExpression: rate(1 day)"));
        assert!(yaml.contains("taskDefinition: app:3"));
        // Elided defaults never show up as zero-value placeholders.
        assert!(!yaml.contains("role:"));
        assert!(!yaml.contains("description:"));
        assert!(!yaml.contains("disabled:"));
        assert!(!yaml.contains("targetId:"));
        assert!(!yaml.contains("taskCount:"));
        assert!(!yaml.contains("containerOverrides:"));
    }

    #[test]
    fn renders_present_fields_verbatim() {
        let config = Config {
            region: "us-east-1".to_string(),
            cluster: "default".to_string(),
            role: "batchRole".to_string(),
            rules: vec![Rule {
                name: "hourly-report".to_string(),
                description: "hourly report batch".to_string(),
                schedule_expression: "cron(0 * * * ? *)".to_string(),
                disabled: true,
                target: Some(Target {
                    target_id: "report-target".to_string(),
                    role: "reportRole".to_string(),
                    task_count: Some(2),
                    task_definition: "report:12".to_string(),
                    container_overrides: vec![ContainerOverride {
                        name: "hourly-report".to_string(),
                        command: vec!["generate".to_string(), "--all".to_string()],
                        environment: [("STAGE".to_string(), "prod".to_string())]
                            .into_iter()
                            .collect(),
                    }],
                }),
            }],
        };
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("role: batchRole"));
        assert!(yaml.contains("description: hourly report batch"));
        assert!(yaml.contains("disabled: true"));
        assert!(yaml.contains("targetId: report-target"));
        assert!(yaml.contains("taskCount: 2"));
        assert!(yaml.contains("STAGE: prod"));
    }

    #[test]
    fn parses_document_with_optional_fields_missing() {
        let yaml = r"
region: eu-west-1
cluster: jobs
rules:
  - name: sweep
    scheduleExpression: rate(5 minutes)
    target:
      taskDefinition: sweeper:7
";
        let config: Config = yaml.parse().unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.cluster, "jobs");
        assert!(config.role.is_empty());
        assert_eq!(config.rules.len(), 1);
        let rule = &config.rules[0];
        assert_eq!(rule.name, "sweep");
        assert!(!rule.disabled);
        let target = rule.target.as_ref().unwrap();
        assert!(target.target_id.is_empty());
        assert_eq!(target.task_count, None);
        assert_eq!(target.task_definition, "sweeper:7");
    }

    #[test]
    fn round_trips_through_yaml() {
        let yaml = r"region: us-west-2
cluster: default
rules:
- name: nightly-job
  scheduleExpression: rate(1 day)
  target:
    taskDefinition: app:3
    containerOverrides:
    - name: nightly-job
      command:
      - run
      - --once
      environment:
        ENV: prod
";
        let config: Config = yaml.parse().unwrap();
        let reparsed: Config = config.to_yaml().unwrap().parse().unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn rejects_malformed_document() {
        let err = Config::from_str("rules: {not: [a, list").unwrap_err();
        assert!(matches!(err, CoreError::Document(_)));
    }
}
