//! Configuration assembly.
//!
//! Folds the normalized rules of one synchronization pass, together with the
//! resolved region/cluster/role context, into a [`Config`] document. No
//! validation happens here; rendering is left to [`Config::to_yaml`].

use crate::config::{Config, Rule};

/// Collects normalized rules into a configuration document.
///
/// Rule order is the remote listing order and is never sorted. `role` is the
/// explicitly configured role name; pass it empty when the context fell back
/// to the built-in default, so the rendered document does not pin a role the
/// user never chose.
#[must_use]
pub fn assemble(
    region: impl Into<String>,
    cluster: impl Into<String>,
    role: impl Into<String>,
    rules: Vec<Rule>,
) -> Config {
    Config {
        region: region.into(),
        cluster: cluster.into(),
        role: role.into(),
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> Rule {
        Rule {
            name: name.to_string(),
            schedule_expression: "rate(1 hour)".to_string(),
            ..Rule::default()
        }
    }

    #[test]
    fn preserves_listing_order() {
        let config = assemble(
            "us-east-1",
            "default",
            "",
            vec![rule("zeta"), rule("alpha"), rule("mid")],
        );
        let names: Vec<_> = config.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn carries_resolved_context() {
        let config = assemble("eu-west-1", "jobs", "batchRole", Vec::new());
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.cluster, "jobs");
        assert_eq!(config.role, "batchRole");
        assert!(config.rules.is_empty());
    }

    #[test]
    fn defaulted_role_stays_out_of_the_document() {
        let config = assemble("eu-west-1", "jobs", "", Vec::new());
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.contains("role:"));
    }
}
