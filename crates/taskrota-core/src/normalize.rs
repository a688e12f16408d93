//! Remote rule normalization.
//!
//! Converts one remote rule plus its materialized targets into zero or one
//! local [`Rule`], applying the namespace gate, the whole-rule skip policy
//! for unsupported target shapes, and default elision.

use tracing::debug;

use crate::config::{Rule, Target};
use crate::context::ArnContext;
use crate::error::Result;
use crate::overrides::decode_task_override;
use crate::remote::{RemoteRule, RemoteTarget};

/// Remote state string that marks a rule disabled. Any other value,
/// including unrecognized future ones, means enabled.
const STATE_DISABLED: &str = "DISABLED";

/// Applies the filtering and defaulting policy of one region/account/cluster
/// context.
///
/// The namespace prefixes are computed once from the [`ArnContext`]; the
/// normalizer itself holds no mutable state and is applied once per remote
/// rule.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rule_arn_prefix: String,
    cluster_arn: String,
    task_definition_arn_prefix: String,
    role_arn_prefix: String,
    role_arn: String,
}

impl Normalizer {
    /// Creates a normalizer for the given context.
    #[must_use]
    pub fn new(ctx: &ArnContext) -> Self {
        Self {
            rule_arn_prefix: ctx.rule_arn_prefix(),
            cluster_arn: ctx.cluster_arn(),
            task_definition_arn_prefix: ctx.task_definition_arn_prefix(),
            role_arn_prefix: ctx.role_arn_prefix(),
            role_arn: ctx.role_arn(),
        }
    }

    /// Whether a remote rule belongs to the rule namespace of the active
    /// region and account.
    ///
    /// Exposed separately so callers can skip the target listing call for
    /// foreign rules.
    #[must_use]
    pub fn in_namespace(&self, rule: &RemoteRule) -> bool {
        rule.arn.starts_with(&self.rule_arn_prefix)
    }

    /// Normalizes one remote rule.
    ///
    /// Returns `Ok(None)` for rules that are out of scope: outside the rule
    /// namespace, carrying a target that points at anything but the active
    /// cluster, carrying a non-ECS target, or ending up with zero or more
    /// than one qualifying target. A rule is always skipped whole, never
    /// partially represented.
    ///
    /// # Errors
    ///
    /// Returns an error when a target's override payload does not decode;
    /// this aborts the entire synchronization pass.
    pub fn normalize(&self, rule: &RemoteRule, targets: &[RemoteTarget]) -> Result<Option<Rule>> {
        if !self.in_namespace(rule) {
            debug!(rule = %rule.name, "rule outside namespace, skipped");
            return Ok(None);
        }

        let mut qualified = Vec::new();
        for target in targets {
            // A rule mixing a non-cluster target with cluster targets is out
            // of scope entirely, not partially represented.
            if target.arn != self.cluster_arn {
                debug!(rule = %rule.name, target = %target.arn, "target points at another resource, rule skipped");
                return Ok(None);
            }
            let Some(ecs) = &target.ecs else {
                debug!(rule = %rule.name, "non-ECS target, rule skipped");
                return Ok(None);
            };

            let target_id = if target.id == rule.name {
                String::new()
            } else {
                target.id.clone()
            };

            let role = if target.role_arn == self.role_arn {
                String::new()
            } else {
                target
                    .role_arn
                    .strip_prefix(&self.role_arn_prefix)
                    .unwrap_or(&target.role_arn)
                    .to_string()
            };

            let task_count = match ecs.task_count.unwrap_or(1) {
                1 => None,
                count => Some(count),
            };

            let task_definition = ecs
                .task_definition_arn
                .strip_prefix(&self.task_definition_arn_prefix)
                .unwrap_or(&ecs.task_definition_arn)
                .to_string();

            let container_overrides = decode_task_override(target.input.as_deref(), &rule.name)?;

            qualified.push(Target {
                target_id,
                role,
                task_count,
                task_definition,
                container_overrides,
            });
        }

        match qualified.len() {
            1 => Ok(Some(Rule {
                name: rule.name.clone(),
                description: rule.description.clone(),
                schedule_expression: rule.schedule_expression.clone(),
                disabled: rule.state == STATE_DISABLED,
                target: qualified.pop(),
            })),
            0 => Ok(None),
            // Multiple targets per rule are not supported yet; drop rather
            // than truncate.
            _ => {
                debug!(rule = %rule.name, targets = qualified.len(), "multiple qualifying targets, rule skipped");
                Ok(None)
            }
        }
    }
}
