//! Remote scheduler listing client.
//!
//! Wraps the EventBridge and STS clients behind the two listing calls the
//! synchronization pass needs, materializing all pages into the core's
//! snapshot types before any normalization runs.

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use taskrota_core::{RemoteEcsParameters, RemoteRule, RemoteTarget};
use tracing::debug;

/// Client for the remote rule and target listings.
pub struct EventsClient {
    events: aws_sdk_eventbridge::Client,
    sts: aws_sdk_sts::Client,
}

impl EventsClient {
    /// Creates clients for the given region using the default credential
    /// chain.
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await;
        Self {
            events: aws_sdk_eventbridge::Client::new(&config),
            sts: aws_sdk_sts::Client::new(&config),
        }
    }

    /// Resolves the account ID of the active credentials.
    pub async fn account_id(&self) -> Result<String> {
        let identity = self
            .sts
            .get_caller_identity()
            .send()
            .await
            .context("failed to resolve caller identity")?;
        identity
            .account()
            .map(ToString::to_string)
            .context("caller identity carries no account ID")
    }

    /// Lists every rule visible in the region, fully materialized.
    pub async fn list_rules(&self) -> Result<Vec<RemoteRule>> {
        let mut rules = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let output = self
                .events
                .list_rules()
                .set_next_token(next_token)
                .send()
                .await
                .context("failed to list rules")?;
            for rule in output.rules() {
                rules.push(RemoteRule {
                    arn: rule.arn().unwrap_or_default().to_string(),
                    name: rule.name().unwrap_or_default().to_string(),
                    description: rule.description().unwrap_or_default().to_string(),
                    schedule_expression: rule
                        .schedule_expression()
                        .unwrap_or_default()
                        .to_string(),
                    state: rule.state().map(|s| s.as_str().to_string()).unwrap_or_default(),
                });
            }
            next_token = output.next_token().map(ToString::to_string);
            if next_token.is_none() {
                break;
            }
        }
        debug!(count = rules.len(), "listed remote rules");
        Ok(rules)
    }

    /// Lists the targets attached to one rule, fully materialized.
    pub async fn list_targets(&self, rule_name: &str) -> Result<Vec<RemoteTarget>> {
        let mut targets = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let output = self
                .events
                .list_targets_by_rule()
                .rule(rule_name)
                .set_next_token(next_token)
                .send()
                .await
                .with_context(|| format!("failed to list targets of rule {rule_name}"))?;
            for target in output.targets() {
                targets.push(RemoteTarget {
                    id: target.id().to_string(),
                    arn: target.arn().to_string(),
                    role_arn: target.role_arn().unwrap_or_default().to_string(),
                    ecs: target.ecs_parameters().map(|ecs| RemoteEcsParameters {
                        task_definition_arn: ecs.task_definition_arn().to_string(),
                        task_count: ecs.task_count().map(i64::from),
                    }),
                    input: target.input().map(ToString::to_string),
                });
            }
            next_token = output.next_token().map(ToString::to_string);
            if next_token.is_none() {
                break;
            }
        }
        debug!(rule = rule_name, count = targets.len(), "listed rule targets");
        Ok(targets)
    }
}
