//! Canonical resource identifiers.
//!
//! [`ArnContext`] carries the resolved region/account/cluster/role and
//! builds the ARNs and namespace prefixes every filtering decision is made
//! against. Construction is pure string templating; membership tests and
//! suffix extraction are anchored, case-sensitive prefix matches on the
//! values built here.

/// IAM role assumed by scheduled task invocations when the configuration
/// names none.
pub const DEFAULT_ROLE: &str = "ecsEventsRole";

/// Immutable identifier context for one synchronization pass.
///
/// Passed explicitly into the normalizer rather than read from ambient
/// state, so the filtering logic stays independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArnContext {
    region: String,
    account_id: String,
    cluster: String,
    role: String,
}

impl ArnContext {
    /// Creates a context from the resolved identifiers.
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        account_id: impl Into<String>,
        cluster: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            account_id: account_id.into(),
            cluster: cluster.into(),
            role: role.into(),
        }
    }

    /// Active region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Active account ID.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Active cluster name.
    #[must_use]
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Role name used for target role defaulting.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Namespace prefix of scheduler rules in this region and account.
    #[must_use]
    pub fn rule_arn_prefix(&self) -> String {
        format!("arn:aws:events:{}:{}:rule/", self.region, self.account_id)
    }

    /// ARN of the active cluster.
    #[must_use]
    pub fn cluster_arn(&self) -> String {
        format!(
            "arn:aws:ecs:{}:{}:cluster/{}",
            self.region, self.account_id, self.cluster
        )
    }

    /// Namespace prefix of task definitions in this region and account.
    #[must_use]
    pub fn task_definition_arn_prefix(&self) -> String {
        format!(
            "arn:aws:ecs:{}:{}:task-definition/",
            self.region, self.account_id
        )
    }

    /// Namespace prefix of IAM roles in this account.
    #[must_use]
    pub fn role_arn_prefix(&self) -> String {
        format!("arn:aws:iam::{}:role/", self.account_id)
    }

    /// ARN of the context role.
    #[must_use]
    pub fn role_arn(&self) -> String {
        format!("{}{}", self.role_arn_prefix(), self.role)
    }
}
