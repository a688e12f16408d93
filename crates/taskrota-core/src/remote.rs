//! Materialized remote scheduler state.
//!
//! Snapshot types handed to the core by the remote listers. The listing is
//! assumed fully paginated before it reaches the core; the core performs no
//! I/O of its own and stays free of any SDK types.

/// One scheduler rule as returned by the remote rule listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteRule {
    /// Fully-qualified rule identifier.
    pub arn: String,
    /// Rule name.
    pub name: String,
    /// Description, possibly empty.
    pub description: String,
    /// Cron or rate expression.
    pub schedule_expression: String,
    /// State string. `DISABLED` is the only sentinel this tool interprets.
    pub state: String,
}

/// One target attached to a remote rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteTarget {
    /// Target ID.
    pub id: String,
    /// ARN of the resource the target invokes.
    pub arn: String,
    /// ARN of the role assumed for the invocation.
    pub role_arn: String,
    /// Compute parameters; absent for non-ECS target kinds.
    pub ecs: Option<RemoteEcsParameters>,
    /// Serialized task override payload, if any.
    pub input: Option<String>,
}

/// ECS launch parameters of a target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteEcsParameters {
    /// Fully-qualified task definition identifier.
    pub task_definition_arn: String,
    /// Number of tasks launched per firing; absent means 1.
    pub task_count: Option<i64>,
}
