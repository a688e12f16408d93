//! Task override payload decoding.
//!
//! A rule target carries its per-run container overrides as a serialized
//! JSON document conforming to the compute service's task override schema.
//! Only the fields this tool reads are modeled; everything else in the
//! payload is ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::ContainerOverride;
use crate::error::{CoreError, Result};

/// Serialized task override attached to a rule target.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskOverridePayload {
    #[serde(default)]
    container_overrides: Vec<ContainerOverridePayload>,
}

/// One container override entry of the payload.
///
/// The payload's own `name` field is deliberately not modeled: the decoded
/// override is always named after the owning rule (one container override
/// per rule), even if the payload's naming disagrees.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContainerOverridePayload {
    #[serde(default)]
    command: Vec<String>,
    #[serde(default)]
    environment: Vec<KeyValuePair>,
}

#[derive(Debug, Default, Deserialize)]
struct KeyValuePair {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: String,
}

/// Decodes the override payload of a rule target.
///
/// An absent payload yields no overrides. Duplicate environment names keep
/// the last value.
///
/// # Errors
///
/// Returns [`CoreError::OverrideDecode`] when the payload is not valid JSON
/// for the task override schema; the caller aborts the whole pass.
pub fn decode_task_override(
    payload: Option<&str>,
    rule_name: &str,
) -> Result<Vec<ContainerOverride>> {
    let Some(payload) = payload else {
        return Ok(Vec::new());
    };
    let decoded: TaskOverridePayload =
        serde_json::from_str(payload).map_err(|source| CoreError::OverrideDecode {
            rule: rule_name.to_string(),
            source,
        })?;
    Ok(decoded
        .container_overrides
        .into_iter()
        .map(|entry| ContainerOverride {
            name: rule_name.to_string(),
            command: entry.command,
            environment: entry
                .environment
                .into_iter()
                .map(|kv| (kv.name, kv.value))
                .collect::<BTreeMap<_, _>>(),
        })
        .collect())
}
