//! Dump command implementation.
//!
//! One read-direction synchronization pass: list the remote rules, normalize
//! them against the resolved context, and print the assembled configuration
//! document to stdout. Either the full document is produced or none is.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use taskrota_core::{assemble, ArnContext, Config, Normalizer, DEFAULT_ROLE};

use taskrota_cli::client::EventsClient;

/// Arguments for the dump command.
#[derive(Args)]
pub struct DumpArgs {
    /// Existing configuration file supplying default region/cluster/role
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Region to read rules from
    #[arg(long)]
    pub region: Option<String>,

    /// Cluster whose scheduled tasks are dumped
    #[arg(long)]
    pub cluster: Option<String>,

    /// Role assumed by rule targets
    #[arg(long)]
    pub role: Option<String>,
}

/// Context after merging CLI flags, configuration file, and defaults.
#[derive(Debug, PartialEq, Eq)]
struct ResolvedContext {
    region: String,
    cluster: String,
    /// Role used for identifier construction; falls back to [`DEFAULT_ROLE`].
    role: String,
    /// Role as explicitly supplied; empty when only the default applied.
    configured_role: String,
}

/// Executes the dump command.
pub async fn execute(args: DumpArgs) -> Result<()> {
    let defaults = load_defaults(&args)?;
    let resolved = resolve_context(&args, &defaults)?;

    let client = EventsClient::new(&resolved.region).await;
    let account_id = client.account_id().await?;

    let ctx = ArnContext::new(
        &resolved.region,
        &account_id,
        &resolved.cluster,
        &resolved.role,
    );
    let normalizer = Normalizer::new(&ctx);

    let mut rules = Vec::new();
    for remote in client.list_rules().await? {
        if !normalizer.in_namespace(&remote) {
            continue;
        }
        let targets = client.list_targets(&remote.name).await?;
        if let Some(rule) = normalizer.normalize(&remote, &targets)? {
            rules.push(rule);
        }
    }

    let config = assemble(
        resolved.region,
        resolved.cluster,
        resolved.configured_role,
        rules,
    );
    print!("{}", config.to_yaml()?);

    Ok(())
}

/// Loads the configuration file named by `--config`, if any.
fn load_defaults(args: &DumpArgs) -> Result<Config> {
    let Some(path) = &args.config else {
        return Ok(Config::default());
    };
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Config::from_reader(file).with_context(|| format!("failed to parse {}", path.display()))
}

/// Merges CLI flags over configuration file values.
///
/// Region and cluster are required after the merge; the role falls back to
/// the built-in default for identifier construction but stays out of the
/// emitted document unless explicitly supplied.
fn resolve_context(args: &DumpArgs, defaults: &Config) -> Result<ResolvedContext> {
    let region = flag_or(&args.region, &defaults.region);
    let cluster = flag_or(&args.cluster, &defaults.cluster);
    if region.is_empty() || cluster.is_empty() {
        bail!("region and cluster must be specified");
    }

    let configured_role = flag_or(&args.role, &defaults.role);
    let role = if configured_role.is_empty() {
        DEFAULT_ROLE.to_string()
    } else {
        configured_role.clone()
    };

    Ok(ResolvedContext {
        region,
        cluster,
        role,
        configured_role,
    })
}

fn flag_or(flag: &Option<String>, fallback: &str) -> String {
    match flag {
        Some(value) if !value.is_empty() => value.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(region: Option<&str>, cluster: Option<&str>, role: Option<&str>) -> DumpArgs {
        DumpArgs {
            config: None,
            region: region.map(ToString::to_string),
            cluster: cluster.map(ToString::to_string),
            role: role.map(ToString::to_string),
        }
    }

    fn file_defaults() -> Config {
        Config {
            region: "eu-west-1".to_string(),
            cluster: "jobs".to_string(),
            role: "fileRole".to_string(),
            rules: Vec::new(),
        }
    }

    #[test]
    fn flags_take_precedence_over_file() {
        let resolved = resolve_context(
            &args(Some("us-east-1"), Some("default"), Some("flagRole")),
            &file_defaults(),
        )
        .unwrap();
        assert_eq!(resolved.region, "us-east-1");
        assert_eq!(resolved.cluster, "default");
        assert_eq!(resolved.role, "flagRole");
        assert_eq!(resolved.configured_role, "flagRole");
    }

    #[test]
    fn file_values_fill_missing_flags() {
        let resolved = resolve_context(&args(None, None, None), &file_defaults()).unwrap();
        assert_eq!(resolved.region, "eu-west-1");
        assert_eq!(resolved.cluster, "jobs");
        assert_eq!(resolved.role, "fileRole");
    }

    #[test]
    fn role_defaults_without_pinning_the_document() {
        let mut defaults = file_defaults();
        defaults.role = String::new();
        let resolved =
            resolve_context(&args(Some("us-east-1"), Some("default"), None), &defaults).unwrap();
        assert_eq!(resolved.role, DEFAULT_ROLE);
        assert!(resolved.configured_role.is_empty());
    }

    #[test]
    fn missing_region_or_cluster_is_an_error() {
        let empty = Config::default();
        assert!(resolve_context(&args(None, Some("default"), None), &empty).is_err());
        assert!(resolve_context(&args(Some("us-east-1"), None, None), &empty).is_err());
        // Empty flag values do not satisfy the requirement either.
        assert!(resolve_context(&args(Some(""), Some("default"), None), &empty).is_err());
    }
}
