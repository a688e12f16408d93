//! # taskrota-core
//!
//! Synchronization core for taskrota: the bidirectional mapping model
//! between the declarative scheduling configuration and the remote
//! scheduler state.
//!
//! The crate is purely synchronous. One synchronization pass consumes a
//! fully materialized snapshot of the remote listing (see [`remote`]) and
//! produces one immutable [`Config`] value:
//!
//! ```text
//! remote rules ──▶ Normalizer ──▶ Rule* ──▶ assemble ──▶ Config ──▶ YAML
//!                     │
//!                     ├── ArnContext (namespace gate, prefix stripping)
//!                     └── decode_task_override (container overrides)
//! ```
//!
//! All network I/O, pagination, and credential handling belongs to the
//! caller; the core has no suspension points.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assemble;
pub mod config;
pub mod context;
pub mod error;
pub mod normalize;
pub mod overrides;
pub mod remote;

pub use assemble::assemble;
pub use config::{Config, ContainerOverride, Rule, Target};
pub use context::{ArnContext, DEFAULT_ROLE};
pub use error::{CoreError, Result};
pub use normalize::Normalizer;
pub use overrides::decode_task_override;
pub use remote::{RemoteEcsParameters, RemoteRule, RemoteTarget};
