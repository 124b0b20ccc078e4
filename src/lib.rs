//! GPReplicator: a small client for the Gitee REST API v5.
//!
//! The library side is [`GiteeClient`] plus [`ClientConfig`]; the `gpr`
//! binary layers a config file, `GITEE_*` environment variables and CLI
//! flags on top of it.

pub mod cli;
pub mod commands;
pub mod infra;
pub mod shared;

pub use infra::gitee::{ClientConfig, GiteeClient, GiteeError, HttpMethod, Result};
