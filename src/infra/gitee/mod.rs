//! Gitee REST API v5 client.
//!
//! `GiteeClient` sends requests through a serializing transport with
//! retries on 5xx responses; the resource accessors (`files`, `get_file`,
//! `issues`, `milestones`, `releases`, `tags`, `branches`, `repositories`)
//! validate a `ClientConfig`, call the transport and log a summary.

mod blob;
mod branch;
mod client;
pub mod config;
pub(crate) mod error;
mod issue;
pub mod json;
mod milestone;
#[cfg(test)]
pub(crate) mod mock;
mod release;
mod repo;
mod request;
mod resource;
mod retry;
mod tag;
mod transport;
mod tree;

pub use client::GiteeClient;
pub use config::{ClientConfig, DEFAULT_GATEWAY};
pub use error::{GiteeError, Result};
pub use request::{HttpMethod, RequestSpec};
pub use retry::{RetryState, StatusClass};
