//! Sleeper HTTP API access.

pub mod client;
pub mod endpoints;
pub mod snapshot;
pub mod types;

pub use client::SleeperClient;
pub use snapshot::{SnapshotScope, fetch_snapshot};
