//! Result Store Module
//!
//! Durable keyed storage for request outcomes. One record per request id,
//! written by the worker and read by the status endpoint. Writes are plain
//! upserts with no read-modify-write cycle, so concurrent writers never
//! conflict and a duplicate delivery simply rewrites identical content.
//!
//! ## Submodules
//! - **`types`**: the `StatusRecord` state machine and its decimal-string
//!   number representation.
//! - **`memory`**: in-process implementation backed by a `DashMap`.

pub mod memory;
pub mod types;


use crate::store::types::StatusRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Keyed upsert/get contract for the store collaborator.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Upserts a record under its own request id.
    async fn put(&self, record: StatusRecord) -> Result<()>;

    /// Fetches the record for a request id, `None` if nothing was written yet.
    async fn get(&self, request_id: &str) -> Result<Option<StatusRecord>>;
}
