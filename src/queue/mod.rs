//! Work Queue Module
//!
//! The hand-off point between request intake and the background worker.
//! Intake never computes anything: it validates, generates a `RequestId`,
//! and pushes a `WorkItem` here. Delivery is at-least-once from the queue's
//! point of view; the worker tolerates duplicates because its computation is
//! deterministic.
//!
//! ## Submodules
//! - **`types`**: the `RequestId` token and the `WorkItem` wire shape.
//! - **`memory`**: in-process queue backed by a tokio mpsc channel.

pub mod memory;
pub mod types;


use crate::queue::types::WorkItem;
use anyhow::Result;
use async_trait::async_trait;

/// Narrow producer-side contract for the queue collaborator.
///
/// Only enqueueing is exposed. Consumption is owned by whoever holds the
/// matching receiver, so intake handlers cannot reach into worker territory.
#[async_trait]
pub trait WorkQueue: Send + Sync {
    async fn enqueue(&self, item: WorkItem) -> Result<()>;
}
