use super::WorkQueue;
use super::types::WorkItem;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// In-process queue backed by an unbounded mpsc channel.
///
/// The sender half implements `WorkQueue` for intake; the receiver half is
/// handed to the worker loop at startup. Dropping the receiver makes every
/// further enqueue fail, which surfaces as a server error at intake.
pub struct InMemoryQueue {
    sender: mpsc::UnboundedSender<WorkItem>,
}

impl InMemoryQueue {
    /// Creates the queue and returns the consumer side along with it.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<WorkItem>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl WorkQueue for InMemoryQueue {
    async fn enqueue(&self, item: WorkItem) -> Result<()> {
        self.sender
            .send(item)
            .map_err(|_| anyhow::anyhow!("work queue is closed"))
    }
}
