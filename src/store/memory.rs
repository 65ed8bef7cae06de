use super::ResultStore;
use super::types::StatusRecord;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

/// In-process result store keyed by request id.
///
/// `DashMap` gives lock-free-ish concurrent access; each upsert touches a
/// single key, so writers for different requests never contend.
pub struct InMemoryStore {
    records: DashMap<String, StatusRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultStore for InMemoryStore {
    async fn put(&self, record: StatusRecord) -> Result<()> {
        let request_id = record
            .request_id()
            .ok_or_else(|| anyhow::anyhow!("record without a request id cannot be stored"))?
            .0
            .clone();

        self.records.insert(request_id.clone(), record);
        tracing::debug!("Stored result for request {}", request_id);

        Ok(())
    }

    async fn get(&self, request_id: &str) -> Result<Option<StatusRecord>> {
        Ok(self.records.get(request_id).map(|entry| entry.clone()))
    }
}
