use super::distance::haversine_km;
use crate::error::ServiceError;
use crate::geocode::{Coordinates, Geocoder};
use crate::queue::types::WorkItem;
use crate::store::ResultStore;
use crate::store::types::StatusRecord;

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Consumes work items and persists their outcome.
///
/// Holds no mutable state of its own; collaborators are injected, so
/// independent worker instances can run concurrently without coordination.
pub struct Worker {
    geocoder: Arc<dyn Geocoder>,
    store: Option<Arc<dyn ResultStore>>,
}

impl Worker {
    pub fn new(geocoder: Arc<dyn Geocoder>, store: Option<Arc<dyn ResultStore>>) -> Self {
        Self { geocoder, store }
    }

    /// The consumption loop. Runs until the queue side is dropped.
    pub async fn run(self, mut items: mpsc::UnboundedReceiver<WorkItem>) {
        tracing::info!("Distance worker started");

        while let Some(item) = items.recv().await {
            self.process(item).await;
        }

        tracing::info!("Work queue closed, distance worker shutting down");
    }

    /// Processes one item, converting every failure into a stored `error`
    /// record. Never returns an error: there is no caller waiting.
    pub async fn process(&self, item: WorkItem) {
        tracing::info!(
            "Processing request {} for addresses: {} and {}",
            item.request_id,
            item.address1,
            item.address2
        );

        if let Err(e) = self.try_process(&item).await {
            tracing::error!("Error processing request {}: {}", item.request_id, e);
            self.save_error(&item, format!("Processing error: {}", e))
                .await;
        }
    }

    async fn try_process(&self, item: &WorkItem) -> Result<()> {
        let Some(coords1) = self.resolve(&item.address1).await else {
            self.save_error(item, ServiceError::Lookup(item.address1.clone()).to_string())
                .await;
            return Ok(());
        };

        let Some(coords2) = self.resolve(&item.address2).await else {
            self.save_error(item, ServiceError::Lookup(item.address2.clone()).to_string())
                .await;
            return Ok(());
        };

        let distance = haversine_km(&coords1, &coords2);

        let record = StatusRecord::completed(
            item.request_id.clone(),
            item.address1.clone(),
            item.address2.clone(),
            coords1,
            coords2,
            distance,
        );
        self.save(record).await?;

        tracing::info!(
            "Processed request {}: distance = {:.2} km",
            item.request_id,
            distance
        );

        Ok(())
    }

    /// Resolves one address. Backend errors degrade to "no match" so they
    /// end up as a terminal error record naming the address, not a crash.
    async fn resolve(&self, address: &str) -> Option<Coordinates> {
        match self.geocoder.geocode(address).await {
            Ok(found) => found,
            Err(e) => {
                tracing::error!("Geocoding error for {}: {}", address, e);
                None
            }
        }
    }

    async fn save(&self, record: StatusRecord) -> Result<()> {
        let Some(store) = &self.store else {
            tracing::warn!("Result store not configured, skipping result storage");
            return Ok(());
        };

        store.put(record).await
    }

    /// Best-effort error write. A store failure here is logged and swallowed;
    /// the consumption loop must keep going.
    async fn save_error(&self, item: &WorkItem, message: String) {
        let record = StatusRecord::error(
            item.request_id.clone(),
            message,
            Some(item.address1.clone()),
            Some(item.address2.clone()),
        );

        if let Err(e) = self.save(record).await {
            tracing::error!(
                "Failed to save error for request {}: {}",
                item.request_id,
                e
            );
        }
    }
}
