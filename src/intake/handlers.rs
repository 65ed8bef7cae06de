use super::types::{DistanceRequest, IntakeResponse};
use crate::error::ServiceError;
use crate::queue::WorkQueue;
use crate::queue::types::{RequestId, WorkItem};

use axum::{Extension, Json, http::StatusCode};
use std::sync::Arc;

pub async fn handle_submit_distance(
    Extension(queue): Extension<Arc<dyn WorkQueue>>,
    Json(req): Json<DistanceRequest>,
) -> (StatusCode, Json<IntakeResponse>) {
    let (address1, address2) = match req.validated() {
        Ok(addresses) => addresses,
        Err(err) => {
            return (
                err.status(),
                Json(IntakeResponse::Failed {
                    error: err.client_message(),
                }),
            );
        }
    };

    let request_id = RequestId::new();
    let item = WorkItem {
        request_id: request_id.clone(),
        address1,
        address2,
    };

    match queue.enqueue(item).await {
        Ok(()) => {
            tracing::info!("Queued distance request {}", request_id);
            (
                StatusCode::OK,
                Json(IntakeResponse::Accepted {
                    message: "Your request is being processed".to_string(),
                    request_id,
                }),
            )
        }
        Err(e) => {
            tracing::error!("Failed to enqueue request {}: {}", request_id, e);
            let err = ServiceError::Internal(e);
            (
                err.status(),
                Json(IntakeResponse::Failed {
                    error: err.client_message(),
                }),
            )
        }
    }
}
