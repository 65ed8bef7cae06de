use super::types::{ResultQuery, StatusReport, StatusResponse};
use crate::error::ServiceError;
use crate::store::ResultStore;

use axum::{Extension, Json, extract::Query, http::StatusCode};
use std::sync::Arc;

fn failure(err: ServiceError) -> (StatusCode, Json<StatusResponse>) {
    (
        err.status(),
        Json(StatusResponse::Failed {
            error: err.client_message(),
        }),
    )
}

pub async fn handle_get_result(
    Extension(store): Extension<Option<Arc<dyn ResultStore>>>,
    Query(query): Query<ResultQuery>,
) -> (StatusCode, Json<StatusResponse>) {
    let Some(request_id) = query.request_id.filter(|id| !id.is_empty()) else {
        return failure(ServiceError::Validation("Request ID is required".to_string()));
    };

    let Some(store) = store else {
        let err = ServiceError::NotConfigured("result store");
        tracing::error!("Configuration error: {}", err);
        return failure(err);
    };

    match store.get(&request_id).await {
        Ok(None) => {
            tracing::debug!("No result yet for request {}", request_id);
            (
                StatusCode::OK,
                Json(StatusResponse::Report(StatusReport::not_found_yet())),
            )
        }
        Ok(Some(record)) => match StatusReport::from_record(record) {
            Ok(report) => (StatusCode::OK, Json(StatusResponse::Report(report))),
            Err(e) => {
                tracing::error!("Corrupt record for request {}: {}", request_id, e);
                failure(ServiceError::Internal(e))
            }
        },
        Err(e) => {
            tracing::error!("Store lookup failed for request {}: {}", request_id, e);
            failure(ServiceError::Internal(e))
        }
    }
}
