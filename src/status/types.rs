use crate::queue::types::RequestId;
use crate::store::types::StatusRecord;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,
}

/// Client-facing view of a request's state. Stored decimal values are
/// converted back to floating point for transport here.
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusReport {
    Processing {
        message: String,
    },
    Completed {
        request_id: RequestId,
        distance: f64,
        address1: String,
        address2: String,
    },
    Error {
        request_id: RequestId,
        error: String,
    },
}

impl StatusReport {
    /// Maps a stored record to its report. A stored `Processing` marker is
    /// reported with the generic in-progress message; the state machine is
    /// closed, so there is no other shape to fall through to.
    pub fn from_record(record: StatusRecord) -> Result<Self> {
        match record {
            StatusRecord::Processing => Ok(StatusReport::Processing {
                message: "Your request is being processed".to_string(),
            }),
            StatusRecord::Completed {
                request_id,
                address1,
                address2,
                distance,
                ..
            } => {
                let distance: f64 = distance
                    .parse()
                    .map_err(|_| anyhow::anyhow!("stored distance is not a number: {}", distance))?;
                Ok(StatusReport::Completed {
                    request_id,
                    distance,
                    address1,
                    address2,
                })
            }
            StatusRecord::Error {
                request_id, error, ..
            } => Ok(StatusReport::Error { request_id, error }),
        }
    }

    pub fn not_found_yet() -> Self {
        StatusReport::Processing {
            message: "Result not found. The calculation may still be in progress.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatusResponse {
    Report(StatusReport),
    Failed { error: String },
}
