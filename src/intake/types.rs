use crate::error::ServiceError;
use crate::queue::types::RequestId;

use serde::{Deserialize, Serialize};

/// Inbound request body. Both fields optional at the serde level so that
/// missing and empty values get the same 400, not a deserialization reject.
#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub address1: Option<String>,
    pub address2: Option<String>,
}

impl DistanceRequest {
    /// Returns both addresses or a validation error if either is missing
    /// or empty.
    pub fn validated(self) -> Result<(String, String), ServiceError> {
        match (
            self.address1.filter(|a| !a.is_empty()),
            self.address2.filter(|a| !a.is_empty()),
        ) {
            (Some(address1), Some(address2)) => Ok((address1, address2)),
            _ => Err(ServiceError::Validation(
                "Both addresses are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum IntakeResponse {
    Accepted {
        message: String,
        request_id: RequestId,
    },
    Failed {
        error: String,
    },
}
