use crate::geocode::Coordinates;
use crate::queue::types::RequestId;

use serde::{Deserialize, Serialize};

/// Coordinates as persisted: exact decimal strings instead of binary floats,
/// so values round-trip through storage without precision drift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredCoordinates {
    pub lat: String,
    pub lng: String,
}

impl From<Coordinates> for StoredCoordinates {
    fn from(coords: Coordinates) -> Self {
        Self {
            lat: coords.lat.to_string(),
            lng: coords.lng.to_string(),
        }
    }
}

impl StoredCoordinates {
    pub fn to_coordinates(&self) -> anyhow::Result<Coordinates> {
        let lat: f64 = self
            .lat
            .parse()
            .map_err(|_| anyhow::anyhow!("stored latitude is not a number: {}", self.lat))?;
        let lng: f64 = self
            .lng
            .parse()
            .map_err(|_| anyhow::anyhow!("stored longitude is not a number: {}", self.lng))?;
        Ok(Coordinates { lat, lng })
    }
}

/// The per-request state machine, closed and exhaustively matchable.
///
/// `Processing` is the implicit starting state: a request that has no stored
/// record yet maps to it on lookup. `Completed` and `Error` are terminal and
/// never transitioned out of; the worker writes each at most once per request
/// under normal operation, and a queue redelivery rewrites identical content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusRecord {
    Processing,
    Completed {
        request_id: RequestId,
        address1: String,
        address2: String,
        coords1: StoredCoordinates,
        coords2: StoredCoordinates,
        /// Distance in kilometers, as an exact decimal string.
        distance: String,
        timestamp: u64,
    },
    Error {
        request_id: RequestId,
        error: String,
        timestamp: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        address1: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        address2: Option<String>,
    },
}

impl StatusRecord {
    pub fn completed(
        request_id: RequestId,
        address1: String,
        address2: String,
        coords1: Coordinates,
        coords2: Coordinates,
        distance_km: f64,
    ) -> Self {
        StatusRecord::Completed {
            request_id,
            address1,
            address2,
            coords1: coords1.into(),
            coords2: coords2.into(),
            distance: distance_km.to_string(),
            timestamp: now_secs(),
        }
    }

    pub fn error(
        request_id: RequestId,
        error: String,
        address1: Option<String>,
        address2: Option<String>,
    ) -> Self {
        StatusRecord::Error {
            request_id,
            error,
            timestamp: now_secs(),
            address1,
            address2,
        }
    }

    /// The id this record is keyed under. `Processing` is never materialized
    /// as a row, so it carries no id.
    pub fn request_id(&self) -> Option<&RequestId> {
        match self {
            StatusRecord::Processing => None,
            StatusRecord::Completed { request_id, .. } => Some(request_id),
            StatusRecord::Error { request_id, .. } => Some(request_id),
        }
    }
}

/// Helper to get the current system time in whole epoch seconds.
pub fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
