use serde::{Deserialize, Serialize};

/// Opaque correlation token linking an intake request to its eventual result.
///
/// Wrapper around a UUID string. Generated exactly once, at intake time,
/// and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generates a new random UUID v4-based RequestId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One unit of work: two free-text addresses to resolve and measure.
///
/// Lives only in the queue. It is created by intake, consumed (best-effort
/// exactly once) by the worker, and never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub request_id: RequestId,
    pub address1: String,
    pub address2: String,
}
