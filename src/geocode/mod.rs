//! Geocoding Module
//!
//! Resolves free-text postal addresses to coordinates through a narrow
//! request/response contract. The backend returns at most one best match;
//! "no match" is an ordinary `Ok(None)`, not an error.
//!
//! ## Submodules
//! - **`http`**: `reqwest`-based client for a Nominatim-style search API,
//!   with retry and backoff for transient network failures.

pub mod http;


use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A resolved coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Builds a coordinate pair, rejecting values outside the valid
    /// latitude [-90, 90] and longitude [-180, 180] ranges.
    pub fn validated(lat: f64, lng: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            anyhow::bail!("latitude {} out of range [-90, 90]", lat);
        }
        if !(-180.0..=180.0).contains(&lng) {
            anyhow::bail!("longitude {} out of range [-180, 180]", lng);
        }
        Ok(Self { lat, lng })
    }
}

/// Contract for the geocoding collaborator.
///
/// `Ok(None)` means the backend had no result for the address. `Err` means
/// the backend itself failed; callers decide whether that distinction
/// matters (the worker treats both as an unresolvable address).
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>>;
}
