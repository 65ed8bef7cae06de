use super::{Coordinates, Geocoder};

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// One search hit as returned by a Nominatim-style API.
/// Coordinates arrive as decimal strings, not numbers.
#[derive(Debug, Deserialize)]
pub(crate) struct Place {
    pub lat: String,
    pub lon: String,
}

pub(crate) fn place_to_coordinates(place: &Place) -> Result<Coordinates> {
    let lat: f64 = place
        .lat
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid latitude in geocoder response: {}", place.lat))?;
    let lng: f64 = place
        .lon
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid longitude in geocoder response: {}", place.lon))?;

    Coordinates::validated(lat, lng)
}

/// HTTP client for the geocoding backend.
pub struct HttpGeocoder {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpGeocoder {
    pub fn new(base_url: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("geodist/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    async fn get_with_retry(
        &self,
        url: String,
        query: &[(&str, &str)],
        timeout: Duration,
        attempts: usize,
    ) -> Result<reqwest::Response> {
        let mut delay_ms = 150u64;

        for attempt in 0..attempts {
            let response = self
                .http_client
                .get(url.clone())
                .query(query)
                .timeout(timeout)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == attempts {
                        return Err(anyhow::anyhow!(e));
                    }
                    // Simple jitter to prevent thundering herd
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(anyhow::anyhow!("Retry attempts exhausted"))
    }
}

#[async_trait]
impl Geocoder for HttpGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        let url = format!("{}/search", self.base_url);
        let query = [("q", address), ("format", "json"), ("limit", "1")];

        let response = self
            .get_with_retry(url, &query, Duration::from_secs(5), 3)
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Geocoding request failed: {}",
                response.status()
            ));
        }

        let places: Vec<Place> = response.json().await?;

        match places.first() {
            Some(place) => {
                let coords = place_to_coordinates(place)?;
                tracing::debug!(
                    "Geocoded '{}' to ({}, {})",
                    address,
                    coords.lat,
                    coords.lng
                );
                Ok(Some(coords))
            }
            None => {
                tracing::debug!("No geocoding results found for: {}", address);
                Ok(None)
            }
        }
    }
}
