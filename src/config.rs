//! Environment-driven configuration.
//!
//! Mirrors the deployment knobs of the hosting environment:
//! - `GEOCODER_URL`: base URL of the geocoding backend (Nominatim-style API).
//! - `ALLOWED_ORIGIN`: the single origin echoed in CORS headers. Unset means
//!   wildcard, intended for local testing only.
//! - `RESULT_STORE`: set to `0`, `false` or `off` to disable result
//!   persistence. The worker then skips writes and the status endpoint
//!   reports a configuration error.

const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone)]
pub struct Config {
    pub geocoder_url: String,
    pub allowed_origin: Option<String>,
    pub store_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let geocoder_url = match std::env::var("GEOCODER_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => {
                tracing::warn!(
                    "GEOCODER_URL not set, falling back to {}",
                    DEFAULT_GEOCODER_URL
                );
                DEFAULT_GEOCODER_URL.to_string()
            }
        };

        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .ok()
            .filter(|origin| !origin.is_empty());

        let store_enabled = match std::env::var("RESULT_STORE") {
            Ok(value) => !matches!(value.as_str(), "0" | "false" | "off"),
            Err(_) => true,
        };

        Self {
            geocoder_url,
            allowed_origin,
            store_enabled,
        }
    }
}
