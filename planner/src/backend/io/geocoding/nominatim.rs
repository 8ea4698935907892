// nominatim.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use crate::backend::domain::geocoding_service::{GeocodingError, PlaceLookup};
use crate::backend::domain::models::destination::validate_coordinates;
use crate::backend::domain::models::route::Coordinates;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

const USER_AGENT: &str = concat!("trip-planner/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One entry of a search reply; coordinates arrive as decimal strings
#[derive(Debug, Deserialize)]
struct PlaceMatch {
    lat: String,
    lon: String,
}

/// Place search against a Nominatim-compatible endpoint
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    endpoint: String,
}

impl NominatimClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeocodingError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

/// First match of a search reply, or None for an empty array
pub fn parse_matches(body: &str) -> Result<Option<Coordinates>, GeocodingError> {
    let matches: Vec<PlaceMatch> =
        serde_json::from_str(body).map_err(|e| GeocodingError::Parse(e.to_string()))?;

    let Some(first) = matches.into_iter().next() else {
        return Ok(None);
    };

    let latitude = parse_degrees("lat", &first.lat)?;
    let longitude = parse_degrees("lon", &first.lon)?;
    validate_coordinates(latitude, longitude).map_err(|e| GeocodingError::Parse(e.to_string()))?;

    Ok(Some(Coordinates { latitude, longitude }))
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64, GeocodingError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| GeocodingError::Parse(format!("{} is not a number: '{}'", field, raw)))
}

#[async_trait]
impl PlaceLookup for NominatimClient {
    async fn search(&self, query: &str) -> Result<Option<Coordinates>, GeocodingError> {
        debug!("GET {} q={}", self.endpoint, query);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await
            .map_err(|e| {
                error!("Geocoding request failed: {}", e);
                GeocodingError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Geocoding endpoint returned {}", status);
            return Err(GeocodingError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::Network(e.to_string()))?;

        parse_matches(&body)
    }
}
