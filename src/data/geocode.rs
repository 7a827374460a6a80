//! Nominatim geocoding API client
//!
//! Issues a single search request per term and returns the first match as a
//! [`Coordinate`]. There is no retry and no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::Coordinate;

/// Base URL for the Nominatim search endpoint
const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// User agent sent with every request; Nominatim rejects anonymous clients
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur when resolving a search term
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API request failed with status: {0}")]
    Status(StatusCode),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response was a valid, empty result list
    #[error("No results found for {0}")]
    NoResults(String),
}

/// Something that can turn a search term into a coordinate
#[async_trait]
pub trait Geocoder {
    async fn fetch(&self, search_term: &str) -> Result<Coordinate, GeocodeError>;
}

/// Client for the Nominatim search API
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    /// Search endpoint (allows override for testing)
    base_url: String,
}

impl GeocodingClient {
    /// Creates a client pointed at the public Nominatim endpoint
    pub fn new() -> Result<Self, GeocodeError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    /// Creates a client with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: NOMINATIM_SEARCH_URL.to_string(),
        }
    }

    /// Points the client at a different search endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Geocoder for GeocodingClient {
    async fn fetch(&self, search_term: &str) -> Result<Coordinate, GeocodeError> {
        // reqwest form-encodes the query, so spaces become '+' and reserved
        // characters are percent-escaped
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("format", "json"), ("limit", "1"), ("q", search_term)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GeocodeError::Status(status));
        }

        let text = response.text().await?;
        parse_results(&text, search_term)
    }
}

/// Extracts the first coordinate from a search response body
fn parse_results(body: &str, search_term: &str) -> Result<Coordinate, GeocodeError> {
    let results: Vec<Coordinate> = serde_json::from_str(body)?;
    results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NoResults(search_term.to_string()))
}
