//! Core data models for geocache
//!
//! This module contains the coordinate type returned by the geocoding service
//! and the in-memory cache that maps search terms to coordinates.

pub mod geocode;

pub use geocode::{GeocodeError, Geocoder, GeocodingClient};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A latitude/longitude pair as returned by the geocoding service
///
/// Both values are kept as the decimal strings the service sent, so nothing is
/// lost or reformatted between the API, the cache file and the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: String,
    /// Longitude in decimal degrees
    #[serde(rename = "lon")]
    pub longitude: String,
}

impl Coordinate {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// Search term to coordinate mapping
///
/// Keys are raw input lines, used verbatim. Serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cache {
    entries: BTreeMap<String, Coordinate>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the coordinate cached for a search term
    pub fn get(&self, search_term: &str) -> Option<&Coordinate> {
        self.entries.get(search_term)
    }

    /// Returns true if the search term has a cached coordinate
    pub fn contains(&self, search_term: &str) -> bool {
        self.entries.contains_key(search_term)
    }

    /// Stores a coordinate, replacing any previous entry for the term
    pub fn insert(&mut self, search_term: impl Into<String>, coordinate: Coordinate) {
        self.entries.insert(search_term.into(), coordinate);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
