//! geocache library
//!
//! This module exposes the cache, geocoding client, resolver and CLI modules
//! for use by the binary and integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod resolver;
