//! Cache module for persisting resolved coordinates to disk
//!
//! Search terms that were resolved once are stored in a JSON file in the
//! system temporary directory, so later runs can answer them without a
//! network round trip.

mod store;

pub use store::{CacheError, CacheStore, CACHE_FILE_NAME};
