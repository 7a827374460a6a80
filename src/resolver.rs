//! Line-oriented resolution loop
//!
//! Reads one search term per line, answers it from the in-memory cache or the
//! geocoder, persists every newly resolved term immediately and prints one
//! formatted line per success. A failed lookup is reported and skipped; it
//! never stops the run.

use log::debug;
use std::io::{self, BufRead, Write};

use crate::cache::CacheStore;
use crate::data::{Cache, Coordinate, GeocodeError, Geocoder};

/// Field separator for output lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    #[default]
    Tab,
    Comma,
}

impl Separator {
    /// Maps a `-separator` flag value to a separator
    ///
    /// Only `"comma"` selects comma output; every other value means tab.
    pub fn from_flag(value: &str) -> Self {
        match value {
            "comma" => Separator::Comma,
            _ => Separator::Tab,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Tab => "\t",
            Separator::Comma => ",",
        }
    }
}

/// Formats an output line (without trailing newline)
///
/// Commas are stripped from the search term so comma-separated output keeps
/// exactly three fields.
pub fn format_line(search_term: &str, coordinate: &Coordinate, separator: Separator) -> String {
    let display_name = search_term.replace(',', "");
    [
        coordinate.latitude.as_str(),
        coordinate.longitude.as_str(),
        display_name.as_str(),
    ]
    .join(separator.as_str())
}

/// Owns the cache for the lifetime of a run and drives lookups
pub struct Resolver<G> {
    geocoder: G,
    store: CacheStore,
    cache: Cache,
    separator: Separator,
}

impl<G: Geocoder> Resolver<G> {
    /// Creates a resolver, loading the cache through `store`
    ///
    /// A malformed cache file is reported on `err` and replaced by an empty
    /// cache.
    pub fn new<E: Write>(
        geocoder: G,
        store: CacheStore,
        separator: Separator,
        err: &mut E,
    ) -> io::Result<Self> {
        let cache = match store.load() {
            Ok(cache) => cache,
            Err(e) => {
                writeln!(err, "{}", e)?;
                Cache::new()
            }
        };
        Ok(Self::with_cache(geocoder, store, cache, separator))
    }

    /// Creates a resolver around an already loaded cache
    pub fn with_cache(geocoder: G, store: CacheStore, cache: Cache, separator: Separator) -> Self {
        Self {
            geocoder,
            store,
            cache,
            separator,
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Resolves one search term
    ///
    /// A hit never touches the network. A successful miss is added to the
    /// cache and the whole cache is saved before returning; a save failure is
    /// reported on `err` and the entry stays in memory.
    pub async fn resolve<E: Write>(
        &mut self,
        search_term: &str,
        err: &mut E,
    ) -> io::Result<Result<Coordinate, GeocodeError>> {
        if let Some(coordinate) = self.cache.get(search_term) {
            debug!("cache hit for {:?}", search_term);
            return Ok(Ok(coordinate.clone()));
        }

        debug!("cache miss for {:?}", search_term);
        let coordinate = match self.geocoder.fetch(search_term).await {
            Ok(coordinate) => coordinate,
            Err(e) => return Ok(Err(e)),
        };

        self.cache.insert(search_term, coordinate.clone());
        if let Err(e) = self.store.save(&self.cache) {
            writeln!(err, "{}", e)?;
        }

        Ok(Ok(coordinate))
    }

    /// Processes `input` line by line until end of stream
    ///
    /// Returns early only if reading `input` or writing `out`/`err` fails.
    pub async fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let search_term = decode_line(&buf);

            match self.resolve(&search_term, err).await? {
                Ok(coordinate) => {
                    writeln!(out, "{}", format_line(&search_term, &coordinate, self.separator))?;
                    out.flush()?;
                }
                Err(e) => {
                    writeln!(err, "Error fetching data for {}: {}", search_term, e)?;
                }
            }
        }
        Ok(())
    }
}

/// Strips the line terminator (`\n` or `\r\n`) and decodes lossily
fn decode_line(buf: &[u8]) -> String {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
