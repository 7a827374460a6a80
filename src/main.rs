//! geocache - resolve place names into coordinates
//!
//! Reads one search term per line from stdin and prints latitude, longitude
//! and the term for each one, using a JSON cache in the temporary directory to
//! avoid repeating Nominatim requests.

use std::io;

use log::info;

use geocache::cli::{Cli, StartupConfig};
use geocache::data::GeocodingClient;
use geocache::resolver::Resolver;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_normalized();
    let config = StartupConfig::from_cli(&cli);
    info!(
        "separator={:?} cache={}",
        config.separator,
        config.cache_path.display()
    );

    let geocoder = GeocodingClient::new()?;
    let mut stderr = io::stderr();
    let mut resolver = Resolver::new(geocoder, config.cache_store(), config.separator, &mut stderr)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    resolver.run(stdin.lock(), &mut stdout, &mut stderr).await?;

    Ok(())
}
