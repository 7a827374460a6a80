//! Command-line interface parsing for geocache
//!
//! This module handles parsing of CLI arguments using clap. The tool keeps the
//! single-dash long flag style (`-separator=comma`), so arguments are
//! normalized before clap sees them.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::cache::CacheStore;
use crate::resolver::Separator;

/// Resolve place names read from stdin into coordinates
#[derive(Parser, Debug)]
#[command(name = "geocache")]
#[command(about = "Resolve place names from stdin into latitude/longitude, with a local cache")]
#[command(version)]
pub struct Cli {
    /// Separator for output lines: tab or comma
    ///
    /// Any value other than "comma" produces tab-separated output.
    #[arg(long, value_name = "SEPARATOR", default_value = "tab")]
    pub separator: String,
}

impl Cli {
    /// Parses the process arguments, accepting `-separator` as well as `--separator`
    pub fn parse_normalized() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites single-dash long flags (`-separator`) to the double-dash form
///
/// Single-character flags such as `-h` and anything after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let text = match arg.to_str() {
                Some(text) => text.to_owned(),
                None => return arg,
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            let name = text.split('=').next().unwrap_or_default();
            if name.len() > 2 && name.starts_with('-') && !name.starts_with("--") {
                let mut long = OsString::from("-");
                long.push(&arg);
                long
            } else {
                arg
            }
        })
        .collect()
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Output field separator
    pub separator: Separator,
    /// Location of the persisted cache
    pub cache_path: PathBuf,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            separator: Separator::default(),
            cache_path: CacheStore::new().path().to_path_buf(),
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        StartupConfig {
            separator: Separator::from_flag(&cli.separator),
            ..StartupConfig::default()
        }
    }

    /// Cache store for the configured path
    pub fn cache_store(&self) -> CacheStore {
        CacheStore::with_path(&self.cache_path)
    }
}
