//! nook - folder search extension entry point.
//!
//! Wires preferences and logging, then hands stdin/stdout to the host
//! protocol loop.

mod format;
mod host;
mod launch;
mod router;
mod tracker;

use std::io;

use tracing_subscriber::EnvFilter;

use nook_core::Preferences;

use crate::router::Router;
use crate::tracker::TrackerSearch;

fn main() -> io::Result<()> {
    // stdout belongs to the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NOOK_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let preferences = match Preferences::load() {
        Ok(preferences) => preferences,
        Err(error) => {
            tracing::warn!("could not load preferences, using defaults: {error}");
            Preferences::default()
        }
    };

    let home = dirs::home_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    let router = Router::new(TrackerSearch, preferences, home);
    host::run(&router, io::stdin().lock(), io::stdout().lock())
}
