//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the filter from the configuration file.
//! Output goes to stderr so that table and export output on stdout stay clean.

use tracing_subscriber::EnvFilter;

pub fn init(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
