use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "warn";

/// `RUST_LOG`-style directives, or `warn` when they are missing or malformed.
/// `--verbose` raises the global level to `debug` on top of them.
pub fn filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .filter(|x| !x.trim().is_empty())
        .and_then(|x| EnvFilter::try_new(x).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES));

    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}

pub fn init(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt().with_env_filter(filter(verbose, env.as_deref())).with_writer(io::stderr).init();
}
