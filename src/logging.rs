// ABOUTME: Tracing subscriber setup for binaries embedding stagehand.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber: `debug` when verbose, `warn` otherwise.
///
/// `RUST_LOG` takes precedence when set. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .ok();
}
