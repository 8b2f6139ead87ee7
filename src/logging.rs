//! Structured logging setup.
//!
//! Events go to stderr through `tracing_subscriber`, filtered by the
//! `CUEJUMP_LOG` environment variable. The default is errors only, so the
//! table view stays clean unless the user asks for more.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize structured logging on stderr.
///
/// Defaults to `error` level unless overridden by `CUEJUMP_LOG`. Output
/// goes to stderr so it never interleaves with the terminal interface.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_env_var("CUEJUMP_LOG")
        .with_default_directive(tracing::level_filters::LevelFilter::ERROR.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
