//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with the game on stdout. `RUST_LOG`
//! wins when set; otherwise only warnings are shown, or debug output for this
//! crate when verbose.

use tracing::trace;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,wordle_game=debug";

/// Filter used when `RUST_LOG` is absent or unparsable
#[must_use]
pub fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { VERBOSE_FILTER } else { QUIET_FILTER })
}

/// Install the global subscriber
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        trace!("tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_parse() {
        assert!(default_filter(false).to_string().contains(QUIET_FILTER));
        assert!(default_filter(true).to_string().contains("wordle_game=debug"));
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
    }
}
